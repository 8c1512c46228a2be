//! Core Connect Four game logic: the board engine, players, the game state and the
//! turn controller that reports state changes to an observer.

mod board;
mod controller;
mod event;
mod player;
mod state;

pub use board::{Board, Cell, CONNECT, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use controller::{GameSettings, MoveResult, TurnController};
pub use event::{GameEvent, GameObserver};
pub use player::{PieceColor, Player, PlayerId, PlayerSpec, Players};
pub use state::{GameOutcome, GameState, Move, TurnState};
