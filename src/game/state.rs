use serde::{Deserialize, Serialize};

use super::{Board, GameSettings, PlayerId, Players};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "player")]
pub enum GameOutcome {
    Winner(PlayerId),
    Tie,
}

impl GameOutcome {
    /// End-of-game notification text
    pub fn message(&self, players: &Players) -> String {
        match self {
            GameOutcome::Winner(id) => format!("Player {} won!", players.get(*id).label()),
            GameOutcome::Tie => "Tie!".to_string(),
        }
    }
}

/// Turn state machine. `Won` and `Tie` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingMove,
    Won(PlayerId),
    Tie,
}

impl TurnState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TurnState::AwaitingMove)
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self {
            TurnState::AwaitingMove => None,
            TurnState::Won(id) => Some(GameOutcome::Winner(*id)),
            TurnState::Tie => Some(GameOutcome::Tie),
        }
    }
}

/// An accepted drop and the state it led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub player: PlayerId,
    pub next: TurnState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    players: Players,
    active: PlayerId,
    turn: TurnState,
    moves: usize,
}

impl GameState {
    /// Create a fresh game: empty board, first player active
    pub fn new(settings: &GameSettings) -> Self {
        GameState {
            board: Board::new(settings.height, settings.width),
            players: Players::new(&settings.players),
            active: PlayerId::FIRST,
            turn: TurnState::AwaitingMove,
            moves: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    /// Player whose move is next (or who made the final move once terminal)
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    pub fn turn_state(&self) -> TurnState {
        self.turn
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.turn.outcome()
    }

    pub fn is_terminal(&self) -> bool {
        self.turn.is_terminal()
    }

    /// Number of pieces placed so far
    pub fn move_count(&self) -> usize {
        self.moves
    }

    /// Drop the active player's piece in `col`.
    ///
    /// Returns `None` without touching anything when the game is over or the column
    /// is full or out of range. Otherwise records the piece, then resolves a win, a
    /// tie, or hands the turn to the other player.
    pub fn drop_in_column(&mut self, col: usize) -> Option<Move> {
        if self.is_terminal() {
            return None;
        }
        let row = self.board.find_spot_for_column(col)?;
        let player = self.active;
        self.board.place_piece(row, col, player);
        self.moves += 1;

        // Win is checked before full: the last piece may both fill the board and win
        self.turn = if self.board.check_for_win(player) {
            TurnState::Won(player)
        } else if self.board.is_full() {
            TurnState::Tie
        } else {
            self.active = player.other();
            TurnState::AwaitingMove
        };

        Some(Move {
            row,
            col,
            player,
            next: self.turn,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameSettings::default())
    }
}
