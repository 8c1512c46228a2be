//! Terminal UI: a render model fed only by game events, and the interactive game
//! view built on it.

mod app;
pub mod board_view;
mod game_view;

pub use app::App;
pub use board_view::BoardView;
