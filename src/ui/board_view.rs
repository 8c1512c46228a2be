use crate::game::{GameEvent, GameOutcome, PlayerId, Players};

/// Render model for the terminal UI, rebuilt purely from controller events.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
    pub height: usize,
    pub width: usize,
    /// Row-major, row 0 is the top
    pub cells: Vec<Option<PlayerId>>,
    pub players: Players,
    pub active: PlayerId,

    // Terminal status
    pub outcome: Option<GameOutcome>,
    pub message: Option<String>,
    pub winning_line: Vec<(usize, usize)>,
    pub last_drop: Option<(usize, usize)>,
}

impl BoardView {
    pub fn new() -> Self {
        BoardView {
            height: 0,
            width: 0,
            cells: Vec::new(),
            players: Players::default(),
            active: PlayerId::FIRST,
            outcome: None,
            message: None,
            winning_line: Vec::new(),
            last_drop: None,
        }
    }

    /// Apply one event from the controller.
    pub fn apply(&mut self, event: &GameEvent) {
        match event {
            GameEvent::BoardReset {
                height,
                width,
                players,
                active,
            } => {
                *self = BoardView {
                    height: *height,
                    width: *width,
                    cells: vec![None; height * width],
                    players: players.clone(),
                    active: *active,
                    ..BoardView::new()
                };
            }
            GameEvent::PieceDropped { row, col, player } => {
                if *row < self.height && *col < self.width {
                    self.cells[row * self.width + col] = Some(*player);
                    self.last_drop = Some((*row, *col));
                }
            }
            GameEvent::TurnChanged { player } => {
                self.active = *player;
            }
            GameEvent::GameOver {
                outcome,
                message,
                winning_line,
            } => {
                self.outcome = Some(*outcome);
                self.message = Some(message.clone());
                self.winning_line = winning_line.clone().unwrap_or_default();
            }
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<PlayerId> {
        if row < self.height && col < self.width {
            self.cells[row * self.width + col]
        } else {
            None
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn is_winning_cell(&self, row: usize, col: usize) -> bool {
        self.winning_line.contains(&(row, col))
    }
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new()
    }
}
