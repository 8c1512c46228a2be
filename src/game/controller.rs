use tracing::{debug, info, trace};

use super::board::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use super::{GameEvent, GameObserver, GameOutcome, GameState, PlayerId, PlayerSpec, TurnState};

/// Construction parameters for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    pub height: usize,
    pub width: usize,
    pub players: [PlayerSpec; 2],
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            players: [PlayerSpec::default_first(), PlayerSpec::default_second()],
        }
    }
}

/// What a column selection did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Game over, column full, or column out of range. Nothing changed.
    Ignored,
    Continue,
    Won(PlayerId),
    Tie,
}

/// Owns the single game state, applies column selections to it and reports every
/// resulting change to an observer.
pub struct TurnController<O: GameObserver> {
    settings: GameSettings,
    state: GameState,
    observer: O,
}

impl<O: GameObserver> TurnController<O> {
    /// Start a game and announce it with `BoardReset`
    pub fn new(settings: GameSettings, observer: O) -> Self {
        let state = GameState::new(&settings);
        let mut controller = TurnController {
            settings,
            state,
            observer,
        };
        controller.announce_reset();
        controller
    }

    /// Discard the current game and start a new one
    pub fn restart(&mut self, settings: GameSettings) {
        self.state = GameState::new(&settings);
        self.settings = settings;
        self.announce_reset();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Handle a "column selected" input for whichever player is active.
    pub fn select_column(&mut self, col: usize) -> MoveResult {
        if self.state.is_terminal() {
            trace!(col, "move after game over ignored");
            return MoveResult::Ignored;
        }
        let Some(mv) = self.state.drop_in_column(col) else {
            trace!(col, "column full or out of range, ignored");
            return MoveResult::Ignored;
        };

        debug!(
            row = mv.row,
            col = mv.col,
            player = self.label(mv.player),
            "piece placed"
        );
        self.observer.notify(&GameEvent::PieceDropped {
            row: mv.row,
            col: mv.col,
            player: mv.player,
        });

        match mv.next {
            TurnState::AwaitingMove => {
                let next = self.state.active_player();
                self.observer.notify(&GameEvent::TurnChanged { player: next });
                MoveResult::Continue
            }
            TurnState::Won(winner) => {
                self.finish(GameOutcome::Winner(winner));
                MoveResult::Won(winner)
            }
            TurnState::Tie => {
                self.finish(GameOutcome::Tie);
                MoveResult::Tie
            }
        }
    }

    fn finish(&mut self, outcome: GameOutcome) {
        let message = outcome.message(self.state.players());
        let winning_line = match outcome {
            GameOutcome::Winner(id) => self
                .state
                .board()
                .winning_line(id)
                .map(|line| line.to_vec()),
            GameOutcome::Tie => None,
        };
        info!(moves = self.state.move_count(), "{message}");
        self.observer.notify(&GameEvent::GameOver {
            outcome,
            message,
            winning_line,
        });
    }

    fn announce_reset(&mut self) {
        info!(
            height = self.settings.height,
            width = self.settings.width,
            "new game"
        );
        let board = self.state.board();
        self.observer.notify(&GameEvent::BoardReset {
            height: board.height(),
            width: board.width(),
            players: self.state.players().clone(),
            active: self.state.active_player(),
        });
    }

    fn label(&self, id: PlayerId) -> &str {
        self.state.players().get(id).label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{PieceColor, Players};

    /// 42 alternating drops that fill a 6x7 board without four in a row
    const TIE_SEQUENCE: [usize; 42] = [
        0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 4, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4,
        4, 5, 5, 5, 5, 5, 5, 6, 6, 6, 6, 6, 6,
    ];

    fn recording() -> TurnController<Vec<GameEvent>> {
        TurnController::new(GameSettings::default(), Vec::new())
    }

    #[test]
    fn test_new_announces_reset() {
        let controller = recording();
        assert_eq!(
            controller.observer().as_slice(),
            &[GameEvent::BoardReset {
                height: 6,
                width: 7,
                players: Players::default(),
                active: PlayerId::FIRST,
            }]
        );
    }

    #[test]
    fn test_move_emits_drop_then_turn_change() {
        let mut controller = recording();
        assert_eq!(controller.select_column(4), MoveResult::Continue);
        assert_eq!(
            &controller.observer()[1..],
            &[
                GameEvent::PieceDropped {
                    row: 5,
                    col: 4,
                    player: PlayerId::FIRST,
                },
                GameEvent::TurnChanged {
                    player: PlayerId::SECOND,
                },
            ]
        );
        assert_eq!(controller.state().active_player(), PlayerId::SECOND);
    }

    #[test]
    fn test_vertical_win() {
        let mut controller = recording();
        for col in [0, 1, 0, 1, 0, 1] {
            assert_eq!(controller.select_column(col), MoveResult::Continue);
        }
        assert_eq!(controller.select_column(0), MoveResult::Won(PlayerId::FIRST));
        assert_eq!(
            controller.observer().last(),
            Some(&GameEvent::GameOver {
                outcome: GameOutcome::Winner(PlayerId::FIRST),
                message: "Player 1 won!".into(),
                winning_line: Some(vec![(2, 0), (3, 0), (4, 0), (5, 0)]),
            })
        );
    }

    #[test]
    fn test_horizontal_win() {
        let mut controller = recording();
        for col in [0, 0, 1, 1, 2, 2] {
            controller.select_column(col);
        }
        assert_eq!(controller.select_column(3), MoveResult::Won(PlayerId::FIRST));
        let Some(GameEvent::GameOver { winning_line, .. }) = controller.observer().last() else {
            panic!("expected game over");
        };
        assert_eq!(
            winning_line.as_deref(),
            Some(&[(5, 0), (5, 1), (5, 2), (5, 3)][..])
        );
    }

    #[test]
    fn test_second_player_win_uses_label() {
        let settings = GameSettings {
            players: [
                PlayerSpec::new("Ann", PieceColor::Blue),
                PlayerSpec::new("Ann", PieceColor::Green),
            ],
            ..GameSettings::default()
        };
        let mut controller = TurnController::new(settings, Vec::new());
        for col in [6, 0, 6, 0, 5, 0, 6] {
            controller.select_column(col);
        }
        assert_eq!(controller.select_column(0), MoveResult::Won(PlayerId::SECOND));
        assert_eq!(
            controller.state().outcome(),
            Some(GameOutcome::Winner(PlayerId::SECOND))
        );
        let Some(GameEvent::GameOver { message, .. }) = controller.observer().last() else {
            panic!("expected game over");
        };
        assert_eq!(message, "Player Ann won!");
    }

    #[test]
    fn test_full_board_tie() {
        let mut controller = recording();
        let (last, rest) = TIE_SEQUENCE.split_last().unwrap();
        for &col in rest {
            assert_eq!(controller.select_column(col), MoveResult::Continue);
        }
        assert_eq!(controller.select_column(*last), MoveResult::Tie);
        assert!(controller.state().board().is_full());
        assert_eq!(
            controller.observer().last(),
            Some(&GameEvent::GameOver {
                outcome: GameOutcome::Tie,
                message: "Tie!".into(),
                winning_line: None,
            })
        );
    }

    #[test]
    fn test_full_column_is_silent_noop() {
        let mut controller = recording();
        for _ in 0..6 {
            controller.select_column(2);
        }
        let state = controller.state().clone();
        let events = controller.observer().len();

        assert_eq!(controller.select_column(2), MoveResult::Ignored);
        assert_eq!(controller.state(), &state);
        assert_eq!(controller.state().active_player(), PlayerId::FIRST);
        assert_eq!(controller.observer().len(), events);
    }

    #[test]
    fn test_out_of_range_column_is_silent_noop() {
        let mut controller = recording();
        assert_eq!(controller.select_column(7), MoveResult::Ignored);
        assert_eq!(controller.select_column(100), MoveResult::Ignored);
        assert_eq!(controller.observer().len(), 1);
        assert_eq!(controller.state().move_count(), 0);
    }

    #[test]
    fn test_moves_after_game_over_are_ignored() {
        let mut controller = recording();
        for col in [0, 1, 0, 1, 0, 1, 0] {
            controller.select_column(col);
        }
        let board = controller.state().board().clone();
        let events = controller.observer().len();

        for col in 0..7 {
            assert_eq!(controller.select_column(col), MoveResult::Ignored);
        }
        assert_eq!(controller.state().board(), &board);
        assert_eq!(controller.observer().len(), events);
    }

    #[test]
    fn test_restart_clears_board() {
        let mut controller = recording();
        for col in [0, 1, 0, 1, 0, 1, 0] {
            controller.select_column(col);
        }
        let settings = GameSettings {
            height: 5,
            width: 5,
            ..GameSettings::default()
        };
        controller.restart(settings.clone());

        assert_eq!(controller.settings(), &settings);
        assert!(!controller.state().is_terminal());
        assert_eq!(controller.state().move_count(), 0);
        assert!(matches!(
            controller.observer().last(),
            Some(GameEvent::BoardReset {
                height: 5,
                width: 5,
                active: PlayerId::FIRST,
                ..
            })
        ));
        assert_eq!(controller.select_column(4), MoveResult::Continue);
    }

    #[test]
    fn test_channel_observer() {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut controller = TurnController::new(GameSettings::default(), tx);
        controller.select_column(3);

        let events: Vec<GameEvent> = rx.try_iter().collect();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], GameEvent::BoardReset { .. }));
        assert!(matches!(events[1], GameEvent::PieceDropped { row: 5, col: 3, .. }));
    }
}
