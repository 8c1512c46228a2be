use std::sync::mpsc;

use serde::{Deserialize, Serialize};

use super::{GameOutcome, PlayerId, Players};

/// State changes emitted by the turn controller for a rendering adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A new game was constructed; any rendered state should be cleared.
    BoardReset {
        height: usize,
        width: usize,
        players: Players,
        active: PlayerId,
    },
    PieceDropped {
        row: usize,
        col: usize,
        player: PlayerId,
    },
    TurnChanged {
        player: PlayerId,
    },
    GameOver {
        outcome: GameOutcome,
        message: String,
        winning_line: Option<Vec<(usize, usize)>>,
    },
}

/// Receives every event the controller emits, in order.
pub trait GameObserver {
    fn notify(&mut self, event: &GameEvent);
}

/// Message passing to a renderer on the other end of a channel. A dropped receiver
/// means nobody is rendering any more, so events are discarded.
impl GameObserver for mpsc::Sender<GameEvent> {
    fn notify(&mut self, event: &GameEvent) {
        let _ = self.send(event.clone());
    }
}

/// Records events, for headless replays and tests.
impl GameObserver for Vec<GameEvent> {
    fn notify(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

impl GameObserver for () {
    fn notify(&mut self, _event: &GameEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_shape() {
        let event = GameEvent::PieceDropped {
            row: 5,
            col: 3,
            player: PlayerId::FIRST,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"piece_dropped","row":5,"col":3,"player":1}"#);
    }

    #[test]
    fn test_game_over_json_shape() {
        let event = GameEvent::GameOver {
            outcome: GameOutcome::Tie,
            message: "Tie!".into(),
            winning_line: None,
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "game_over");
        assert_eq!(value["outcome"]["kind"], "tie");
        assert_eq!(value["message"], "Tie!");
        assert!(value["winning_line"].is_null());
    }

    #[test]
    fn test_board_reset_parses_back() {
        let event = GameEvent::BoardReset {
            height: 6,
            width: 7,
            players: Players::default(),
            active: PlayerId::FIRST,
        };
        let json = serde_json::to_string(&event).unwrap();
        let parsed: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }

    #[test]
    fn test_channel_observer_survives_dropped_receiver() {
        let (mut tx, rx) = mpsc::channel();
        let event = GameEvent::TurnChanged {
            player: PlayerId::SECOND,
        };
        tx.notify(&event);
        assert_eq!(rx.try_recv().unwrap(), event);

        drop(rx);
        tx.notify(&event);
    }
}
