use serde::{Deserialize, Serialize};

/// Opaque player identity. Cells and win checks compare ids, never labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(u8);

impl PlayerId {
    pub const FIRST: PlayerId = PlayerId(1);
    pub const SECOND: PlayerId = PlayerId(2);

    /// Get the other player's id
    pub fn other(self) -> PlayerId {
        if self == PlayerId::FIRST {
            PlayerId::SECOND
        } else {
            PlayerId::FIRST
        }
    }
}

/// Display color token for a player's pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    Red,
    Yellow,
    Blue,
    Green,
    Magenta,
    Cyan,
    White,
}

impl PieceColor {
    pub const ALL: [PieceColor; 7] = [
        PieceColor::Red,
        PieceColor::Yellow,
        PieceColor::Blue,
        PieceColor::Green,
        PieceColor::Magenta,
        PieceColor::Cyan,
        PieceColor::White,
    ];

    /// Next color in the palette, wrapping around
    pub fn next(self) -> PieceColor {
        let idx = Self::ALL.iter().position(|&c| c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceColor::Red => "red",
            PieceColor::Yellow => "yellow",
            PieceColor::Blue => "blue",
            PieceColor::Green => "green",
            PieceColor::Magenta => "magenta",
            PieceColor::Cyan => "cyan",
            PieceColor::White => "white",
        }
    }
}

/// Construction parameters for one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSpec {
    pub label: String,
    pub color: PieceColor,
}

impl PlayerSpec {
    pub fn new(label: impl Into<String>, color: PieceColor) -> Self {
        PlayerSpec {
            label: label.into(),
            color,
        }
    }

    pub fn default_first() -> Self {
        PlayerSpec::new("1", PieceColor::Red)
    }

    pub fn default_second() -> Self {
        PlayerSpec::new("2", PieceColor::Yellow)
    }
}

/// A participant in one game. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    label: String,
    color: PieceColor,
}

impl Player {
    fn from_spec(id: PlayerId, spec: &PlayerSpec) -> Self {
        Player {
            id,
            label: spec.label.clone(),
            color: spec.color,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn color(&self) -> PieceColor {
        self.color
    }
}

/// The two players of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    first: Player,
    second: Player,
}

impl Players {
    pub fn new(specs: &[PlayerSpec; 2]) -> Self {
        Players {
            first: Player::from_spec(PlayerId::FIRST, &specs[0]),
            second: Player::from_spec(PlayerId::SECOND, &specs[1]),
        }
    }

    pub fn first(&self) -> &Player {
        &self.first
    }

    pub fn second(&self) -> &Player {
        &self.second
    }

    pub fn get(&self, id: PlayerId) -> &Player {
        if id == PlayerId::FIRST {
            &self.first
        } else {
            &self.second
        }
    }

    /// The opponent of `id`
    pub fn other(&self, id: PlayerId) -> &Player {
        self.get(id.other())
    }
}

impl Default for Players {
    fn default() -> Self {
        Players::new(&[PlayerSpec::default_first(), PlayerSpec::default_second()])
    }
}
