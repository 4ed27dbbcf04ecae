use crate::domain::{
    container::Container,
    item::ContentRef,
    tier::{TierColor, TierId},
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Direction for the up/down tier buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => Err(format!(
                "Invalid direction '{}'. Valid directions: up, down",
                s
            )),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// A finished item drag as reported by the renderer.
///
/// `destination` is `None` when the item was released outside every drop target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntent {
    pub source: Container,
    pub source_index: usize,
    pub destination: Option<Container>,
    pub destination_index: usize,
}

impl MoveIntent {
    pub fn new(
        source: Container,
        source_index: usize,
        destination: impl Into<Option<Container>>,
        destination_index: usize,
    ) -> Self {
        Self {
            source,
            source_index,
            destination: destination.into(),
            destination_index,
        }
    }
}

/// Every user gesture the board understands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardIntent {
    AddItem { content: ContentRef },
    AddTier,
    DeleteTier { tier: TierId },
    ClearTier { tier: TierId },
    RelabelTier { tier: TierId, label: String },
    RecolorTier { tier: TierId, color: TierColor },
    MoveTier { index: usize, direction: Direction },
    MoveItem(MoveIntent),
    MoveTierOrder { from: usize, to: usize },
}
