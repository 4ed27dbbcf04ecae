use crate::domain::item::Item;
use crate::error::TierListError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Unique identifier for a tier (e.g., tier-s, tier-7)
///
/// Any non-empty string except the reserved bank container id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TierId(pub(crate) String);

impl TierId {
    const GENERATED_PREFIX: &'static str = "tier-";

    /// Creates the id for a generated tier from a counter
    pub fn generated(counter: u32) -> Self {
        Self(format!("{}{}", Self::GENERATED_PREFIX, counter))
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TierId {
    type Err = TierListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() || s == crate::domain::container::BANK_ID {
            return Err(TierListError::InvalidTierId(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for TierId {
    type Error = TierListError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TierId> for String {
    fn from(id: TierId) -> Self {
        id.0
    }
}

impl fmt::Display for TierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display color of a tier label, stored as `#RRGGBB`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TierColor(pub(crate) String);

impl TierColor {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TierColor {
    type Err = TierListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = s.len() == 7
            && s.starts_with('#')
            && s[1..].chars().all(|c| c.is_ascii_hexdigit());
        if valid {
            Ok(Self(s.to_string()))
        } else {
            Err(TierListError::InvalidColor(s.to_string()))
        }
    }
}

impl TryFrom<String> for TierColor {
    type Error = TierListError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TierColor> for String {
    fn from(color: TierColor) -> Self {
        color.0
    }
}

impl fmt::Display for TierColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A labeled, colored row of ranked items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub id: TierId,
    pub label: String,
    pub color: TierColor,
    pub items: Vec<Item>,
}

impl Tier {
    /// Creates an empty tier
    pub fn new(id: TierId, label: String, color: TierColor) -> Self {
        Self {
            id,
            label,
            color,
            items: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
