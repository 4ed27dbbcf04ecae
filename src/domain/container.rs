use crate::domain::tier::TierId;
use crate::error::TierListError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Reserved droppable id of the unranked bank
pub const BANK_ID: &str = "bank";

/// Addressable source or destination of an item move
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Container {
    Bank,
    Tier(TierId),
}

impl Container {
    pub fn is_bank(&self) -> bool {
        matches!(self, Self::Bank)
    }
}

impl From<TierId> for Container {
    fn from(id: TierId) -> Self {
        Self::Tier(id)
    }
}

impl FromStr for Container {
    type Err = TierListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == BANK_ID {
            Ok(Self::Bank)
        } else {
            s.parse().map(Self::Tier)
        }
    }
}

impl TryFrom<String> for Container {
    type Error = TierListError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Container> for String {
    fn from(container: Container) -> Self {
        container.to_string()
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bank => write!(f, "{}", BANK_ID),
            Self::Tier(id) => write!(f, "{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_parsing() {
        assert_eq!(Container::from_str("bank").unwrap(), Container::Bank);

        let tier = Container::from_str("tier-s").unwrap();
        assert_eq!(tier, Container::Tier("tier-s".parse().unwrap()));
        assert!(!tier.is_bank());

        assert!(Container::from_str("").is_err());
    }

    #[test]
    fn test_container_display_matches_droppable_id() {
        assert_eq!(Container::Bank.to_string(), "bank");
        assert_eq!(Container::Tier(TierId::generated(4)).to_string(), "tier-4");
    }

    #[test]
    fn test_container_serialization() {
        let json = serde_json::to_string(&Container::Bank).unwrap();
        assert_eq!(json, r#""bank""#);

        let parsed: Container = serde_json::from_str(r#""tier-b""#).unwrap();
        assert_eq!(parsed.to_string(), "tier-b");
    }
}
