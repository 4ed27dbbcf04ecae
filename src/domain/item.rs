use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Unique identifier for an item (e.g., item-1, item-2, item-100)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    const PREFIX: &'static str = "item-";

    /// Creates a new ItemId from a counter
    pub fn new(counter: u32) -> Self {
        Self(format!("{}{}", Self::PREFIX, counter))
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ItemId {
    type Err = crate::error::TierListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix(Self::PREFIX) {
            Some(number) if number.parse::<u32>().is_ok() => Ok(Self(s.to_string())),
            _ => Err(crate::error::TierListError::InvalidItemId(s.to_string())),
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque reference to an item's image data.
///
/// Usually a `data:` URI produced by ingestion. The board never looks inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentRef(String);

impl ContentRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ContentRef {
    fn from(reference: String) -> Self {
        Self(reference)
    }
}

impl From<&str> for ContentRef {
    fn from(reference: &str) -> Self {
        Self(reference.to_string())
    }
}

/// A rankable image. Items are never edited, only moved or discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub content: ContentRef,
}

impl Item {
    pub fn new(id: ItemId, content: ContentRef) -> Self {
        Self { id, content }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_creation() {
        assert_eq!(ItemId::new(1).as_str(), "item-1");
        assert_eq!(ItemId::new(42).as_str(), "item-42");
    }

    #[test]
    fn test_item_id_parsing() {
        let id = ItemId::from_str("item-7").unwrap();
        assert_eq!(id, ItemId::new(7));

        assert!(ItemId::from_str("item-").is_err());
        assert!(ItemId::from_str("item-abc").is_err());
        assert!(ItemId::from_str("tier-1").is_err());
    }

    #[test]
    fn test_content_ref_serializes_as_plain_string() {
        let item = Item::new(ItemId::new(3), ContentRef::new("data:image/png;base64,AA=="));
        let json = serde_json::to_string(&item).unwrap();

        assert_eq!(
            json,
            r#"{"id":"item-3","content":"data:image/png;base64,AA=="}"#
        );
    }
}
