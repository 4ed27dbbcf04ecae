use crate::{
    config::{BoardConfig, NewTierPreset},
    domain::{
        container::Container,
        intent::{BoardIntent, Direction, MoveIntent},
        item::{ContentRef, Item, ItemId},
        reorder::{pair_mut, relocate},
        tier::{Tier, TierColor, TierId},
    },
    error::{Result, TierListError},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;

/// Why an intent left the board untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// The tier or source container does not exist
    NotFound,
    /// The move has no destination that resolves to a container
    InvalidIntent,
    /// An index points past the end of its list
    OutOfRange,
}

/// Result of applying an intent. Rejections are not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Applied,
    Unchanged(Rejection),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Bank,
    Tier(usize),
}

/// Tier list state: ranked tiers plus the unranked bank
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    name: String,
    tiers: Vec<Tier>,
    bank: Vec<Item>,
    new_tier: NewTierPreset,
    next_item_number: u32,
    next_tier_number: u32,
    updated_at: DateTime<Utc>,
}

impl Board {
    /// Builds a board from validated configuration
    pub fn new(config: BoardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: BoardConfig) -> Self {
        let tiers = config
            .tiers
            .into_iter()
            .map(|preset| Tier::new(preset.id, preset.label, preset.color))
            .collect();

        Self {
            name: config.name,
            tiers,
            bank: Vec::new(),
            new_tier: config.new_tier,
            next_item_number: 1,
            next_tier_number: 1,
            updated_at: Utc::now(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn bank(&self) -> &[Item] {
        &self.bank
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn tier(&self, id: &TierId) -> Option<&Tier> {
        self.tiers.iter().find(|t| &t.id == id)
    }

    /// Like [`Board::tier`], for callers that treat a missing tier as an error
    pub fn require_tier(&self, id: &TierId) -> Result<&Tier> {
        self.tier(id)
            .ok_or_else(|| TierListError::TierNotFound(id.to_string()))
    }

    pub fn tier_index(&self, id: &TierId) -> Option<usize> {
        self.tiers.iter().position(|t| &t.id == id)
    }

    /// Items of the bank or of one tier, in order
    pub fn items_in(&self, container: &Container) -> Option<&[Item]> {
        match self.resolve(container)? {
            Slot::Bank => Some(&self.bank),
            Slot::Tier(index) => Some(&self.tiers[index].items),
        }
    }

    /// Total items on the board, ranked or not
    pub fn item_count(&self) -> usize {
        self.bank.len() + self.tiers.iter().map(|t| t.items.len()).sum::<usize>()
    }

    /// Owned copy for a renderer to draw from
    pub fn snapshot(&self) -> Board {
        self.clone()
    }

    fn resolve(&self, container: &Container) -> Option<Slot> {
        match container {
            Container::Bank => Some(Slot::Bank),
            Container::Tier(id) => self.tier_index(id).map(Slot::Tier),
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn reject(operation: &'static str, rejection: Rejection) -> Outcome {
        tracing::debug!(operation, ?rejection, "intent left board unchanged");
        Outcome::Unchanged(rejection)
    }

    fn next_item_id(&mut self) -> ItemId {
        let id = ItemId::new(self.next_item_number);
        self.next_item_number += 1;
        id
    }

    /// Generates the next tier ID, skipping ids already taken by presets
    fn next_tier_id(&mut self) -> TierId {
        loop {
            let id = TierId::generated(self.next_tier_number);
            self.next_tier_number += 1;
            if self.tier_index(&id).is_none() {
                return id;
            }
        }
    }

    /// Appends a new item to the end of the bank
    pub fn add_item(&mut self, content: ContentRef) -> ItemId {
        let id = self.next_item_id();
        self.bank.push(Item::new(id.clone(), content));
        self.touch();
        tracing::debug!(item = %id, bank_len = self.bank.len(), "added item to bank");
        id
    }

    /// Appends an empty tier with the default label and color
    pub fn add_tier(&mut self) -> TierId {
        let id = self.next_tier_id();
        let tier = Tier::new(
            id.clone(),
            self.new_tier.label.clone(),
            self.new_tier.color.clone(),
        );
        self.tiers.push(tier);
        self.touch();
        tracing::debug!(tier = %id, "added tier");
        id
    }

    /// Removes a tier and discards its items
    pub fn delete_tier(&mut self, id: &TierId) -> Outcome {
        let Some(index) = self.tier_index(id) else {
            return Self::reject("delete_tier", Rejection::NotFound);
        };
        let removed = self.tiers.remove(index);
        self.touch();
        tracing::debug!(tier = %id, discarded = removed.items.len(), "deleted tier");
        Outcome::Applied
    }

    /// Empties a tier in place
    pub fn clear_tier(&mut self, id: &TierId) -> Outcome {
        let Some(index) = self.tier_index(id) else {
            return Self::reject("clear_tier", Rejection::NotFound);
        };
        self.tiers[index].items.clear();
        self.touch();
        tracing::debug!(tier = %id, "cleared tier");
        Outcome::Applied
    }

    pub fn relabel_tier(&mut self, id: &TierId, label: impl Into<String>) -> Outcome {
        let Some(index) = self.tier_index(id) else {
            return Self::reject("relabel_tier", Rejection::NotFound);
        };
        self.tiers[index].label = label.into();
        self.touch();
        Outcome::Applied
    }

    pub fn recolor_tier(&mut self, id: &TierId, color: TierColor) -> Outcome {
        let Some(index) = self.tier_index(id) else {
            return Self::reject("recolor_tier", Rejection::NotFound);
        };
        self.tiers[index].color = color;
        self.touch();
        Outcome::Applied
    }

    /// Swaps a tier with its neighbor. The ends do not wrap around.
    pub fn move_tier(&mut self, index: usize, direction: Direction) -> Outcome {
        if index >= self.tiers.len() {
            return Self::reject("move_tier", Rejection::OutOfRange);
        }
        let target = match direction {
            Direction::Up if index == 0 => None,
            Direction::Up => Some(index - 1),
            Direction::Down if index + 1 == self.tiers.len() => None,
            Direction::Down => Some(index + 1),
        };
        let Some(target) = target else {
            return Self::reject("move_tier", Rejection::OutOfRange);
        };

        self.tiers.swap(index, target);
        self.touch();
        tracing::debug!(from = index, to = target, %direction, "swapped tier");
        Outcome::Applied
    }

    /// Moves one item between (or within) the bank and the tiers.
    ///
    /// `destination_index` is read against the destination list after the item
    /// has left its source, and is clamped to that list's length. Nothing is
    /// removed unless both containers resolve and `source_index` is in range.
    pub fn move_item(
        &mut self,
        source: &Container,
        source_index: usize,
        destination: &Container,
        destination_index: usize,
    ) -> Outcome {
        let Some(from) = self.resolve(source) else {
            return Self::reject("move_item", Rejection::NotFound);
        };
        let Some(to) = self.resolve(destination) else {
            return Self::reject("move_item", Rejection::InvalidIntent);
        };

        let landed = match (from, to) {
            (Slot::Bank, Slot::Bank) => relocate(&mut self.bank, source_index, None, destination_index),
            (Slot::Bank, Slot::Tier(j)) => relocate(
                &mut self.bank,
                source_index,
                Some(&mut self.tiers[j].items),
                destination_index,
            ),
            (Slot::Tier(i), Slot::Bank) => relocate(
                &mut self.tiers[i].items,
                source_index,
                Some(&mut self.bank),
                destination_index,
            ),
            (Slot::Tier(i), Slot::Tier(j)) if i == j => relocate(
                &mut self.tiers[i].items,
                source_index,
                None,
                destination_index,
            ),
            (Slot::Tier(i), Slot::Tier(j)) => {
                let (src, dst) = pair_mut(&mut self.tiers, i, j);
                relocate(&mut src.items, source_index, Some(&mut dst.items), destination_index)
            }
        };

        let Some(landed) = landed else {
            return Self::reject("move_item", Rejection::OutOfRange);
        };
        self.touch();
        tracing::debug!(
            source = %source,
            source_index,
            destination = %destination,
            destination_index = landed,
            "moved item"
        );
        Outcome::Applied
    }

    /// Drag-reorders a whole tier, same semantics as a same-list item move
    pub fn move_tier_order(&mut self, from_index: usize, to_index: usize) -> Outcome {
        let Some(landed) = relocate(&mut self.tiers, from_index, None, to_index) else {
            return Self::reject("move_tier_order", Rejection::OutOfRange);
        };
        self.touch();
        tracing::debug!(from = from_index, to = landed, "reordered tier");
        Outcome::Applied
    }

    /// Applies a renderer intent
    pub fn apply(&mut self, intent: BoardIntent) -> Outcome {
        match intent {
            BoardIntent::AddItem { content } => {
                self.add_item(content);
                Outcome::Applied
            }
            BoardIntent::AddTier => {
                self.add_tier();
                Outcome::Applied
            }
            BoardIntent::DeleteTier { tier } => self.delete_tier(&tier),
            BoardIntent::ClearTier { tier } => self.clear_tier(&tier),
            BoardIntent::RelabelTier { tier, label } => self.relabel_tier(&tier, label),
            BoardIntent::RecolorTier { tier, color } => self.recolor_tier(&tier, color),
            BoardIntent::MoveTier { index, direction } => self.move_tier(index, direction),
            BoardIntent::MoveItem(MoveIntent {
                source,
                source_index,
                destination,
                destination_index,
            }) => match destination {
                Some(destination) => {
                    self.move_item(&source, source_index, &destination, destination_index)
                }
                None => Self::reject("move_item", Rejection::InvalidIntent),
            },
            BoardIntent::MoveTierOrder { from, to } => self.move_tier_order(from, to),
        }
    }

    /// Verifies that no item or tier id appears twice
    pub fn check_invariants(&self) -> Result<()> {
        let mut tier_ids = HashSet::new();
        for tier in &self.tiers {
            if !tier_ids.insert(&tier.id) {
                return Err(TierListError::InvariantViolation(format!(
                    "tier {} appears more than once",
                    tier.id
                )));
            }
        }

        let mut item_ids = HashSet::new();
        let all_items = self
            .bank
            .iter()
            .chain(self.tiers.iter().flat_map(|t| t.items.iter()));
        for item in all_items {
            if !item_ids.insert(&item.id) {
                return Err(TierListError::InvariantViolation(format!(
                    "item {} appears more than once",
                    item.id
                )));
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::from_config(BoardConfig::default())
    }
}
