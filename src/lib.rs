//! # Tier List Core
//!
//! Ranking model and reorder protocol for drag-and-drop tier lists.
//!
//! A [`Board`] holds ordered tiers of image items plus an unranked bank.
//! Every mutation is a single synchronous transition that either applies
//! completely or leaves the board untouched, so items are never lost or
//! duplicated. Rendering, image decoding and rasterization live outside this
//! crate and talk to it through intents, snapshots and the traits in
//! [`ingest`] and [`export`].

pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod ingest;
pub mod session;

// Re-export commonly used types
pub use config::{BoardConfig, NewTierPreset, TierPreset};
pub use domain::{
    board::{Board, Outcome, Rejection},
    container::Container,
    intent::{BoardIntent, Direction, MoveIntent},
    item::{ContentRef, Item, ItemId},
    tier::{Tier, TierColor, TierId},
};
pub use error::{Result, TierListError};
pub use export::{ExportSettings, ExportSnapshot, Exporter};
pub use ingest::{ContentEncoder, DataUriEncoder};
pub use session::{IngestReport, RankingSession};
