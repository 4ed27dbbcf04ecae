//! Boundary with the image exporter.
//!
//! The exporter rasterizes the ranked part of the board. It sees tiers and
//! their items in rank order, never the bank.

use crate::{
    domain::{
        board::Board,
        item::ContentRef,
        tier::{TierColor, TierId},
    },
    error::Result,
};
use serde::{Deserialize, Serialize};

/// How the exported image is produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub file_name: String,
    /// Pixel density multiplier
    pub scale: u32,
    pub background: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            file_name: "tier-list.png".to_string(),
            scale: 2,
            background: "#000000".to_string(),
        }
    }
}

/// One ranked row as the exporter sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedTier {
    pub id: TierId,
    pub label: String,
    pub color: TierColor,
    pub contents: Vec<ContentRef>,
}

/// Read-only view of the ranked tiers at the moment of export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSnapshot {
    pub tiers: Vec<ExportedTier>,
}

impl ExportSnapshot {
    pub fn from_board(board: &Board) -> Self {
        let tiers = board
            .tiers()
            .iter()
            .map(|tier| ExportedTier {
                id: tier.id.clone(),
                label: tier.label.clone(),
                color: tier.color.clone(),
                contents: tier.items.iter().map(|item| item.content.clone()).collect(),
            })
            .collect();

        Self { tiers }
    }

    /// Number of ranked items across all tiers
    pub fn item_count(&self) -> usize {
        self.tiers.iter().map(|t| t.contents.len()).sum()
    }
}

/// The file an exporter produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Renders a snapshot into a single image file
pub trait Exporter {
    fn export(&self, snapshot: &ExportSnapshot, settings: &ExportSettings)
        -> Result<ExportArtifact>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::container::Container;
    use crate::error::TierListError;

    /// Writes one text line per tier instead of pixels
    struct OutlineExporter;

    impl Exporter for OutlineExporter {
        fn export(
            &self,
            snapshot: &ExportSnapshot,
            settings: &ExportSettings,
        ) -> Result<ExportArtifact> {
            if snapshot.tiers.is_empty() {
                return Err(TierListError::Other("nothing to export".to_string()));
            }
            let text: String = snapshot
                .tiers
                .iter()
                .map(|t| format!("{} {}\n", t.label, t.contents.len()))
                .collect();
            Ok(ExportArtifact {
                file_name: settings.file_name.clone(),
                bytes: text.into_bytes(),
            })
        }
    }

    #[test]
    fn test_snapshot_excludes_bank() {
        let mut board = Board::default();
        board.add_item("data:a".into());
        board.add_item("data:b".into());
        board.move_item(&Container::Bank, 0, &Container::Tier("tier-s".parse().unwrap()), 0);

        let snapshot = ExportSnapshot::from_board(&board);

        assert_eq!(snapshot.tiers.len(), 6);
        assert_eq!(snapshot.item_count(), 1);
        assert_eq!(snapshot.tiers[0].contents, vec![ContentRef::new("data:a")]);
    }

    #[test]
    fn test_exporter_uses_settings() {
        let board = Board::default();
        let snapshot = ExportSnapshot::from_board(&board);

        let artifact = OutlineExporter
            .export(&snapshot, &ExportSettings::default())
            .unwrap();

        assert_eq!(artifact.file_name, "tier-list.png");
        assert!(String::from_utf8(artifact.bytes).unwrap().starts_with("S 0\n"));
    }
}
