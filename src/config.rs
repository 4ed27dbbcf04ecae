use crate::{
    domain::tier::{TierColor, TierId},
    error::{TierListError, Result},
    export::ExportSettings,
};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, path::Path};
use tokio::fs;

/// A tier the board starts with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierPreset {
    pub id: TierId,
    pub label: String,
    pub color: TierColor,
}

impl TierPreset {
    fn new(id: &str, label: &str, color: &str) -> Self {
        Self {
            id: TierId(id.to_string()),
            label: label.to_string(),
            color: TierColor(color.to_string()),
        }
    }
}

/// Label and color given to tiers created with `add_tier`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTierPreset {
    pub label: String,
    pub color: TierColor,
}

impl Default for NewTierPreset {
    fn default() -> Self {
        Self {
            label: "NEW".to_string(),
            color: TierColor("#52525B".to_string()),
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub name: String,
    pub tiers: Vec<TierPreset>,
    pub new_tier: NewTierPreset,
    pub export: ExportSettings,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Tier List".to_string(),
            tiers: vec![
                TierPreset::new("tier-s", "S", "#EF4444"),
                TierPreset::new("tier-a", "A", "#F97316"),
                TierPreset::new("tier-b", "B", "#EAB308"),
                TierPreset::new("tier-c", "C", "#22C55E"),
                TierPreset::new("tier-d", "D", "#3B82F6"),
                TierPreset::new("tier-f", "F", "#A855F7"),
            ],
            new_tier: NewTierPreset::default(),
            export: ExportSettings::default(),
        }
    }
}

impl BoardConfig {
    /// Loads config from a JSON file, or returns defaults if it doesn't exist
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !fs::try_exists(path).await? {
            tracing::info!(path = %path.display(), "no board config found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).await?;
        let config: BoardConfig = serde_json::from_str(&contents)?;
        config.validate()?;

        tracing::info!(
            path = %path.display(),
            tiers = config.tiers.len(),
            "loaded board config"
        );
        Ok(config)
    }

    /// Saves config as pretty JSON, creating parent directories as needed
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).await?;
        Ok(())
    }

    /// Rejects presets that would break tier id uniqueness
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for preset in &self.tiers {
            if !seen.insert(preset.id.as_str()) {
                return Err(TierListError::ConfigError(format!(
                    "duplicate tier id '{}'",
                    preset.id
                )));
            }
        }

        if self.export.scale == 0 {
            return Err(TierListError::ConfigError(
                "export scale must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
