//! User settings
//!
//! Small JSON preferences file. Every field has a serde default so settings
//! written by older builds keep loading after new fields appear.

use serde::{Deserialize, Serialize};

use super::paths::SpendDashPaths;
use crate::error::SpendDashError;
use crate::models::Direction;
use crate::reports::AverageBasis;

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used by terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Direction shown when none is asked for
    #[serde(default)]
    pub default_direction: Direction,

    /// How monthly averages are computed
    #[serde(default)]
    pub average_basis: AverageBasis,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_direction: Direction::default(),
            average_basis: AverageBasis::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if no file exists
    pub fn load_or_create(paths: &SpendDashPaths) -> Result<Self, SpendDashError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SpendDashError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SpendDashError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Caller decides when the defaults get persisted
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendDashPaths) -> Result<(), SpendDashError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SpendDashError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SpendDashError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
