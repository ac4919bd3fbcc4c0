//! User settings for tally-cli
//!
//! Manages user preferences: currency symbol and the default window sizes
//! used by summaries, charts, and exports. Stored as pretty JSON next to the
//! ledger so hand edits stay easy.

use serde::{Deserialize, Serialize};

use super::paths::TallyPaths;
use crate::error::TallyResult;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings for tally-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Default number of weeks shown by the weekly summary and chart
    #[serde(default = "default_weeks")]
    pub default_weeks: usize,

    /// Default number of weeks written by the weekly export
    #[serde(default = "default_export_weeks")]
    pub export_weeks: usize,

    /// Default top-N cutoff for the category summary and chart
    #[serde(default = "default_top_categories")]
    pub top_categories: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_weeks() -> usize {
    12
}

fn default_export_weeks() -> usize {
    24
}

fn default_top_categories() -> usize {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_weeks: default_weeks(),
            export_weeks: default_export_weeks(),
            top_categories: default_top_categories(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if absent
    pub fn load_or_create(paths: &TallyPaths) -> TallyResult<Self> {
        let path = paths.settings_file();
        if !path.exists() {
            let settings = Self::default();
            settings.save(paths)?;
            return Ok(settings);
        }
        read_json(&path)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TallyPaths) -> TallyResult<()> {
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_or_create_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.default_weeks, 12);
        assert_eq!(settings.export_weeks, 24);
        assert_eq!(settings.currency_symbol, "$");
        assert!(paths.settings_file().exists());
    }

    #[test]
    fn test_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_weeks = 4;
        settings.currency_symbol = "€".to_string();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_weeks, 4);
        assert_eq!(loaded.currency_symbol, "€");
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{\"schema_version\": 1}").unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.default_weeks, 12);
        assert_eq!(settings.top_categories, 10);
    }
}
