//! User settings for KitchenCLI
//!
//! Manages user preferences: which feasibility policy recipe matching uses
//! and the thresholds behind the fridge and pantry notifications.

use serde::{Deserialize, Serialize};

use super::paths::KitchenPaths;
use crate::error::KitchenError;
use crate::services::matching::MatchingPolicy;

/// User settings for KitchenCLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// How a required ingredient is checked against the pool
    #[serde(default)]
    pub matching_policy: MatchingPolicy,

    /// Fridge items expiring within this many days are flagged
    #[serde(default = "default_expiry_window_days")]
    pub expiry_window_days: i64,

    /// Pantry items with a quantity below this are flagged
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: i64,

    /// Date format for expiration and history dates (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_expiry_window_days() -> i64 {
    5
}

fn default_low_stock_threshold() -> i64 {
    2
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            matching_policy: MatchingPolicy::default(),
            expiry_window_days: default_expiry_window_days(),
            low_stock_threshold: default_low_stock_threshold(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &KitchenPaths) -> Result<Self, KitchenError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| KitchenError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                KitchenError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &KitchenPaths) -> Result<(), KitchenError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| KitchenError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| KitchenError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.matching_policy, MatchingPolicy::NameOnly);
        assert_eq!(settings.expiry_window_days, 5);
        assert_eq!(settings.low_stock_threshold, 2);
        assert_eq!(settings.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KitchenPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.matching_policy = MatchingPolicy::QuantitySufficient;
        settings.low_stock_threshold = 3;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.matching_policy, MatchingPolicy::QuantitySufficient);
        assert_eq!(loaded.low_stock_threshold, 3);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"matching_policy": "quantity_sufficient"}"#).unwrap();
        assert_eq!(settings.matching_policy, MatchingPolicy::QuantitySufficient);
        assert_eq!(settings.expiry_window_days, 5);
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_corrupt_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KitchenPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, KitchenError::Config(_)));
    }
}
