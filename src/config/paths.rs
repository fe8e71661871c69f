//! Path management for KitchenCLI
//!
//! Provides XDG-compliant path resolution for configuration and data files.
//!
//! ## Path Resolution Order
//!
//! 1. `KITCHEN_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/kitchen-cli` or `~/.config/kitchen-cli`
//! 3. Windows: `%APPDATA%\kitchen-cli`

use std::path::PathBuf;

use crate::error::KitchenError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "KITCHEN_CLI_DATA_DIR";

/// Manages all paths used by KitchenCLI
#[derive(Debug, Clone)]
pub struct KitchenPaths {
    /// Base directory for all KitchenCLI data
    base_dir: PathBuf,
}

impl KitchenPaths {
    /// Create a new KitchenPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if neither the override nor a home/config directory
    /// can be determined.
    pub fn new() -> Result<Self, KitchenError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create KitchenPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/kitchen-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/kitchen-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to storage.json (fridge and pantry snapshot)
    pub fn inventory_file(&self) -> PathBuf {
        self.data_dir().join("storage.json")
    }

    /// Get the path to recipes.json (the recipe catalog)
    pub fn recipes_file(&self) -> PathBuf {
        self.data_dir().join("recipes.json")
    }

    /// Get the path to history.json (prepared recipes)
    pub fn history_file(&self) -> PathBuf {
        self.data_dir().join("history.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), KitchenError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| KitchenError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| KitchenError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if KitchenCLI has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, KitchenError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                KitchenError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("kitchen-cli"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, KitchenError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| KitchenError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("kitchen-cli"))
}
