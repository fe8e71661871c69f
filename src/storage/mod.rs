//! Storage layer for KitchenCLI
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation for the inventory, the recipe catalog and the recipe history.

pub mod file_io;
pub mod history;
pub mod init;
pub mod inventory;
pub mod recipes;

pub use file_io::{load_json, save_json, JsonLoad};
pub use history::{HistoryLoad, HistoryRepository};
pub use init::initialize_storage;
pub use inventory::InventoryRepository;
pub use recipes::RecipeRepository;

use crate::config::{paths::KitchenPaths, settings::Settings};
use crate::error::KitchenError;

/// A load problem that was recovered from by starting empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    pub source: &'static str,
    pub message: String,
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: KitchenPaths,
    pub inventory: InventoryRepository,
    pub recipes: RecipeRepository,
    pub history: HistoryRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: KitchenPaths, settings: &Settings) -> Result<Self, KitchenError> {
        paths.ensure_directories()?;

        Ok(Self {
            inventory: InventoryRepository::new(
                paths.inventory_file(),
                settings.expiry_window_days,
                settings.low_stock_threshold,
            ),
            recipes: RecipeRepository::new(paths.recipes_file()),
            history: HistoryRepository::new(paths.history_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &KitchenPaths {
        &self.paths
    }

    /// Load all data from disk
    ///
    /// Unreadable files never abort the load: the affected repository starts
    /// empty and a warning is returned for the caller to show.
    pub fn load_all(&self) -> Vec<LoadWarning> {
        let mut warnings = Vec::new();

        if let Err(e) = self.inventory.load() {
            tracing::warn!(error = %e, "inventory unavailable, starting empty");
            warnings.push(LoadWarning {
                source: "inventory",
                message: e.to_string(),
            });
        }

        if let Err(e) = self.recipes.load() {
            tracing::warn!(error = %e, "recipe catalog unavailable, starting empty");
            warnings.push(LoadWarning {
                source: "recipes",
                message: e.to_string(),
            });
        }

        match self.history.load() {
            Ok(HistoryLoad::Reset { reason }) => warnings.push(LoadWarning {
                source: "history",
                message: format!("{}; history was reset to an empty list", reason),
            }),
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = %e, "history unavailable, starting empty");
                warnings.push(LoadWarning {
                    source: "history",
                    message: e.to_string(),
                });
            }
        }

        warnings
    }
}
