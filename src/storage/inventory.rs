//! Inventory repository for JSON storage
//!
//! Manages loading and saving the fridge and pantry to storage.json. Every
//! merge-add is written through to disk while the write lock is held, so a
//! reader never observes a merge that has not been persisted.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::KitchenError;
use crate::models::{Ingredient, Inventory, Location, MergeOutcome};

use super::file_io::{load_json, save_json, JsonLoad};

/// Serializable inventory snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventorySnapshot {
    #[serde(rename = "Fridge", default)]
    pub fridge: Vec<Ingredient>,

    #[serde(rename = "Pantry", default)]
    pub pantry: Vec<Ingredient>,
}

impl InventorySnapshot {
    fn from_inventory(inventory: &Inventory) -> Self {
        Self {
            fridge: inventory.fridge().items().to_vec(),
            pantry: inventory.pantry().items().to_vec(),
        }
    }
}

/// Repository for fridge and pantry persistence
pub struct InventoryRepository {
    path: PathBuf,
    data: RwLock<Inventory>,
}

impl InventoryRepository {
    /// Create a new inventory repository with the given alert thresholds
    pub fn new(path: PathBuf, expiry_window_days: i64, low_stock_threshold: i64) -> Self {
        Self {
            path,
            data: RwLock::new(Inventory::new(expiry_window_days, low_stock_threshold)),
        }
    }

    /// Load the inventory from disk
    ///
    /// A missing or blank file is an empty inventory. On a read or parse failure the
    /// ledgers are left empty and the error is returned for the caller to
    /// report.
    pub fn load(&self) -> Result<(), KitchenError> {
        let mut data = self.data.write().map_err(|e| {
            KitchenError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let loaded = load_json::<InventorySnapshot>(&self.path).and_then(JsonLoad::or_default);
        let snapshot = match loaded {
            Ok(snapshot) => snapshot,
            Err(e) => {
                data.ledger_mut(Location::Fridge).restore(Vec::new());
                data.ledger_mut(Location::Pantry).restore(Vec::new());
                return Err(e);
            }
        };

        data.ledger_mut(Location::Fridge).restore(snapshot.fridge);
        data.ledger_mut(Location::Pantry).restore(snapshot.pantry);

        tracing::debug!(
            path = %self.path.display(),
            fridge = data.fridge().len(),
            pantry = data.pantry().len(),
            "inventory loaded"
        );

        Ok(())
    }

    /// Merge-add an ingredient and persist the result
    pub fn add(
        &self,
        location: Location,
        ingredient: Ingredient,
    ) -> Result<MergeOutcome, KitchenError> {
        let mut data = self.data.write().map_err(|e| {
            KitchenError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let name = ingredient.name.clone();
        let outcome = data.add(location, ingredient).ok_or_else(|| {
            KitchenError::Validation(format!(
                "Adding to {} in the {} would overflow its quantity",
                name, location
            ))
        })?;

        save_json(&self.path, &InventorySnapshot::from_inventory(&data))?;

        tracing::debug!(
            ingredient = %name,
            location = %location,
            outcome = ?outcome,
            "inventory written through"
        );

        Ok(outcome)
    }

    /// Get a copy of the current inventory
    pub fn snapshot(&self) -> Result<Inventory, KitchenError> {
        let data = self.data.read().map_err(|e| {
            KitchenError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    /// Fridge entries followed by pantry entries
    pub fn pool(&self) -> Result<Vec<Ingredient>, KitchenError> {
        let data = self.data.read().map_err(|e| {
            KitchenError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.pool())
    }
}
