//! History service
//!
//! Records prepared recipes and resolves history entries back to their
//! catalog recipe.

use chrono::NaiveDate;

use crate::error::{KitchenError, KitchenResult};
use crate::models::{HistoryEntry, HistoryRecord, Recipe};
use crate::storage::Storage;

/// Service for the prepared-recipe history
pub struct HistoryService<'a> {
    storage: &'a Storage,
}

impl<'a> HistoryService<'a> {
    /// Create a new history service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Append a prepared recipe to the history
    pub fn record(&self, recipe_name: &str, date: NaiveDate) -> KitchenResult<HistoryEntry> {
        let entry = HistoryEntry::new(recipe_name, date);
        self.storage.history.append(entry.clone())?;
        Ok(entry)
    }

    /// All records, oldest first, including ones that cannot be read
    pub fn list(&self) -> KitchenResult<Vec<HistoryRecord>> {
        self.storage.history.get_all()
    }

    /// Parse a 1-based history position typed by the user
    pub fn parse_position(&self, choice: &str) -> KitchenResult<usize> {
        let max = self.storage.history.count()?;
        choice
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|position| (1..=max).contains(position))
            .ok_or_else(|| KitchenError::InvalidSelection {
                choice: choice.trim().to_string(),
                max,
            })
    }

    /// Look up the entry at a 1-based position and its catalog recipe
    ///
    /// The recipe is matched by exact name. If the catalog no longer has it,
    /// a `NotFound` error is returned.
    pub fn show(&self, position: usize) -> KitchenResult<(HistoryEntry, Recipe)> {
        let entry = self.storage.history.get(position)?;

        let recipe = self
            .storage
            .recipes
            .get_by_exact_name(&entry.name)?
            .ok_or_else(|| {
                tracing::info!(recipe = %entry.name, "history entry no longer in catalog");
                KitchenError::recipe_not_found(&entry.name)
            })?;

        Ok((entry, recipe))
    }
}
