//! Recipe service
//!
//! Runs the matching engine against the stored catalog and inventory and
//! records the recipe the user picks in the history.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::{KitchenError, KitchenResult};
use crate::models::{HistoryEntry, Ingredient, Recipe};
use crate::storage::Storage;

use super::history::HistoryService;
use super::matching::{CategoryFilter, Diagnostic, MatchReport, MatchingEngine, MatchingPolicy};

/// Service for browsing and matching recipes
pub struct RecipeService<'a> {
    storage: &'a Storage,
    policy: MatchingPolicy,
}

impl<'a> RecipeService<'a> {
    /// Create a recipe service using the configured matching policy
    pub fn new(storage: &'a Storage, settings: &Settings) -> Self {
        Self {
            storage,
            policy: settings.matching_policy,
        }
    }

    /// Override the matching policy for this service
    pub fn with_policy(mut self, policy: MatchingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Matching policy in effect
    pub fn policy(&self) -> MatchingPolicy {
        self.policy
    }

    /// Catalog recipes accepted by `filter`, in catalog order
    pub fn list(&self, filter: &CategoryFilter) -> KitchenResult<Vec<Recipe>> {
        Ok(self
            .storage
            .recipes
            .get_all()?
            .into_iter()
            .filter(|r| filter.accepts(r))
            .collect())
    }

    /// Find a recipe by name (exact first, then case-insensitive)
    pub fn find(&self, name: &str) -> KitchenResult<Recipe> {
        self.storage
            .recipes
            .get_by_name(name)?
            .ok_or_else(|| KitchenError::recipe_not_found(name))
    }

    /// Match the catalog against the whole inventory
    pub fn match_inventory<F>(
        &self,
        filter: &CategoryFilter,
        on_diagnostic: F,
    ) -> KitchenResult<MatchReport>
    where
        F: FnMut(&Diagnostic),
    {
        let pool = self.storage.inventory.pool()?;
        self.match_pool(&pool, filter, on_diagnostic)
    }

    /// Match the catalog against an explicit pool
    pub fn match_pool<F>(
        &self,
        pool: &[Ingredient],
        filter: &CategoryFilter,
        on_diagnostic: F,
    ) -> KitchenResult<MatchReport>
    where
        F: FnMut(&Diagnostic),
    {
        let catalog = self.storage.recipes.get_all()?;
        let engine = MatchingEngine::new(self.policy);

        let report = engine.evaluate(&catalog, pool, filter, on_diagnostic);
        tracing::info!(
            policy = %self.policy,
            category = %filter,
            pool = pool.len(),
            feasible = report.feasible.len(),
            rejected = report.diagnostics.len(),
            "catalog evaluated"
        );

        Ok(report)
    }

    /// Select a feasible recipe by 1-based position and record it as prepared
    ///
    /// An invalid choice leaves the history untouched.
    pub fn prepare(
        &self,
        report: &MatchReport,
        choice: &str,
        date: NaiveDate,
    ) -> KitchenResult<(Recipe, HistoryEntry)> {
        let recipe = report.select(choice)?.clone();
        let entry = HistoryService::new(self.storage).record(&recipe.name, date)?;
        Ok((recipe, entry))
    }
}
