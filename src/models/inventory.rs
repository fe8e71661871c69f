//! Household inventory model
//!
//! Holds the fridge and pantry ledgers together and builds the combined
//! ingredient pool that recipe matching runs against.

use chrono::NaiveDate;

use super::ingredient::Ingredient;
use super::ledger::{Alert, Ledger, Location, MergeOutcome};

/// The fridge and pantry of one household
#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    fridge: Ledger,
    pantry: Ledger,
}

impl Inventory {
    /// Create an empty inventory with the given alert thresholds
    pub fn new(expiry_window_days: i64, low_stock_threshold: i64) -> Self {
        Self {
            fridge: Ledger::fridge(expiry_window_days),
            pantry: Ledger::pantry(low_stock_threshold),
        }
    }

    pub fn fridge(&self) -> &Ledger {
        &self.fridge
    }

    pub fn pantry(&self) -> &Ledger {
        &self.pantry
    }

    /// Get the ledger for a location
    pub fn ledger(&self, location: Location) -> &Ledger {
        match location {
            Location::Fridge => &self.fridge,
            Location::Pantry => &self.pantry,
        }
    }

    /// Get the ledger for a location, mutably
    pub fn ledger_mut(&mut self, location: Location) -> &mut Ledger {
        match location {
            Location::Fridge => &mut self.fridge,
            Location::Pantry => &mut self.pantry,
        }
    }

    /// Merge-add an ingredient into the ledger for `location`
    ///
    /// `None` means the merged quantity would overflow; nothing was changed.
    pub fn add(&mut self, location: Location, ingredient: Ingredient) -> Option<MergeOutcome> {
        self.ledger_mut(location).add(ingredient)
    }

    /// All fridge entries followed by all pantry entries
    ///
    /// Names present in both ledgers appear twice; the pool is not merged.
    pub fn pool(&self) -> Vec<Ingredient> {
        self.fridge
            .items()
            .iter()
            .chain(self.pantry.items())
            .cloned()
            .collect()
    }

    /// Fridge alerts followed by pantry alerts
    pub fn alerts(&self, today: NaiveDate, date_format: &str) -> Vec<Alert> {
        let mut alerts = self.fridge.alerts(today, date_format);
        alerts.extend(self.pantry.alerts(today, date_format));
        alerts
    }

    pub fn is_empty(&self) -> bool {
        self.fridge.is_empty() && self.pantry.is_empty()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(5, 2)
    }
}
