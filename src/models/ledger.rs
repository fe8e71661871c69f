//! Storage ledger model
//!
//! A ledger is the ordered list of ingredients kept in one location. The
//! fridge and the pantry are both ledgers; they differ only in their
//! location tag and in which alert policy decides what needs attention.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ingredient::Ingredient;

/// Where an ingredient is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Fridge,
    Pantry,
}

impl Location {
    /// Both locations, in pooling order
    pub fn all() -> [Location; 2] {
        [Location::Fridge, Location::Pantry]
    }

    /// Parse a location from user input ("f", "fridge", "P", ...)
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "f" | "fridge" => Some(Self::Fridge),
            "p" | "pantry" => Some(Self::Pantry),
            _ => None,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fridge => write!(f, "Fridge"),
            Self::Pantry => write!(f, "Pantry"),
        }
    }
}

/// Decides which ledger entries raise a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertPolicy {
    /// Flag entries whose expiration date is at most `window_days` away
    Expiration { window_days: i64 },
    /// Flag entries whose quantity is below `threshold`
    LowStock { threshold: i64 },
}

/// A notification about one ledger entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    /// Expires within the window; negative days means already expired
    ExpiringSoon {
        name: String,
        expires_on: NaiveDate,
        days_remaining: i64,
    },
    /// Quantity is below the low-stock threshold
    RunningLow { name: String, quantity: i64 },
}

impl Alert {
    /// Name of the ingredient the alert is about
    pub fn ingredient_name(&self) -> &str {
        match self {
            Self::ExpiringSoon { name, .. } | Self::RunningLow { name, .. } => name,
        }
    }
}

/// What `Ledger::add` did with the incoming record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Appended as a new entry
    Added,
    /// Folded into an existing entry; `quantity` is the new total
    Merged { quantity: i64 },
}

/// Ordered ingredient list for a single storage location
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    location: Location,
    policy: AlertPolicy,
    items: Vec<Ingredient>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new(location: Location, policy: AlertPolicy) -> Self {
        Self {
            location,
            policy,
            items: Vec::new(),
        }
    }

    /// Create an empty fridge ledger that flags items expiring soon
    pub fn fridge(window_days: i64) -> Self {
        Self::new(Location::Fridge, AlertPolicy::Expiration { window_days })
    }

    /// Create an empty pantry ledger that flags items running low
    pub fn pantry(threshold: i64) -> Self {
        Self::new(Location::Pantry, AlertPolicy::LowStock { threshold })
    }

    /// Rebuild the ledger from a persisted list, merging any duplicate names
    ///
    /// A duplicate whose merged quantity would overflow is dropped with a
    /// warning.
    pub fn restore(&mut self, items: impl IntoIterator<Item = Ingredient>) {
        self.items.clear();
        for item in items {
            let name = item.name.clone();
            if self.add(item).is_none() {
                tracing::warn!(
                    location = %self.location,
                    ingredient = %name,
                    "dropping duplicate entry whose merged quantity overflows"
                );
            }
        }
    }

    /// Add an ingredient, merging into an existing entry with the same name
    ///
    /// Quantities are summed. A non-empty incoming expiration date replaces the
    /// stored one; an empty incoming date leaves it alone.
    ///
    /// Returns `None` and leaves the ledger untouched if the summed quantity
    /// does not fit in an `i64`.
    pub fn add(&mut self, ingredient: Ingredient) -> Option<MergeOutcome> {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|item| item.matches_name(&ingredient.name))
        {
            let quantity = existing.quantity.checked_add(ingredient.quantity)?;
            existing.quantity = quantity;
            if let Some(date) = ingredient.expiration_date {
                existing.expiration_date = Some(date);
            }
            return Some(MergeOutcome::Merged { quantity });
        }

        self.items.push(ingredient);
        Some(MergeOutcome::Added)
    }

    /// Location this ledger represents
    pub fn location(&self) -> Location {
        self.location
    }

    /// Alert policy applied by `alerts`
    pub fn policy(&self) -> AlertPolicy {
        self.policy
    }

    /// Entries in insertion order
    pub fn items(&self) -> &[Ingredient] {
        &self.items
    }

    /// Find an entry by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&Ingredient> {
        self.items.iter().find(|item| item.matches_name(name))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Evaluate the ledger's alert policy
    ///
    /// `today` anchors the expiration window. Entries with no date never
    /// alert; entries whose date does not parse are skipped and logged.
    pub fn alerts(&self, today: NaiveDate, date_format: &str) -> Vec<Alert> {
        match self.policy {
            AlertPolicy::Expiration { window_days } => {
                self.expiring_soon(today, window_days, date_format)
            }
            AlertPolicy::LowStock { threshold } => self.running_low(threshold),
        }
    }

    fn expiring_soon(&self, today: NaiveDate, window_days: i64, date_format: &str) -> Vec<Alert> {
        let mut alerts = Vec::new();

        for item in &self.items {
            let expires_on = match item.parse_expiration(date_format) {
                None => continue,
                Some(Ok(date)) => date,
                Some(Err(e)) => {
                    tracing::warn!(
                        ingredient = %item.name,
                        location = %self.location,
                        date = item.expiration_date.as_deref().unwrap_or_default(),
                        error = %e,
                        "skipping ingredient with unparsable expiration date"
                    );
                    continue;
                }
            };

            let days_remaining = (expires_on - today).num_days();
            if days_remaining <= window_days {
                alerts.push(Alert::ExpiringSoon {
                    name: item.name.clone(),
                    expires_on,
                    days_remaining,
                });
            }
        }

        alerts
    }

    fn running_low(&self, threshold: i64) -> Vec<Alert> {
        self.items
            .iter()
            .filter(|item| item.quantity < threshold)
            .map(|item| Alert::RunningLow {
                name: item.name.clone(),
                quantity: item.quantity,
            })
            .collect()
    }
}
