//! Ingredient model
//!
//! A single stocked ingredient: a display name, an integer count and, for
//! perishables, the expiration date exactly as it was entered.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ingredient held in the fridge or pantry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Display name, case preserved
    pub name: String,

    /// Unitless count
    pub quantity: i64,

    /// Expiration date text; stored raw so a malformed value survives a
    /// load/save cycle instead of failing the whole snapshot
    #[serde(rename = "expirationDate", default, with = "expiration_text")]
    pub expiration_date: Option<String>,
}

impl Ingredient {
    /// Create an ingredient without an expiration date
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
            expiration_date: None,
        }
    }

    /// Create an ingredient with an expiration date
    ///
    /// Blank dates are stored as "no date".
    pub fn with_expiration(
        name: impl Into<String>,
        quantity: i64,
        expiration_date: impl Into<String>,
    ) -> Self {
        let mut ingredient = Self::new(name, quantity);
        ingredient.set_expiration_date(expiration_date);
        ingredient
    }

    /// Replace the expiration date; blank input clears it
    pub fn set_expiration_date(&mut self, expiration_date: impl Into<String>) {
        let date = expiration_date.into();
        let trimmed = date.trim();
        self.expiration_date = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    /// Normalize an ingredient name for matching
    pub fn normalize_name(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Check if this ingredient matches a name (case-insensitive)
    pub fn matches_name(&self, name: &str) -> bool {
        Self::normalize_name(&self.name) == Self::normalize_name(name)
    }

    /// Parse the expiration date with the given strftime format
    ///
    /// Returns `None` when there is no date at all.
    pub fn parse_expiration(
        &self,
        date_format: &str,
    ) -> Option<Result<NaiveDate, chrono::ParseError>> {
        self.expiration_date
            .as_deref()
            .map(|date| NaiveDate::parse_from_str(date, date_format))
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.quantity)
    }
}

/// Maps `None` to the empty string used by the snapshot format
mod expiration_text {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        Ok(value
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()))
    }
}
