//! Recipe catalog model
//!
//! Recipes are loaded once per session and never modified. Amounts are kept
//! as display text ("2 cups"); only the quantity-sufficient matching policy
//! looks at the leading number.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One line of a recipe's ingredient or condiment list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Ingredient name as written in the recipe
    pub name: String,

    /// Quantity and unit joined for display, e.g. "2 cups"
    pub amount: String,
}

impl RecipeIngredient {
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
        }
    }

    /// Leading numeric part of the amount
    ///
    /// Accepts integers, decimals and simple fractions ("1/2"). Returns `None`
    /// for amounts such as "a pinch" that carry no number, and for anything
    /// that is not a finite, non-negative amount ("NaN", "inf", "-3").
    pub fn required_quantity(&self) -> Option<f64> {
        let token = self.amount.split_whitespace().next()?;

        let quantity = match token.split_once('/') {
            Some((numerator, denominator)) => {
                let numerator: f64 = numerator.parse().ok()?;
                let denominator: f64 = denominator.parse().ok()?;
                if denominator == 0.0 {
                    return None;
                }
                numerator / denominator
            }
            None => token.parse().ok()?,
        };

        (quantity.is_finite() && quantity >= 0.0).then_some(quantity)
    }
}

impl fmt::Display for RecipeIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.amount.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}: {}", self.name, self.amount)
        }
    }
}

/// A recipe from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,

    /// Free-text tag such as "sweet" or "savory"
    pub category: String,

    /// Ingredients checked for feasibility
    pub ingredients: Vec<RecipeIngredient>,

    /// Optional extras; shown but never checked
    pub condiments: Vec<RecipeIngredient>,

    pub steps: Vec<String>,
}

impl Recipe {
    /// Create a recipe with no ingredients or steps yet
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            ingredients: Vec::new(),
            condiments: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Builder-style required ingredient
    pub fn ingredient(mut self, name: impl Into<String>, amount: impl Into<String>) -> Self {
        self.ingredients.push(RecipeIngredient::new(name, amount));
        self
    }

    /// Builder-style condiment
    pub fn condiment(mut self, name: impl Into<String>, amount: impl Into<String>) -> Self {
        self.condiments.push(RecipeIngredient::new(name, amount));
        self
    }

    /// Builder-style step
    pub fn step(mut self, step: impl Into<String>) -> Self {
        self.steps.push(step.into());
        self
    }

    /// Normalize a category tag for comparison
    pub fn normalize_category(category: &str) -> String {
        category.trim().to_lowercase()
    }

    /// Check the category tag against an already-normalized filter
    pub fn in_category(&self, normalized: &str) -> bool {
        Self::normalize_category(&self.category) == normalized
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
