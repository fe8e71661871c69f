//! Recipe matching engine
//!
//! Decides which catalog recipes can be cooked from an ingredient pool.
//!
//! A recipe is feasible when every one of its required ingredients is
//! satisfied by the pool under the active [`FeasibilityPolicy`]. Condiments
//! are informational and never checked. Recipes that fail produce a
//! [`Diagnostic`] listing the missing ingredients; diagnostics are handed to
//! the caller's callback as soon as each recipe is evaluated so the user sees
//! them while the scan runs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{KitchenError, KitchenResult};
use crate::models::{Ingredient, Recipe, RecipeIngredient};

/// Decides whether the pool covers one required ingredient
pub trait FeasibilityPolicy {
    fn satisfies(&self, required: &RecipeIngredient, pool: &[Ingredient]) -> bool;
}

/// The name appearing anywhere in the pool is enough
#[derive(Debug, Clone, Copy, Default)]
pub struct NameOnly;

impl FeasibilityPolicy for NameOnly {
    fn satisfies(&self, required: &RecipeIngredient, pool: &[Ingredient]) -> bool {
        pool.iter().any(|item| item.matches_name(&required.name))
    }
}

/// Some pool entry with the name must hold at least the required quantity
///
/// Amounts without a leading number ("a pinch") fall back to presence.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuantitySufficient;

impl FeasibilityPolicy for QuantitySufficient {
    fn satisfies(&self, required: &RecipeIngredient, pool: &[Ingredient]) -> bool {
        let needed = required.required_quantity();
        pool.iter()
            .filter(|item| item.matches_name(&required.name))
            .any(|item| match needed {
                Some(needed) => item.quantity as f64 >= needed,
                None => true,
            })
    }
}

/// Configurable choice of feasibility policy
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum MatchingPolicy {
    /// Presence of the ingredient name is enough
    #[default]
    NameOnly,
    /// Stock quantity must cover the recipe's amount
    QuantitySufficient,
}

impl MatchingPolicy {
    /// The strategy implementing this policy
    pub fn strategy(self) -> &'static dyn FeasibilityPolicy {
        match self {
            Self::NameOnly => &NameOnly,
            Self::QuantitySufficient => &QuantitySufficient,
        }
    }
}

impl fmt::Display for MatchingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameOnly => write!(f, "name-only"),
            Self::QuantitySufficient => write!(f, "quantity-sufficient"),
        }
    }
}

/// Which recipe categories take part in a match
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every category
    #[default]
    Any,
    /// Only recipes whose normalized category equals this
    Only(String),
}

impl CategoryFilter {
    /// Build a filter from optional user input; blank input means any category
    pub fn new(category: Option<&str>) -> Self {
        match category.map(Recipe::normalize_category) {
            Some(normalized) if !normalized.is_empty() => Self::Only(normalized),
            _ => Self::Any,
        }
    }

    pub fn accepts(&self, recipe: &Recipe) -> bool {
        match self {
            Self::Any => true,
            Self::Only(category) => recipe.in_category(category),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "any"),
            Self::Only(category) => write!(f, "{}", category),
        }
    }
}

/// Why a recipe was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub recipe: String,
    /// Missing ingredient names, in recipe order
    pub missing: Vec<String>,
}

/// Result of evaluating a catalog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchReport {
    /// Feasible recipes in catalog order
    pub feasible: Vec<Recipe>,
    pub diagnostics: Vec<Diagnostic>,
}

impl MatchReport {
    pub fn is_empty(&self) -> bool {
        self.feasible.is_empty()
    }

    /// Pick a feasible recipe by its 1-based position in `feasible`
    ///
    /// Non-numeric and out-of-range input is an `InvalidSelection` error.
    pub fn select(&self, choice: &str) -> KitchenResult<&Recipe> {
        let invalid = || KitchenError::InvalidSelection {
            choice: choice.trim().to_string(),
            max: self.feasible.len(),
        };

        let position: usize = choice.trim().parse().map_err(|_| invalid())?;
        position
            .checked_sub(1)
            .and_then(|index| self.feasible.get(index))
            .ok_or_else(invalid)
    }
}

/// Evaluates catalog recipes against an ingredient pool
pub struct MatchingEngine {
    policy: &'static dyn FeasibilityPolicy,
}

impl MatchingEngine {
    pub fn new(policy: MatchingPolicy) -> Self {
        Self {
            policy: policy.strategy(),
        }
    }

    /// Required ingredients of `recipe` the pool does not satisfy
    pub fn missing_for(&self, recipe: &Recipe, pool: &[Ingredient]) -> Vec<String> {
        recipe
            .ingredients
            .iter()
            .filter(|required| !self.policy.satisfies(required, pool))
            .map(|required| required.name.clone())
            .collect()
    }

    /// Evaluate every recipe in `catalog` accepted by `filter`
    ///
    /// `on_diagnostic` is called for each rejected recipe as soon as it is
    /// evaluated.
    pub fn evaluate<F>(
        &self,
        catalog: &[Recipe],
        pool: &[Ingredient],
        filter: &CategoryFilter,
        mut on_diagnostic: F,
    ) -> MatchReport
    where
        F: FnMut(&Diagnostic),
    {
        let mut report = MatchReport::default();

        for recipe in catalog.iter().filter(|r| filter.accepts(r)) {
            let missing = self.missing_for(recipe, pool);

            if missing.is_empty() {
                report.feasible.push(recipe.clone());
                continue;
            }

            let diagnostic = Diagnostic {
                recipe: recipe.name.clone(),
                missing,
            };
            tracing::debug!(
                recipe = %diagnostic.recipe,
                missing = ?diagnostic.missing,
                "recipe not feasible"
            );
            on_diagnostic(&diagnostic);
            report.diagnostics.push(diagnostic);
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn french_toast() -> Recipe {
        Recipe::new("French Toast", "savory")
            .ingredient("Bread", "4 slices")
            .ingredient("Eggs", "2")
            .ingredient("Milk", "1/2 cup")
            .condiment("Syrup", "2 tbsp")
    }

    fn pancakes() -> Recipe {
        Recipe::new("Pancakes", "Sweet")
            .ingredient("Flour", "1 cup")
            .ingredient("Eggs", "1")
    }

    fn pool(items: &[(&str, i64)]) -> Vec<Ingredient> {
        items
            .iter()
            .map(|(name, qty)| Ingredient::new(*name, *qty))
            .collect()
    }

    fn savory() -> CategoryFilter {
        CategoryFilter::new(Some("savory"))
    }

    #[test]
    fn test_feasible_with_full_pool() {
        let engine = MatchingEngine::new(MatchingPolicy::NameOnly);
        let catalog = vec![french_toast()];
        let pool = pool(&[("bread", 1), ("EGGS", 1), ("Milk", 1)]);

        let report = engine.evaluate(&catalog, &pool, &savory(), |_| {});
        assert_eq!(report.feasible.len(), 1);
        assert_eq!(report.feasible[0].name, "French Toast");
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn test_missing_ingredient_diagnostic() {
        let engine = MatchingEngine::new(MatchingPolicy::NameOnly);
        let catalog = vec![french_toast()];
        let pool = pool(&[("Bread", 1), ("Milk", 1)]);

        let mut streamed = Vec::new();
        let report = engine.evaluate(&catalog, &pool, &savory(), |d| streamed.push(d.clone()));

        assert!(report.is_empty());
        assert_eq!(
            report.diagnostics,
            vec![Diagnostic {
                recipe: "French Toast".into(),
                missing: vec!["Eggs".into()],
            }]
        );
        assert_eq!(streamed, report.diagnostics);
    }

    #[test]
    fn test_condiments_are_never_checked() {
        let engine = MatchingEngine::new(MatchingPolicy::QuantitySufficient);
        let catalog = vec![french_toast()];
        let pool = pool(&[("Bread", 4), ("Eggs", 2), ("Milk", 1)]);

        let report = engine.evaluate(&catalog, &pool, &CategoryFilter::Any, |_| {});
        assert_eq!(report.feasible.len(), 1);
    }

    #[test]
    fn test_category_filter_is_case_insensitive() {
        let engine = MatchingEngine::new(MatchingPolicy::NameOnly);
        let catalog = vec![french_toast(), pancakes()];
        let pool = pool(&[("Flour", 1), ("Eggs", 1)]);

        let sweet = CategoryFilter::new(Some("SWEET"));
        let mut calls = 0;
        let report = engine.evaluate(&catalog, &pool, &sweet, |_| calls += 1);

        assert_eq!(report.feasible.len(), 1);
        assert_eq!(report.feasible[0].name, "Pancakes");
        // French Toast is filtered out, not diagnosed
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_feasible_in_catalog_order() {
        let engine = MatchingEngine::new(MatchingPolicy::NameOnly);
        let catalog = vec![
            Recipe::new("Zucchini Bread", "sweet").ingredient("Flour", "2 cups"),
            pancakes(),
            Recipe::new("Apple Crumble", "sweet").ingredient("Flour", "1 cup"),
        ];
        let pool = pool(&[("Flour", 5), ("Eggs", 2)]);

        let report = engine.evaluate(&catalog, &pool, &CategoryFilter::Any, |_| {});
        let names: Vec<_> = report.feasible.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Zucchini Bread", "Pancakes", "Apple Crumble"]);
    }

    #[test]
    fn test_name_only_ignores_quantity() {
        let required = RecipeIngredient::new("Eggs", "12");
        assert!(NameOnly.satisfies(&required, &pool(&[("Eggs", 0)])));
        assert!(!NameOnly.satisfies(&required, &pool(&[("Egg Whites", 12)])));
    }

    #[test]
    fn test_quantity_sufficient() {
        let eggs = RecipeIngredient::new("Eggs", "3");
        assert!(QuantitySufficient.satisfies(&eggs, &pool(&[("eggs", 3)])));
        assert!(!QuantitySufficient.satisfies(&eggs, &pool(&[("eggs", 2)])));

        // Any single entry may satisfy it; entries are not summed
        assert!(!QuantitySufficient.satisfies(&eggs, &pool(&[("Eggs", 2), ("Eggs", 1)])));
        assert!(QuantitySufficient.satisfies(&eggs, &pool(&[("Eggs", 1), ("Eggs", 4)])));

        let milk = RecipeIngredient::new("Milk", "1/2 cup");
        assert!(QuantitySufficient.satisfies(&milk, &pool(&[("Milk", 1)])));

        let salt = RecipeIngredient::new("Salt", "a pinch");
        assert!(QuantitySufficient.satisfies(&salt, &pool(&[("Salt", 0)])));
    }

    #[test]
    fn test_quantity_sufficient_unusable_amount_is_presence_check() {
        // None of these amounts is a usable number, so only the name counts
        for amount in ["NaN cups", "inf", "-3"] {
            let odd = RecipeIngredient::new("Eggs", amount);
            assert!(QuantitySufficient.satisfies(&odd, &pool(&[("Eggs", 0)])), "{}", amount);
            assert!(!QuantitySufficient.satisfies(&odd, &pool(&[("Milk", 5)])), "{}", amount);
        }
    }

    #[test]
    fn test_policies_diverge() {
        let catalog = vec![french_toast()];
        let pool = pool(&[("Bread", 1), ("Eggs", 1), ("Milk", 1)]);

        let name_only = MatchingEngine::new(MatchingPolicy::NameOnly)
            .evaluate(&catalog, &pool, &savory(), |_| {});
        let quantity = MatchingEngine::new(MatchingPolicy::QuantitySufficient)
            .evaluate(&catalog, &pool, &savory(), |_| {});

        assert_eq!(name_only.feasible.len(), 1);
        assert!(quantity.is_empty());
        assert_eq!(quantity.diagnostics[0].missing, vec!["Bread", "Eggs"]);
    }

    #[test]
    fn test_empty_inputs() {
        let engine = MatchingEngine::new(MatchingPolicy::NameOnly);
        let report = engine.evaluate(&[], &[], &CategoryFilter::Any, |_| {});
        assert!(report.is_empty());
        assert!(report.diagnostics.is_empty());

        let catalog = vec![french_toast()];
        let report = engine.evaluate(&catalog, &[], &CategoryFilter::Any, |_| {});
        assert_eq!(report.diagnostics[0].missing, vec!["Bread", "Eggs", "Milk"]);
    }

    #[test]
    fn test_select() {
        let report = MatchReport {
            feasible: vec![french_toast(), pancakes()],
            diagnostics: vec![],
        };

        assert_eq!(report.select("1").unwrap().name, "French Toast");
        assert_eq!(report.select(" 2 ").unwrap().name, "Pancakes");
        assert!(report.select("0").unwrap_err().is_validation());
        assert!(report.select("3").unwrap_err().is_validation());
        assert!(report.select("two").unwrap_err().is_validation());
        assert!(MatchReport::default().select("1").is_err());
    }

    #[test]
    fn test_category_filter_blank_is_any() {
        assert_eq!(CategoryFilter::new(None), CategoryFilter::Any);
        assert_eq!(CategoryFilter::new(Some("  ")), CategoryFilter::Any);
        assert_eq!(
            CategoryFilter::new(Some(" Savory ")),
            CategoryFilter::Only("savory".into())
        );
    }

    #[test]
    fn test_policy_serde_names() {
        let json = serde_json::to_string(&MatchingPolicy::QuantitySufficient).unwrap();
        assert_eq!(json, "\"quantity_sufficient\"");
        let policy: MatchingPolicy = serde_json::from_str("\"name_only\"").unwrap();
        assert_eq!(policy, MatchingPolicy::NameOnly);
    }
}
