//! Recipe catalog repository for JSON storage
//!
//! Loads recipes.json. The catalog is read-only for a session; the only
//! writer is first-run initialization.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::KitchenError;
use crate::models::{Recipe, RecipeIngredient};

use super::file_io::{load_json, save_json, JsonLoad};

/// Serializable catalog file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub recipes: Vec<CatalogRecipe>,
}

/// A recipe as it appears in recipes.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogRecipe {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub ingredients: Vec<CatalogIngredient>,
    #[serde(default)]
    pub condiments: Vec<CatalogIngredient>,
    #[serde(default)]
    pub steps: Vec<String>,
}

/// An ingredient line with separate quantity and unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogIngredient {
    pub name: String,
    /// Usually a string ("2", "1/2"); plain numbers are accepted too
    #[serde(default)]
    pub quantity: serde_json::Value,
    #[serde(default)]
    pub unit: String,
}

impl CatalogIngredient {
    pub fn new(name: &str, quantity: &str, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity: serde_json::Value::String(quantity.to_string()),
            unit: unit.to_string(),
        }
    }

    fn amount(&self) -> String {
        let quantity = match &self.quantity {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Number(n) => n.to_string(),
            _ => String::new(),
        };
        format!("{} {}", quantity.trim(), self.unit.trim())
            .trim()
            .to_string()
    }
}

impl From<&CatalogIngredient> for RecipeIngredient {
    fn from(raw: &CatalogIngredient) -> Self {
        RecipeIngredient::new(raw.name.clone(), raw.amount())
    }
}

impl From<CatalogRecipe> for Recipe {
    fn from(raw: CatalogRecipe) -> Self {
        Recipe {
            ingredients: raw.ingredients.iter().map(RecipeIngredient::from).collect(),
            condiments: raw.condiments.iter().map(RecipeIngredient::from).collect(),
            name: raw.name,
            category: raw.category,
            steps: raw.steps,
        }
    }
}

/// Repository for the recipe catalog
pub struct RecipeRepository {
    path: PathBuf,
    recipes: RwLock<Vec<Recipe>>,
}

impl RecipeRepository {
    /// Create a new recipe repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            recipes: RwLock::new(Vec::new()),
        }
    }

    /// Load the catalog from disk, keeping file order
    ///
    /// On failure the catalog is left empty and the error is returned.
    pub fn load(&self) -> Result<(), KitchenError> {
        let mut recipes = self.recipes.write().map_err(|e| {
            KitchenError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        recipes.clear();

        let file_data = match load_json::<CatalogData>(&self.path)? {
            JsonLoad::Missing => {
                tracing::info!(path = %self.path.display(), "no recipe catalog found");
                return Ok(());
            }
            loaded => loaded.or_default()?,
        };
        recipes.extend(file_data.recipes.into_iter().map(Recipe::from));

        tracing::debug!(path = %self.path.display(), count = recipes.len(), "catalog loaded");
        Ok(())
    }

    /// Write a catalog file (used when seeding a fresh install)
    pub fn write_catalog(&self, data: &CatalogData) -> Result<(), KitchenError> {
        save_json(&self.path, data)
    }

    /// Get all recipes in catalog order
    pub fn get_all(&self) -> Result<Vec<Recipe>, KitchenError> {
        let recipes = self.recipes.read().map_err(|e| {
            KitchenError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(recipes.clone())
    }

    /// Get a recipe by exact name
    pub fn get_by_exact_name(&self, name: &str) -> Result<Option<Recipe>, KitchenError> {
        let recipes = self.recipes.read().map_err(|e| {
            KitchenError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(recipes.iter().find(|r| r.name == name).cloned())
    }

    /// Get a recipe by name, trying an exact match before a case-insensitive one
    pub fn get_by_name(&self, name: &str) -> Result<Option<Recipe>, KitchenError> {
        if let Some(recipe) = self.get_by_exact_name(name)? {
            return Ok(Some(recipe));
        }

        let recipes = self.recipes.read().map_err(|e| {
            KitchenError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let wanted = name.trim().to_lowercase();
        Ok(recipes
            .iter()
            .find(|r| r.name.trim().to_lowercase() == wanted)
            .cloned())
    }

    /// Count recipes
    pub fn count(&self) -> Result<usize, KitchenError> {
        let recipes = self.recipes.read().map_err(|e| {
            KitchenError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(recipes.len())
    }
}
