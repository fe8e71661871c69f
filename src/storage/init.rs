//! Storage initialization
//!
//! Handles first-run setup and the starter recipe catalog

use crate::config::paths::KitchenPaths;
use crate::error::KitchenError;

use super::file_io::save_json;
use super::recipes::{CatalogData, CatalogIngredient, CatalogRecipe};

/// Initialize storage for a fresh installation
///
/// Creates the data directory and seeds recipes.json when it is absent.
/// Returns whether a starter catalog was written.
pub fn initialize_storage(paths: &KitchenPaths) -> Result<bool, KitchenError> {
    paths.ensure_directories()?;

    if paths.recipes_file().exists() {
        return Ok(false);
    }

    save_json(&paths.recipes_file(), &starter_catalog())?;
    tracing::info!(path = %paths.recipes_file().display(), "starter catalog written");
    Ok(true)
}

/// A small catalog covering both the sweet and savory categories
pub fn starter_catalog() -> CatalogData {
    let ing = CatalogIngredient::new;

    CatalogData {
        recipes: vec![
            CatalogRecipe {
                name: "French Toast".into(),
                category: "savory".into(),
                ingredients: vec![
                    ing("Bread", "4", "slices"),
                    ing("Eggs", "2", ""),
                    ing("Milk", "1/2", "cup"),
                ],
                condiments: vec![ing("Cinnamon", "1", "tsp"), ing("Maple Syrup", "2", "tbsp")],
                steps: vec![
                    "Whisk the eggs, milk and cinnamon in a shallow dish".into(),
                    "Soak each slice of bread in the mixture".into(),
                    "Fry in a buttered pan until golden on both sides".into(),
                    "Serve with maple syrup".into(),
                ],
            },
            CatalogRecipe {
                name: "Pancakes".into(),
                category: "sweet".into(),
                ingredients: vec![
                    ing("Flour", "1", "cup"),
                    ing("Sugar", "2", "tbsp"),
                    ing("Eggs", "1", ""),
                    ing("Milk", "1", "cup"),
                ],
                condiments: vec![ing("Butter", "1", "tbsp"), ing("Salt", "1", "pinch")],
                steps: vec![
                    "Mix the flour, sugar and salt".into(),
                    "Beat in the egg and milk until smooth".into(),
                    "Ladle onto a hot buttered griddle and flip when bubbles form".into(),
                ],
            },
            CatalogRecipe {
                name: "Omelette".into(),
                category: "savory".into(),
                ingredients: vec![ing("Eggs", "3", ""), ing("Cheese", "1/4", "cup")],
                condiments: vec![ing("Salt", "1", "pinch"), ing("Pepper", "1", "pinch")],
                steps: vec![
                    "Beat the eggs with salt and pepper".into(),
                    "Pour into a hot pan and let set".into(),
                    "Add cheese, fold and serve".into(),
                ],
            },
            CatalogRecipe {
                name: "Grilled Cheese".into(),
                category: "savory".into(),
                ingredients: vec![ing("Bread", "2", "slices"), ing("Cheese", "2", "slices")],
                condiments: vec![ing("Butter", "1", "tbsp")],
                steps: vec![
                    "Butter the outside of each slice".into(),
                    "Sandwich the cheese between the slices".into(),
                    "Grill until golden and the cheese melts".into(),
                ],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::recipes::RecipeRepository;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_writes_starter_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KitchenPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(initialize_storage(&paths).unwrap());

        let repo = RecipeRepository::new(paths.recipes_file());
        repo.load().unwrap();
        let recipes = repo.get_all().unwrap();
        assert_eq!(recipes[0].name, "French Toast");
        assert_eq!(recipes[0].ingredients[2].amount, "1/2 cup");
        assert!(recipes.iter().any(|r| r.category == "sweet"));
    }

    #[test]
    fn test_initialize_keeps_existing_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KitchenPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.recipes_file(), r#"{"recipes": []}"#).unwrap();

        assert!(!initialize_storage(&paths).unwrap());

        let raw = std::fs::read_to_string(paths.recipes_file()).unwrap();
        assert_eq!(raw, r#"{"recipes": []}"#);
    }
}
