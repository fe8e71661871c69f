//! Inventory service
//!
//! Provides business logic for stocking the fridge and pantry: input
//! validation, merge-add with write-through, notifications and building the
//! ingredient pool for recipe matching.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::{KitchenError, KitchenResult};
use crate::models::{Alert, Ingredient, Inventory, Location, MergeOutcome};
use crate::storage::Storage;

/// Input for adding an ingredient
#[derive(Debug, Clone)]
pub struct AddIngredientInput {
    pub name: String,
    pub quantity: i64,
    pub location: Location,
    pub expiration_date: Option<String>,
}

/// What happened to an added ingredient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddReport {
    pub name: String,
    pub location: Location,
    pub outcome: MergeOutcome,
}

/// Result of narrowing the pool to user-picked ingredients
#[derive(Debug, Clone, Default)]
pub struct PoolSelection {
    pub pool: Vec<Ingredient>,
    /// Picks that matched nothing in the inventory
    pub unknown: Vec<String>,
}

/// Service for fridge and pantry management
pub struct InventoryService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> InventoryService<'a> {
    /// Create a new inventory service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Validate and merge-add an ingredient, persisting the inventory
    pub fn add(&self, input: AddIngredientInput) -> KitchenResult<AddReport> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(KitchenError::Validation(
                "Ingredient name cannot be empty".into(),
            ));
        }

        if input.quantity < 0 {
            return Err(KitchenError::Validation(format!(
                "Quantity cannot be negative (got {})",
                input.quantity
            )));
        }

        let mut ingredient = Ingredient::new(name, input.quantity);
        if let Some(date) = input.expiration_date.as_deref() {
            ingredient.set_expiration_date(date);
        }

        if let Some(Err(e)) = ingredient.parse_expiration(&self.settings.date_format) {
            return Err(KitchenError::Validation(format!(
                "Invalid expiration date '{}' (expected {}): {}",
                ingredient.expiration_date.as_deref().unwrap_or_default(),
                self.settings.date_format,
                e
            )));
        }

        let outcome = self.storage.inventory.add(input.location, ingredient)?;
        tracing::info!(ingredient = name, location = %input.location, ?outcome, "ingredient stored");

        Ok(AddReport {
            name: name.to_string(),
            location: input.location,
            outcome,
        })
    }

    /// Current fridge and pantry contents
    pub fn inventory(&self) -> KitchenResult<Inventory> {
        self.storage.inventory.snapshot()
    }

    /// Expiring-soon and running-low notifications as of `today`
    pub fn alerts(&self, today: NaiveDate) -> KitchenResult<Vec<Alert>> {
        let inventory = self.storage.inventory.snapshot()?;
        Ok(inventory.alerts(today, &self.settings.date_format))
    }

    /// All fridge entries followed by all pantry entries
    pub fn pool(&self) -> KitchenResult<Vec<Ingredient>> {
        self.storage.inventory.pool()
    }

    /// Narrow the pool to the named ingredients
    ///
    /// Every pool entry matching a picked name is kept, in pool order.
    pub fn select_by_names(&self, names: &[String]) -> KitchenResult<PoolSelection> {
        let pool = self.pool()?;
        let mut selection = PoolSelection::default();

        for name in names.iter().map(|n| n.trim()).filter(|n| !n.is_empty()) {
            if !pool.iter().any(|item| item.matches_name(name)) {
                selection.unknown.push(name.to_string());
            }
        }

        selection.pool = pool
            .into_iter()
            .filter(|item| names.iter().any(|name| item.matches_name(name)))
            .collect();

        Ok(selection)
    }

    /// Narrow the pool to 1-based positions in `pool()`
    ///
    /// Positions that are not numbers or fall outside the pool are returned
    /// in `unknown`.
    pub fn select_by_positions(&self, picks: &[String]) -> KitchenResult<PoolSelection> {
        let pool = self.pool()?;
        let mut selection = PoolSelection::default();

        for pick in picks {
            let item = pick
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|position| position.checked_sub(1))
                .and_then(|index| pool.get(index));

            match item {
                Some(item) => selection.pool.push(item.clone()),
                None => selection.unknown.push(pick.trim().to_string()),
            }
        }

        Ok(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::KitchenPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let paths = KitchenPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let storage = Storage::new(paths, &settings).unwrap();
        storage.load_all();
        (temp_dir, storage, settings)
    }

    fn input(name: &str, quantity: i64, location: Location, date: Option<&str>) -> AddIngredientInput {
        AddIngredientInput {
            name: name.into(),
            quantity,
            location,
            expiration_date: date.map(String::from),
        }
    }

    #[test]
    fn test_add_and_merge() {
        let (_temp_dir, storage, settings) = create_test_storage();
        let service = InventoryService::new(&storage, &settings);

        let first = service.add(input("Sugar", 2, Location::Pantry, None)).unwrap();
        let second = service.add(input("sugar", 3, Location::Pantry, None)).unwrap();

        assert_eq!(first.outcome, MergeOutcome::Added);
        assert_eq!(second.outcome, MergeOutcome::Merged { quantity: 5 });
        assert_eq!(second.location, Location::Pantry);

        let inventory = service.inventory().unwrap();
        assert_eq!(inventory.pantry().len(), 1);
        assert_eq!(inventory.pantry().items()[0].quantity, 5);
    }

    #[test]
    fn test_add_rejects_quantity_overflow() {
        let (_temp_dir, storage, settings) = create_test_storage();
        let service = InventoryService::new(&storage, &settings);

        service
            .add(input("Rice", i64::MAX, Location::Pantry, None))
            .unwrap();
        let err = service
            .add(input("rice", 1, Location::Pantry, None))
            .unwrap_err();

        assert!(err.is_validation());
        assert!(err.to_string().contains("overflow"));
        let inventory = service.inventory().unwrap();
        assert_eq!(inventory.pantry().get("Rice").unwrap().quantity, i64::MAX);
    }

    #[test]
    fn test_add_rejects_bad_input() {
        let (_temp_dir, storage, settings) = create_test_storage();
        let service = InventoryService::new(&storage, &settings);

        assert!(service
            .add(input("  ", 1, Location::Pantry, None))
            .unwrap_err()
            .is_validation());
        assert!(service
            .add(input("Salt", -1, Location::Pantry, None))
            .unwrap_err()
            .is_validation());
        assert!(service
            .add(input("Milk", 1, Location::Fridge, Some("15/01/2024")))
            .unwrap_err()
            .is_validation());

        assert!(service.inventory().unwrap().is_empty());
    }

    #[test]
    fn test_blank_date_is_accepted() {
        let (_temp_dir, storage, settings) = create_test_storage();
        let service = InventoryService::new(&storage, &settings);

        service
            .add(input("Butter", 1, Location::Fridge, Some("")))
            .unwrap();
        let inventory = service.inventory().unwrap();
        assert!(inventory.fridge().items()[0].expiration_date.is_none());
    }

    #[test]
    fn test_alerts() {
        let (_temp_dir, storage, settings) = create_test_storage();
        let service = InventoryService::new(&storage, &settings);
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        service
            .add(input("Cheese", 1, Location::Fridge, Some("2024-01-05")))
            .unwrap();
        service
            .add(input("Yogurt", 1, Location::Fridge, Some("2024-01-07")))
            .unwrap();
        service.add(input("Salt", 1, Location::Pantry, None)).unwrap();
        service.add(input("Flour", 2, Location::Pantry, None)).unwrap();

        let alerts = service.alerts(today).unwrap();
        let names: Vec<_> = alerts.iter().map(|a| a.ingredient_name()).collect();
        assert_eq!(names, vec!["Cheese", "Salt"]);
    }

    #[test]
    fn test_select_by_names() {
        let (_temp_dir, storage, settings) = create_test_storage();
        let service = InventoryService::new(&storage, &settings);

        service.add(input("Milk", 1, Location::Fridge, None)).unwrap();
        service.add(input("Bread", 2, Location::Pantry, None)).unwrap();
        service.add(input("Rice", 2, Location::Pantry, None)).unwrap();

        let selection = service
            .select_by_names(&["bread".into(), "milk".into(), "Caviar".into()])
            .unwrap();

        let names: Vec<_> = selection.pool.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Milk", "Bread"]);
        assert_eq!(selection.unknown, vec!["Caviar"]);
    }

    #[test]
    fn test_select_by_positions() {
        let (_temp_dir, storage, settings) = create_test_storage();
        let service = InventoryService::new(&storage, &settings);

        service.add(input("Milk", 1, Location::Fridge, None)).unwrap();
        service.add(input("Bread", 2, Location::Pantry, None)).unwrap();

        let selection = service
            .select_by_positions(&["2".into(), "9".into(), "x".into()])
            .unwrap();

        assert_eq!(selection.pool.len(), 1);
        assert_eq!(selection.pool[0].name, "Bread");
        assert_eq!(selection.unknown, vec!["9", "x"]);
    }
}
