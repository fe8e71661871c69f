//! Core data models for KitchenCLI
//!
//! This module contains the data structures of the kitchen domain:
//! stocked ingredients, the fridge and pantry ledgers, catalog recipes and
//! the history of prepared recipes.

pub mod history;
pub mod ingredient;
pub mod inventory;
pub mod ledger;
pub mod recipe;

pub use history::{HistoryEntry, HistoryLog, HistoryRecord};
pub use ingredient::Ingredient;
pub use inventory::Inventory;
pub use ledger::{Alert, AlertPolicy, Ledger, Location, MergeOutcome};
pub use recipe::{Recipe, RecipeIngredient};
