//! Service layer for KitchenCLI
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, recipe matching and history bookkeeping.

pub mod history;
pub mod inventory;
pub mod matching;
pub mod recipe;

pub use history::HistoryService;
pub use inventory::{AddIngredientInput, AddReport, InventoryService, PoolSelection};
pub use matching::{
    CategoryFilter, Diagnostic, FeasibilityPolicy, MatchReport, MatchingEngine, MatchingPolicy,
    NameOnly, QuantitySufficient,
};
pub use recipe::RecipeService;
