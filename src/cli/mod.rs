//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod history;
pub mod inventory;
pub mod menu;
pub mod recipe;

pub use history::{handle_history_command, HistoryCommands};
pub use inventory::{handle_inventory_command, InventoryCommands};
pub use menu::Menu;
pub use recipe::{handle_recipe_command, RecipeCommands};
