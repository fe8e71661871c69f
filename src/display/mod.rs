//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display.

pub mod history;
pub mod inventory;
pub mod recipe;

pub use history::format_history;
pub use inventory::{
    format_add_report, format_alert, format_alerts, format_inventory, format_ledger, format_pool,
};
pub use recipe::{
    format_diagnostic, format_feasible_list, format_recipe_details, format_recipe_list,
};
