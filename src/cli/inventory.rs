//! Inventory CLI commands
//!
//! Implements CLI commands for stocking and inspecting the fridge and pantry.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_add_report, format_alerts, format_inventory};
use crate::error::KitchenResult;
use crate::models::Location;
use crate::services::{AddIngredientInput, InventoryService};
use crate::storage::Storage;

/// Inventory subcommands
#[derive(Subcommand)]
pub enum InventoryCommands {
    /// Add an ingredient (merges with an existing entry of the same name)
    Add {
        /// Ingredient name
        name: String,
        /// Quantity to add
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
        /// Store in the fridge
        #[arg(long, conflicts_with = "pantry", required_unless_present = "pantry")]
        fridge: bool,
        /// Store in the pantry
        #[arg(long)]
        pantry: bool,
        /// Expiration date (YYYY-MM-DD)
        #[arg(short, long)]
        expires: Option<String>,
    },
    /// List fridge and pantry contents
    List,
    /// Show expiring-soon and running-low notifications
    Alerts,
}

/// Handle an inventory command
pub fn handle_inventory_command(
    storage: &Storage,
    settings: &Settings,
    cmd: InventoryCommands,
) -> KitchenResult<()> {
    let service = InventoryService::new(storage, settings);

    match cmd {
        InventoryCommands::Add {
            name,
            quantity,
            fridge,
            pantry: _,
            expires,
        } => {
            let location = if fridge {
                Location::Fridge
            } else {
                Location::Pantry
            };

            let report = service.add(AddIngredientInput {
                name,
                quantity,
                location,
                expiration_date: expires,
            })?;
            println!("{}", format_add_report(&report));
        }

        InventoryCommands::List => {
            let inventory = service.inventory()?;
            print!("{}", format_inventory(&inventory));
        }

        InventoryCommands::Alerts => {
            let today = chrono::Local::now().date_naive();
            let alerts = service.alerts(today)?;
            print!("{}", format_alerts(&alerts));
        }
    }

    Ok(())
}
