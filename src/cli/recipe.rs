//! Recipe CLI commands
//!
//! Implements CLI commands for browsing the catalog and matching it against
//! the inventory.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{
    format_diagnostic, format_feasible_list, format_recipe_details, format_recipe_list,
};
use crate::error::KitchenResult;
use crate::services::{
    CategoryFilter, Diagnostic, InventoryService, MatchingPolicy, RecipeService,
};
use crate::storage::Storage;

/// Recipe subcommands
#[derive(Subcommand)]
pub enum RecipeCommands {
    /// List catalog recipes
    List {
        /// Only show recipes in this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show a recipe in full
    Show {
        /// Recipe name
        name: String,
    },
    /// Find recipes you can make with what you have
    Match {
        /// Only consider recipes in this category
        #[arg(short, long)]
        category: Option<String>,
        /// Feasibility policy (overrides the configured one)
        #[arg(short, long, value_enum)]
        policy: Option<MatchingPolicy>,
        /// Prepare the recipe at this position in the result list
        #[arg(short, long)]
        select: Option<String>,
        /// Only use these ingredients (comma-separated names)
        #[arg(short = 'u', long = "use", value_delimiter = ',')]
        ingredients: Vec<String>,
    },
}

/// Handle a recipe command
pub fn handle_recipe_command(
    storage: &Storage,
    settings: &Settings,
    cmd: RecipeCommands,
) -> KitchenResult<()> {
    match cmd {
        RecipeCommands::List { category } => {
            let service = RecipeService::new(storage, settings);
            let recipes = service.list(&CategoryFilter::new(category.as_deref()))?;
            print!("{}", format_recipe_list(&recipes));
        }

        RecipeCommands::Show { name } => {
            let recipe = RecipeService::new(storage, settings).find(&name)?;
            print!("{}", format_recipe_details(&recipe));
        }

        RecipeCommands::Match {
            category,
            policy,
            select,
            ingredients,
        } => {
            let mut service = RecipeService::new(storage, settings);
            if let Some(policy) = policy {
                service = service.with_policy(policy);
            }
            let filter = CategoryFilter::new(category.as_deref());
            let print_diagnostic = |d: &Diagnostic| println!("{}", format_diagnostic(d));

            let report = if ingredients.is_empty() {
                service.match_inventory(&filter, print_diagnostic)?
            } else {
                let selection =
                    InventoryService::new(storage, settings).select_by_names(&ingredients)?;
                for unknown in &selection.unknown {
                    println!("Skipping unknown ingredient: {}", unknown);
                }
                service.match_pool(&selection.pool, &filter, print_diagnostic)?
            };

            print!("{}", format_feasible_list(&report.feasible));

            if let Some(choice) = select {
                let today = chrono::Local::now().date_naive();
                let (recipe, entry) = service.prepare(&report, &choice, today)?;
                println!();
                print!("{}", format_recipe_details(&recipe));
                println!();
                println!(
                    "Added {} to your recipe history ({}).",
                    entry.name,
                    entry.date.format("%Y-%m-%d")
                );
            }
        }
    }

    Ok(())
}
