//! History CLI commands

use clap::Subcommand;

use crate::display::{format_history, format_recipe_details};
use crate::error::KitchenResult;
use crate::services::HistoryService;
use crate::storage::Storage;

/// History subcommands
#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List prepared recipes, oldest first
    List,
    /// Show the recipe behind a history entry
    Show {
        /// Position in the history list (starting at 1)
        index: String,
    },
}

/// Handle a history command
pub fn handle_history_command(storage: &Storage, cmd: HistoryCommands) -> KitchenResult<()> {
    let service = HistoryService::new(storage);

    match cmd {
        HistoryCommands::List => {
            let entries = service.list()?;
            print!("{}", format_history(&entries));
        }

        HistoryCommands::Show { index } => {
            let position = service.parse_position(&index)?;
            let (entry, recipe) = service.show(position)?;
            println!("Prepared on {}", entry.date.format("%Y-%m-%d"));
            print!("{}", format_recipe_details(&recipe));
        }
    }

    Ok(())
}
