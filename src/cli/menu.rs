//! Interactive session menu
//!
//! The numbered menu loop used when `kitchen` runs without a subcommand.
//! Reads from any `BufRead` and writes to any `Write`, so sessions can be
//! driven from tests.
//!
//! Bad input (unknown options, non-numeric choices, rejected ingredients) is
//! reported and the session continues. End of input ends the session.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::config::Settings;
use crate::display::{
    format_add_report, format_alerts, format_diagnostic, format_feasible_list, format_history,
    format_pool, format_recipe_details,
};
use crate::error::{KitchenError, KitchenResult};
use crate::models::Location;
use crate::services::{
    AddIngredientInput, CategoryFilter, Diagnostic, HistoryService, InventoryService,
    RecipeService,
};
use crate::storage::Storage;

const MENU: &str = "What would you like to do?\n\
                    1. Add ingredients\n\
                    2. Generate recipes\n\
                    3. View recipe history\n\
                    4. Check notifications (expiring soon and running low)\n\
                    5. Exit\n";

/// Expand the menu's category shorthand: `s` is sweet, `sa` is savory
pub fn expand_category(input: &str) -> String {
    match input.trim().to_lowercase().as_str() {
        "s" => "sweet".to_string(),
        "sa" => "savory".to_string(),
        other => other.to_string(),
    }
}

/// Interactive menu session
pub struct Menu<'a, R, W> {
    storage: &'a Storage,
    settings: &'a Settings,
    input: R,
    output: W,
    today: NaiveDate,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Create a session dated today
    pub fn new(storage: &'a Storage, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            storage,
            settings,
            input,
            output,
            today: chrono::Local::now().date_naive(),
        }
    }

    /// Use a fixed date for history entries and notifications
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Run the menu loop until the user exits or input ends
    pub fn run(&mut self) -> KitchenResult<()> {
        loop {
            write!(self.output, "\n{}", MENU)?;
            let Some(option) = self.prompt("> ")? else {
                break;
            };

            let outcome = match option.as_str() {
                "1" => self.add_ingredients(),
                "2" => self.generate_recipes(),
                "3" => self.view_history(),
                "4" => self.show_notifications(),
                "5" => {
                    writeln!(self.output, "Goodbye!")?;
                    break;
                }
                _ => {
                    writeln!(self.output, "Invalid option. Please try again.")?;
                    Ok(())
                }
            };

            match outcome {
                Err(e) if e.is_validation() || e.is_not_found() => {
                    writeln!(self.output, "{}", e)?;
                }
                other => other?,
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Print `text` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, text: &str) -> KitchenResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn add_ingredients(&mut self) -> KitchenResult<()> {
        let service = InventoryService::new(self.storage, self.settings);

        loop {
            let Some(name) =
                self.prompt("Please enter the ingredient name (or type 'done' to finish): ")?
            else {
                return Ok(());
            };
            if name.eq_ignore_ascii_case("done") {
                return Ok(());
            }

            let Some(quantity) = self.prompt(&format!("Enter the quantity of {}: ", name))? else {
                return Ok(());
            };
            let Ok(quantity) = quantity.parse::<i64>() else {
                writeln!(self.output, "Quantity must be a whole number.")?;
                continue;
            };

            let location = loop {
                let Some(answer) =
                    self.prompt("Is the ingredient stored in the (F)ridge or (P)antry? ")?
                else {
                    return Ok(());
                };
                match Location::parse(&answer) {
                    Some(location) => break location,
                    None => writeln!(
                        self.output,
                        "Invalid option. Please choose (F)ridge or (P)antry."
                    )?,
                }
            };

            let expiration_date = if location == Location::Fridge {
                self.prompt("Enter the expiration date (YYYY-MM-DD, blank for none): ")?
                    .filter(|date| !date.is_empty())
            } else {
                None
            };

            let result = service.add(AddIngredientInput {
                name,
                quantity,
                location,
                expiration_date,
            });

            match result {
                Ok(report) => writeln!(self.output, "{}", format_add_report(&report))?,
                Err(e) if e.is_validation() => writeln!(self.output, "{}", e)?,
                Err(e) => return Err(e),
            }
        }
    }

    fn generate_recipes(&mut self) -> KitchenResult<()> {
        let Some(category) =
            self.prompt("Do you want a (S)weet or (Sa)vory recipe? (blank for any) ")?
        else {
            return Ok(());
        };
        let filter = CategoryFilter::new(Some(expand_category(&category).as_str()));

        let Some(manual) = self.prompt("Choose ingredients yourself? (y/N) ")? else {
            return Ok(());
        };

        let inventory = InventoryService::new(self.storage, self.settings);
        let pool = if manual.eq_ignore_ascii_case("y") || manual.eq_ignore_ascii_case("yes") {
            let pool = inventory.pool()?;
            write!(self.output, "{}", format_pool(&pool))?;
            if pool.is_empty() {
                return Ok(());
            }

            let Some(picks) = self.prompt("Enter ingredient numbers separated by commas: ")? else {
                return Ok(());
            };
            let picks: Vec<String> = picks
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(String::from)
                .collect();

            let selection = inventory.select_by_positions(&picks)?;
            for unknown in &selection.unknown {
                writeln!(self.output, "Skipping unknown selection: {}", unknown)?;
            }
            selection.pool
        } else {
            inventory.pool()?
        };

        let service = RecipeService::new(self.storage, self.settings);
        let output = &mut self.output;
        let mut write_error = None;
        let report = service.match_pool(&pool, &filter, |d: &Diagnostic| {
            if let Err(e) = writeln!(output, "{}", format_diagnostic(d)) {
                if write_error.is_none() {
                    write_error = Some(e);
                }
            }
        })?;
        if let Some(e) = write_error {
            return Err(e.into());
        }

        write!(self.output, "{}", format_feasible_list(&report.feasible))?;
        if report.is_empty() {
            return Ok(());
        }

        let Some(choice) = self.prompt("Enter the number of the recipe you want to see in full: ")?
        else {
            return Ok(());
        };

        let (recipe, entry) = service.prepare(&report, &choice, self.today)?;
        write!(self.output, "{}", format_recipe_details(&recipe))?;
        writeln!(self.output, "Added {} to your recipe history.", entry.name)?;
        Ok(())
    }

    fn view_history(&mut self) -> KitchenResult<()> {
        let service = HistoryService::new(self.storage);
        let entries = service.list()?;
        write!(self.output, "{}", format_history(&entries))?;
        if entries.is_empty() {
            return Ok(());
        }

        let Some(choice) = self.prompt(
            "Enter the number of the recipe to view details or 0 to go back to the main menu: ",
        )?
        else {
            return Ok(());
        };
        if choice == "0" {
            writeln!(self.output, "Returning to the main menu.")?;
            return Ok(());
        }

        let position = service.parse_position(&choice)?;
        match service.show(position) {
            Ok((_, recipe)) => write!(self.output, "{}", format_recipe_details(&recipe))?,
            Err(KitchenError::NotFound { identifier, .. }) => writeln!(
                self.output,
                "{} is no longer in the recipe catalog.",
                identifier
            )?,
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn show_notifications(&mut self) -> KitchenResult<()> {
        let alerts = InventoryService::new(self.storage, self.settings).alerts(self.today)?;
        write!(self.output, "{}", format_alerts(&alerts))?;
        Ok(())
    }
}
