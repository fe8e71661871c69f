//! Inventory display formatting
//!
//! Formats the fridge, the pantry and their notifications for terminal output.

use crate::models::{Alert, Ingredient, Inventory, Ledger, Location, MergeOutcome};
use crate::services::AddReport;

/// Format both ledgers as tables
pub fn format_inventory(inventory: &Inventory) -> String {
    Location::all()
        .iter()
        .map(|location| format_ledger(inventory.ledger(*location)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format one ledger with a header line
pub fn format_ledger(ledger: &Ledger) -> String {
    let mut output = format!("{} Ingredients:\n", ledger.location());

    if ledger.is_empty() {
        output.push_str("  (empty)\n");
        return output;
    }

    let name_width = ledger
        .items()
        .iter()
        .map(|i| i.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    output.push_str(&format!(
        "  {:<name_width$}  {:>8}  {}\n",
        "Name",
        "Quantity",
        "Expires",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "  {:-<name_width$}  {:->8}  {:-<10}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for item in ledger.items() {
        output.push_str(&format!(
            "  {:<name_width$}  {:>8}  {}\n",
            item.name,
            item.quantity,
            item.expiration_date.as_deref().unwrap_or("-"),
            name_width = name_width,
        ));
    }

    output
}

/// Format a numbered pool listing for manual ingredient selection
pub fn format_pool(pool: &[Ingredient]) -> String {
    if pool.is_empty() {
        return "No ingredients in the fridge or pantry.\n".to_string();
    }

    let mut output = String::from("Available ingredients in Fridge and Pantry:\n");
    for (i, item) in pool.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} (Quantity: {})\n",
            i + 1,
            item.name,
            item.quantity
        ));
    }
    output
}

/// Format the result of adding an ingredient
pub fn format_add_report(report: &AddReport) -> String {
    match report.outcome {
        MergeOutcome::Added => format!("{} added to {}.", report.name, report.location),
        MergeOutcome::Merged { quantity } => format!(
            "{} added to {} (now {}).",
            report.name, report.location, quantity
        ),
    }
}

/// Format a single notification line
pub fn format_alert(alert: &Alert) -> String {
    match alert {
        Alert::ExpiringSoon {
            name,
            expires_on,
            days_remaining,
        } => {
            let date = expires_on.format("%Y-%m-%d");
            match *days_remaining {
                d if d < 0 => format!("{} expired {} day(s) ago ({}).", name, -d, date),
                0 => format!("{} expires today ({}).", name, date),
                d => format!("{} is expiring in {} day(s) ({}).", name, d, date),
            }
        }
        Alert::RunningLow { name, quantity } => {
            format!("{} is running low ({} left).", name, quantity)
        }
    }
}

/// Format all notifications
pub fn format_alerts(alerts: &[Alert]) -> String {
    if alerts.is_empty() {
        return "Nothing is expiring soon or running low.\n".to_string();
    }

    let mut output = String::from("Notifications:\n");
    for alert in alerts {
        output.push_str(&format!("  - {}\n", format_alert(alert)));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_inventory() {
        let mut inventory = Inventory::default();
        inventory.add(
            Location::Fridge,
            Ingredient::with_expiration("Milk", 1, "2024-01-15"),
        );
        inventory.add(Location::Pantry, Ingredient::new("Rice", 3));

        let output = format_inventory(&inventory);
        assert!(output.contains("Fridge Ingredients:"));
        assert!(output.contains("Pantry Ingredients:"));
        assert!(output.contains("2024-01-15"));
        assert!(output.contains("Rice"));
    }

    #[test]
    fn test_format_empty_ledger() {
        let output = format_ledger(&Ledger::pantry(2));
        assert_eq!(output, "Pantry Ingredients:\n  (empty)\n");
    }

    #[test]
    fn test_format_add_report() {
        let added = AddReport {
            name: "Milk".into(),
            location: Location::Fridge,
            outcome: MergeOutcome::Added,
        };
        assert_eq!(format_add_report(&added), "Milk added to Fridge.");

        let merged = AddReport {
            name: "sugar".into(),
            location: Location::Pantry,
            outcome: MergeOutcome::Merged { quantity: 5 },
        };
        assert_eq!(format_add_report(&merged), "sugar added to Pantry (now 5).");
    }

    #[test]
    fn test_format_alerts() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let alerts = vec![
            Alert::ExpiringSoon {
                name: "Cheese".into(),
                expires_on: date,
                days_remaining: 3,
            },
            Alert::ExpiringSoon {
                name: "Cream".into(),
                expires_on: date,
                days_remaining: -1,
            },
            Alert::RunningLow {
                name: "Salt".into(),
                quantity: 1,
            },
        ];

        let output = format_alerts(&alerts);
        assert!(output.contains("Cheese is expiring in 3 day(s) (2024-01-05)."));
        assert!(output.contains("Cream expired 1 day(s) ago"));
        assert!(output.contains("Salt is running low (1 left)."));

        assert!(format_alerts(&[]).contains("Nothing"));
    }

    #[test]
    fn test_format_pool_is_numbered() {
        let pool = vec![Ingredient::new("Milk", 1), Ingredient::new("Bread", 2)];
        let output = format_pool(&pool);
        assert!(output.contains("1. Milk (Quantity: 1)"));
        assert!(output.contains("2. Bread (Quantity: 2)"));
    }
}
