//! History display formatting

use crate::models::HistoryRecord;

/// Format the history as a numbered list, oldest first
///
/// Unreadable records keep their number so positions match `history show`.
pub fn format_history(records: &[HistoryRecord]) -> String {
    if records.is_empty() {
        return "No recipe history found.\n".to_string();
    }

    let mut output = String::from("Recipe History:\n");
    for (i, record) in records.iter().enumerate() {
        let line = match record {
            HistoryRecord::Entry(entry) => {
                format!("{}  {}", entry.date.format("%Y-%m-%d"), entry.name)
            }
            HistoryRecord::Unreadable(_) => "Invalid entry in history.".to_string(),
        };
        output.push_str(&format!("{:>3}. {}\n", i + 1, line));
    }
    output
}
