//! Recipe history model
//!
//! Append-only log of prepared recipes. Entries are kept in the order they
//! were recorded and are never deduplicated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{KitchenError, KitchenResult};

/// A single prepared recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Recipe name exactly as it appeared in the catalog
    pub name: String,

    /// Preparation date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
}

impl HistoryEntry {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date,
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.date.format("%Y-%m-%d"))
    }
}

/// One position in the history file
///
/// Objects that do not read as a `HistoryEntry` are kept verbatim so that
/// rewriting the file never loses them and positions stay aligned with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HistoryRecord {
    Entry(HistoryEntry),
    Unreadable(serde_json::Value),
}

impl HistoryRecord {
    /// Read a raw history item, keeping it verbatim when it is not an entry
    pub fn from_value(value: serde_json::Value) -> Self {
        match HistoryEntry::deserialize(&value) {
            Ok(entry) => Self::Entry(entry),
            Err(_) => Self::Unreadable(value),
        }
    }

    pub fn entry(&self) -> Option<&HistoryEntry> {
        match self {
            Self::Entry(entry) => Some(entry),
            Self::Unreadable(_) => None,
        }
    }
}

impl From<HistoryEntry> for HistoryRecord {
    fn from(entry: HistoryEntry) -> Self {
        Self::Entry(entry)
    }
}

/// Ordered list of prepared recipes, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    records: Vec<HistoryRecord>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a log from records already in append order
    pub fn from_records(records: Vec<HistoryRecord>) -> Self {
        Self { records }
    }

    /// Record a prepared recipe
    pub fn append(&mut self, entry: HistoryEntry) {
        self.records.push(HistoryRecord::Entry(entry));
    }

    /// Records in append order, unreadable ones included
    pub fn list(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// Get an entry by its 1-based position in `list`
    ///
    /// A position holding an unreadable record is a validation error.
    pub fn get(&self, position: usize) -> KitchenResult<&HistoryEntry> {
        let record = position
            .checked_sub(1)
            .and_then(|index| self.records.get(index))
            .ok_or_else(|| KitchenError::InvalidSelection {
                choice: position.to_string(),
                max: self.records.len(),
            })?;

        record.entry().ok_or_else(|| {
            KitchenError::Validation(format!("History entry {} cannot be read", position))
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Number of records that did not read as entries
    pub fn unreadable(&self) -> usize {
        self.records.iter().filter(|r| r.entry().is_none()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[test]
    fn test_append_preserves_order_and_duplicates() {
        let mut log = HistoryLog::new();
        log.append(HistoryEntry::new("Pancakes", date(1)));
        log.append(HistoryEntry::new("Omelette", date(2)));
        log.append(HistoryEntry::new("Pancakes", date(3)));

        let names: Vec<_> = log
            .list()
            .iter()
            .filter_map(HistoryRecord::entry)
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["Pancakes", "Omelette", "Pancakes"]);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_get_is_one_based() {
        let mut log = HistoryLog::new();
        log.append(HistoryEntry::new("Pancakes", date(1)));
        log.append(HistoryEntry::new("Omelette", date(2)));

        assert_eq!(log.get(1).unwrap().name, "Pancakes");
        assert_eq!(log.get(2).unwrap().name, "Omelette");
        assert!(log.get(0).unwrap_err().is_validation());
        assert!(log.get(3).is_err());
    }

    #[test]
    fn test_json_is_top_level_list() {
        let mut log = HistoryLog::new();
        log.append(HistoryEntry::new("French Toast", date(5)));

        let json = serde_json::to_value(&log).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["name"], "French Toast");
        assert_eq!(json[0]["date"], "2024-03-05");
    }

    #[test]
    fn test_unreadable_records_keep_their_position() {
        let raw = serde_json::json!([
            {"name": "Pancakes", "date": "2024-03-01"},
            {"name": "Omelette", "date": "yesterday"},
            "not even an object",
            {"name": "Omelette", "date": "2024-03-02"}
        ]);
        let records = raw
            .as_array()
            .unwrap()
            .iter()
            .cloned()
            .map(HistoryRecord::from_value)
            .collect();
        let mut log = HistoryLog::from_records(records);

        assert_eq!(log.len(), 4);
        assert_eq!(log.unreadable(), 2);
        assert_eq!(log.get(1).unwrap().name, "Pancakes");
        assert!(matches!(log.get(2), Err(KitchenError::Validation(_))));
        assert_eq!(log.get(4).unwrap().date, date(2));

        log.append(HistoryEntry::new("French Toast", date(5)));
        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json[1], raw[1]);
        assert_eq!(json[2], raw[2]);
        assert_eq!(json[4]["name"], "French Toast");
    }

    #[test]
    fn test_log_deserializes_with_unreadable_records() {
        let log: HistoryLog =
            serde_json::from_str(r#"[{"name": 42}, {"name": "Pancakes", "date": "2024-03-01"}]"#)
                .unwrap();

        assert_eq!(log.unreadable(), 1);
        assert_eq!(log.get(2).unwrap().name, "Pancakes");
    }
}
