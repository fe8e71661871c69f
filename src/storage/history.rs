//! History repository for JSON storage
//!
//! Manages history.json, a top-level list of `{name, date}` objects. A file
//! that is not a JSON list is reset to `[]`. Individual items that cannot be
//! read stay in the file untouched and keep their position.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::KitchenError;
use crate::models::{HistoryEntry, HistoryLog, HistoryRecord};

use super::file_io::{load_json, save_json, JsonLoad};

/// What `HistoryRepository::load` found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryLoad {
    /// File parsed; `unreadable` of the `entries` items are kept verbatim
    Loaded { entries: usize, unreadable: usize },
    /// File did not exist
    Missing,
    /// File was unreadable or not a list and has been reset to empty
    Reset { reason: String },
}

/// Repository for recipe history persistence
pub struct HistoryRepository {
    path: PathBuf,
    data: RwLock<HistoryLog>,
}

impl HistoryRepository {
    /// Create a new history repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HistoryLog::new()),
        }
    }

    /// Load history from disk, resetting the file when it is malformed
    pub fn load(&self) -> Result<HistoryLoad, KitchenError> {
        let mut data = self.data.write().map_err(|e| {
            KitchenError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        *data = HistoryLog::new();

        let items = match load_json::<serde_json::Value>(&self.path) {
            Ok(JsonLoad::Missing) => return Ok(HistoryLoad::Missing),
            Ok(JsonLoad::Blank) => Vec::new(),
            Ok(JsonLoad::Parsed(serde_json::Value::Array(items))) => items,
            Ok(JsonLoad::Parsed(_)) => {
                return self.reset(&data, "history is not a list".to_string())
            }
            Ok(JsonLoad::Corrupt { reason }) => return self.reset(&data, reason),
            Err(e) => return self.reset(&data, e.to_string()),
        };

        let records: Vec<_> = items.into_iter().map(HistoryRecord::from_value).collect();
        for (index, record) in records.iter().enumerate() {
            if let HistoryRecord::Unreadable(raw) = record {
                tracing::warn!(
                    position = index + 1,
                    item = %raw,
                    "keeping unreadable history entry as is"
                );
            }
        }

        *data = HistoryLog::from_records(records);

        Ok(HistoryLoad::Loaded {
            entries: data.len(),
            unreadable: data.unreadable(),
        })
    }

    fn reset(&self, data: &HistoryLog, reason: String) -> Result<HistoryLoad, KitchenError> {
        tracing::warn!(path = %self.path.display(), %reason, "resetting history to an empty list");
        save_json(&self.path, data)?;
        Ok(HistoryLoad::Reset { reason })
    }

    /// Append an entry and persist the log
    pub fn append(&self, entry: HistoryEntry) -> Result<(), KitchenError> {
        let mut data = self.data.write().map_err(|e| {
            KitchenError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        tracing::debug!(recipe = %entry.name, date = %entry.date, "recording history entry");
        data.append(entry);

        save_json(&self.path, &*data)
    }

    /// Get all records, oldest first
    pub fn get_all(&self) -> Result<Vec<HistoryRecord>, KitchenError> {
        let data = self.data.read().map_err(|e| {
            KitchenError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.list().to_vec())
    }

    /// Get an entry by 1-based position
    pub fn get(&self, position: usize) -> Result<HistoryEntry, KitchenError> {
        let data = self.data.read().map_err(|e| {
            KitchenError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        data.get(position).cloned()
    }

    /// Count entries
    pub fn count(&self) -> Result<usize, KitchenError> {
        let data = self.data.read().map_err(|e| {
            KitchenError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }
}
