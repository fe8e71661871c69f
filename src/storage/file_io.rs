//! JSON document helpers shared by the repositories
//!
//! Loading distinguishes a file that is absent from one that is blank or
//! corrupt, because each repository recovers from those differently.
//! Saving stages the document next to its target and renames it into place.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::KitchenError;

/// What was found at a JSON document path
#[derive(Debug, Clone, PartialEq)]
pub enum JsonLoad<T> {
    /// No file at the path
    Missing,
    /// The file exists but holds only whitespace
    Blank,
    /// The file parsed as `T`
    Parsed(T),
    /// The file exists but does not parse as `T`
    Corrupt { reason: String },
}

impl<T> JsonLoad<T> {
    /// Collapse missing and blank files into `T::default()`
    ///
    /// A corrupt file becomes a `Storage` error carrying the parse failure.
    pub fn or_default(self) -> Result<T, KitchenError>
    where
        T: Default,
    {
        match self {
            Self::Missing | Self::Blank => Ok(T::default()),
            Self::Parsed(value) => Ok(value),
            Self::Corrupt { reason } => Err(KitchenError::Storage(reason)),
        }
    }
}

/// Read and parse the JSON document at `path`
///
/// Only failures to read the file are errors; a document that does not
/// parse is reported as `JsonLoad::Corrupt`.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<JsonLoad<T>, KitchenError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(JsonLoad::Missing),
        Err(e) => {
            return Err(KitchenError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )))
        }
    };

    if contents.trim().is_empty() {
        return Ok(JsonLoad::Blank);
    }

    Ok(match serde_json::from_str(&contents) {
        Ok(value) => JsonLoad::Parsed(value),
        Err(e) => JsonLoad::Corrupt {
            reason: format!("Failed to parse {}: {}", path.display(), e),
        },
    })
}

/// Pretty-print `data` to `path`, replacing any previous document whole
///
/// The document is staged as `<name>.json.tmp` in the same directory and
/// renamed over the target once it is on disk.
pub fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<(), KitchenError> {
    let mut document = serde_json::to_vec_pretty(data)?;
    document.push(b'\n');

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            KitchenError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let staging = staging_path(path);
    let written = File::create(&staging)
        .and_then(|mut file| {
            file.write_all(&document)?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&staging, path));

    written.map_err(|e| {
        let _ = fs::remove_file(&staging);
        KitchenError::Storage(format!("Failed to save {}: {}", path.display(), e))
    })
}

fn staging_path(path: &Path) -> PathBuf {
    path.with_extension("json.tmp")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HistoryEntry;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn entry(day: u32) -> HistoryEntry {
        HistoryEntry::new("Pancakes", NaiveDate::from_ymd_opt(2024, 3, day).unwrap())
    }

    #[test]
    fn test_missing_blank_and_corrupt_are_distinct() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.json");

        let missing = load_json::<Vec<HistoryEntry>>(&path).unwrap();
        assert_eq!(missing, JsonLoad::Missing);

        fs::write(&path, " \n\t").unwrap();
        let blank = load_json::<Vec<HistoryEntry>>(&path).unwrap();
        assert_eq!(blank, JsonLoad::Blank);

        fs::write(&path, "[{ oops").unwrap();
        match load_json::<Vec<HistoryEntry>>(&path).unwrap() {
            JsonLoad::Corrupt { reason } => assert!(reason.contains("history.json")),
            other => panic!("expected a corrupt load, got {:?}", other),
        }
    }

    #[test]
    fn test_or_default() {
        assert_eq!(JsonLoad::<Vec<u8>>::Missing.or_default().unwrap(), Vec::<u8>::new());
        assert_eq!(JsonLoad::<Vec<u8>>::Blank.or_default().unwrap(), Vec::<u8>::new());
        assert_eq!(JsonLoad::Parsed(vec![1u8]).or_default().unwrap(), vec![1]);

        let err = JsonLoad::<Vec<u8>>::Corrupt {
            reason: "bad".into(),
        }
        .or_default()
        .unwrap_err();
        assert!(matches!(err, KitchenError::Storage(_)));
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.json");
        let entries = vec![entry(1), entry(2)];

        save_json(&path, &entries).unwrap();

        assert_eq!(load_json(&path).unwrap(), JsonLoad::Parsed(entries));
        assert!(!staging_path(&path).exists());
        assert!(fs::read_to_string(&path).unwrap().ends_with("]\n"));
    }

    #[test]
    fn test_save_replaces_and_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("history.json");

        save_json(&path, &vec![entry(1), entry(2)]).unwrap();
        save_json(&path, &vec![entry(3)]).unwrap();

        assert_eq!(load_json(&path).unwrap(), JsonLoad::Parsed(vec![entry(3)]));
    }

    #[test]
    fn test_unreadable_path_is_error() {
        let temp_dir = TempDir::new().unwrap();

        // A directory exists at the path but cannot be read as a file
        let err = load_json::<Vec<HistoryEntry>>(temp_dir.path()).unwrap_err();
        assert!(matches!(err, KitchenError::Storage(_)));
    }
}
