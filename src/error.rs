//! Custom error types for KitchenCLI
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for KitchenCLI operations
#[derive(Error, Debug)]
pub enum KitchenError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input and data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A numbered selection outside the list that was offered
    #[error("Invalid choice '{choice}': expected a number from 1 to {max}")]
    InvalidSelection { choice: String, max: usize },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl KitchenError {
    /// Create a "not found" error for catalog recipes
    pub fn recipe_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Recipe",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidSelection { .. })
    }
}

impl From<std::io::Error> for KitchenError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for KitchenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for KitchenCLI operations
pub type KitchenResult<T> = Result<T, KitchenError>;
