//! KitchenCLI - fridge, pantry and recipe manager for the terminal
//!
//! This library tracks what is in the fridge and pantry, warns about items
//! that are expiring soon or running low, suggests recipes that can be made
//! from what is on hand, and keeps a history of prepared recipes.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (ingredients, ledgers, recipes, history)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer, including the recipe matching engine
//! - `display`: Terminal formatting
//! - `cli`: Subcommand handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use kitchen::config::{paths::KitchenPaths, settings::Settings};
//! use kitchen::storage::Storage;
//!
//! let paths = KitchenPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//! storage.load_all();
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::KitchenError;
