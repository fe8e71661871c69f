//! Configuration module for KitchenCLI
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::KitchenPaths;
pub use settings::Settings;
