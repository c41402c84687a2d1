//! Configuration module for budget-grid
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::GridPaths;
pub use settings::Settings;
