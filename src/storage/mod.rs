//! Storage layer for budget-grid
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. One project file holds one ledger.

pub mod file_io;
pub mod project;

pub use file_io::{read_json, read_json_or_default, write_atomic, write_json_atomic};
pub use project::{ProjectFile, ProjectRepository, PROJECT_SCHEMA_VERSION};
