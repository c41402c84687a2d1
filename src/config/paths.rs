//! Path management for budget-grid
//!
//! Provides XDG-compliant path resolution for settings and project files.
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGET_GRID_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/budget-grid` or `~/.config/budget-grid`
//! 3. Windows: `%APPDATA%\budget-grid`

use std::path::{Path, PathBuf};

use crate::error::GridError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "BUDGET_GRID_DATA_DIR";

const APP_DIR: &str = "budget-grid";

/// Manages all paths used by budget-grid
#[derive(Debug, Clone)]
pub struct GridPaths {
    /// Base directory for all budget-grid data
    base_dir: PathBuf,
}

impl GridPaths {
    /// Resolve the base directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, GridError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create GridPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directory holding project files
    pub fn projects_dir(&self) -> PathBuf {
        self.base_dir.join("projects")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Path of a named project file; bare names get a `.json` extension
    pub fn project_file(&self, name: &str) -> PathBuf {
        let file = if Path::new(name).extension().is_some() {
            name.to_string()
        } else {
            format!("{}.json", name)
        };
        self.projects_dir().join(file)
    }

    /// Ensure the base and projects directories exist
    pub fn ensure_directories(&self) -> Result<(), GridError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| GridError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.projects_dir())
            .map_err(|e| GridError::Io(format!("Failed to create projects directory: {}", e)))?;

        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default base directory based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, GridError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Ok(PathBuf::from(xdg).join(APP_DIR));
        }
    }

    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join(APP_DIR))
        .ok_or_else(|| GridError::Config("Could not determine home directory".into()))
}

/// Resolve the default base directory based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, GridError> {
    directories::BaseDirs::new()
        .map(|dirs| dirs.config_dir().join(APP_DIR))
        .ok_or_else(|| GridError::Config("Could not determine APPDATA directory".into()))
}
