//! Project file repository
//!
//! A project file holds one ledger snapshot inside a small versioned
//! envelope.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::ledger::{Ledger, LedgerSnapshot};

use super::file_io::{json_file_valid, read_json, write_json_atomic};

/// Current project file schema version
pub const PROJECT_SCHEMA_VERSION: u32 = 1;

/// On-disk shape of a project file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    pub saved_at: DateTime<Utc>,

    #[serde(default)]
    pub ledger: LedgerSnapshot,
}

fn default_schema_version() -> u32 {
    PROJECT_SCHEMA_VERSION
}

/// Repository for one project file
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    path: PathBuf,
    pretty: bool,
}

impl ProjectRepository {
    /// Create a repository for the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: true,
        }
    }

    /// Choose pretty or compact JSON when saving
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Whether the project file exists and parses as JSON
    pub fn is_valid(&self) -> bool {
        json_file_valid(&self.path)
    }

    /// Short status word for the project file
    pub fn status(&self) -> &'static str {
        if !self.exists() {
            "missing"
        } else if self.is_valid() {
            "ok"
        } else {
            "unreadable"
        }
    }

    /// Load the ledger stored in the project file
    ///
    /// # Errors
    ///
    /// Fails if the file is missing, unreadable, or from a newer schema.
    pub fn load(&self) -> Result<Ledger, GridError> {
        if !self.exists() {
            return Err(GridError::Storage(format!(
                "Project file not found: {} (run `budget-grid init` first)",
                self.path.display()
            )));
        }

        let file: ProjectFile = read_json(&self.path)?;
        if file.schema_version > PROJECT_SCHEMA_VERSION {
            return Err(GridError::Storage(format!(
                "Project file {} uses schema version {}, newest supported is {}",
                self.path.display(),
                file.schema_version,
                PROJECT_SCHEMA_VERSION
            )));
        }

        let mut ledger = Ledger::new();
        ledger.restore(file.ledger);
        tracing::debug!(path = %self.path.display(), "project loaded");
        Ok(ledger)
    }

    /// Save the ledger to the project file
    pub fn save(&self, ledger: &Ledger) -> Result<(), GridError> {
        let file = ProjectFile {
            schema_version: PROJECT_SCHEMA_VERSION,
            saved_at: Utc::now(),
            ledger: ledger.snapshot(),
        };
        write_json_atomic(&self.path, &file, self.pretty)?;
        tracing::info!(
            path = %self.path.display(),
            expenses = ledger.expense_count(),
            periods = ledger.period_count(),
            "project saved"
        );
        Ok(())
    }

    /// Write an empty project file
    ///
    /// Refuses to replace an existing file unless `overwrite` is set.
    pub fn create(&self, overwrite: bool) -> Result<Ledger, GridError> {
        if self.exists() && !overwrite {
            return Err(GridError::Storage(format!(
                "Project file already exists: {}",
                self.path.display()
            )));
        }
        let ledger = Ledger::new();
        self.save(&ledger)?;
        Ok(ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn repository(temp_dir: &TempDir) -> ProjectRepository {
        ProjectRepository::new(temp_dir.path().join("projects").join("test.json"))
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        let mut ledger = Ledger::new();
        ledger.set_periods(["Jan", "Feb"]);
        ledger.add_expense("rent", "Housing", "Office");
        ledger.set_cell_pair(
            "rent",
            "Feb",
            Money::from_cents(1000),
            Money::from_cents(1500),
        );
        ledger.set_project_name("Reading Rooms");

        repo.save(&ledger).unwrap();
        let loaded = repo.load().unwrap();

        assert_eq!(loaded.snapshot(), ledger.snapshot());
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = repository(&temp_dir).load().unwrap_err();
        assert!(err.to_string().contains("init"));
    }

    #[test]
    fn test_create_refuses_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        let ledger = repo.create(false).unwrap();
        assert!(ledger.is_empty());
        assert!(repo.exists());
        assert!(repo.create(false).is_err());
        assert!(repo.create(true).is_ok());
    }

    #[test]
    fn test_rejects_newer_schema() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);
        std::fs::create_dir_all(repo.path().parent().unwrap()).unwrap();
        std::fs::write(
            repo.path(),
            r#"{ "schemaVersion": 99, "savedAt": "2025-01-01T00:00:00Z", "ledger": {} }"#,
        )
        .unwrap();

        assert!(repo.load().is_err());
    }

    #[test]
    fn test_compact_output() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir).pretty(false);
        repo.create(false).unwrap();

        let text = std::fs::read_to_string(repo.path()).unwrap();
        assert!(!text.contains('\n'));
        assert!(text.contains("\"schemaVersion\":1"));
    }

    #[test]
    fn test_status() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);
        assert_eq!(repo.status(), "missing");

        repo.create(false).unwrap();
        assert!(repo.is_valid());
        assert_eq!(repo.status(), "ok");

        std::fs::write(repo.path(), "{ not json").unwrap();
        assert!(!repo.is_valid());
        assert_eq!(repo.status(), "unreadable");
        assert!(repo.load().is_err());
    }
}
