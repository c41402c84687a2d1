//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the ledger and its project file.

pub mod cell;
pub mod expense;
pub mod export;
pub mod import;
pub mod period;
pub mod project;
pub mod report;

pub use cell::{handle_cell_command, CellCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use import::handle_import;
pub use period::{handle_period_command, PeriodCommands};
pub use project::{handle_clear, handle_info, handle_init, handle_project_command, ProjectCommands};
pub use report::{handle_report, FieldArg, ReportArgs};

use std::path::PathBuf;

use crate::config::{GridPaths, Settings};
use crate::error::GridResult;
use crate::ledger::Ledger;
use crate::models::{Money, MoneyFormat};
use crate::storage::ProjectRepository;

/// Everything a command needs: resolved paths, settings and the project file
#[derive(Debug, Clone)]
pub struct CliContext {
    pub paths: GridPaths,
    pub settings: Settings,
    pub project: ProjectRepository,
}

impl CliContext {
    /// Resolve the project file: `file` if given, else the default project
    pub fn new(paths: GridPaths, settings: Settings, file: Option<PathBuf>) -> Self {
        let path = file.unwrap_or_else(|| paths.project_file(&settings.default_project));
        let project = ProjectRepository::new(path).pretty(settings.pretty_json);
        Self {
            paths,
            settings,
            project,
        }
    }

    pub fn money_format(&self) -> MoneyFormat {
        self.settings.money_format()
    }

    /// Parse a money argument leniently with the configured separators
    pub fn parse_money(&self, text: &str) -> Money {
        self.money_format().parse(text)
    }

    pub fn load(&self) -> GridResult<Ledger> {
        self.project.load()
    }

    /// Load the ledger, apply `change`, and save it if the change succeeded
    pub fn update<T, F>(&self, change: F) -> GridResult<T>
    where
        F: FnOnce(&mut Ledger) -> GridResult<T>,
    {
        let mut ledger = self.load()?;
        let revision = ledger.revision();
        let result = change(&mut ledger)?;
        if ledger.revision() != revision {
            self.project.save(&ledger)?;
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;
    use tempfile::TempDir;

    fn context(temp_dir: &TempDir) -> CliContext {
        let paths = GridPaths::with_base_dir(temp_dir.path().to_path_buf());
        CliContext::new(paths, Settings::default(), None)
    }

    #[test]
    fn test_default_project_path() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);
        assert_eq!(
            ctx.project.path(),
            temp_dir.path().join("projects").join("default.json")
        );
    }

    #[test]
    fn test_update_saves_changes() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);
        ctx.project.create(false).unwrap();

        ctx.update(|ledger| {
            ledger.add_expense("rent", "Housing", "");
            Ok(())
        })
        .unwrap();

        assert!(ctx.load().unwrap().has_expense("rent"));
    }

    #[test]
    fn test_update_failure_does_not_save() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);
        ctx.project.create(false).unwrap();

        let result: GridResult<()> = ctx.update(|ledger| {
            ledger.add_expense("rent", "", "");
            Err(GridError::InvalidArgument("rejected".into()))
        });

        assert!(result.is_err());
        assert!(!ctx.load().unwrap().has_expense("rent"));
    }

    #[test]
    fn test_parse_money_uses_settings() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);
        assert_eq!(ctx.parse_money("1.234,56").cents(), 123456);
        assert_eq!(ctx.parse_money("abc").cents(), 0);
    }
}
