//! User settings for budget-grid
//!
//! Manages display conventions for money, report layout budgets and the
//! default project file.

use serde::{Deserialize, Serialize};

use super::paths::GridPaths;
use crate::error::GridError;
use crate::models::money::{MoneyFormat, DEFAULT_PREFIX};
use crate::models::Money;
use crate::reports::{PageLayout, ReportLabels, DEFAULT_MAX_COLUMNS, DEFAULT_MAX_ROWS};
use crate::storage::file_io::{read_json_or_default, write_json_atomic};
use crate::widgets::money_input::{MoneyInput, DEFAULT_MAX_CENTS};

/// User settings for budget-grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Text placed before formatted amounts
    #[serde(default = "default_currency_prefix")]
    pub currency_prefix: String,

    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,

    #[serde(default = "default_grouping_separator")]
    pub grouping_separator: char,

    /// Largest amount the money input accepts, in minor units
    #[serde(default = "default_money_input_max")]
    pub money_input_max: i64,

    /// Columns per report page, identity and Total columns included
    #[serde(default = "default_report_max_columns")]
    pub report_max_columns: usize,

    /// Rows per report page, header and total rows included
    #[serde(default = "default_report_max_rows")]
    pub report_max_rows: usize,

    #[serde(default = "default_category_label")]
    pub category_label: String,

    #[serde(default = "default_description_label")]
    pub description_label: String,

    /// Pretty-print project files and JSON exports
    #[serde(default = "default_true")]
    pub pretty_json: bool,

    /// Color report cells by variance in terminal output
    #[serde(default = "default_true")]
    pub color_reports: bool,

    /// Project file used when `--file` is not given
    #[serde(default = "default_project")]
    pub default_project: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_decimal_separator() -> char {
    ','
}

fn default_grouping_separator() -> char {
    '.'
}

fn default_money_input_max() -> i64 {
    DEFAULT_MAX_CENTS
}

fn default_report_max_columns() -> usize {
    DEFAULT_MAX_COLUMNS
}

fn default_report_max_rows() -> usize {
    DEFAULT_MAX_ROWS
}

fn default_category_label() -> String {
    "Category".to_string()
}

fn default_description_label() -> String {
    "Description".to_string()
}

fn default_true() -> bool {
    true
}

fn default_project() -> String {
    "default".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_prefix: default_currency_prefix(),
            decimal_separator: default_decimal_separator(),
            grouping_separator: default_grouping_separator(),
            money_input_max: default_money_input_max(),
            report_max_columns: default_report_max_columns(),
            report_max_rows: default_report_max_rows(),
            category_label: default_category_label(),
            description_label: default_description_label(),
            pretty_json: true,
            color_reports: true,
            default_project: default_project(),
        }
    }
}

impl Settings {
    /// Money display conventions
    pub fn money_format(&self) -> MoneyFormat {
        MoneyFormat {
            prefix: self.currency_prefix.clone(),
            decimal_separator: self.decimal_separator,
            grouping_separator: self.grouping_separator,
        }
    }

    /// Report column captions
    pub fn report_labels(&self) -> ReportLabels {
        ReportLabels {
            category: self.category_label.clone(),
            description: self.description_label.clone(),
            ..ReportLabels::default()
        }
    }

    /// Report page budgets
    pub fn page_layout(&self) -> PageLayout {
        PageLayout::new(self.report_max_columns, self.report_max_rows)
    }

    /// A fresh money input using these conventions
    pub fn money_input(&self) -> MoneyInput {
        MoneyInput::new()
            .format(self.money_format())
            .max(Money::from_cents(self.money_input_max))
    }

    /// Reject settings that would make parsing or pagination ambiguous
    pub fn validate(&self) -> Result<(), GridError> {
        if self.decimal_separator == self.grouping_separator {
            return Err(GridError::Config(format!(
                "decimal and grouping separators must differ (both '{}')",
                self.decimal_separator
            )));
        }
        if self.decimal_separator.is_ascii_digit() || self.decimal_separator == '-' {
            return Err(GridError::Config(format!(
                "invalid decimal separator '{}'",
                self.decimal_separator
            )));
        }
        if self.report_max_columns < 4 {
            return Err(GridError::Config(
                "report_max_columns must leave room for at least one period".into(),
            ));
        }
        if self.report_max_rows < 3 {
            return Err(GridError::Config(
                "report_max_rows must leave room for at least one expense".into(),
            ));
        }
        if self.money_input_max <= 0 {
            return Err(GridError::Config("money_input_max must be positive".into()));
        }
        Ok(())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &GridPaths) -> Result<Self, GridError> {
        let settings_path = paths.settings_file();

        // A missing file yields defaults; the caller decides when to persist
        let settings: Settings = read_json_or_default(&settings_path).map_err(|e| {
            GridError::Config(format!("Failed to load settings file: {}", e))
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &GridPaths) -> Result<(), GridError> {
        paths.ensure_directories()?;
        write_json_atomic(&paths.settings_file(), self, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_prefix, "R$ ");
        assert_eq!(settings.report_max_columns, 15);
        assert_eq!(settings.report_max_rows, 27);
        assert_eq!(settings.money_format(), MoneyFormat::default());
        assert_eq!(settings.page_layout(), PageLayout::default());
        assert_eq!(settings.report_labels(), ReportLabels::default());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GridPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_prefix = "$".into();
        settings.decimal_separator = '.';
        settings.grouping_separator = ',';
        settings.report_max_columns = 10;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.money_format().format(Money::from_cents(123456)), "$1,234.56");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "currency_prefix": "€ " }"#).unwrap();
        assert_eq!(settings.currency_prefix, "€ ");
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.default_project, "default");
        assert!(settings.pretty_json);
    }

    #[test]
    fn test_validate_rejects_equal_separators() {
        let settings = Settings {
            grouping_separator: ',',
            ..Settings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, GridError::Config(_)));
    }

    #[test]
    fn test_money_input_uses_settings() {
        let settings = Settings {
            money_input_max: 999,
            ..Settings::default()
        };
        let mut input = settings.money_input();
        for digit in [9, 9, 9] {
            assert!(input.push_digit(digit));
        }
        assert!(!input.push_digit(1));
    }
}
