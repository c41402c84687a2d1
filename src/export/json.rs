//! JSON Export functionality
//!
//! Exports the complete ledger to JSON inside a versioned envelope.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};
use crate::ledger::{Ledger, LedgerSnapshot};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// The ledger snapshot
    pub ledger: LedgerSnapshot,

    /// Export metadata
    #[serde(default)]
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub expense_count: usize,
    pub period_count: usize,

    /// First and last period of the axis
    pub first_period: Option<String>,
    pub last_period: Option<String>,
}

impl FullExport {
    /// Create a new full export from a ledger
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let periods = ledger.period_ids();
        let metadata = ExportMetadata {
            expense_count: ledger.expense_count(),
            period_count: periods.len(),
            first_period: periods.first().cloned(),
            last_period: periods.last().cloned(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            ledger: ledger.snapshot(),
            metadata,
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let factor = self.ledger.normalization_factor;
        if factor == 0.0 || !factor.is_finite() {
            return Err(format!("Invalid normalization factor {}", factor));
        }

        for id in &self.ledger.expense_order {
            if !self.ledger.cells.contains_key(id) {
                return Err(format!("Expense order references unknown expense {}", id));
            }
        }

        for id in self.ledger.expenses.keys() {
            if !self.ledger.cells.contains_key(id) {
                return Err(format!("Metadata for expense {} has no cells", id));
            }
        }

        Ok(())
    }

    /// Restore the exported snapshot into a fresh ledger
    pub fn into_ledger(self) -> Ledger {
        let mut ledger = Ledger::new();
        ledger.restore(self.ledger);
        ledger
    }
}

/// Export the full ledger to JSON
pub fn export_full_json<W: Write>(ledger: &Ledger, writer: &mut W, pretty: bool) -> GridResult<()> {
    let export = FullExport::from_ledger(ledger);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| GridError::Export(e.to_string()))?;

    Ok(())
}

/// Import from a JSON export
pub fn import_from_json(json_str: &str) -> GridResult<FullExport> {
    let export: FullExport =
        serde_json::from_str(json_str).map_err(|e| GridError::Import(e.to_string()))?;

    export.validate().map_err(GridError::Import)?;

    Ok(export)
}
