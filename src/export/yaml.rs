//! YAML Export functionality
//!
//! Exports the complete ledger to YAML for a human-readable backup.

use std::io::Write;

use crate::error::{GridError, GridResult};
use crate::export::json::FullExport;
use crate::ledger::Ledger;

fn export_err(e: impl std::fmt::Display) -> GridError {
    GridError::Export(e.to_string())
}

/// Export the full ledger to YAML format
pub fn export_full_yaml<W: Write>(ledger: &Ledger, writer: &mut W) -> GridResult<()> {
    let export = FullExport::from_ledger(ledger);

    writeln!(writer, "# budget-grid ledger export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer, "#").map_err(export_err)?;
    writeln!(
        writer,
        "# Amounts are stored in minor units (cents)."
    )
    .map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(export_err)?;

    Ok(())
}

/// Import from a YAML export
pub fn import_from_yaml(yaml_str: &str) -> GridResult<FullExport> {
    let export: FullExport =
        serde_yaml::from_str(yaml_str).map_err(|e| GridError::Import(e.to_string()))?;

    export.validate().map_err(GridError::Import)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.set_periods(["Jan", "Feb"]);
        ledger.add_expense("rent", "Housing", "Office rent");
        ledger.set_cell_pair(
            "rent",
            "Jan",
            Money::from_cents(1000),
            Money::from_cents(1250),
        );
        ledger.set_org_name("Acme");
        ledger
    }

    #[test]
    fn test_yaml_export() {
        let mut output = Vec::new();
        export_full_yaml(&ledger(), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("# budget-grid ledger export"));
        assert!(text.contains("Housing"));
        assert!(text.contains("Acme"));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let source = ledger();
        let mut output = Vec::new();
        export_full_yaml(&source, &mut output).unwrap();

        // YAML comments are ignored by the parser
        let imported = import_from_yaml(&String::from_utf8(output).unwrap()).unwrap();
        assert_eq!(imported.into_ledger().snapshot(), source.snapshot());
    }
}
