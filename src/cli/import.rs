//! CLI command for importing a ledger
//!
//! JSON and YAML exports are validated strictly. Any other file is treated
//! as a report document and searched for its embedded data token; a
//! document without one is reported as "no data", not as an error.

use std::path::Path;

use crate::error::{GridError, GridResult};
use crate::export::{import_from_json, import_from_yaml, read_document};
use crate::ledger::{Ledger, LedgerSnapshot};

use super::CliContext;

/// Source format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImportSource {
    Json,
    Yaml,
    Document,
}

impl ImportSource {
    fn detect(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("json") => ImportSource::Json,
            Some("yaml") | Some("yml") => ImportSource::Yaml,
            _ => ImportSource::Document,
        }
    }
}

/// Replace the project's ledger with the one stored in `path`
///
/// Returns whether any data was imported.
pub fn handle_import(ctx: &CliContext, path: &Path) -> GridResult<bool> {
    let Some(snapshot) = read_snapshot(path)? else {
        println!("No ledger data found in {}", path.display());
        return Ok(false);
    };

    let mut ledger = Ledger::new();
    ledger.restore(snapshot);
    ctx.project.save(&ledger)?;

    println!(
        "Imported {} expenses x {} periods from {}",
        ledger.expense_count(),
        ledger.period_count(),
        path.display()
    );
    Ok(true)
}

fn read_snapshot(path: &Path) -> GridResult<Option<LedgerSnapshot>> {
    match ImportSource::detect(path) {
        ImportSource::Json => {
            let text = read_text(path)?;
            Ok(Some(import_from_json(&text)?.ledger))
        }
        ImportSource::Yaml => {
            let text = read_text(path)?;
            Ok(Some(import_from_yaml(&text)?.ledger))
        }
        ImportSource::Document => read_document(path),
    }
}

fn read_text(path: &Path) -> GridResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| GridError::Import(format!("Failed to read {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GridPaths, Settings};
    use crate::export::{export_full_json, ReportDocument};
    use crate::models::{Money, MoneyFormat};
    use crate::reports::{PageLayout, ReportLabels};
    use tempfile::TempDir;

    fn context(temp_dir: &TempDir) -> CliContext {
        let paths = GridPaths::with_base_dir(temp_dir.path().to_path_buf());
        CliContext::new(paths, Settings::default(), None)
    }

    fn source() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.set_periods(["Jan"]);
        ledger.add_expense("rent", "Housing", "");
        ledger.set_cell_pair(
            "rent",
            "Jan",
            Money::from_cents(500),
            Money::from_cents(700),
        );
        ledger
    }

    #[test]
    fn test_detect_source() {
        assert_eq!(ImportSource::detect(Path::new("a.json")), ImportSource::Json);
        assert_eq!(ImportSource::detect(Path::new("a.YML")), ImportSource::Yaml);
        assert_eq!(ImportSource::detect(Path::new("a.pdf")), ImportSource::Document);
        assert_eq!(ImportSource::detect(Path::new("report")), ImportSource::Document);
    }

    #[test]
    fn test_import_document() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);
        let path = temp_dir.path().join("report.txt");
        ReportDocument::build(
            &source(),
            &MoneyFormat::default(),
            &ReportLabels::default(),
            &PageLayout::default(),
        )
        .unwrap()
        .save(&path)
        .unwrap();

        assert!(handle_import(&ctx, &path).unwrap());
        assert_eq!(ctx.load().unwrap().snapshot(), source().snapshot());
    }

    #[test]
    fn test_import_json() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);
        let path = temp_dir.path().join("ledger.json");
        let mut bytes = Vec::new();
        export_full_json(&source(), &mut bytes, false).unwrap();
        std::fs::write(&path, bytes).unwrap();

        assert!(handle_import(&ctx, &path).unwrap());
        assert!(ctx.load().unwrap().has_expense("rent"));
    }

    #[test]
    fn test_import_without_token_is_no_data() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);
        let path = temp_dir.path().join("notes.txt");
        std::fs::write(&path, "just some notes").unwrap();

        assert!(!handle_import(&ctx, &path).unwrap());
        assert!(!ctx.project.exists());
    }
}
