//! Export module for budget-grid
//!
//! Provides ledger export in multiple formats:
//! - Document: printable report carrying the ledger as an embedded data token
//! - JSON: machine-readable full ledger export
//! - YAML: human-readable full ledger export
//! - CSV: one field's report table (spreadsheet-compatible)

pub mod csv;
pub mod document;
pub mod json;
pub mod yaml;

pub use self::csv::export_report_csv;
pub use document::{
    decode_document_bytes, decode_token, encode_token, read_document, DocumentSection,
    ReportDocument, TOKEN_PREFIX,
};
pub use json::{export_full_json, import_from_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml, import_from_yaml};
