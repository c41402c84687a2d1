//! Report documents with an embedded data token
//!
//! A document carries the full ledger snapshot in its `/Keywords` metadata
//! entry as `DFDATA:<base64 of the snapshot JSON>`, so any document produced
//! here can be imported back into a ledger. Reading is best-effort: a missing
//! or damaged token means "no data", never an error.

use std::io::Write;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::display::{format_page_title, project_info_lines, render_page};
use crate::error::{GridError, GridResult};
use crate::ledger::{Ledger, LedgerSnapshot};
use crate::models::{Field, MoneyFormat};
use crate::reports::{paginate, PageLayout, ReportLabels, ReportPage, ReportTable};
use crate::storage::write_atomic;

/// Prefix marking the embedded data token
pub const TOKEN_PREFIX: &str = "DFDATA:";

/// First line of every report document
pub const DOCUMENT_MAGIC: &str = "%BUDGET-GRID-REPORT 1";

const DOCUMENT_TITLE: &str = "Budget Execution Report";
const DOCUMENT_SUBJECT: &str = "Budget grid data export";

static KEYWORDS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/Keywords \((DFDATA:[^)]+)\)").expect("keywords pattern is valid")
});

/// Encode a snapshot as a `DFDATA:` token
pub fn encode_token(snapshot: &LedgerSnapshot) -> GridResult<String> {
    let json = serde_json::to_vec(snapshot)
        .map_err(|e| GridError::Export(format!("Failed to serialize ledger: {}", e)))?;
    Ok(format!("{}{}", TOKEN_PREFIX, STANDARD.encode(json)))
}

/// Find and decode the data token in a document's text
pub fn decode_token(text: &str) -> Option<LedgerSnapshot> {
    let captures = KEYWORDS_PATTERN.captures(text)?;
    let token = captures.get(1)?.as_str();
    let payload = token.strip_prefix(TOKEN_PREFIX)?;

    let bytes = match STANDARD.decode(payload.trim()) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!(error = %e, "data token is not valid base64");
            return None;
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            tracing::debug!(error = %e, "data token is not a ledger snapshot");
            None
        }
    }
}

/// Decode the data token from raw document bytes (lossy UTF-8)
pub fn decode_document_bytes(bytes: &[u8]) -> Option<LedgerSnapshot> {
    decode_token(&String::from_utf8_lossy(bytes))
}

/// Read a document from disk and decode its data token
///
/// I/O failures are errors; a document without a usable token is `Ok(None)`.
pub fn read_document(path: &Path) -> GridResult<Option<LedgerSnapshot>> {
    let bytes = std::fs::read(path)
        .map_err(|e| GridError::Import(format!("Failed to read {}: {}", path.display(), e)))?;
    let snapshot = decode_document_bytes(&bytes);
    if snapshot.is_none() {
        tracing::warn!(path = %path.display(), "no ledger data found in document");
    }
    Ok(snapshot)
}

/// Pages of one field's report
#[derive(Debug, Clone)]
pub struct DocumentSection {
    pub field: Field,
    pub pages: Vec<ReportPage>,
}

/// Printable report with metadata header, project information and one page
/// per report chunk for every field
#[derive(Debug, Clone)]
pub struct ReportDocument {
    pub title: String,
    pub subject: String,
    /// `DFDATA:` token carrying the whole ledger
    pub keywords: String,
    pub info: Vec<(&'static str, String)>,
    pub sections: Vec<DocumentSection>,
}

impl ReportDocument {
    /// Build the document for a ledger
    pub fn build(
        ledger: &Ledger,
        format: &MoneyFormat,
        labels: &ReportLabels,
        layout: &PageLayout,
    ) -> GridResult<Self> {
        let keywords = encode_token(&ledger.snapshot())?;

        let sections = Field::ALL
            .iter()
            .map(|&field| {
                let table = ReportTable::build(ledger, field, format, labels);
                DocumentSection {
                    field,
                    pages: paginate(&table, layout),
                }
            })
            .collect();

        Ok(Self {
            title: DOCUMENT_TITLE.to_string(),
            subject: DOCUMENT_SUBJECT.to_string(),
            keywords,
            info: project_info_lines(ledger, format),
            sections,
        })
    }

    /// Number of report pages across all sections
    pub fn page_count(&self) -> usize {
        self.sections.iter().map(|s| s.pages.len()).sum()
    }

    /// Render the whole document as text
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(DOCUMENT_MAGIC);
        out.push('\n');
        out.push_str(&format!("/Title ({})\n", escape_metadata(&self.title)));
        out.push_str(&format!("/Subject ({})\n", escape_metadata(&self.subject)));
        out.push_str(&format!("/Keywords ({})\n", self.keywords));
        out.push('\n');

        out.push_str(&self.title);
        out.push_str("\n\n");
        out.push_str("Information\n");
        let width = self.info.iter().map(|(label, _)| label.len()).max().unwrap_or(0) + 1;
        for (label, value) in &self.info {
            out.push_str(&format!(
                "  {:<width$} {}\n",
                format!("{}:", label),
                value,
                width = width
            ));
        }

        for section in &self.sections {
            let count = section.pages.len();
            for (index, page) in section.pages.iter().enumerate() {
                out.push_str("\n\x0c\n");
                out.push_str(&format_page_title(section.field.title(), index, count));
                out.push_str("\n\n");
                out.push_str(&render_page(page, false));
            }
        }
        out
    }

    /// Write the rendered document to any writer
    pub fn write_to<W: Write>(&self, writer: &mut W) -> GridResult<()> {
        writer
            .write_all(self.render().as_bytes())
            .map_err(|e| GridError::Export(e.to_string()))
    }

    /// Write the rendered document atomically to a file
    pub fn save(&self, path: &Path) -> GridResult<()> {
        write_atomic(path, |writer| self.write_to(writer))?;
        tracing::info!(
            path = %path.display(),
            pages = self.page_count(),
            "report document written"
        );
        Ok(())
    }
}

/// Metadata values are parenthesized; keep them from closing early
fn escape_metadata(value: &str) -> String {
    value.replace('(', "[").replace(')', "]")
}
