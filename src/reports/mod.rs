//! Reports module for budget-grid
//!
//! Builds formatted per-field tables from a ledger and splits them into
//! pages for terminal and document output.

pub mod grid;
pub mod pagination;

pub use grid::{format_value, ReportCell, ReportLabels, ReportTable};
pub use pagination::{paginate, PageLayout, ReportPage, DEFAULT_MAX_COLUMNS, DEFAULT_MAX_ROWS};
