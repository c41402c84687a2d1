//! Display formatting for terminal output
//!
//! Provides utilities for formatting the ledger and its reports for terminal
//! display, including aligned tables and variance colors.

pub mod ledger;
pub mod report;

pub use ledger::{
    format_cell, format_expense_list, format_period_column, format_period_list,
    format_project_info, project_info_lines,
};
pub use report::{format_page_title, render_page};
