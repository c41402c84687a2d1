//! Report formatting utilities for terminal output
//!
//! Renders report pages as aligned text tables. Identity columns are
//! left-aligned, value columns right-aligned. With color enabled, value cells
//! are tinted by their variance: red when over the prediction, blue when
//! under.

use crate::models::Variance;
use crate::reports::{ReportCell, ReportPage};

const COLUMN_GAP: &str = "  ";

/// Category and description text longer than this is cut with an ellipsis
pub const MAX_LABEL_WIDTH: usize = 32;

/// Render one page, optionally with ANSI variance colors
pub fn render_page(page: &ReportPage, color: bool) -> String {
    let widths = column_widths(page);
    let mut output = String::new();

    let header: Vec<String> = page
        .header
        .iter()
        .enumerate()
        .map(|(i, text)| pad(&cell_text(text, i), widths[i], i < 2))
        .collect();
    output.push_str(header.join(COLUMN_GAP).trim_end());
    output.push('\n');

    let rule: Vec<String> = widths.iter().map(|w| separator(*w)).collect();
    output.push_str(&rule.join(COLUMN_GAP));
    output.push('\n');

    for row in &page.rows {
        output.push_str(&render_row(row, &widths, color));
        output.push('\n');
    }

    output.push_str(&rule.join(COLUMN_GAP));
    output.push('\n');
    output.push_str(&render_row(&page.total_row, &widths, color));
    output.push('\n');
    output
}

fn render_row(row: &[ReportCell], widths: &[usize], color: bool) -> String {
    let cells: Vec<String> = row
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let width = widths.get(i).copied().unwrap_or(0);
            let text = pad(&cell_text(&cell.text, i), width, i < 2);
            if color {
                paint(text, cell.variance)
            } else {
                text
            }
        })
        .collect();
    cells.join(COLUMN_GAP).trim_end().to_string()
}

fn column_widths(page: &ReportPage) -> Vec<usize> {
    let mut widths: Vec<usize> = page
        .header
        .iter()
        .enumerate()
        .map(|(i, h)| display_width(&cell_text(h, i)))
        .collect();
    for row in page.rows.iter().chain(std::iter::once(&page.total_row)) {
        for (i, cell) in row.iter().enumerate() {
            let width = display_width(&cell_text(&cell.text, i));
            match widths.get_mut(i) {
                Some(existing) => *existing = (*existing).max(width),
                None => widths.push(width),
            }
        }
    }
    widths
}

// Identity columns are the first two
fn cell_text(text: &str, column: usize) -> String {
    if column < 2 {
        truncate(text, MAX_LABEL_WIDTH)
    } else {
        text.to_string()
    }
}

/// Wrap text in the ANSI color of its variance
pub fn paint(text: String, variance: Option<Variance>) -> String {
    match variance.and_then(|v| v.ansi_color()) {
        Some(code) => format!("\x1b[{}m{}\x1b[0m", code, text),
        None => text,
    }
}

/// Page heading: field title with the page position
pub fn format_page_title(title: &str, index: usize, count: usize) -> String {
    if count > 1 {
        format!("{} ({}/{})", title, index + 1, count)
    } else {
        title.to_string()
    }
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if display_width(s) <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

fn pad(s: &str, width: usize, left: bool) -> String {
    let len = display_width(s);
    if len >= width {
        return s.to_string();
    }
    let fill = " ".repeat(width - len);
    if left {
        format!("{}{}", s, fill)
    } else {
        format!("{}{}", fill, s)
    }
}

fn display_width(s: &str) -> usize {
    s.chars().count()
}
