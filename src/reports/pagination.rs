//! Page splitting for wide and long report tables
//!
//! Periods are split into column chunks and expenses into row chunks. Every
//! page repeats the two identity columns, keeps the full-row Total column and
//! ends with the total row restricted to its own columns.

use super::grid::{ReportCell, ReportTable};

/// Default column budget per page, including identity and Total columns
pub const DEFAULT_MAX_COLUMNS: usize = 15;

/// Default row budget per page, including header and total rows
pub const DEFAULT_MAX_ROWS: usize = 27;

/// Column and row budgets of one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub max_columns: usize,
    pub max_rows: usize,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            max_columns: DEFAULT_MAX_COLUMNS,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

impl PageLayout {
    pub fn new(max_columns: usize, max_rows: usize) -> Self {
        Self {
            max_columns,
            max_rows,
        }
    }

    /// Period columns that fit beside the identity and Total columns
    pub fn periods_per_page(&self) -> usize {
        self.max_columns.saturating_sub(3).max(1)
    }

    /// Body rows that fit between the header and total rows
    pub fn rows_per_page(&self) -> usize {
        self.max_rows.saturating_sub(2).max(1)
    }
}

/// One page of a paginated report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPage {
    /// Zero-based column chunk
    pub column_chunk: usize,
    /// Zero-based row chunk
    pub row_chunk: usize,
    pub header: Vec<String>,
    pub rows: Vec<Vec<ReportCell>>,
    pub total_row: Vec<ReportCell>,
}

impl ReportPage {
    /// Plain text of every row: header, body, total
    pub fn text_rows(&self) -> Vec<Vec<String>> {
        let mut rows = Vec::with_capacity(self.rows.len() + 2);
        rows.push(self.header.clone());
        for row in self.rows.iter().chain(std::iter::once(&self.total_row)) {
            rows.push(row.iter().map(|cell| cell.text.clone()).collect());
        }
        rows
    }
}

/// Split a report into pages
///
/// Always yields at least one page. Pages are ordered column chunk first,
/// then row chunk within it.
pub fn paginate(table: &ReportTable, layout: &PageLayout) -> Vec<ReportPage> {
    let period_count = table.period_count();
    let per_page = layout.periods_per_page();

    let mut column_ranges = Vec::new();
    let mut start = 0;
    while start < period_count {
        let end = (start + per_page).min(period_count);
        column_ranges.push(start..end);
        start = end;
    }
    if column_ranges.is_empty() {
        column_ranges.push(0..0);
    }

    let row_chunks: Vec<&[Vec<ReportCell>]> = if table.body.is_empty() {
        vec![&table.body[..]]
    } else {
        table.body.chunks(layout.rows_per_page()).collect()
    };

    let mut pages = Vec::with_capacity(column_ranges.len() * row_chunks.len());
    for (column_chunk, range) in column_ranges.iter().enumerate() {
        let header = select(&table.header, range);
        let total_row = select(&table.total_row, range);

        for (row_chunk, rows) in row_chunks.iter().enumerate() {
            pages.push(ReportPage {
                column_chunk,
                row_chunk,
                header: header.clone(),
                rows: rows.iter().map(|row| select(row, range)).collect(),
                total_row: total_row.clone(),
            });
        }
    }
    pages
}

/// Identity columns, the period range, then the trailing Total column
fn select<T: Clone>(row: &[T], periods: &std::ops::Range<usize>) -> Vec<T> {
    let mut out = Vec::with_capacity(periods.len() + 3);
    out.extend(row.iter().take(2).cloned());
    out.extend(
        row.iter()
            .skip(2 + periods.start)
            .take(periods.len())
            .cloned(),
    );
    if row.len() > 2 {
        if let Some(last) = row.last() {
            out.push(last.clone());
        }
    }
    out
}
