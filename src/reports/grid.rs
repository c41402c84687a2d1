//! Report table for one cell field
//!
//! Header `[category, description, ...periods, Total]`, one body row per
//! expense and a trailing grand-total row. Totals are summed from ledger
//! values and formatted once.

use crate::ledger::{Ledger, Totals};
use crate::models::{Field, FieldValue, MoneyFormat, Variance};

/// Column captions of a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLabels {
    pub category: String,
    pub description: String,
    pub total: String,
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self {
            category: "Category".into(),
            description: "Description".into(),
            total: "Total".into(),
        }
    }
}

/// One formatted report cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportCell {
    pub text: String,
    /// Predicted vs executed comparison behind a value cell; None for labels
    pub variance: Option<Variance>,
}

impl ReportCell {
    fn label(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            variance: None,
        }
    }

    fn value(text: String, variance: Variance) -> Self {
        Self {
            text,
            variance: Some(variance),
        }
    }
}

/// Formatted table for one field of the ledger
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    pub field: Field,
    pub header: Vec<String>,
    pub body: Vec<Vec<ReportCell>>,
    pub total_row: Vec<ReportCell>,
}

impl ReportTable {
    /// Build the table for `field` over every expense and period
    pub fn build(
        ledger: &Ledger,
        field: Field,
        format: &MoneyFormat,
        labels: &ReportLabels,
    ) -> Self {
        let periods = ledger.period_ids();
        let expenses = ledger.expense_ids();

        let mut header = Vec::with_capacity(periods.len() + 3);
        header.push(labels.category.clone());
        header.push(labels.description.clone());
        header.extend(periods.iter().cloned());
        header.push(labels.total.clone());

        let body = expenses
            .iter()
            .map(|id| {
                let mut row = Vec::with_capacity(periods.len() + 3);
                row.push(ReportCell::label(or_dash(ledger.category(id))));
                row.push(ReportCell::label(or_dash(ledger.description(id))));
                for period in &periods {
                    let cell = ledger.cell(id, period).unwrap_or_default();
                    row.push(ReportCell::value(
                        format_value(cell.value(field), format),
                        cell.variance(),
                    ));
                }
                row.push(totals_cell(ledger.row_totals(id, &periods), field, format));
                row
            })
            .collect();

        let mut total_row = Vec::with_capacity(periods.len() + 3);
        total_row.push(ReportCell::label(labels.total.clone()));
        total_row.push(ReportCell::label(""));
        for period in &periods {
            total_row.push(totals_cell(
                ledger.column_totals(period, &expenses),
                field,
                format,
            ));
        }
        total_row.push(totals_cell(
            ledger.grand_totals(&expenses, &periods),
            field,
            format,
        ));

        Self {
            field,
            header,
            body,
            total_row,
        }
    }

    /// Number of period columns
    pub fn period_count(&self) -> usize {
        self.header.len().saturating_sub(3)
    }

    /// Plain text of every row: header, body, total
    pub fn text_rows(&self) -> Vec<Vec<String>> {
        let mut rows = Vec::with_capacity(self.body.len() + 2);
        rows.push(self.header.clone());
        for row in self.body.iter().chain(std::iter::once(&self.total_row)) {
            rows.push(row.iter().map(|cell| cell.text.clone()).collect());
        }
        rows
    }
}

/// Format a field value: currency for amounts, `"x,xx %"` for rearranged
pub fn format_value(value: FieldValue, format: &MoneyFormat) -> String {
    match value {
        FieldValue::Money(amount) => format.format(amount),
        FieldValue::Ratio(ratio) => format!("{} %", format.format_decimal(ratio)),
    }
}

fn totals_cell(totals: Totals, field: Field, format: &MoneyFormat) -> ReportCell {
    ReportCell::value(format_value(totals.value(field), format), totals.variance())
}

fn or_dash(text: &str) -> String {
    if text.is_empty() {
        "-".to_string()
    } else {
        text.to_string()
    }
}
