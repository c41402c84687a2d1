//! Ledger display formatting
//!
//! Formats project information, the expense list, period columns and single
//! cells for terminal output.

use crate::ledger::Ledger;
use crate::models::{Money, MoneyFormat};

/// Labelled project scalars, with `-` for unset text fields
pub fn project_info_lines(ledger: &Ledger, format: &MoneyFormat) -> Vec<(&'static str, String)> {
    vec![
        ("Organization", or_dash(ledger.org_name())),
        ("Project", or_dash(ledger.project_name())),
        ("Project term", or_dash(ledger.project_term())),
        ("Start date", or_dash(ledger.start_date())),
        ("End date", or_dash(ledger.end_date())),
        ("Initial value", format.format(ledger.initial_value())),
        ("Yield returns", format.format(ledger.yield_returns())),
    ]
}

/// Format the `info` view: project scalars and table size
pub fn format_project_info(ledger: &Ledger, format: &MoneyFormat) -> String {
    let mut output = String::new();
    let lines = project_info_lines(ledger, format);
    let label_width = lines.iter().map(|(label, _)| label.len()).max().unwrap_or(0) + 1;

    for (label, value) in &lines {
        output.push_str(&format!(
            "{:<width$} {}\n",
            format!("{}:", label),
            value,
            width = label_width
        ));
    }

    output.push_str(&format!(
        "{:<width$} {}\n",
        "Factor:",
        format.format_decimal(ledger.normalization_factor()),
        width = label_width
    ));
    output.push_str(&format!(
        "{:<width$} {} expenses x {} periods\n",
        "Table:",
        ledger.expense_count(),
        ledger.period_count(),
        width = label_width
    ));
    output
}

/// Format the expense rows with their metadata and executed totals
pub fn format_expense_list(ledger: &Ledger, format: &MoneyFormat) -> String {
    let ids = ledger.expense_ids();
    if ids.is_empty() {
        return "No expenses found.".to_string();
    }

    let id_width = ids.iter().map(|id| id.chars().count()).max().unwrap_or(2).max(2);
    let category_width = ids
        .iter()
        .map(|id| ledger.category(id).chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<id_width$}  {:<category_width$}  {:>16}  {:>16}  {}\n",
        "ID",
        "Category",
        "Predicted",
        "Executed",
        "Description",
        id_width = id_width,
        category_width = category_width,
    ));
    output.push_str(&format!(
        "{:-<id_width$}  {:-<category_width$}  {:->16}  {:->16}  {:-<11}\n",
        "",
        "",
        "",
        "",
        "",
        id_width = id_width,
        category_width = category_width,
    ));

    for id in &ids {
        let totals = ledger.row_totals_all(id);
        output.push_str(&format!(
            "{:<id_width$}  {:<category_width$}  {:>16}  {:>16}  {}\n",
            id,
            ledger.category(id),
            format.format(totals.predicted),
            format.format(totals.executed),
            ledger.description(id),
            id_width = id_width,
            category_width = category_width,
        ));
    }

    output
}

/// Format the period axis, one id per line
pub fn format_period_list(ledger: &Ledger) -> String {
    let periods = ledger.period_ids();
    if periods.is_empty() {
        return "No periods set.".to_string();
    }
    let mut output = String::new();
    for (i, period) in periods.iter().enumerate() {
        output.push_str(&format!("{:>3}. {}\n", i + 1, period));
    }
    output
}

/// Format one cell with its variance
pub fn format_cell(
    ledger: &Ledger,
    expense_id: &str,
    period_id: &str,
    format: &MoneyFormat,
) -> Option<String> {
    let cell = ledger.cell(expense_id, period_id)?;
    let mut output = String::new();
    output.push_str(&format!("Cell [{}][{}]\n", expense_id, period_id));
    output.push_str(&format!("  Predicted:   {}\n", format.format(cell.predicted)));
    output.push_str(&format!("  Executed:    {}\n", format.format(cell.executed)));
    output.push_str(&format!(
        "  Rearranged:  {} %\n",
        format.format_decimal(cell.rearranged)
    ));
    let variance = ledger.cell_variance(expense_id, period_id)?;
    let difference: Money = cell.executed - cell.predicted;
    output.push_str(&format!(
        "  Variance:    {} ({})\n",
        format.format(difference),
        variance
    ));
    Some(output)
}

/// Format one period column, expense by expense, with the column totals
pub fn format_period_column(ledger: &Ledger, period_id: &str, format: &MoneyFormat) -> String {
    if !ledger.has_period(period_id) {
        return format!("Period not found: {}", period_id);
    }

    let column = ledger.period_column(period_id);
    let id_width = column
        .iter()
        .map(|(id, _)| id.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = format!("Period {}\n", period_id);
    output.push_str(&format!(
        "{:<id_width$}  {:>16}  {:>16}  {:>12}\n",
        "ID",
        "Predicted",
        "Executed",
        "Rearranged",
        id_width = id_width,
    ));
    for (id, cell) in &column {
        output.push_str(&format!(
            "{:<id_width$}  {:>16}  {:>16}  {:>12}\n",
            id,
            format.format(cell.predicted),
            format.format(cell.executed),
            format!("{} %", format.format_decimal(cell.rearranged)),
            id_width = id_width,
        ));
    }

    let totals = ledger.column_totals_all(period_id);
    output.push_str(&format!(
        "{:<id_width$}  {:>16}  {:>16}  {:>12}\n",
        "Total",
        format.format(totals.predicted),
        format.format(totals.executed),
        format!("{} %", format.format_decimal(totals.rearranged)),
        id_width = id_width,
    ));
    output
}

fn or_dash(text: &str) -> String {
    if text.is_empty() {
        "-".to_string()
    } else {
        text.to_string()
    }
}
