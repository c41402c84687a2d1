//! CSV Export functionality
//!
//! Writes one field's report table as CSV: header, expense rows, total row.

use std::io::Write;

use crate::error::{GridError, GridResult};
use crate::reports::ReportTable;

/// Export a report table to CSV
pub fn export_report_csv<W: Write>(table: &ReportTable, writer: W) -> GridResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    for row in table.text_rows() {
        csv_writer
            .write_record(&row)
            .map_err(|e| GridError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| GridError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;
    use crate::models::{Field, Money, MoneyFormat};
    use crate::reports::ReportLabels;

    #[test]
    fn test_report_csv() {
        let mut ledger = Ledger::new();
        ledger.set_periods(["Jan", "Feb"]);
        ledger.add_expense("rent", "Housing", "Rent, main office");
        ledger.set_cell_pair("rent", "Jan", Money::from_cents(123456), Money::zero());

        let table = ReportTable::build(
            &ledger,
            Field::Predicted,
            &MoneyFormat::default(),
            &ReportLabels::default(),
        );

        let mut output = Vec::new();
        export_report_csv(&table, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Category,Description,Jan,Feb,Total");
        assert_eq!(
            lines[1],
            r#"Housing,"Rent, main office","R$ 1.234,56","R$ 0,00","R$ 1.234,56""#
        );
        assert_eq!(lines[2], r#"Total,,"R$ 1.234,56","R$ 0,00","R$ 1.234,56""#);
        assert_eq!(lines.len(), 3);
    }
}
