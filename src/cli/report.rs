//! Report CLI command
//!
//! Prints one field's report as paginated tables, or writes it as CSV.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::display::{format_page_title, render_page};
use crate::error::{GridError, GridResult};
use crate::export::export_report_csv;
use crate::models::Field;
use crate::reports::{paginate, ReportTable};

use super::CliContext;

/// Report field selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FieldArg {
    Predicted,
    Executed,
    Rearranged,
}

impl From<FieldArg> for Field {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Predicted => Field::Predicted,
            FieldArg::Executed => Field::Executed,
            FieldArg::Rearranged => Field::Rearranged,
        }
    }
}

/// Arguments of the `report` command
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Field to report
    #[arg(value_enum)]
    pub field: FieldArg,

    /// Write the full table as CSV instead of printing it
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Disable variance colors
    #[arg(long)]
    pub no_color: bool,
}

/// Handle the report command
pub fn handle_report(ctx: &CliContext, args: ReportArgs) -> GridResult<()> {
    let ledger = ctx.load()?;
    let field = Field::from(args.field);
    let table = ReportTable::build(
        &ledger,
        field,
        &ctx.money_format(),
        &ctx.settings.report_labels(),
    );

    if let Some(path) = args.csv {
        let file = File::create(&path).map_err(|e| {
            GridError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        export_report_csv(&table, BufWriter::new(file))?;
        println!("{} exported to: {}", field.title(), path.display());
        return Ok(());
    }

    let color = ctx.settings.color_reports && !args.no_color;
    let pages = paginate(&table, &ctx.settings.page_layout());
    let count = pages.len();
    for (index, page) in pages.iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("{}", format_page_title(field.title(), index, count));
        println!();
        print!("{}", render_page(page, color));
    }

    Ok(())
}
