//! CLI commands for data export
//!
//! Provides commands for exporting the ledger as a report document, JSON or
//! YAML.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::error::{GridError, GridResult};
use crate::export::{json, yaml, ReportDocument};

use super::CliContext;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Write the printable report with the embedded ledger data
    Document {
        /// Output file path
        output: PathBuf,
    },
    /// Export the full ledger to JSON
    Json {
        /// Output file path
        output: PathBuf,
        /// Write compact JSON regardless of settings
        #[arg(long)]
        compact: bool,
    },
    /// Export the full ledger to YAML
    Yaml {
        /// Output file path
        output: PathBuf,
    },
}

/// Handle export commands
pub fn handle_export_command(ctx: &CliContext, cmd: ExportCommands) -> GridResult<()> {
    let ledger = ctx.load()?;

    match cmd {
        ExportCommands::Document { output } => {
            let document = ReportDocument::build(
                &ledger,
                &ctx.money_format(),
                &ctx.settings.report_labels(),
                &ctx.settings.page_layout(),
            )?;
            document.save(&output)?;
            println!(
                "Report document ({} pages) exported to: {}",
                document.page_count(),
                output.display()
            );
        }

        ExportCommands::Json { output, compact } => {
            let mut writer = create(&output)?;
            json::export_full_json(&ledger, &mut writer, ctx.settings.pretty_json && !compact)?;
            finish(writer)?;
            println!("Full ledger exported to: {}", output.display());
        }

        ExportCommands::Yaml { output } => {
            let mut writer = create(&output)?;
            yaml::export_full_yaml(&ledger, &mut writer)?;
            finish(writer)?;
            println!("Full ledger exported to: {}", output.display());
        }
    }

    Ok(())
}

fn create(path: &Path) -> GridResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        GridError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

fn finish(mut writer: BufWriter<File>) -> GridResult<()> {
    writer
        .flush()
        .map_err(|e| GridError::Export(format!("Failed to flush export: {}", e)))
}
