//! Period CLI commands

use clap::Subcommand;

use crate::display::{format_period_column, format_period_list};
use crate::error::{GridError, GridResult};

use super::CliContext;

/// Period subcommands
#[derive(Subcommand, Debug)]
pub enum PeriodCommands {
    /// Replace the period axis; cells of kept periods are preserved
    Set {
        /// Period identifiers, in display order
        #[arg(num_args = 0..)]
        ids: Vec<String>,
    },
    /// List the period axis
    List,
    /// Show every expense's cell for one period
    Show {
        /// Period identifier
        id: String,
    },
}

/// Handle a period command
pub fn handle_period_command(ctx: &CliContext, cmd: PeriodCommands) -> GridResult<()> {
    match cmd {
        PeriodCommands::Set { ids } => {
            let count = ctx.update(|ledger| {
                ledger.set_periods(ids);
                Ok(ledger.period_count())
            })?;
            println!("Period axis set ({} periods).", count);
        }
        PeriodCommands::List => {
            let ledger = ctx.load()?;
            let text = format_period_list(&ledger);
            if ledger.period_count() == 0 {
                println!("{}", text);
            } else {
                print!("{}", text);
            }
        }
        PeriodCommands::Show { id } => {
            let ledger = ctx.load()?;
            if !ledger.has_period(&id) {
                return Err(GridError::NotFound {
                    entity_type: "Period",
                    identifier: id,
                });
            }
            print!("{}", format_period_column(&ledger, &id, &ctx.money_format()));
        }
    }
    Ok(())
}
