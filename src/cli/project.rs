//! Project CLI commands
//!
//! Implements `init`, `info`, `clear` and the `project` subcommands that edit
//! project-level scalars.

use clap::Subcommand;

use crate::display::format_project_info;
use crate::error::{GridError, GridResult};

use super::CliContext;

/// Project subcommands
#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// Set project information and values
    Set {
        /// Organization name
        #[arg(long)]
        org: Option<String>,
        /// Project name
        #[arg(long)]
        name: Option<String>,
        /// Project term or agreement number
        #[arg(long)]
        term: Option<String>,
        /// Start date
        #[arg(long)]
        start: Option<String>,
        /// End date
        #[arg(long)]
        end: Option<String>,
        /// Initial value (e.g. "50.000,00")
        #[arg(long, allow_hyphen_values = true)]
        initial: Option<String>,
        /// Yield returns (e.g. "1.250,75")
        #[arg(long = "yield", allow_hyphen_values = true)]
        yield_returns: Option<String>,
    },
    /// Set the normalization factor directly
    Factor {
        /// Divisor for rearranged values (non-zero)
        #[arg(allow_hyphen_values = true)]
        value: f64,
    },
}

/// Handle a project command
pub fn handle_project_command(ctx: &CliContext, cmd: ProjectCommands) -> GridResult<()> {
    match cmd {
        ProjectCommands::Set {
            org,
            name,
            term,
            start,
            end,
            initial,
            yield_returns,
        } => {
            let initial = initial.map(|text| ctx.parse_money(&text));
            let yield_returns = yield_returns.map(|text| ctx.parse_money(&text));

            let factor = ctx.update(|ledger| {
                if let Some(org) = org {
                    ledger.set_org_name(org);
                }
                if let Some(name) = name {
                    ledger.set_project_name(name);
                }
                if let Some(term) = term {
                    ledger.set_project_term(term);
                }
                if let Some(start) = start {
                    ledger.set_start_date(start);
                }
                if let Some(end) = end {
                    ledger.set_end_date(end);
                }
                if let Some(value) = initial {
                    ledger.set_initial_value(value);
                }
                if let Some(value) = yield_returns {
                    ledger.set_yield_returns(value);
                }
                Ok(ledger.normalization_factor())
            })?;

            println!("Project updated.");
            println!(
                "  Normalization factor: {}",
                ctx.money_format().format_decimal(factor)
            );
        }

        ProjectCommands::Factor { value } => {
            ctx.update(|ledger| ledger.set_normalization_factor(value))?;
            println!(
                "Normalization factor set to {}",
                ctx.money_format().format_decimal(value)
            );
        }
    }

    Ok(())
}

/// Create an empty project file
pub fn handle_init(ctx: &CliContext, force: bool) -> GridResult<()> {
    ctx.paths.ensure_directories()?;
    if !ctx.paths.is_initialized() {
        ctx.settings.save(&ctx.paths)?;
    }
    ctx.project.create(force)?;
    println!("Initialized project at: {}", ctx.project.path().display());
    Ok(())
}

/// Show project scalars and table size
pub fn handle_info(ctx: &CliContext) -> GridResult<()> {
    let ledger = ctx.load()?;
    println!("Project file: {}", ctx.project.path().display());
    print!("{}", format_project_info(&ledger, &ctx.money_format()));
    Ok(())
}

/// Reset the tables and value scalars, keeping names
pub fn handle_clear(ctx: &CliContext, yes: bool) -> GridResult<()> {
    if !yes {
        return Err(GridError::InvalidArgument(
            "clear discards every expense and period; pass --yes to confirm".into(),
        ));
    }
    ctx.update(|ledger| {
        ledger.clear();
        Ok(())
    })?;
    println!("Ledger cleared.");
    Ok(())
}
