//! Expense CLI commands
//!
//! Implements CLI commands for adding, removing and describing expense rows.

use clap::Subcommand;

use crate::display::format_expense_list;
use crate::error::{GridError, GridResult};

use super::CliContext;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add an expense row across the current periods
    Add {
        /// Expense identifier
        id: String,
        /// Category label
        #[arg(short, long, default_value = "")]
        category: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Remove an expense row
    Remove {
        /// Expense identifier
        id: String,
    },
    /// Set category and description, creating the row if missing
    Describe {
        /// Expense identifier
        id: String,
        /// Category label (kept if omitted)
        #[arg(short, long)]
        category: Option<String>,
        /// Description (kept if omitted)
        #[arg(short, long)]
        description: Option<String>,
    },
    /// List all expense rows
    List,
}

/// Handle an expense command
pub fn handle_expense_command(ctx: &CliContext, cmd: ExpenseCommands) -> GridResult<()> {
    match cmd {
        ExpenseCommands::Add {
            id,
            category,
            description,
        } => {
            let added = ctx.update(|ledger| Ok(ledger.add_expense(&id, category, description)))?;
            if !added {
                return Err(GridError::InvalidArgument(format!(
                    "Expense '{}' already exists",
                    id
                )));
            }
            println!("Added expense: {}", id);
        }

        ExpenseCommands::Remove { id } => {
            let removed = ctx.update(|ledger| Ok(ledger.remove_expense(&id)))?;
            if !removed {
                return Err(GridError::expense_not_found(&id));
            }
            println!("Removed expense: {}", id);
        }

        ExpenseCommands::Describe {
            id,
            category,
            description,
        } => {
            if category.is_none() && description.is_none() {
                println!("No changes specified. Use --category or --description.");
                return Ok(());
            }

            ctx.update(|ledger| {
                let category = category.unwrap_or_else(|| ledger.category(&id).to_string());
                let description =
                    description.unwrap_or_else(|| ledger.description(&id).to_string());
                ledger.set_category_and_description(&id, category, description);
                Ok(())
            })?;
            println!("Updated expense: {}", id);
        }

        ExpenseCommands::List => {
            let ledger = ctx.load()?;
            print!("{}", format_expense_list(&ledger, &ctx.money_format()));
            if !ledger.is_empty() {
                println!();
            }
        }
    }

    Ok(())
}
