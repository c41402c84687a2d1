//! Cell CLI commands
//!
//! Sets and shows predicted/executed amounts. `cell edit` opens an
//! interactive money input on the terminal.

use std::io::{self, Write};

use clap::{Subcommand, ValueEnum};
use crossterm::cursor::MoveToColumn;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};

use crate::display::format_cell;
use crate::error::{GridError, GridResult};
use crate::models::Money;
use crate::widgets::MoneyInput;

use super::CliContext;

/// Which amount of a cell to edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AmountArg {
    Predicted,
    Executed,
}

/// Cell subcommands
#[derive(Subcommand, Debug)]
pub enum CellCommands {
    /// Set the predicted amount of an existing cell
    Predicted {
        expense: String,
        period: String,
        /// Amount (e.g. "1.234,56")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Set the executed amount of an existing cell
    Executed {
        expense: String,
        period: String,
        /// Amount (e.g. "1.234,56")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Set both amounts, creating the row and period if needed
    Pair {
        expense: String,
        period: String,
        #[arg(allow_hyphen_values = true)]
        predicted: String,
        #[arg(allow_hyphen_values = true)]
        executed: String,
    },
    /// Show one cell
    Show { expense: String, period: String },
    /// Type an amount digit by digit (Enter saves, Esc cancels)
    Edit {
        expense: String,
        period: String,
        #[arg(value_enum)]
        amount: AmountArg,
    },
}

/// Handle a cell command
pub fn handle_cell_command(ctx: &CliContext, cmd: CellCommands) -> GridResult<()> {
    let format = ctx.money_format();

    match cmd {
        CellCommands::Predicted {
            expense,
            period,
            amount,
        } => {
            let value = ctx.parse_money(&amount);
            ctx.update(|ledger| ledger.set_predicted(&expense, &period, value))?;
            println!("Predicted [{}][{}] = {}", expense, period, format.format(value));
        }

        CellCommands::Executed {
            expense,
            period,
            amount,
        } => {
            let value = ctx.parse_money(&amount);
            ctx.update(|ledger| ledger.set_executed(&expense, &period, value))?;
            println!("Executed [{}][{}] = {}", expense, period, format.format(value));
        }

        CellCommands::Pair {
            expense,
            period,
            predicted,
            executed,
        } => {
            let predicted = ctx.parse_money(&predicted);
            let executed = ctx.parse_money(&executed);
            ctx.update(|ledger| {
                ledger.set_cell_pair(&expense, &period, predicted, executed);
                Ok(())
            })?;
            println!(
                "Cell [{}][{}] = {} / {}",
                expense,
                period,
                format.format(predicted),
                format.format(executed)
            );
        }

        CellCommands::Show { expense, period } => {
            let ledger = ctx.load()?;
            let text = format_cell(&ledger, &expense, &period, &format)
                .ok_or_else(|| GridError::cell_not_found(&expense, &period))?;
            print!("{}", text);
        }

        CellCommands::Edit {
            expense,
            period,
            amount,
        } => {
            let ledger = ctx.load()?;
            let cell = ledger
                .cell(&expense, &period)
                .ok_or_else(|| GridError::cell_not_found(&expense, &period))?;
            let current = match amount {
                AmountArg::Predicted => cell.predicted,
                AmountArg::Executed => cell.executed,
            };

            let input = ctx.settings.money_input().initial(current.to_major());
            let Some(value) = edit_interactively(input)? else {
                println!("Edit cancelled.");
                return Ok(());
            };

            ctx.update(|ledger| match amount {
                AmountArg::Predicted => ledger.set_predicted(&expense, &period, value),
                AmountArg::Executed => ledger.set_executed(&expense, &period, value),
            })?;
            println!("Saved {}", format.format(value));
        }
    }

    Ok(())
}

/// Run a money input on the terminal in raw mode
///
/// Returns the typed amount on Enter, `None` on Esc or Ctrl-C.
fn edit_interactively(mut input: MoneyInput) -> GridResult<Option<Money>> {
    terminal::enable_raw_mode()
        .map_err(|e| GridError::Io(format!("Failed to enter raw mode: {}", e)))?;
    let result = run_editor(&mut input);
    let restored = terminal::disable_raw_mode();
    println!();

    restored.map_err(|e| GridError::Io(format!("Failed to leave raw mode: {}", e)))?;
    result.map_err(GridError::from)
}

fn run_editor(input: &mut MoneyInput) -> io::Result<Option<Money>> {
    let mut stdout = io::stdout();
    input.set_focused(true);

    loop {
        queue!(
            stdout,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(format!("> {}", input.display_value()))
        )?;
        stdout.flush()?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Enter => {
                input.set_focused(false);
                return Ok(Some(input.amount()));
            }
            KeyCode::Esc => return Ok(None),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(None)
            }
            _ => {
                input.handle_key(key);
            }
        }
    }
}
