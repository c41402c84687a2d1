use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_grid::cli::{
    handle_cell_command, handle_clear, handle_expense_command, handle_export_command,
    handle_import, handle_info, handle_init, handle_period_command, handle_project_command,
    handle_report, CellCommands, CliContext, ExpenseCommands, ExportCommands, PeriodCommands,
    ProjectCommands, ReportArgs,
};
use budget_grid::config::{paths::DATA_DIR_ENV, GridPaths, Settings};

#[derive(Parser)]
#[command(
    name = "budget-grid",
    author = "Kaylee Beyene",
    version,
    about = "Predicted vs executed budget grid for the terminal",
    long_about = "budget-grid tracks budget line items across periods, recording a \
                  predicted and an executed amount per cell and deriving the \
                  percentage rearranged relative to the project's funds. Reports \
                  can be printed, exported as CSV, or written to a document that \
                  carries the full ledger for later import."
)]
struct Cli {
    /// Project file to operate on
    #[arg(short, long, global = true, env = "BUDGET_GRID_FILE", value_name = "PATH")]
    file: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty project file
    Init {
        /// Replace an existing project file
        #[arg(long)]
        force: bool,
    },

    /// Show project information and table size
    Info,

    /// Project information and values
    #[command(subcommand)]
    Project(ProjectCommands),

    /// Expense row management
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Period axis management
    #[command(subcommand)]
    Period(PeriodCommands),

    /// Cell amounts
    #[command(subcommand)]
    Cell(CellCommands),

    /// Print one field's report
    Report(ReportArgs),

    /// Export the ledger
    #[command(subcommand)]
    Export(ExportCommands),

    /// Import a ledger from a document, JSON or YAML export
    Import {
        /// File to import
        path: PathBuf,
    },

    /// Remove every expense and period and reset values
    Clear {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    budget_grid::init_logging(cli.verbose);

    // Initialize paths and settings
    let paths = GridPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let ctx = CliContext::new(paths, settings, cli.file);

    match cli.command {
        Some(Commands::Init { force }) => handle_init(&ctx, force)?,
        Some(Commands::Info) => handle_info(&ctx)?,
        Some(Commands::Project(cmd)) => handle_project_command(&ctx, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&ctx, cmd)?,
        Some(Commands::Period(cmd)) => handle_period_command(&ctx, cmd)?,
        Some(Commands::Cell(cmd)) => handle_cell_command(&ctx, cmd)?,
        Some(Commands::Report(args)) => handle_report(&ctx, args)?,
        Some(Commands::Export(cmd)) => handle_export_command(&ctx, cmd)?,
        Some(Commands::Import { path }) => {
            handle_import(&ctx, &path)?;
        }
        Some(Commands::Clear { yes }) => handle_clear(&ctx, yes)?,
        Some(Commands::Config) => print_config(&ctx),
        None => {
            println!("budget-grid - predicted vs executed budget grid");
            println!();
            println!("Run 'budget-grid --help' for usage information.");
            println!("Run 'budget-grid init' to create a project.");
        }
    }

    Ok(())
}

fn print_config(ctx: &CliContext) {
    let settings = &ctx.settings;
    println!("budget-grid Configuration");
    println!("=========================");
    println!("Base directory:   {}", ctx.paths.base_dir().display());
    println!("Settings file:    {}", ctx.paths.settings_file().display());
    println!(
        "Project file:     {} ({})",
        ctx.project.path().display(),
        ctx.project.status()
    );
    println!("Override with {} to relocate the base directory.", DATA_DIR_ENV);
    println!();
    println!("Settings:");
    println!("  Currency prefix:    {:?}", settings.currency_prefix);
    println!(
        "  Separators:         decimal '{}', grouping '{}'",
        settings.decimal_separator, settings.grouping_separator
    );
    let input_max = budget_grid::Money::from_cents(settings.money_input_max);
    println!(
        "  Money input max:    {}",
        settings.money_format().format(input_max)
    );
    println!(
        "  Report page:        {} columns x {} rows",
        settings.report_max_columns, settings.report_max_rows
    );
    println!(
        "  Column labels:      {} / {}",
        settings.category_label, settings.description_label
    );
    println!("  Pretty JSON:        {}", settings.pretty_json);
    println!("  Colored reports:    {}", settings.color_reports);
    println!("  Default project:    {}", settings.default_project);
}
