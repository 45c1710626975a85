use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use budgetease::cli::{
    handle_activity_command, handle_chart_command, handle_expense_command,
    handle_income_command, handle_savings_command, handle_summary_command, handle_todo_command,
    AppContext, ExpenseCommands, IncomeCommands, SavingsCommands, TodoCommands,
};
use budgetease::config::{BudgetPaths, Settings};

/// Environment variable holding the log filter (e.g. `debug`, `budgetease=trace`)
const LOG_ENV: &str = "BUDGETEASE_LOG";

#[derive(Parser)]
#[command(
    name = "budgetease",
    version,
    about = "Student budget tracker with a todo list",
    long_about = "BudgetEase tracks income sources, expenses and savings goals, \
                  shows where the money goes, and keeps a small todo list. \
                  Everything is saved locally after every change."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Income source commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Savings(SavingsCommands),

    /// Show income, expense, balance and savings totals
    Summary,

    /// Show the most recent income and expenses
    Activity {
        /// Number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show spending by category
    Chart,

    /// Todo list commands
    #[command(subcommand)]
    Todo(TodoCommands),

    /// Delete all saved budget and todo data
    Reset,

    /// Show current configuration and paths
    Config,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let ctx = AppContext::new(paths, settings)?;

    match cli.command {
        Some(Commands::Income(cmd)) => handle_income_command(&ctx, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&ctx, cmd)?,
        Some(Commands::Savings(cmd)) => handle_savings_command(&ctx, cmd)?,
        Some(Commands::Summary) => handle_summary_command(&ctx)?,
        Some(Commands::Activity { limit }) => handle_activity_command(&ctx, limit)?,
        Some(Commands::Chart) => handle_chart_command(&ctx)?,
        Some(Commands::Todo(cmd)) => handle_todo_command(&ctx, cmd)?,
        Some(Commands::Reset) => {
            ctx.reset();
            println!("All saved data has been cleared.");
        }
        Some(Commands::Config) => {
            // Write the defaults out so there is a file to edit
            if !ctx.paths.settings_file().exists() {
                ctx.settings.save(&ctx.paths)?;
            }

            println!("BudgetEase Configuration");
            println!("========================");
            println!("Base directory: {}", ctx.paths.base_dir().display());
            println!("Data directory: {}", ctx.paths.data_dir().display());
            println!("Settings file:  {}", ctx.paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:       {}", ctx.settings.currency_symbol);
            println!("  Date format:           {}", ctx.settings.date_format);
            println!("  Recent activity limit: {}", ctx.settings.recent_activity_limit);
            println!("  Default priority:      {}", ctx.settings.default_priority);
        }
        None => {
            println!("BudgetEase - student budget tracker");
            println!();
            println!("Run 'budgetease --help' for usage information.");
        }
    }

    Ok(())
}
