//! Income CLI commands
//!
//! Implements CLI commands for managing income sources.

use clap::Subcommand;

use super::{parse_date, parse_positive_amount, require_text, AppContext};
use crate::display::format_income_list;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Frequency, IncomeId, IncomeSource};
use crate::store::IncomeAction;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Add a new income source
    Add {
        /// Source name (e.g., "Student Loan")
        name: String,

        /// Amount (e.g., "450" or "450.00")
        amount: String,

        /// Frequency: weekly, monthly or one-time
        #[arg(short, long, default_value = "monthly")]
        frequency: String,

        /// Date received (YYYY-MM-DD, defaults to now)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List all income sources
    List,

    /// Update an existing income source
    Update {
        /// Income source ID
        id: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New amount
        #[arg(short, long)]
        amount: Option<String>,

        /// New frequency
        #[arg(short, long)]
        frequency: Option<String>,

        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an income source
    Delete {
        /// Income source ID
        id: String,
    },
}

fn parse_frequency(input: &str) -> BudgetResult<Frequency> {
    Frequency::parse(input).ok_or_else(|| {
        BudgetError::Validation(format!(
            "Invalid frequency '{}'. Valid frequencies: weekly, monthly, one-time",
            input
        ))
    })
}

/// Handle an income command
pub fn handle_income_command(ctx: &AppContext, cmd: IncomeCommands) -> BudgetResult<()> {
    let mut store = ctx.budget_store();

    match cmd {
        IncomeCommands::Add {
            name,
            amount,
            frequency,
            date,
        } => {
            let name = require_text(&name, "Income name")?;
            let amount = parse_positive_amount(&amount)?;
            let frequency = parse_frequency(&frequency)?;

            let mut source = IncomeSource::new(name, amount, frequency);
            if let Some(date) = date {
                source = source.with_date(parse_date(&date)?);
            }
            source
                .validate()
                .map_err(|e| BudgetError::Validation(e.to_string()))?;

            println!(
                "Added income: {} ({}, {})",
                source.name,
                source.amount.format_with_symbol(ctx.currency()),
                source.frequency
            );
            println!("  ID: {}", source.id);
            store.dispatch(IncomeAction::Add(source));
        }

        IncomeCommands::List => {
            let sources = store.state().income.sources.as_slice();
            println!(
                "{}",
                format_income_list(sources, ctx.currency(), ctx.date_format())
            );
        }

        IncomeCommands::Update {
            id,
            name,
            amount,
            frequency,
            date,
        } => {
            let id = IncomeId::from(id);
            let mut source = store
                .state()
                .income
                .sources
                .get(&id)
                .cloned()
                .ok_or_else(|| BudgetError::income_not_found(id.as_str()))?;

            if let Some(name) = name {
                source.name = require_text(&name, "Income name")?;
            }
            if let Some(amount) = amount {
                source.amount = parse_positive_amount(&amount)?;
            }
            if let Some(frequency) = frequency {
                source.frequency = parse_frequency(&frequency)?;
            }
            if let Some(date) = date {
                source.date = parse_date(&date)?;
            }
            source
                .validate()
                .map_err(|e| BudgetError::Validation(e.to_string()))?;

            println!("Updated income: {}", source.name);
            store.dispatch(IncomeAction::Update(source));
        }

        IncomeCommands::Delete { id } => {
            let id = IncomeId::from(id);
            let source = store
                .state()
                .income
                .sources
                .get(&id)
                .ok_or_else(|| BudgetError::income_not_found(id.as_str()))?;

            println!("Deleted income: {}", source.name);
            store.dispatch(IncomeAction::Delete(id));
        }
    }

    Ok(())
}
