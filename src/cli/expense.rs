//! Expense CLI commands

use clap::Subcommand;

use super::{parse_date, parse_positive_amount, require_text, AppContext};
use crate::display::format_expense_list;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Expense, ExpenseCategory, ExpenseId};
use crate::reports::expenses_newest_first;
use crate::store::ExpenseAction;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        description: String,

        /// Amount (e.g., "12.50")
        amount: String,

        /// Category: food, transport, accommodation, books, entertainment, utilities, other
        #[arg(short, long, default_value = "food")]
        category: String,

        /// Date spent (YYYY-MM-DD, defaults to now)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses, newest first
    List,

    /// Update an existing expense
    Update {
        /// Expense ID
        id: String,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New amount
        #[arg(short, long)]
        amount: Option<String>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,

        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,
    },
}

fn parse_category(input: &str) -> BudgetResult<ExpenseCategory> {
    ExpenseCategory::parse(input).ok_or_else(|| {
        let valid: Vec<&str> = ExpenseCategory::ALL.iter().map(|c| c.as_str()).collect();
        BudgetError::Validation(format!(
            "Invalid category '{}'. Valid categories: {}",
            input,
            valid.join(", ")
        ))
    })
}

/// Handle an expense command
pub fn handle_expense_command(ctx: &AppContext, cmd: ExpenseCommands) -> BudgetResult<()> {
    let mut store = ctx.budget_store();

    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            category,
            date,
        } => {
            let description = require_text(&description, "Description")?;
            let amount = parse_positive_amount(&amount)?;
            let category = parse_category(&category)?;

            let mut expense = Expense::new(description, amount, category);
            if let Some(date) = date {
                expense = expense.with_date(parse_date(&date)?);
            }
            expense
                .validate()
                .map_err(|e| BudgetError::Validation(e.to_string()))?;

            println!(
                "Added expense: {} ({}, {})",
                expense.description,
                expense.amount.format_with_symbol(ctx.currency()),
                expense.category.label()
            );
            println!("  ID: {}", expense.id);
            store.dispatch(ExpenseAction::Add(expense));
        }

        ExpenseCommands::List => {
            let expenses = expenses_newest_first(&store.state().expenses);
            println!(
                "{}",
                format_expense_list(&expenses, ctx.currency(), ctx.date_format())
            );
        }

        ExpenseCommands::Update {
            id,
            description,
            amount,
            category,
            date,
        } => {
            let id = ExpenseId::from(id);
            let mut expense = store
                .state()
                .expenses
                .items
                .get(&id)
                .cloned()
                .ok_or_else(|| BudgetError::expense_not_found(id.as_str()))?;

            if let Some(description) = description {
                expense.description = require_text(&description, "Description")?;
            }
            if let Some(amount) = amount {
                expense.amount = parse_positive_amount(&amount)?;
            }
            if let Some(category) = category {
                expense.category = parse_category(&category)?;
            }
            if let Some(date) = date {
                expense.date = parse_date(&date)?;
            }

            println!("Updated expense: {}", expense.description);
            store.dispatch(ExpenseAction::Update(expense));
        }

        ExpenseCommands::Delete { id } => {
            let id = ExpenseId::from(id);
            let expense = store
                .state()
                .expenses
                .items
                .get(&id)
                .ok_or_else(|| BudgetError::expense_not_found(id.as_str()))?;

            println!("Deleted expense: {}", expense.description);
            store.dispatch(ExpenseAction::Delete(id));
        }
    }

    Ok(())
}
