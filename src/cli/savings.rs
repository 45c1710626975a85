//! Savings goal CLI commands

use chrono::{Duration, Utc};
use clap::Subcommand;

use super::{parse_amount, parse_date, parse_positive_amount, require_text, AppContext};
use crate::display::format_goal_list;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{GoalId, SavingsGoal};
use crate::reports::GoalProgress;
use crate::store::SavingsAction;

/// Days until the deadline of a goal created without one
pub const DEFAULT_DEADLINE_DAYS: i64 = 90;

/// Savings subcommands
#[derive(Subcommand)]
pub enum SavingsCommands {
    /// Create a new savings goal
    Add {
        /// Goal name (e.g., "New Laptop")
        name: String,

        /// Target amount
        target: String,

        /// Amount already saved
        #[arg(short, long, default_value = "0")]
        current: String,

        /// Deadline (YYYY-MM-DD, defaults to 90 days from now)
        #[arg(long)]
        deadline: Option<String>,

        /// Optional description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// List savings goals with progress
    List,

    /// Update an existing goal
    Update {
        /// Goal ID
        id: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New target amount
        #[arg(short, long)]
        target: Option<String>,

        /// New saved amount
        #[arg(short, long)]
        current: Option<String>,

        /// New deadline (YYYY-MM-DD)
        #[arg(long)]
        deadline: Option<String>,

        /// New description (empty to remove)
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Add money to a goal
    Deposit {
        /// Goal ID
        id: String,

        /// Amount to add
        amount: String,
    },

    /// Delete a goal
    Delete {
        /// Goal ID
        id: String,
    },
}

fn description_from(input: String) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Handle a savings command
pub fn handle_savings_command(ctx: &AppContext, cmd: SavingsCommands) -> BudgetResult<()> {
    let mut store = ctx.budget_store();

    match cmd {
        SavingsCommands::Add {
            name,
            target,
            current,
            deadline,
            description,
        } => {
            let name = require_text(&name, "Goal name")?;
            let target = parse_positive_amount(&target)?;
            let current = parse_amount(&current)?;
            let deadline = match deadline {
                Some(date) => parse_date(&date)?,
                None => Utc::now() + Duration::days(DEFAULT_DEADLINE_DAYS),
            };

            let mut goal = SavingsGoal::new(name, target, deadline).with_current_amount(current);
            goal.description = description.and_then(description_from);
            goal.validate()
                .map_err(|e| BudgetError::Validation(e.to_string()))?;

            println!(
                "Created savings goal: {} (target {})",
                goal.name,
                goal.target_amount.format_with_symbol(ctx.currency())
            );
            println!("  ID: {}", goal.id);
            store.dispatch(SavingsAction::Add(goal));
        }

        SavingsCommands::List => {
            let goals = store.state().savings.goals.as_slice();
            println!(
                "{}",
                format_goal_list(goals, Utc::now(), ctx.currency(), ctx.date_format())
            );
        }

        SavingsCommands::Update {
            id,
            name,
            target,
            current,
            deadline,
            description,
        } => {
            let id = GoalId::from(id);
            let mut goal = store
                .state()
                .savings
                .goals
                .get(&id)
                .cloned()
                .ok_or_else(|| BudgetError::goal_not_found(id.as_str()))?;

            if let Some(name) = name {
                goal.name = require_text(&name, "Goal name")?;
            }
            if let Some(target) = target {
                goal.target_amount = parse_positive_amount(&target)?;
            }
            if let Some(current) = current {
                goal.current_amount = parse_amount(&current)?;
            }
            if let Some(deadline) = deadline {
                goal.deadline = parse_date(&deadline)?;
            }
            if let Some(description) = description {
                goal.description = description_from(description);
            }

            println!("Updated savings goal: {}", goal.name);
            store.dispatch(SavingsAction::Update(goal));
        }

        SavingsCommands::Deposit { id, amount } => {
            let id = GoalId::from(id);
            if !store.state().savings.goals.contains(&id) {
                return Err(BudgetError::goal_not_found(id.as_str()));
            }
            let amount = parse_positive_amount(&amount)?;

            store.dispatch(SavingsAction::AddToAmount {
                id: id.clone(),
                amount,
            });

            if let Some(goal) = store.state().savings.goals.get(&id) {
                let progress = GoalProgress::compute(goal, Utc::now());
                println!(
                    "Added {} to {}: {} of {} ({})",
                    amount.format_with_symbol(ctx.currency()),
                    goal.name,
                    goal.current_amount.format_with_symbol(ctx.currency()),
                    goal.target_amount.format_with_symbol(ctx.currency()),
                    progress.percent_label()
                );
                if progress.is_complete() {
                    println!("Goal reached!");
                }
            }
        }

        SavingsCommands::Delete { id } => {
            let id = GoalId::from(id);
            let goal = store
                .state()
                .savings
                .goals
                .get(&id)
                .ok_or_else(|| BudgetError::goal_not_found(id.as_str()))?;

            println!("Deleted savings goal: {}", goal.name);
            store.dispatch(SavingsAction::Delete(id));
        }
    }

    Ok(())
}
