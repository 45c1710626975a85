//! Income, expense and savings goal list formatting

use chrono::{DateTime, Utc};

use super::truncate;
use crate::models::{Expense, IncomeSource, SavingsGoal};
use crate::reports::GoalProgress;

const NAME_WIDTH: usize = 28;

/// Format income sources as a table
pub fn format_income_list(sources: &[IncomeSource], currency_symbol: &str, date_format: &str) -> String {
    if sources.is_empty() {
        return "No income sources yet.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<36}  {:<NAME_WIDTH$}  {:>12}  {:<9}  {}\n",
        "ID", "Name", "Amount", "Frequency", "Date"
    ));
    output.push_str(&format!("{}\n", "-".repeat(36 + NAME_WIDTH + 12 + 9 + 10 + 8)));

    for source in sources {
        output.push_str(&format!(
            "{:<36}  {:<NAME_WIDTH$}  {:>12}  {:<9}  {}\n",
            source.id.as_str(),
            truncate(&source.name, NAME_WIDTH),
            source.amount.format_with_symbol(currency_symbol),
            source.frequency.as_str(),
            source.date.format(date_format)
        ));
    }

    output
}

/// Format expenses as a table, in the order given
pub fn format_expense_list(expenses: &[&Expense], currency_symbol: &str, date_format: &str) -> String {
    if expenses.is_empty() {
        return "No expenses yet.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<36}  {:<NAME_WIDTH$}  {:>12}  {:<13}  {}\n",
        "ID", "Description", "Amount", "Category", "Date"
    ));
    output.push_str(&format!("{}\n", "-".repeat(36 + NAME_WIDTH + 12 + 13 + 10 + 8)));

    for expense in expenses {
        output.push_str(&format!(
            "{:<36}  {:<NAME_WIDTH$}  {:>12}  {:<13}  {}\n",
            expense.id.as_str(),
            truncate(&expense.description, NAME_WIDTH),
            expense.amount.format_with_symbol(currency_symbol),
            expense.category.label(),
            expense.date.format(date_format)
        ));
    }

    output
}

/// Format savings goals with their progress at `now`
pub fn format_goal_list(goals: &[SavingsGoal], now: DateTime<Utc>, currency_symbol: &str, date_format: &str) -> String {
    if goals.is_empty() {
        return "No savings goals yet.".to_string();
    }

    let mut output = String::new();
    for goal in goals {
        let progress = GoalProgress::compute(goal, now);
        output.push_str(&format!("{}  [{}]\n", goal.name, goal.id.as_str()));
        if let Some(description) = &goal.description {
            output.push_str(&format!("  {}\n", description));
        }
        output.push_str(&format!(
            "  {} {}  {} of {}\n",
            super::format_bar(progress.progress_percent, 100.0, 20),
            progress.percent_label(),
            goal.current_amount.format_with_symbol(currency_symbol),
            goal.target_amount.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "  {}  (due {})\n",
            progress.status_label(),
            goal.deadline.format(date_format)
        ));
    }

    output
}
