//! Recent activity feed
//!
//! Merges income sources and expenses into one list, newest first.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::models::{ExpenseCategory, Frequency, Money};
use crate::store::BudgetState;

/// Number of entries the feed shows by default
pub const DEFAULT_ACTIVITY_LIMIT: usize = 10;

/// Whether an entry brought money in or out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Income,
    Expense,
}

/// Secondary label: the frequency for income, the category for expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityTag {
    Frequency(Frequency),
    Category(ExpenseCategory),
}

impl fmt::Display for ActivityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frequency(frequency) => write!(f, "{}", frequency),
            Self::Category(category) => write!(f, "{}", category),
        }
    }
}

/// One row of the feed
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityItem {
    pub id: String,
    pub kind: ActivityKind,
    pub label: String,
    pub amount: Money,
    pub date: DateTime<Utc>,
    pub tag: ActivityTag,
}

impl ActivityItem {
    /// Amount with a leading `+` for income and `-` for expenses
    pub fn signed_amount(&self, currency_symbol: &str) -> String {
        let sign = match self.kind {
            ActivityKind::Income => '+',
            ActivityKind::Expense => '-',
        };
        format!("{}{}", sign, self.amount.format_with_symbol(currency_symbol))
    }
}

/// The `limit` most recent income and expense entries, newest first.
///
/// The sort is stable: entries with equal dates keep income-before-expense
/// and collection order.
pub fn recent_activity(state: &BudgetState, limit: usize) -> Vec<ActivityItem> {
    let incomes = state.income.sources.iter().map(|source| ActivityItem {
        id: source.id.to_string(),
        kind: ActivityKind::Income,
        label: source.name.clone(),
        amount: source.amount,
        date: source.date,
        tag: ActivityTag::Frequency(source.frequency),
    });

    let expenses = state.expenses.items.iter().map(|expense| ActivityItem {
        id: expense.id.to_string(),
        kind: ActivityKind::Expense,
        label: expense.description.clone(),
        amount: expense.amount,
        date: expense.date,
        tag: ActivityTag::Category(expense.category),
    });

    let mut items: Vec<ActivityItem> = incomes.chain(expenses).collect();
    items.sort_by(|a, b| b.date.cmp(&a.date));
    items.truncate(limit);
    items
}

/// Format the feed for terminal display
pub fn format_activity(items: &[ActivityItem], currency_symbol: &str, date_format: &str) -> String {
    if items.is_empty() {
        return "No activity yet".to_string();
    }

    let label_width = items
        .iter()
        .map(|i| i.label.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str("Recent Activity\n");
    for item in items {
        output.push_str(&format!(
            "{:<10}  {:<label_width$}  {:<13}  {:>12}\n",
            item.date.format(date_format).to_string(),
            item.label,
            item.tag.to_string(),
            item.signed_amount(currency_symbol),
            label_width = label_width,
        ));
    }
    output
}
