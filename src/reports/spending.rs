//! Spending by category
//!
//! Groups expenses by category for the dashboard chart. Only categories with
//! at least one expense appear, in order of their first expense.

use crate::models::{Expense, ExpenseCategory, Money};
use crate::store::ExpenseState;

/// Total spending in one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub total: Money,
    /// Share of all spending, 0-100
    pub share_percent: f64,
}

/// Spending broken down by category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub rows: Vec<CategoryTotal>,
    pub total: Money,
}

impl CategoryBreakdown {
    pub fn generate(expenses: &ExpenseState) -> Self {
        let mut totals: Vec<(ExpenseCategory, Money)> = Vec::new();

        for expense in &expenses.items {
            match totals.iter_mut().find(|(c, _)| *c == expense.category) {
                Some((_, sum)) => *sum += expense.amount,
                None => totals.push((expense.category, expense.amount)),
            }
        }

        let total: Money = totals.iter().map(|(_, sum)| *sum).sum();

        let rows = totals
            .into_iter()
            .map(|(category, sum)| CategoryTotal {
                category,
                total: sum,
                share_percent: if total.is_zero() {
                    0.0
                } else {
                    (sum.cents() as f64 / total.cents() as f64) * 100.0
                },
            })
            .collect();

        Self { rows, total }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for one category, if it has any spending
    pub fn get(&self, category: ExpenseCategory) -> Option<&CategoryTotal> {
        self.rows.iter().find(|r| r.category == category)
    }

    /// Format the breakdown as a bar chart for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        if self.is_empty() {
            return "No expense data to display".to_string();
        }

        let mut output = String::new();
        output.push_str("Expenses by Category\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');

        let max = self
            .rows
            .iter()
            .map(|r| r.total.cents())
            .max()
            .unwrap_or(0) as f64;

        for row in &self.rows {
            output.push_str(&format!(
                "{:<15} {:>12} {:>4.0}%  {}\n",
                row.category.label(),
                row.total.format_with_symbol(currency_symbol),
                row.share_percent,
                crate::display::format_bar(row.total.cents() as f64, max, 20)
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<15} {:>12}\n",
            "Total",
            self.total.format_with_symbol(currency_symbol)
        ));
        output
    }
}

/// Expenses ordered most recent first; equal dates keep list order
pub fn expenses_newest_first(expenses: &ExpenseState) -> Vec<&Expense> {
    let mut sorted: Vec<&Expense> = expenses.items.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}
