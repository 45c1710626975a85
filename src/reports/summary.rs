//! Financial summary
//!
//! Headline totals for the dashboard: monthly-normalized income, spending,
//! the balance between them, and money put aside in savings goals.

use crate::models::Money;
use crate::store::{BudgetState, ExpenseState, IncomeState, SavingsState};

/// Sum of every income source's monthly-equivalent amount
pub fn total_income(income: &IncomeState) -> Money {
    income.sources.iter().map(|s| s.monthly_amount()).sum()
}

/// Sum of every expense amount
pub fn total_expenses(expenses: &ExpenseState) -> Money {
    expenses.items.iter().map(|e| e.amount).sum()
}

/// Sum of every goal's current amount
pub fn total_savings(savings: &SavingsState) -> Money {
    savings.goals.iter().map(|g| g.current_amount).sum()
}

/// Dashboard totals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinancialSummary {
    pub total_income: Money,
    pub total_expenses: Money,
    /// Income minus expenses; may be negative
    pub net_balance: Money,
    pub total_savings: Money,
}

impl FinancialSummary {
    pub fn generate(state: &BudgetState) -> Self {
        let total_income = total_income(&state.income);
        let total_expenses = total_expenses(&state.expenses);

        Self {
            total_income,
            total_expenses,
            net_balance: total_income - total_expenses,
            total_savings: total_savings(&state.savings),
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let balance_note = if self.net_balance.is_negative() {
            "  (overspent)"
        } else {
            ""
        };

        let mut output = String::new();
        output.push_str("Financial Summary\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<18} {:>14}\n",
            "Total Income:",
            self.total_income.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "{:<18} {:>14}\n",
            "Total Expenses:",
            self.total_expenses.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "{:<18} {:>14}{}\n",
            "Net Balance:",
            self.net_balance.format_with_symbol(currency_symbol),
            balance_note
        ));
        output.push_str(&format!(
            "{:<18} {:>14}\n",
            "Total Savings:",
            self.total_savings.format_with_symbol(currency_symbol)
        ));
        output
    }
}
