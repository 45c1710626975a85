//! Combined budget state
//!
//! The budget app's root state is the income, expense and savings stores side
//! by side. It is the unit the persistence bridge saves and loads.

use serde::{Deserialize, Serialize};

use super::expenses::{ExpenseAction, ExpenseState};
use super::income::{IncomeAction, IncomeState};
use super::savings::{SavingsAction, SavingsState};
use super::Reducer;

/// Root state of the budget app
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetState {
    #[serde(default)]
    pub income: IncomeState,
    #[serde(default)]
    pub expenses: ExpenseState,
    #[serde(default)]
    pub savings: SavingsState,
}

/// A transition routed to one of the budget slices
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetAction {
    Income(IncomeAction),
    Expense(ExpenseAction),
    Savings(SavingsAction),
}

impl From<IncomeAction> for BudgetAction {
    fn from(action: IncomeAction) -> Self {
        Self::Income(action)
    }
}

impl From<ExpenseAction> for BudgetAction {
    fn from(action: ExpenseAction) -> Self {
        Self::Expense(action)
    }
}

impl From<SavingsAction> for BudgetAction {
    fn from(action: SavingsAction) -> Self {
        Self::Savings(action)
    }
}

impl Reducer for BudgetState {
    type Action = BudgetAction;

    fn reduce(self, action: BudgetAction) -> Self {
        let Self {
            income,
            expenses,
            savings,
        } = self;
        match action {
            BudgetAction::Income(action) => Self {
                income: income.reduce(action),
                expenses,
                savings,
            },
            BudgetAction::Expense(action) => Self {
                income,
                expenses: expenses.reduce(action),
                savings,
            },
            BudgetAction::Savings(action) => Self {
                income,
                expenses,
                savings: savings.reduce(action),
            },
        }
    }
}

impl BudgetState {
    /// The load actions that rehydrate every slice from a persisted state
    pub fn load_actions(loaded: BudgetState) -> [BudgetAction; 3] {
        [
            IncomeAction::Load(loaded.income.sources.into_vec()).into(),
            ExpenseAction::Load(loaded.expenses.items.into_vec()).into(),
            SavingsAction::Load(loaded.savings.goals.into_vec()).into(),
        ]
    }

    /// Replace every slice with the contents of `loaded`
    pub fn hydrate(self, loaded: BudgetState) -> Self {
        Self::load_actions(loaded)
            .into_iter()
            .fold(self, |state, action| state.reduce(action))
    }
}
