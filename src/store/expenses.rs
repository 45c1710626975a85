//! Expense store

use serde::{Deserialize, Serialize};

use super::collection::Collection;
use super::Reducer;
use crate::models::{Expense, ExpenseId};

/// State of the expense store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseState {
    #[serde(default)]
    pub items: Collection<Expense>,
}

/// Transitions of the expense store
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseAction {
    Add(Expense),
    Update(Expense),
    Delete(ExpenseId),
    Load(Vec<Expense>),
}

impl Reducer for ExpenseState {
    type Action = ExpenseAction;

    fn reduce(self, action: ExpenseAction) -> Self {
        let items = match action {
            ExpenseAction::Add(expense) => self.items.add(expense),
            ExpenseAction::Update(expense) => self.items.update(expense),
            ExpenseAction::Delete(id) => self.items.delete(&id),
            ExpenseAction::Load(items) => self.items.replace_all(items),
        };
        Self { items }
    }
}
