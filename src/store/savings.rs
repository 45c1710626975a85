//! Savings store

use serde::{Deserialize, Serialize};

use super::collection::Collection;
use super::Reducer;
use crate::models::{GoalId, Money, SavingsGoal};

/// State of the savings store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsState {
    #[serde(default)]
    pub goals: Collection<SavingsGoal>,
}

/// Transitions of the savings store
#[derive(Debug, Clone, PartialEq)]
pub enum SavingsAction {
    Add(SavingsGoal),
    Update(SavingsGoal),
    Delete(GoalId),
    /// Add to a goal's current amount. The amount may be negative and is not
    /// clamped against the target.
    AddToAmount { id: GoalId, amount: Money },
    Load(Vec<SavingsGoal>),
}

impl Reducer for SavingsState {
    type Action = SavingsAction;

    fn reduce(self, action: SavingsAction) -> Self {
        let goals = match action {
            SavingsAction::Add(goal) => self.goals.add(goal),
            SavingsAction::Update(goal) => self.goals.update(goal),
            SavingsAction::Delete(id) => self.goals.delete(&id),
            SavingsAction::AddToAmount { id, amount } => self
                .goals
                .modify(&id, |goal| goal.current_amount += amount),
            SavingsAction::Load(goals) => self.goals.replace_all(goals),
        };
        Self { goals }
    }
}
