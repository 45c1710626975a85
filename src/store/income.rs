//! Income store

use serde::{Deserialize, Serialize};

use super::collection::Collection;
use super::Reducer;
use crate::models::{IncomeId, IncomeSource};

/// State of the income store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeState {
    #[serde(default)]
    pub sources: Collection<IncomeSource>,
}

/// Transitions of the income store
#[derive(Debug, Clone, PartialEq)]
pub enum IncomeAction {
    Add(IncomeSource),
    Update(IncomeSource),
    Delete(IncomeId),
    Load(Vec<IncomeSource>),
}

impl Reducer for IncomeState {
    type Action = IncomeAction;

    fn reduce(self, action: IncomeAction) -> Self {
        let sources = match action {
            IncomeAction::Add(source) => self.sources.add(source),
            IncomeAction::Update(source) => self.sources.update(source),
            IncomeAction::Delete(id) => self.sources.delete(&id),
            IncomeAction::Load(sources) => self.sources.replace_all(sources),
        };
        Self { sources }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Frequency, Money};

    fn source(id: &str, name: &str, cents: i64) -> IncomeSource {
        IncomeSource::new(name, Money::from_cents(cents), Frequency::Monthly).with_id(id)
    }

    #[test]
    fn test_add_income() {
        let state = IncomeState::default().reduce(IncomeAction::Add(source("1", "Job", 50000)));
        assert_eq!(state.sources.len(), 1);
        assert_eq!(state.sources.as_slice()[0].name, "Job");
    }

    #[test]
    fn test_update_income_keeps_position() {
        let state = IncomeState::default()
            .reduce(IncomeAction::Add(source("1", "Job", 50000)))
            .reduce(IncomeAction::Add(source("2", "Loan", 30000)))
            .reduce(IncomeAction::Update(source("1", "Better job", 60000)));

        let names: Vec<_> = state.sources.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Better job", "Loan"]);
        assert_eq!(state.sources.as_slice()[0].amount.cents(), 60000);
    }

    #[test]
    fn test_update_missing_income_is_noop() {
        let before = IncomeState::default().reduce(IncomeAction::Add(source("1", "Job", 50000)));
        let after = before.clone().reduce(IncomeAction::Update(source("2", "Other", 1)));
        assert_eq!(after, before);
    }

    #[test]
    fn test_delete_income() {
        let state = IncomeState::default()
            .reduce(IncomeAction::Add(source("1", "Job", 50000)))
            .reduce(IncomeAction::Add(source("2", "Loan", 30000)))
            .reduce(IncomeAction::Delete(IncomeId::from("1")));
        assert_eq!(state.sources.len(), 1);
        assert_eq!(state.sources.as_slice()[0].id.as_str(), "2");
    }

    #[test]
    fn test_load_income_replaces_everything() {
        let state = IncomeState::default()
            .reduce(IncomeAction::Add(source("1", "Job", 50000)))
            .reduce(IncomeAction::Load(vec![source("9", "Loaded", 100)]));
        assert_eq!(state.sources.len(), 1);
        assert_eq!(state.sources.as_slice()[0].id.as_str(), "9");
    }
}
