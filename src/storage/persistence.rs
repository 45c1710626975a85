//! Persistence bridge
//!
//! Serializes a whole application state to JSON and keeps it under one fixed
//! key of a [`KeyValueStore`]. The `try_*` methods report failures; the plain
//! `save`/`load`/`clear` methods log them and carry on, so callers never see
//! a storage error.

use serde::{de::DeserializeOwned, Serialize};

use crate::error::BudgetError;

use super::kv::KeyValueStore;

/// Storage key of the budget app state
pub const BUDGET_STORAGE_KEY: &str = "budgetease_data";

/// Storage key of the todo app state
pub const TODO_STORAGE_KEY: &str = "todoapp_data";

/// Saves and loads one state blob under a fixed key
#[derive(Debug, Clone)]
pub struct Persistence<K> {
    medium: K,
    key: &'static str,
}

impl<K: KeyValueStore> Persistence<K> {
    pub fn new(medium: K, key: &'static str) -> Self {
        Self { medium, key }
    }

    /// Bridge for the budget app state
    pub fn budget(medium: K) -> Self {
        Self::new(medium, BUDGET_STORAGE_KEY)
    }

    /// Bridge for the todo app state
    pub fn todos(medium: K) -> Self {
        Self::new(medium, TODO_STORAGE_KEY)
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn medium(&self) -> &K {
        &self.medium
    }

    /// Serialize `state` and write it under the key
    pub fn try_save<T: Serialize + ?Sized>(&self, state: &T) -> Result<(), BudgetError> {
        let serialized = serde_json::to_string(state)?;
        self.medium.set(self.key, &serialized)
    }

    /// Read and parse the value under the key; `Ok(None)` if absent
    pub fn try_load<T: DeserializeOwned>(&self) -> Result<Option<T>, BudgetError> {
        match self.medium.get(self.key)? {
            Some(serialized) => Ok(Some(serde_json::from_str(&serialized)?)),
            None => Ok(None),
        }
    }

    pub fn try_clear(&self) -> Result<(), BudgetError> {
        self.medium.remove(self.key)
    }

    /// Save, logging and discarding any failure
    pub fn save<T: Serialize + ?Sized>(&self, state: &T) {
        match self.try_save(state) {
            Ok(()) => tracing::debug!(key = self.key, "saved state"),
            Err(e) => tracing::error!(key = self.key, error = %e, "Error saving state"),
        }
    }

    /// Load, returning `None` when the value is absent, unreadable or unparsable
    pub fn load<T: DeserializeOwned>(&self) -> Option<T> {
        match self.try_load() {
            Ok(Some(state)) => {
                tracing::debug!(key = self.key, "loaded state");
                Some(state)
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(key = self.key, error = %e, "Error loading state");
                None
            }
        }
    }

    /// Remove the saved state, logging and discarding any failure
    pub fn clear(&self) {
        if let Err(e) = self.try_clear() {
            tracing::error!(key = self.key, error = %e, "Error clearing state");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Expense, ExpenseCategory, Frequency, IncomeSource, Money, Priority, SavingsGoal, TodoId,
        TodoItem,
    };
    use crate::store::{
        BudgetState, ExpenseAction, IncomeAction, Reducer, SavingsAction, TodoAction, TodoState,
    };
    use crate::storage::MemoryStore;
    use chrono::{TimeZone, Utc};

    /// Medium whose every operation fails
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, BudgetError> {
            Err(BudgetError::Storage("quota exceeded".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), BudgetError> {
            Err(BudgetError::Storage("quota exceeded".into()))
        }

        fn remove(&self, _key: &str) -> Result<(), BudgetError> {
            Err(BudgetError::Storage("quota exceeded".into()))
        }
    }

    fn sample_budget() -> BudgetState {
        let date = Utc.with_ymd_and_hms(2024, 9, 1, 12, 0, 0).unwrap();
        BudgetState::default()
            .reduce(
                IncomeAction::Add(
                    IncomeSource::new("Part-time job", Money::from_cents(50000), Frequency::Monthly)
                        .with_id("i1")
                        .with_date(date),
                )
                .into(),
            )
            .reduce(
                ExpenseAction::Add(
                    Expense::new("Textbooks", Money::from_cents(12000), ExpenseCategory::Books)
                        .with_id("e1")
                        .with_date(date),
                )
                .into(),
            )
            .reduce(
                SavingsAction::Add(
                    SavingsGoal::new("Laptop", Money::from_cents(100000), date)
                        .with_id("g1")
                        .with_current_amount(Money::from_cents(35075))
                        .with_description("New one for final year"),
                )
                .into(),
            )
    }

    #[test]
    fn test_round_trip_budget_state() {
        let bridge = Persistence::budget(MemoryStore::new());
        let state = sample_budget();

        bridge.save(&state);
        let loaded: BudgetState = bridge.load().unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_amounts_are_stored_as_decimal_units() {
        let medium = MemoryStore::new();
        let bridge = Persistence::budget(medium.clone());
        bridge.save(&sample_budget());

        let raw = medium.get(BUDGET_STORAGE_KEY).unwrap().unwrap();
        assert!(raw.contains(r#""amount":500.0"#));
        assert!(raw.contains(r#""currentAmount":350.75"#));
    }

    #[test]
    fn test_load_blob_written_by_web_app() {
        let medium = MemoryStore::new();
        medium
            .set(
                BUDGET_STORAGE_KEY,
                r#"{
                    "income": {"sources": [
                        {"id": "1725184800000", "name": "Student Loan", "amount": 450,
                         "frequency": "monthly", "date": "2024-09-01T10:00:00.000Z"}
                    ]},
                    "expenses": {"items": [
                        {"id": "1725271200000", "description": "Groceries", "amount": 75.5,
                         "category": "food", "date": "2024-09-02T10:00:00.000Z"}
                    ]},
                    "savings": {"goals": [
                        {"id": "1725357600000", "name": "Laptop", "targetAmount": 1000,
                         "currentAmount": 350.25, "deadline": "2025-06-01",
                         "description": "For final year"}
                    ]}
                }"#,
            )
            .unwrap();
        let bridge = Persistence::budget(medium);

        let state: BudgetState = bridge.try_load().unwrap().unwrap();
        assert_eq!(state.income.sources.as_slice()[0].amount.cents(), 45000);
        assert_eq!(state.expenses.items.as_slice()[0].amount.cents(), 7550);

        let goal = &state.savings.goals.as_slice()[0];
        assert_eq!(goal.current_amount.cents(), 35025);
        assert_eq!(
            goal.deadline,
            Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_round_trip_todo_state() {
        let bridge = Persistence::todos(MemoryStore::new());
        let state = TodoState::default()
            .reduce(TodoAction::Load(vec![TodoItem::new(
                TodoId::new(1700000000000),
                "Revise",
                Priority::High,
            )]))
            .reduce(TodoAction::Toggle(TodoId::new(1700000000000)));

        bridge.save(&state);
        let loaded: TodoState = bridge.load().unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_load_absent_is_none() {
        let bridge = Persistence::budget(MemoryStore::new());
        assert!(bridge.load::<BudgetState>().is_none());
    }

    #[test]
    fn test_load_unparsable_is_none() {
        let medium = MemoryStore::new();
        medium.set(BUDGET_STORAGE_KEY, "{not json").unwrap();
        let bridge = Persistence::budget(medium);

        assert!(bridge.load::<BudgetState>().is_none());
        assert!(matches!(
            bridge.try_load::<BudgetState>(),
            Err(BudgetError::Json(_))
        ));
    }

    #[test]
    fn test_failures_are_swallowed() {
        let bridge = Persistence::budget(BrokenStore);

        bridge.save(&sample_budget());
        bridge.clear();
        assert!(bridge.load::<BudgetState>().is_none());
        assert!(bridge.try_save(&sample_budget()).is_err());
        assert!(bridge.try_clear().is_err());
    }

    #[test]
    fn test_clear_removes_key() {
        let medium = MemoryStore::new();
        let bridge = Persistence::budget(medium.clone());
        bridge.save(&sample_budget());
        bridge.clear();

        assert_eq!(medium.get(BUDGET_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_keys_do_not_collide() {
        let medium = MemoryStore::new();
        let budget = Persistence::budget(medium.clone());
        let todos = Persistence::todos(medium);

        budget.save(&sample_budget());
        todos.clear();
        assert!(budget.load::<BudgetState>().is_some());
    }
}
