//! CLI command handlers
//!
//! This module is the form layer: it parses and validates user input, then
//! dispatches actions to the stores. The stores themselves never validate.

pub mod expense;
pub mod income;
pub mod report;
pub mod savings;
pub mod todo;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use report::{handle_activity_command, handle_chart_command, handle_summary_command};
pub use savings::{handle_savings_command, SavingsCommands};
pub use todo::{handle_todo_command, TodoCommands};

use chrono::{DateTime, Utc};

use crate::config::{BudgetPaths, Settings};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{parse_iso_date, Money};
use crate::storage::{open_file_store, FileStore, Persistence};
use crate::store::{BudgetState, Store, TodoState, TodoStore};

/// Everything a command needs: settings and the storage medium
pub struct AppContext {
    pub paths: BudgetPaths,
    pub settings: Settings,
    medium: FileStore,
}

impl AppContext {
    pub fn new(paths: BudgetPaths, settings: Settings) -> BudgetResult<Self> {
        let medium = open_file_store(&paths)?;
        tracing::debug!(data_dir = %paths.data_dir().display(), "opened file store");
        Ok(Self {
            paths,
            settings,
            medium,
        })
    }

    pub fn budget_bridge(&self) -> Persistence<FileStore> {
        Persistence::budget(self.medium.clone())
    }

    pub fn todo_bridge(&self) -> Persistence<FileStore> {
        Persistence::todos(self.medium.clone())
    }

    /// Budget store rehydrated from storage, saving after every change
    pub fn budget_store(&self) -> Store<BudgetState> {
        let bridge = self.budget_bridge();
        let mut store = Store::default();
        if let Some(saved) = bridge.load::<BudgetState>() {
            for action in BudgetState::load_actions(saved) {
                store.dispatch(action);
            }
        }
        store.persist_to(bridge);
        store
    }

    /// Todo store rehydrated from storage, saving after every change
    pub fn todo_store(&self) -> TodoStore {
        let bridge = self.todo_bridge();
        let state = bridge.load::<TodoState>().unwrap_or_default();
        let mut store = TodoStore::new(state);
        store.store_mut().persist_to(bridge);
        store
    }

    /// Remove all persisted budget and todo data
    pub fn reset(&self) {
        self.budget_bridge().clear();
        self.todo_bridge().clear();
    }

    pub fn currency(&self) -> &str {
        &self.settings.currency_symbol
    }

    pub fn date_format(&self) -> &str {
        &self.settings.date_format
    }
}

/// Parse a user-entered amount
pub fn parse_amount(input: &str) -> BudgetResult<Money> {
    Money::parse(input).map_err(|e| BudgetError::Validation(format!("Invalid amount: {}", e)))
}

/// Parse a user-entered amount that must be greater than zero
pub fn parse_positive_amount(input: &str) -> BudgetResult<Money> {
    let amount = parse_amount(input)?;
    if !amount.is_positive() {
        return Err(BudgetError::Validation(
            "Amount must be greater than zero".into(),
        ));
    }
    Ok(amount)
}

/// Parse a date as `YYYY-MM-DD` (midnight UTC) or a full RFC 3339 timestamp
pub fn parse_date(input: &str) -> BudgetResult<DateTime<Utc>> {
    parse_iso_date(input).ok_or_else(|| {
        BudgetError::Validation(format!(
            "Invalid date '{}': expected YYYY-MM-DD",
            input.trim()
        ))
    })
}

/// Trim user text and reject it if nothing is left
pub fn require_text(input: &str, field: &str) -> BudgetResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(BudgetError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(trimmed.to_string())
}
