//! Core data models for BudgetEase
//!
//! This module contains the entity types held by the stores: income sources,
//! expenses, savings goals and todo items, plus the money and id types they
//! are built from.

pub mod date;
pub mod expense;
pub mod ids;
pub mod income;
pub mod money;
pub mod savings;
pub mod todo;

pub use date::parse_iso_date;
pub use expense::{Expense, ExpenseCategory, ExpenseValidationError};
pub use ids::{ClockIds, ExpenseId, GoalId, IdGenerator, IncomeId, SequentialIds, TodoId};
pub use income::{Frequency, IncomeSource, IncomeValidationError};
pub use money::{Money, MoneyParseError};
pub use savings::{GoalValidationError, SavingsGoal};
pub use todo::{Priority, TodoFilter, TodoItem};
