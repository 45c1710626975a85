//! BudgetEase - student budget tracker with a todo list
//!
//! This library provides the core of the BudgetEase application: income,
//! expense and savings goal stores, a small todo list, the values derived
//! from them, and a persistence bridge that saves the state to a key-value
//! medium after every change.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (income sources, expenses, goals, todos)
//! - `store`: Pure reducers and the state container
//! - `reports`: Derived values (totals, category breakdown, activity, progress)
//! - `storage`: Key-value media and the persistence bridge
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use budgetease::storage::{MemoryStore, Persistence};
//! use budgetease::store::{BudgetState, Store};
//!
//! let mut store = Store::<BudgetState>::default();
//! store.persist_to(Persistence::budget(MemoryStore::new()));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;
pub mod store;

pub use error::{BudgetError, BudgetResult};
