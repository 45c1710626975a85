//! State stores for BudgetEase
//!
//! Each domain state is a pure reducer: `reduce(state, action)` consumes the
//! current state and returns the next one, with no side effects. [`Store`]
//! is the state container the application holds; it applies actions and
//! notifies subscribers (such as the persistence bridge) after each one.

pub mod budget;
pub mod collection;
pub mod expenses;
pub mod income;
pub mod savings;
pub mod todos;

pub use budget::{BudgetAction, BudgetState};
pub use collection::{Collection, Entity};
pub use expenses::{ExpenseAction, ExpenseState};
pub use income::{IncomeAction, IncomeState};
pub use savings::{SavingsAction, SavingsState};
pub use todos::{TodoAction, TodoState, TodoStore};

use serde::Serialize;

use crate::storage::{KeyValueStore, Persistence};

/// A state with a pure transition function
pub trait Reducer: Sized {
    type Action;

    fn reduce(self, action: Self::Action) -> Self;
}

/// Handle returned by [`Store::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<S> = Box<dyn FnMut(&S)>;

/// State container: current state plus change listeners
pub struct Store<S: Reducer> {
    state: S,
    listeners: Vec<(SubscriptionId, Listener<S>)>,
    next_subscription: u64,
}

impl<S: Reducer + Default> Store<S> {
    pub fn new(state: S) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn into_state(self) -> S {
        self.state
    }

    /// Apply an action, then notify every listener in subscription order
    pub fn dispatch(&mut self, action: impl Into<S::Action>) {
        let current = std::mem::take(&mut self.state);
        self.state = current.reduce(action.into());

        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }

    /// Register a listener called with the new state after every dispatch
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&S) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Save the state through `bridge` after every dispatch
    pub fn persist_to<K>(&mut self, bridge: Persistence<K>) -> SubscriptionId
    where
        S: Serialize,
        K: KeyValueStore + 'static,
    {
        self.subscribe(move |state| bridge.save(state))
    }
}

impl<S: Reducer + Default> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
