//! Todo list views
//!
//! Read-only views over the todo state, recomputed on every call.

use crate::models::TodoItem;
use crate::store::TodoState;

/// Todos visible under the state's current filter, in list order
pub fn filtered_todos(state: &TodoState) -> Vec<&TodoItem> {
    state
        .todos
        .iter()
        .filter(|todo| state.filter.matches(todo))
        .collect()
}

/// Counts over the whole list, regardless of filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TodoCounts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl TodoCounts {
    pub fn from_state(state: &TodoState) -> Self {
        let completed = state.todos.iter().filter(|t| t.completed).count();
        let total = state.todos.len();
        Self {
            total,
            active: total - completed,
            completed,
        }
    }
}
