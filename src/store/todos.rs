//! Todo store
//!
//! Holds the todo list and the active view filter. Ids for new todos come
//! from an [`IdGenerator`] owned by [`TodoStore`]; the reducer itself only
//! sees the finished id so it stays pure.

use serde::{Deserialize, Serialize};

use super::collection::Collection;
use super::{Reducer, Store, SubscriptionId};
use crate::models::{ClockIds, IdGenerator, Priority, TodoFilter, TodoId, TodoItem};

/// State of the todo app
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    #[serde(default)]
    pub todos: Collection<TodoItem>,
    #[serde(default)]
    pub filter: TodoFilter,
}

impl TodoState {
    /// Largest id currently stored
    pub fn max_id(&self) -> Option<TodoId> {
        self.todos.iter().map(|t| t.id).max()
    }
}

/// Transitions of the todo store
#[derive(Debug, Clone, PartialEq)]
pub enum TodoAction {
    Add {
        id: TodoId,
        text: String,
        priority: Priority,
    },
    Delete(TodoId),
    Toggle(TodoId),
    /// Replace the text of a todo. The text is stored exactly as given.
    Edit { id: TodoId, text: String },
    ClearCompleted,
    SetFilter(TodoFilter),
    Load(Vec<TodoItem>),
}

impl Reducer for TodoState {
    type Action = TodoAction;

    fn reduce(self, action: TodoAction) -> Self {
        let Self { todos, filter } = self;
        match action {
            TodoAction::Add { id, text, priority } => Self {
                todos: todos.add(TodoItem::new(id, text, priority)),
                filter,
            },
            TodoAction::Delete(id) => Self {
                todos: todos.delete(&id),
                filter,
            },
            TodoAction::Toggle(id) => Self {
                todos: todos.modify(&id, |todo| todo.completed = !todo.completed),
                filter,
            },
            TodoAction::Edit { id, text } => Self {
                todos: todos.modify(&id, |todo| todo.text = text),
                filter,
            },
            TodoAction::ClearCompleted => Self {
                todos: todos.retain(|todo| !todo.completed),
                filter,
            },
            TodoAction::SetFilter(filter) => Self { todos, filter },
            TodoAction::Load(items) => Self {
                todos: todos.replace_all(items),
                filter,
            },
        }
    }
}

/// Todo state container with id generation
pub struct TodoStore {
    store: Store<TodoState>,
    ids: Box<dyn IdGenerator>,
}

impl TodoStore {
    /// Create a store that takes ids from the wall clock
    pub fn new(state: TodoState) -> Self {
        let ids = match state.max_id() {
            Some(last) => ClockIds::starting_after(last),
            None => ClockIds::new(),
        };
        Self::with_generator(state, Box::new(ids))
    }

    pub fn with_generator(state: TodoState, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            store: Store::new(state),
            ids,
        }
    }

    pub fn state(&self) -> &TodoState {
        self.store.state()
    }

    pub fn into_state(self) -> TodoState {
        self.store.into_state()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&TodoState) + 'static,
    {
        self.store.subscribe(listener)
    }

    pub fn store_mut(&mut self) -> &mut Store<TodoState> {
        &mut self.store
    }

    /// Append a new incomplete todo and return its id
    pub fn add_todo(&mut self, text: impl Into<String>, priority: Priority) -> TodoId {
        let id = self.ids.next_id();
        self.store.dispatch(TodoAction::Add {
            id,
            text: text.into(),
            priority,
        });
        id
    }

    pub fn delete_todo(&mut self, id: TodoId) {
        self.store.dispatch(TodoAction::Delete(id));
    }

    pub fn toggle_todo(&mut self, id: TodoId) {
        self.store.dispatch(TodoAction::Toggle(id));
    }

    pub fn edit_todo(&mut self, id: TodoId, text: impl Into<String>) {
        self.store.dispatch(TodoAction::Edit {
            id,
            text: text.into(),
        });
    }

    pub fn clear_completed(&mut self) {
        self.store.dispatch(TodoAction::ClearCompleted);
    }

    pub fn set_filter(&mut self, filter: TodoFilter) {
        self.store.dispatch(TodoAction::SetFilter(filter));
    }
}
