//! Ordered entity collection shared by every store
//!
//! Every operation consumes the collection and returns the next one, so a
//! caller holding the previous value never observes a partial update. Element
//! order is insertion order and is preserved by `update` and `delete`.

use serde::{Deserialize, Serialize};

use crate::models::{Expense, ExpenseId, GoalId, IncomeId, IncomeSource, SavingsGoal, TodoId, TodoItem};

/// An entity with an identity
pub trait Entity {
    type Id: PartialEq;

    fn id(&self) -> &Self::Id;
}

impl Entity for IncomeSource {
    type Id = IncomeId;

    fn id(&self) -> &IncomeId {
        &self.id
    }
}

impl Entity for Expense {
    type Id = ExpenseId;

    fn id(&self) -> &ExpenseId {
        &self.id
    }
}

impl Entity for SavingsGoal {
    type Id = GoalId;

    fn id(&self) -> &GoalId {
        &self.id
    }
}

impl Entity for TodoItem {
    type Id = TodoId;

    fn id(&self) -> &TodoId {
        &self.id
    }
}

/// Insertion-ordered list of entities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: Entity> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the end.
    ///
    /// Ids are not checked for uniqueness: adding an entity whose id is
    /// already present keeps both copies.
    pub fn add(mut self, item: T) -> Self {
        self.items.push(item);
        self
    }

    /// Replace the first element with the same id, in place.
    /// Unknown ids leave the collection unchanged.
    pub fn update(mut self, item: T) -> Self {
        if let Some(slot) = self.items.iter_mut().find(|existing| existing.id() == item.id()) {
            *slot = item;
        }
        self
    }

    /// Remove every element with the given id
    pub fn delete(mut self, id: &T::Id) -> Self {
        self.items.retain(|item| item.id() != id);
        self
    }

    /// Discard the current contents and take `items` as-is
    pub fn replace_all(self, items: Vec<T>) -> Self {
        Self { items }
    }

    /// Apply `f` to the first element with the given id, if any
    pub fn modify<F>(mut self, id: &T::Id, f: F) -> Self
    where
        F: FnOnce(&mut T),
    {
        if let Some(item) = self.items.iter_mut().find(|item| item.id() == id) {
            f(item);
        }
        self
    }

    /// Keep only the elements matching `predicate`
    pub fn retain<F>(mut self, predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.items.retain(predicate);
        self
    }

    /// First element with the given id
    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.get(id).is_some()
    }
}

impl<T> Collection<T> {
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
