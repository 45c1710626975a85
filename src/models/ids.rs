//! Strongly-typed ID wrappers for all entity types
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! entity types at compile time. Budget entity ids are opaque strings so that
//! bulk loads can carry whatever ids were persisted; todo ids are numeric and
//! come from an [`IdGenerator`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use uuid::Uuid;

/// Macro to generate string-backed ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Get the id as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

define_id!(IncomeId);
define_id!(ExpenseId);
define_id!(GoalId);

/// Identifier of a todo item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TodoId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Source of fresh todo ids
pub trait IdGenerator {
    fn next_id(&self) -> TodoId;
}

/// Ids taken from the wall clock in milliseconds.
///
/// Successive ids are strictly increasing: when the clock has not advanced
/// past the previous id the previous id plus one is used instead. Once the
/// previous id is `u64::MAX` it is handed out again rather than wrapping.
#[derive(Debug, Default)]
pub struct ClockIds {
    last: AtomicU64,
}

impl ClockIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue after an existing id, e.g. the largest one already stored
    pub fn starting_after(last: TodoId) -> Self {
        Self {
            last: AtomicU64::new(last.value()),
        }
    }
}

impl IdGenerator for ClockIds {
    fn next_id(&self) -> TodoId {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        let mut previous = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = if now > previous {
                now
            } else {
                previous.saturating_add(1)
            };
            match self.last.compare_exchange_weak(
                previous,
                candidate,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return TodoId(candidate),
                Err(actual) => previous = actual,
            }
        }
    }
}

/// Deterministic counter ids
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> TodoId {
        TodoId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        let a = IncomeId::new();
        let b = IncomeId::new();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
    }

    #[test]
    fn test_caller_supplied_id() {
        let id = ExpenseId::from("1700000000000");
        assert_eq!(id.as_str(), "1700000000000");
        assert_eq!(id.to_string(), "1700000000000");
    }

    #[test]
    fn test_id_serialization() {
        let id = GoalId::from("goal-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"goal-1\"");
        let deserialized: GoalId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);

        let todo = TodoId::new(42);
        assert_eq!(serde_json::to_string(&todo).unwrap(), "42");
    }

    #[test]
    fn test_clock_ids_strictly_increase() {
        let ids = ClockIds::new();
        let mut previous = ids.next_id();
        for _ in 0..1000 {
            let next = ids.next_id();
            assert!(next > previous);
            previous = next;
        }
    }

    #[test]
    fn test_clock_ids_starting_after() {
        let far_future = TodoId::new(u64::MAX / 2);
        let ids = ClockIds::starting_after(far_future);
        assert_eq!(ids.next_id(), TodoId::new(u64::MAX / 2 + 1));
    }

    #[test]
    fn test_clock_ids_saturate_at_max() {
        let ids = ClockIds::starting_after(TodoId::new(u64::MAX));
        assert_eq!(ids.next_id(), TodoId::new(u64::MAX));
        assert_eq!(ids.next_id(), TodoId::new(u64::MAX));
    }

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIds::starting_at(1);
        assert_eq!(ids.next_id(), TodoId::new(1));
        assert_eq!(ids.next_id(), TodoId::new(2));
    }
}
