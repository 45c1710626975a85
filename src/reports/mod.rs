//! Reports module for BudgetEase
//!
//! Derived values computed from the current state on every read: dashboard
//! totals, spending by category, the recent activity feed, savings goal
//! progress and todo counts. Nothing here is stored or persisted.

pub mod activity;
pub mod goals;
pub mod spending;
pub mod summary;
pub mod todos;

pub use activity::{recent_activity, ActivityItem, ActivityKind, ActivityTag, DEFAULT_ACTIVITY_LIMIT};
pub use goals::{goal_progress, DeadlineStatus, GoalProgress};
pub use spending::{expenses_newest_first, CategoryBreakdown, CategoryTotal};
pub use summary::FinancialSummary;
pub use todos::{filtered_todos, TodoCounts};
