//! Savings goal progress
//!
//! Progress is clamped at 100% even when a goal is overfilled. Deadlines are
//! counted in whole days, rounded up; a negative count means the goal is
//! overdue.

use chrono::{DateTime, Utc};

use crate::models::{GoalId, Money, SavingsGoal};
use crate::store::SavingsState;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Where a goal stands relative to its deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineStatus {
    /// Days left, rounded up (0 on the deadline day itself)
    DaysLeft(i64),
    /// The deadline has passed
    Overdue,
}

/// Percentage of the target reached, clamped to 100
pub fn progress_percent(goal: &SavingsGoal) -> f64 {
    if !goal.target_amount.is_positive() {
        return 100.0;
    }
    let raw = goal.current_amount.cents() as f64 / goal.target_amount.cents() as f64 * 100.0;
    raw.min(100.0)
}

/// Whole days from `now` until the deadline, rounded up
pub fn days_remaining(deadline: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (deadline - now).num_milliseconds();
    // ceil(millis / MILLIS_PER_DAY)
    -((-millis).div_euclid(MILLIS_PER_DAY))
}

pub fn deadline_status(deadline: DateTime<Utc>, now: DateTime<Utc>) -> DeadlineStatus {
    let days = days_remaining(deadline, now);
    if days < 0 {
        DeadlineStatus::Overdue
    } else {
        DeadlineStatus::DaysLeft(days)
    }
}

/// Progress of one goal at a point in time
#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    pub id: GoalId,
    pub name: String,
    pub current: Money,
    pub target: Money,
    pub progress_percent: f64,
    pub remaining: Money,
    pub deadline: DateTime<Utc>,
    pub status: DeadlineStatus,
}

impl GoalProgress {
    pub fn compute(goal: &SavingsGoal, now: DateTime<Utc>) -> Self {
        Self {
            id: goal.id.clone(),
            name: goal.name.clone(),
            current: goal.current_amount,
            target: goal.target_amount,
            progress_percent: progress_percent(goal),
            remaining: goal.remaining(),
            deadline: goal.deadline,
            status: deadline_status(goal.deadline, now),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress_percent >= 100.0
    }

    /// Progress with one decimal place, e.g. "35.0%"
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.progress_percent)
    }

    pub fn status_label(&self) -> String {
        match self.status {
            DeadlineStatus::Overdue => "Overdue".to_string(),
            DeadlineStatus::DaysLeft(days) => format!("{} days left", days),
        }
    }
}

/// Progress of every goal, in list order
pub fn goal_progress(savings: &SavingsState, now: DateTime<Utc>) -> Vec<GoalProgress> {
    savings
        .goals
        .iter()
        .map(|goal| GoalProgress::compute(goal, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 1, 12, 0, 0).unwrap()
    }

    fn goal(target: i64, current: i64) -> SavingsGoal {
        SavingsGoal::new("Laptop", Money::from_cents(target), now() + Duration::days(30))
            .with_current_amount(Money::from_cents(current))
    }

    #[test]
    fn test_progress_percent() {
        let progress = GoalProgress::compute(&goal(100000, 35000), now());
        assert_eq!(progress.percent_label(), "35.0%");
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_progress_is_clamped_when_overfilled() {
        let progress = GoalProgress::compute(&goal(100000, 150000), now());
        assert_eq!(progress.percent_label(), "100.0%");
        assert!(progress.is_complete());
        assert_eq!(progress.remaining.cents(), -50000);
    }

    #[test]
    fn test_days_remaining_rounds_up() {
        assert_eq!(days_remaining(now() + Duration::days(30), now()), 30);
        assert_eq!(days_remaining(now() + Duration::hours(1), now()), 1);
        assert_eq!(days_remaining(now() + Duration::hours(25), now()), 2);
        assert_eq!(days_remaining(now(), now()), 0);
        assert_eq!(days_remaining(now() - Duration::hours(1), now()), 0);
        assert_eq!(days_remaining(now() - Duration::hours(25), now()), -1);
    }

    #[test]
    fn test_deadline_status() {
        assert_eq!(
            deadline_status(now() + Duration::days(3), now()),
            DeadlineStatus::DaysLeft(3)
        );
        assert_eq!(
            deadline_status(now() - Duration::days(2), now()),
            DeadlineStatus::Overdue
        );

        let mut late = goal(100000, 0);
        late.deadline = now() - Duration::days(5);
        assert_eq!(GoalProgress::compute(&late, now()).status_label(), "Overdue");
    }

    #[test]
    fn test_zero_target_counts_as_reached() {
        assert_eq!(progress_percent(&goal(0, 0)), 100.0);
    }
}
