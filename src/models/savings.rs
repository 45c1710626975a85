//! Savings goal model
//!
//! A goal has a target amount and a running current amount. The current
//! amount may exceed the target; nothing clamps it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::date::deserialize_iso_date;
use super::ids::GoalId;
use super::money::Money;

/// Validation errors for savings goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NonPositiveTarget,
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NonPositiveTarget => write!(f, "Goal target must be greater than zero"),
        }
    }
}

impl std::error::Error for GoalValidationError {}

/// A savings goal with a deadline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: GoalId,
    pub name: String,
    pub target_amount: Money,
    pub current_amount: Money,
    #[serde(deserialize_with = "deserialize_iso_date")]
    pub deadline: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SavingsGoal {
    /// Create a new goal with nothing saved yet
    pub fn new(name: impl Into<String>, target_amount: Money, deadline: DateTime<Utc>) -> Self {
        Self {
            id: GoalId::new(),
            name: name.into(),
            target_amount,
            current_amount: Money::zero(),
            deadline,
            description: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<GoalId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_current_amount(mut self, amount: Money) -> Self {
        self.current_amount = amount;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Amount still needed to reach the target (negative when overfilled)
    pub fn remaining(&self) -> Money {
        self.target_amount - self.current_amount
    }

    /// Validate user-entered fields
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }
        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget);
        }
        Ok(())
    }
}
