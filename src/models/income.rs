//! Income source model
//!
//! An income source is a named, recurring or one-off amount of money coming
//! in. Totals are normalized to a monthly figure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::date::deserialize_iso_date;
use super::ids::IncomeId;
use super::money::Money;

/// Average number of weeks in a month, as a ratio (4.33)
pub const WEEKS_PER_MONTH: (i64, i64) = (433, 100);

/// How often an income source pays out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    Weekly,
    Monthly,
    OneTime,
    /// Any value not recognised when loading persisted data
    #[serde(other)]
    Unknown,
}

impl Frequency {
    /// Parse a frequency from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "weekly" | "week" | "w" => Some(Self::Weekly),
            "monthly" | "month" | "m" => Some(Self::Monthly),
            "one-time" | "onetime" | "once" | "o" => Some(Self::OneTime),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::OneTime => "one-time",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation errors for income sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    EmptyName,
    NonPositiveAmount,
}

impl fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Income name cannot be empty"),
            Self::NonPositiveAmount => write!(f, "Income amount must be greater than zero"),
        }
    }
}

impl std::error::Error for IncomeValidationError {}

/// A single source of income
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeSource {
    pub id: IncomeId,
    pub name: String,
    pub amount: Money,
    pub frequency: Frequency,
    #[serde(deserialize_with = "deserialize_iso_date")]
    pub date: DateTime<Utc>,
}

impl IncomeSource {
    /// Create a new income source dated now
    pub fn new(name: impl Into<String>, amount: Money, frequency: Frequency) -> Self {
        Self {
            id: IncomeId::new(),
            name: name.into(),
            amount,
            frequency,
            date: Utc::now(),
        }
    }

    /// Builder-style override of the id
    pub fn with_id(mut self, id: impl Into<IncomeId>) -> Self {
        self.id = id.into();
        self
    }

    /// Builder-style override of the date
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Contribution of this source to the monthly income total
    ///
    /// Weekly amounts are scaled by 4.33; monthly and one-time amounts count
    /// at face value.
    pub fn monthly_amount(&self) -> Money {
        match self.frequency {
            Frequency::Monthly | Frequency::OneTime => self.amount,
            Frequency::Weekly => self.amount.mul_ratio(WEEKS_PER_MONTH.0, WEEKS_PER_MONTH.1),
            Frequency::Unknown => Money::zero(),
        }
    }

    /// Validate user-entered fields
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if self.name.trim().is_empty() {
            return Err(IncomeValidationError::EmptyName);
        }
        if !self.amount.is_positive() {
            return Err(IncomeValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}
