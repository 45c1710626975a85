//! Expense model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::date::deserialize_iso_date;
use super::ids::ExpenseId;
use super::money::Money;

/// Closed set of spending categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Food,
    Transport,
    Accommodation,
    Books,
    Entertainment,
    Utilities,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 7] = [
        Self::Food,
        Self::Transport,
        Self::Accommodation,
        Self::Books,
        Self::Entertainment,
        Self::Utilities,
        Self::Other,
    ];

    /// Parse a category from user input (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Accommodation => "accommodation",
            Self::Books => "books",
            Self::Entertainment => "entertainment",
            Self::Utilities => "utilities",
            Self::Other => "other",
        }
    }

    /// Capitalized name for charts and lists
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Accommodation => "Accommodation",
            Self::Books => "Books",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    NonPositiveAmount,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
            Self::NonPositiveAmount => write!(f, "Expense amount must be greater than zero"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub amount: Money,
    pub category: ExpenseCategory,
    #[serde(deserialize_with = "deserialize_iso_date")]
    pub date: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense dated now
    pub fn new(description: impl Into<String>, amount: Money, category: ExpenseCategory) -> Self {
        Self {
            id: ExpenseId::new(),
            description: description.into(),
            amount,
            category,
            date: Utc::now(),
        }
    }

    pub fn with_id(mut self, id: impl Into<ExpenseId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Validate user-entered fields
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_and_label() {
        assert_eq!(ExpenseCategory::parse("Books"), Some(ExpenseCategory::Books));
        assert_eq!(ExpenseCategory::parse("groceries"), None);
        assert_eq!(ExpenseCategory::Food.label(), "Food");
        assert_eq!(ExpenseCategory::Accommodation.to_string(), "accommodation");
    }

    #[test]
    fn test_validation() {
        let expense = Expense::new("", Money::from_cents(100), ExpenseCategory::Food);
        assert_eq!(expense.validate(), Err(ExpenseValidationError::EmptyDescription));

        let expense = Expense::new("Lunch", Money::from_cents(-100), ExpenseCategory::Food);
        assert_eq!(expense.validate(), Err(ExpenseValidationError::NonPositiveAmount));

        let expense = Expense::new("Lunch", Money::from_cents(750), ExpenseCategory::Food);
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let expense = Expense::new("Bus pass", Money::from_cents(4500), ExpenseCategory::Transport)
            .with_id("e1");
        let json = serde_json::to_string(&expense).unwrap();
        assert!(json.contains("\"category\":\"transport\""));

        let deserialized: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense, deserialized);
    }
}
