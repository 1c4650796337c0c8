//! Expense model
//!
//! An expense is a single spending record: what it was for, how much it
//! cost, and when it happened.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::date::ExpenseDate;

/// Identifier of an expense record, always >= 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u32);

impl ExpenseId {
    /// The first id handed out by an empty store
    pub const FIRST: ExpenseId = ExpenseId(1);

    /// Wrap a raw id, rejecting zero
    pub fn new(raw: u32) -> Option<Self> {
        (raw >= 1).then_some(Self(raw))
    }

    /// The raw numeric value
    pub fn get(self) -> u32 {
        self.0
    }

    /// The id that follows this one; `None` once the id space is used up
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: u32 = s
            .trim()
            .parse()
            .map_err(|_| format!("Invalid expense ID: {}", s))?;
        Self::new(raw).ok_or_else(|| format!("Expense ID must be at least 1: {}", s))
    }
}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, never reused within a session
    pub id: ExpenseId,

    /// Free-form category label
    pub category: String,

    /// What the money was spent on
    pub description: String,

    /// Amount spent (raw number, no currency)
    pub amount: f64,

    /// When the expense happened
    pub date: ExpenseDate,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        id: ExpenseId,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
        date: ExpenseDate,
    ) -> Self {
        Self {
            id,
            category: category.into(),
            description: description.into(),
            amount,
            date,
        }
    }

    /// Case-sensitive substring match on category, description, or date
    pub fn matches(&self, query: &str) -> bool {
        self.category.contains(query)
            || self.description.contains(query)
            || self.date.as_str().contains(query)
    }

    /// Whether the date falls in `[start, end]`
    pub fn in_range(&self, start: &ExpenseDate, end: &ExpenseDate) -> bool {
        self.date.as_str() >= start.as_str() && self.date.as_str() <= end.as_str()
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }

        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        if !self.amount.is_finite() {
            return Err(ExpenseValidationError::NonFiniteAmount);
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Category: {}, Description: {}, Amount: {}, Date: {}",
            self.id, self.category, self.description, self.amount, self.date
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyCategory,
    EmptyDescription,
    NonFiniteAmount,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Category cannot be empty"),
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::NonFiniteAmount => write!(f, "Amount must be a finite number"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn lunch() -> Expense {
        Expense::new(
            ExpenseId::FIRST,
            "food",
            "lunch",
            12.5,
            ExpenseDate::parse("2024-03-15").unwrap(),
        )
    }

    #[test]
    fn test_expense_id() {
        assert!(ExpenseId::new(0).is_none());
        assert_eq!(ExpenseId::new(1), Some(ExpenseId::FIRST));
        assert_eq!(ExpenseId::FIRST.next().map(ExpenseId::get), Some(2));
        assert_eq!(ExpenseId::new(u32::MAX).and_then(ExpenseId::next), None);
        assert_eq!("7".parse::<ExpenseId>().unwrap().get(), 7);
        assert!("0".parse::<ExpenseId>().is_err());
        assert!("x".parse::<ExpenseId>().is_err());
    }

    #[test]
    fn test_matches() {
        let expense = lunch();
        assert!(expense.matches("foo"));
        assert!(expense.matches("unc"));
        assert!(expense.matches("2024-03"));
        assert!(!expense.matches("Food"));
        assert!(!expense.matches("12.5"));
    }

    #[test]
    fn test_in_range() {
        let expense = lunch();
        let d = |s| ExpenseDate::parse(s).unwrap();
        assert!(expense.in_range(&d("2024-03-01"), &d("2024-03-31")));
        assert!(expense.in_range(&d("2024-03-15"), &d("2024-03-15")));
        assert!(!expense.in_range(&d("2024-03-16"), &d("2024-03-31")));
        assert!(!expense.in_range(&d("2024-03-31"), &d("2024-03-01")));
    }

    #[test]
    fn test_validation() {
        let mut expense = lunch();
        assert!(expense.validate().is_ok());

        expense.category = "  ".into();
        assert_eq!(expense.validate(), Err(ExpenseValidationError::EmptyCategory));

        expense.category = "food".into();
        expense.description = String::new();
        assert_eq!(
            expense.validate(),
            Err(ExpenseValidationError::EmptyDescription)
        );

        expense.description = "lunch".into();
        expense.amount = f64::NAN;
        assert_eq!(
            expense.validate(),
            Err(ExpenseValidationError::NonFiniteAmount)
        );

        expense.amount = -3.0;
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            lunch().to_string(),
            "ID: 1, Category: food, Description: lunch, Amount: 12.5, Date: 2024-03-15"
        );
    }
}
