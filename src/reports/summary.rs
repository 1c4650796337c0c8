//! Expense summary report
//!
//! Totals spending overall and per category, optionally limited to a date
//! range.

use std::collections::BTreeMap;

use crate::error::{TrackerError, TrackerResult};
use crate::models::ExpenseDate;
use crate::storage::Storage;

/// Spending for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    pub category: String,
    pub total: f64,
    pub expense_count: usize,
    /// Share of the report total, 0-100
    pub percentage: f64,
}

/// Spending summary
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSummary {
    /// Inclusive date range, if the report is limited to one
    pub range: Option<(ExpenseDate, ExpenseDate)>,
    pub total: f64,
    pub expense_count: usize,
    /// Categories sorted by total, largest first
    pub categories: Vec<CategorySpending>,
}

impl ExpenseSummary {
    /// Summarize every stored expense
    pub fn generate(storage: &Storage) -> TrackerResult<Self> {
        Self::build(storage, None)
    }

    /// Summarize expenses dated within `[start, end]`
    pub fn generate_for_range(storage: &Storage, start: &str, end: &str) -> TrackerResult<Self> {
        let start =
            ExpenseDate::parse(start).map_err(|e| TrackerError::Validation(e.to_string()))?;
        let end = ExpenseDate::parse(end).map_err(|e| TrackerError::Validation(e.to_string()))?;
        Self::build(storage, Some((start, end)))
    }

    fn build(storage: &Storage, range: Option<(ExpenseDate, ExpenseDate)>) -> TrackerResult<Self> {
        let expenses = storage.expenses.get_all()?;

        let mut by_category: BTreeMap<String, (f64, usize)> = BTreeMap::new();
        let mut total = 0.0;
        let mut expense_count = 0;

        for expense in expenses.iter().filter(|e| match &range {
            Some((start, end)) => e.in_range(start, end),
            None => true,
        }) {
            let entry = by_category.entry(expense.category.clone()).or_default();
            entry.0 += expense.amount;
            entry.1 += 1;
            total += expense.amount;
            expense_count += 1;
        }

        let mut categories: Vec<CategorySpending> = by_category
            .into_iter()
            .map(|(category, (cat_total, count))| CategorySpending {
                category,
                total: cat_total,
                expense_count: count,
                percentage: if total != 0.0 {
                    cat_total / total * 100.0
                } else {
                    0.0
                },
            })
            .collect();

        categories.sort_by(|a, b| b.total.total_cmp(&a.total));

        Ok(Self {
            range,
            total,
            expense_count,
            categories,
        })
    }
}
