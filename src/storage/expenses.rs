//! Expense repository for text-file storage
//!
//! Manages loading and saving expenses to expenses.txt. Each line holds
//! `id category description amount date`; text fields are escaped with
//! [`escape_field`] so embedded whitespace survives a round trip.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::TrackerError;
use crate::models::{Expense, ExpenseDate, ExpenseId};

use super::file_io::{escape_field, read_lines, unescape_field, write_lines_atomic};

/// In-memory expense data plus the id counter
#[derive(Debug)]
struct ExpenseData {
    expenses: Vec<Expense>,
    /// `None` once every id has been handed out
    next_id: Option<ExpenseId>,
}

impl Default for ExpenseData {
    fn default() -> Self {
        Self {
            expenses: Vec::new(),
            next_id: Some(ExpenseId::FIRST),
        }
    }
}

impl ExpenseData {
    /// Move the counter past `id` if it isn't already
    fn advance_past(&mut self, id: ExpenseId) {
        if self.next_id.is_some_and(|next| id >= next) {
            self.next_id = id.next();
        }
    }
}

/// Repository for expense persistence
///
/// Expenses keep insertion order, which is also the order they are written.
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<ExpenseData>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(ExpenseData::default()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, ExpenseData>, TrackerError> {
        self.data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, ExpenseData>, TrackerError> {
        self.data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load expenses from disk and seed the id counter with `max(id) + 1`
    ///
    /// Malformed lines and repeated ids are skipped.
    pub fn load(&self) -> Result<(), TrackerError> {
        let lines = read_lines(&self.path)?;
        let mut data = self.write()?;
        *data = ExpenseData::default();

        let mut seen = HashSet::new();
        for (line_num, line) in lines.iter().enumerate() {
            let Some(expense) = parse_line(line) else {
                tracing::debug!(
                    path = %self.path.display(),
                    line = line_num + 1,
                    "skipping malformed expense record"
                );
                continue;
            };

            if !seen.insert(expense.id) {
                tracing::debug!(id = %expense.id, "skipping duplicate expense id");
                continue;
            }

            data.advance_past(expense.id);
            data.expenses.push(expense);
        }

        tracing::debug!(
            count = data.expenses.len(),
            next_id = ?data.next_id,
            "loaded expenses"
        );
        Ok(())
    }

    /// Save expenses to disk in current order
    pub fn save(&self) -> Result<(), TrackerError> {
        let data = self.read()?;
        write_lines_atomic(&self.path, data.expenses.iter().map(format_line))
    }

    /// Hand out the next id and advance the counter
    ///
    /// Ids are never reused, so once the largest id has been handed out
    /// every further call fails.
    pub fn next_id(&self) -> Result<ExpenseId, TrackerError> {
        let mut data = self.write()?;
        let id = data
            .next_id
            .ok_or_else(|| TrackerError::Storage("Expense id space exhausted".into()))?;
        data.next_id = id.next();
        Ok(id)
    }

    /// Append an expense
    pub fn insert(&self, expense: Expense) -> Result<(), TrackerError> {
        let mut data = self.write()?;
        data.advance_past(expense.id);
        data.expenses.push(expense);
        Ok(())
    }

    /// Remove the expense with this id, returning it if present
    pub fn remove(&self, id: ExpenseId) -> Result<Option<Expense>, TrackerError> {
        let mut data = self.write()?;
        let position = data.expenses.iter().position(|e| e.id == id);
        Ok(position.map(|i| data.expenses.remove(i)))
    }

    /// Get an expense by id
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, TrackerError> {
        Ok(self.read()?.expenses.iter().find(|e| e.id == id).cloned())
    }

    /// Get all expenses in store order
    pub fn get_all(&self) -> Result<Vec<Expense>, TrackerError> {
        Ok(self.read()?.expenses.clone())
    }

    /// Expenses whose category, description, or date contains `query`
    pub fn search(&self, query: &str) -> Result<Vec<Expense>, TrackerError> {
        Ok(self
            .read()?
            .expenses
            .iter()
            .filter(|e| e.matches(query))
            .cloned()
            .collect())
    }

    /// Sum of all amounts
    pub fn total(&self) -> Result<f64, TrackerError> {
        Ok(self.read()?.expenses.iter().map(|e| e.amount).sum())
    }

    /// Sum of amounts dated within `[start, end]`
    pub fn total_in_range(
        &self,
        start: &ExpenseDate,
        end: &ExpenseDate,
    ) -> Result<f64, TrackerError> {
        Ok(self
            .read()?
            .expenses
            .iter()
            .filter(|e| e.in_range(start, end))
            .map(|e| e.amount)
            .sum())
    }

    /// Distinct category labels used by stored expenses
    pub fn categories(&self) -> Result<Vec<String>, TrackerError> {
        let data = self.read()?;
        let mut names: Vec<String> = data.expenses.iter().map(|e| e.category.clone()).collect();
        names.sort();
        names.dedup();
        Ok(names)
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, TrackerError> {
        Ok(self.read()?.expenses.len())
    }
}

/// Render one expense as a storage line
pub fn format_line(expense: &Expense) -> String {
    format!(
        "{} {} {} {} {}",
        expense.id,
        escape_field(&expense.category),
        escape_field(&expense.description),
        expense.amount,
        expense.date
    )
}

/// Parse one storage line; `None` if the line is malformed
pub fn parse_line(line: &str) -> Option<Expense> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [id, category, description, amount, date] = fields.as_slice() else {
        return None;
    };

    let id: ExpenseId = id.parse().ok()?;
    let amount: f64 = amount.parse().ok().filter(|a: &f64| a.is_finite())?;
    let date = ExpenseDate::parse(date).ok()?;

    Some(Expense::new(
        id,
        unescape_field(category),
        unescape_field(description),
        amount,
        date,
    ))
}
