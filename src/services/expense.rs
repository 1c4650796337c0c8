//! Expense service
//!
//! Provides business logic for expense management: validation, id
//! assignment, persistence after every change, and aggregate queries.

use crate::audit::{AuditEntry, EntityType};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, ExpenseDate, ExpenseId};
use crate::storage::Storage;

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub category: String,
    pub description: String,
    pub amount: f64,
    /// `YYYY-MM-DD`; rejected with a validation error if not a real date
    pub date: String,
}

impl CreateExpenseInput {
    /// Convenience constructor
    pub fn new(
        category: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
        date: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            description: description.into(),
            amount,
            date: date.into(),
        }
    }
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Check an input without consuming an id
    fn prepare(&self, input: CreateExpenseInput) -> TrackerResult<Expense> {
        let date =
            ExpenseDate::parse(&input.date).map_err(|e| TrackerError::Validation(e.to_string()))?;

        let expense = Expense::new(
            ExpenseId::FIRST,
            input.category,
            input.description,
            input.amount,
            date,
        );
        expense
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        Ok(expense)
    }

    /// Add a new expense
    ///
    /// The expense is assigned the next id, its category joins the category
    /// set, and the whole store is written to disk. If the write fails the
    /// expense stays in memory and the storage error is returned.
    pub fn add(&self, input: CreateExpenseInput) -> TrackerResult<Expense> {
        let mut expense = self.prepare(input)?;
        expense.id = self.storage.expenses.next_id()?;

        self.storage.expenses.insert(expense.clone())?;
        self.storage.categories.insert(&expense.category)?;
        self.storage.expenses.save()?;

        tracing::info!(id = %expense.id, category = %expense.category, "added expense");

        self.storage.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            &expense,
        )?;

        Ok(expense)
    }

    /// Add several expenses, writing the store once
    ///
    /// Every input is validated before any is stored, so a bad entry leaves
    /// the store untouched.
    pub fn add_batch(&self, inputs: Vec<CreateExpenseInput>) -> TrackerResult<Vec<Expense>> {
        let prepared = inputs
            .into_iter()
            .map(|input| self.prepare(input))
            .collect::<TrackerResult<Vec<_>>>()?;

        if prepared.is_empty() {
            return Ok(prepared);
        }

        let mut added = Vec::with_capacity(prepared.len());
        for mut expense in prepared {
            expense.id = self.storage.expenses.next_id()?;
            self.storage.expenses.insert(expense.clone())?;
            self.storage.categories.insert(&expense.category)?;
            added.push(expense);
        }
        self.storage.expenses.save()?;

        tracing::info!(count = added.len(), "added expenses");

        let entries = added
            .iter()
            .map(|e| {
                AuditEntry::create(
                    EntityType::Expense,
                    e.id.to_string(),
                    Some(e.description.clone()),
                    e,
                )
            })
            .collect();
        self.storage.log_entries(entries)?;

        Ok(added)
    }

    /// Delete an expense by id
    ///
    /// Returns false (and writes nothing) if no expense has this id.
    pub fn delete(&self, id: ExpenseId) -> TrackerResult<bool> {
        let Some(removed) = self.storage.expenses.remove(id)? else {
            tracing::debug!(%id, "delete of unknown expense ignored");
            return Ok(false);
        };

        self.storage.expenses.save()?;

        tracing::info!(%id, "deleted expense");

        self.storage.log_delete(
            EntityType::Expense,
            removed.id.to_string(),
            Some(removed.description.clone()),
            &removed,
        )?;

        Ok(true)
    }

    /// Get an expense by id
    pub fn get(&self, id: ExpenseId) -> TrackerResult<Option<Expense>> {
        self.storage.expenses.get(id)
    }

    /// Find an expense by id string, erroring if absent
    pub fn find(&self, identifier: &str) -> TrackerResult<Expense> {
        let id: ExpenseId = identifier.parse().map_err(TrackerError::Validation)?;
        self.get(id)?
            .ok_or_else(|| TrackerError::expense_not_found(identifier))
    }

    /// List all expenses in store order
    pub fn list(&self) -> TrackerResult<Vec<Expense>> {
        self.storage.expenses.get_all()
    }

    /// Expenses whose category, description, or date contains `query`
    pub fn search(&self, query: &str) -> TrackerResult<Vec<Expense>> {
        self.storage.expenses.search(query)
    }

    /// Sum of all amounts
    pub fn total(&self) -> TrackerResult<f64> {
        self.storage.expenses.total()
    }

    /// Sum of amounts dated within `[start, end]`
    ///
    /// Both bounds must be valid dates. A start after the end yields 0.
    pub fn total_in_range(&self, start: &str, end: &str) -> TrackerResult<f64> {
        let start =
            ExpenseDate::parse(start).map_err(|e| TrackerError::Validation(e.to_string()))?;
        let end = ExpenseDate::parse(end).map_err(|e| TrackerError::Validation(e.to_string()))?;

        self.storage.expenses.total_in_range(&start, &end)
    }

    /// Number of stored expenses
    pub fn count(&self) -> TrackerResult<usize> {
        self.storage.expenses.count()
    }
}
