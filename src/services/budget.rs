//! Budget analyzer
//!
//! Holds the monthly budget for the current process and compares it with
//! the total spent. The budget is never written to disk.

/// Result of comparing spending with the budget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetComparison {
    pub total: f64,
    pub budget: f64,
    /// `max(0, total - budget)`
    pub over_by: f64,
}

impl BudgetComparison {
    /// Whether spending exceeds the budget
    pub fn is_over_budget(&self) -> bool {
        self.total > self.budget
    }
}

/// Monthly budget state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BudgetAnalyzer {
    budget: f64,
}

impl BudgetAnalyzer {
    /// Create an analyzer with a zero budget
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the budget; any value is accepted, including negatives
    pub fn set_budget(&mut self, value: f64) {
        self.budget = value;
    }

    /// The current budget
    pub fn budget(&self) -> f64 {
        self.budget
    }

    /// Compare a spending total with the budget
    pub fn compare_to_total(&self, total: f64) -> BudgetComparison {
        BudgetComparison {
            total,
            budget: self.budget,
            over_by: (total - self.budget).max(0.0),
        }
    }
}
