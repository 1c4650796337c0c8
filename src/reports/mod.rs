//! Reports module for the expense tracker
//!
//! Provides spending summaries built from the expense store.

pub mod summary;

pub use summary::{CategorySpending, ExpenseSummary};
