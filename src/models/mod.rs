//! Core data models for the expense tracker
//!
//! This module contains the data structures of the domain: expenses and
//! their dates, users and credential rules, and the category set.

pub mod category;
pub mod date;
pub mod expense;
pub mod user;

pub use category::CategorySet;
pub use date::{validate_date, DateValidationError, ExpenseDate};
pub use expense::{Expense, ExpenseId, ExpenseValidationError};
pub use user::{validate_password, validate_username, CredentialValidationError, User};
