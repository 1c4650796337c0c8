//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, persistence after each change, and audit logging.

pub mod auth;
pub mod budget;
pub mod category;
pub mod expense;
pub mod session;

pub use auth::AuthService;
pub use budget::{BudgetAnalyzer, BudgetComparison};
pub use category::CategoryService;
pub use expense::{CreateExpenseInput, ExpenseService};
pub use session::{Session, SessionState};
