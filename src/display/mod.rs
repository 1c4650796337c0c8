//! Display formatting for terminal output

pub mod category;
pub mod expense;
pub mod report;

pub use category::format_category_list;
pub use expense::{format_expense_details, format_expense_list, format_expense_row};
pub use report::{format_amount, format_budget_comparison, format_summary};
