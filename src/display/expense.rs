//! Expense display formatting
//!
//! Formats expenses as a register table for terminal output.

use crate::models::Expense;

use super::report::{format_amount, truncate};

const CATEGORY_WIDTH: usize = 14;
const DESCRIPTION_WIDTH: usize = 24;

/// Format one expense as a register row
pub fn format_expense_row(expense: &Expense, currency: &str) -> String {
    format!(
        "{:>4}  {}  {:<cw$}  {:<dw$}  {:>12}",
        expense.id,
        expense.date,
        truncate(&expense.category, CATEGORY_WIDTH),
        truncate(&expense.description, DESCRIPTION_WIDTH),
        format_amount(expense.amount, currency),
        cw = CATEGORY_WIDTH,
        dw = DESCRIPTION_WIDTH,
    )
}

/// Format a list of expenses as a register
pub fn format_expense_list(expenses: &[Expense], currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:<10}  {:<cw$}  {:<dw$}  {:>12}\n",
        "ID",
        "Date",
        "Category",
        "Description",
        "Amount",
        cw = CATEGORY_WIDTH,
        dw = DESCRIPTION_WIDTH,
    ));
    output.push_str(&"-".repeat(4 + 2 + 10 + 2 + CATEGORY_WIDTH + 2 + DESCRIPTION_WIDTH + 2 + 12));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, currency));
        output.push('\n');
    }

    output
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, currency: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", expense.date));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!("Amount:      {}\n", format_amount(expense.amount, currency)));
    output
}
