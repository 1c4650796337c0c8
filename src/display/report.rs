//! Report formatting utilities for terminal output

use crate::reports::ExpenseSummary;
use crate::services::BudgetComparison;

/// Format an amount with a currency symbol and two decimals
pub fn format_amount(amount: f64, currency: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", currency, -amount)
    } else {
        format!("{}{:.2}", currency, amount)
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

/// Format a spending summary
pub fn format_summary(summary: &ExpenseSummary, currency: &str) -> String {
    let mut output = String::new();

    match &summary.range {
        Some((start, end)) => output.push_str(&format!(
            "Total Expenses from {} to {}: {}\n",
            start,
            end,
            format_amount(summary.total, currency)
        )),
        None => output.push_str(&format!(
            "Total Expenses: {}\n",
            format_amount(summary.total, currency)
        )),
    }

    if summary.categories.is_empty() {
        return output;
    }

    output.push_str(&format!("Expenses counted: {}\n\n", summary.expense_count));

    let name_width = summary
        .categories
        .iter()
        .map(|c| c.category.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    output.push_str(&format!(
        "{:<width$}  {:>5}  {:>12}  {:>6}\n",
        "Category",
        "Count",
        "Total",
        "Share",
        width = name_width
    ));
    for cat in &summary.categories {
        output.push_str(&format!(
            "{:<width$}  {:>5}  {:>12}  {:>6}\n",
            cat.category,
            cat.expense_count,
            format_amount(cat.total, currency),
            format_percentage(cat.percentage),
            width = name_width
        ));
    }

    output
}

/// Format a budget-versus-actual comparison
pub fn format_budget_comparison(cmp: &BudgetComparison, currency: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Total Expenses: {}\n", format_amount(cmp.total, currency)));
    output.push_str(&format!("Monthly Budget: {}\n", format_amount(cmp.budget, currency)));

    if cmp.is_over_budget() {
        output.push_str(&format!(
            "You have exceeded your monthly budget by {}\n",
            format_amount(cmp.over_by, currency)
        ));
    } else {
        output.push_str("You are within your monthly budget.\n");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::BudgetAnalyzer;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(12.5, "$"), "$12.50");
        assert_eq!(format_amount(-3.0, "$"), "-$3.00");
        assert_eq!(format_amount(0.0, ""), "0.00");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long description", 10), "a long ...");
        assert_eq!(truncate("abcdef", 2), "..");
    }

    #[test]
    fn test_budget_comparison_over() {
        let mut analyzer = BudgetAnalyzer::new();
        analyzer.set_budget(10.0);
        let output = format_budget_comparison(&analyzer.compare_to_total(12.5), "$");
        assert!(output.contains("Monthly Budget: $10.00"));
        assert!(output.contains("exceeded your monthly budget by $2.50"));
    }

    #[test]
    fn test_budget_comparison_within() {
        let analyzer = BudgetAnalyzer::new();
        let output = format_budget_comparison(&analyzer.compare_to_total(0.0), "$");
        assert!(output.contains("within your monthly budget"));
    }

    #[test]
    fn test_summary_without_expenses() {
        let summary = ExpenseSummary {
            range: None,
            total: 0.0,
            expense_count: 0,
            categories: Vec::new(),
        };
        assert_eq!(format_summary(&summary, "$"), "Total Expenses: $0.00\n");
    }
}
