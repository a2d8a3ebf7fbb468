//! Expense display formatting
//!
//! Provides utilities for formatting expenses for terminal display.

use crate::models::{DateFilter, Expense};
use crate::services::ExpenseReport;

/// Format a single expense for display (register row)
pub fn format_expense_row(expense: &Expense) -> String {
    format!(
        "ID: {}, Amount: {}, Date: {}, Description: {}",
        expense.id,
        expense.amount,
        expense.date.format("%Y-%m-%d"),
        expense.description
    )
}

/// Format a view report: header, one row per expense, and the total
pub fn format_expense_report(report: &ExpenseReport, filter: &DateFilter) -> String {
    if report.expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("\nExpenses ({}):\n", filter.kind()));

    for expense in &report.expenses {
        output.push_str(&format_expense_row(expense));
        output.push('\n');
    }

    output.push_str(&format!("\nTotal: {}\n", report.total));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn sample_expense() -> Expense {
        Expense::new(
            Money::from_cents(4250),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            "lunch",
        )
        .unwrap()
    }

    #[test]
    fn test_format_expense_row() {
        let e = sample_expense();
        let row = format_expense_row(&e);
        assert!(row.starts_with(&format!("ID: {}", e.id)));
        assert!(row.contains("Amount: 42.50"));
        assert!(row.contains("Date: 2024-03-15"));
        assert!(row.contains("Description: lunch"));
    }

    #[test]
    fn test_format_report_with_rows() {
        let e = sample_expense();
        let report = ExpenseReport {
            total: e.amount,
            expenses: vec![e],
        };
        let filter = DateFilter::exact("2024-03-15").unwrap();

        let out = format_expense_report(&report, &filter);
        assert!(out.contains("Expenses (date):"));
        assert!(out.contains("Total: 42.50"));
    }

    #[test]
    fn test_format_empty_report() {
        let report = ExpenseReport {
            expenses: vec![],
            total: Money::zero(),
        };
        let filter = DateFilter::year("2024").unwrap();

        assert_eq!(format_expense_report(&report, &filter), "No expenses found.\n");
    }
}
