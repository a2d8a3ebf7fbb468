//! Expense service
//!
//! Business logic on top of the expense repository: input parsing and
//! validation, id derivation, and report totals. Totals are computed here,
//! at the boundary, never by the database.

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{parse_date, DateFilter, Expense, Money};
use crate::storage::ExpenseRepository;

/// Result of a view query: the matching rows plus their arithmetic total
#[derive(Debug, Clone)]
pub struct ExpenseReport {
    /// Matching expenses in database order
    pub expenses: Vec<Expense>,
    /// Sum of the amounts; 0.00 for an empty result
    pub total: Money,
}

/// Service for recording, removing, and viewing expenses
pub struct ExpenseService {
    repository: ExpenseRepository,
}

impl ExpenseService {
    /// Create a new expense service
    pub fn new(repository: ExpenseRepository) -> Self {
        Self { repository }
    }

    /// Record a new expense from raw user input
    ///
    /// Parses the amount and date, derives the id from the date, and inserts
    /// one row. Fails with a validation error on malformed input, or a
    /// duplicate error when an expense for that date already exists.
    pub fn add(&self, amount: &str, date: &str, description: &str) -> SpendlogResult<Expense> {
        let amount = Money::parse(amount)
            .map_err(|e| SpendlogError::Validation(format!("Invalid amount: {}", e)))?;
        let date = parse_date(date)?;

        let expense = Expense::new(amount, date, description.trim())?;
        self.repository.insert(&expense)?;
        Ok(expense)
    }

    /// Remove an expense by its id, given as raw user input
    ///
    /// Returns the number of rows removed (0 or 1) so the caller can
    /// distinguish "not found" from "removed".
    pub fn remove(&self, id: &str) -> SpendlogResult<usize> {
        let id: i64 = id.trim().parse().map_err(|_| {
            SpendlogError::Validation(format!("Invalid expense id: '{}'", id.trim()))
        })?;
        self.repository.delete(id)
    }

    /// View expenses matching a filter, with their total
    pub fn report(&self, filter: &DateFilter) -> SpendlogResult<ExpenseReport> {
        let expenses = self.repository.query(filter)?;
        let total = expenses.iter().map(|e| e.amount).sum();
        Ok(ExpenseReport { expenses, total })
    }
}
