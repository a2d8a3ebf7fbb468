//! Expense repository
//!
//! Three operations: insert, delete-by-id, query-by-filter. Each one opens
//! its own connection, executes a single parameterized statement in
//! auto-commit mode, and releases the connection when the scope ends.

use std::path::PathBuf;

use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};

use super::connection;
use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{DateFilter, Expense, Money};

const SELECT_COLUMNS: &str = "SELECT id, amount, date, description FROM expenses";

/// Repository for expense persistence
pub struct ExpenseRepository {
    db_path: PathBuf,
}

impl ExpenseRepository {
    /// Create a new expense repository backed by the given database file
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Open a connection for a single operation
    fn connect(&self) -> SpendlogResult<Connection> {
        connection::open_database(&self.db_path)
    }

    /// Insert one expense
    ///
    /// # Errors
    ///
    /// Fails with [`SpendlogError::Duplicate`] when an expense with the same
    /// id (i.e. the same date) already exists.
    pub fn insert(&self, expense: &Expense) -> SpendlogResult<()> {
        let conn = self.connect()?;

        let result = conn.execute(
            "INSERT INTO expenses (id, amount, date, description) VALUES (?1, ?2, ?3, ?4)",
            params![
                expense.id,
                expense.amount.cents(),
                expense.date.format("%Y-%m-%d").to_string(),
                expense.description,
            ],
        );

        match result {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(SpendlogError::Duplicate {
                    id: expense.id,
                    date: expense.date.format("%Y-%m-%d").to_string(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Delete the expense with the given id
    ///
    /// Returns the number of rows affected (0 or 1). Deleting a missing id
    /// is a no-op, not an error, so repeated deletes are safe.
    pub fn delete(&self, id: i64) -> SpendlogResult<usize> {
        let conn = self.connect()?;
        let affected = conn.execute("DELETE FROM expenses WHERE id = ?1", params![id])?;
        Ok(affected)
    }

    /// Query expenses matching a date filter
    ///
    /// Rows come back in database order; an empty result is not an error.
    pub fn query(&self, filter: &DateFilter) -> SpendlogResult<Vec<Expense>> {
        let conn = self.connect()?;

        let rows = match filter {
            DateFilter::Date(date) => {
                let sql = format!("{} WHERE date = ?1", SELECT_COLUMNS);
                let mut stmt = conn.prepare(&sql)?;
                let mapped = stmt.query_map(
                    params![date.format("%Y-%m-%d").to_string()],
                    row_to_expense,
                )?;
                mapped.collect::<Result<Vec<_>, _>>()?
            }
            DateFilter::Month { .. } | DateFilter::Year(_) => {
                let (start, end) = filter.date_range()?;
                let sql = format!("{} WHERE date >= ?1 AND date < ?2", SELECT_COLUMNS);
                let mut stmt = conn.prepare(&sql)?;
                let mapped = stmt.query_map(
                    params![
                        start.format("%Y-%m-%d").to_string(),
                        end.format("%Y-%m-%d").to_string(),
                    ],
                    row_to_expense,
                )?;
                mapped.collect::<Result<Vec<_>, _>>()?
            }
        };

        Ok(rows)
    }
}

/// Map a result row to an Expense
fn row_to_expense(row: &Row<'_>) -> rusqlite::Result<Expense> {
    let date_text: String = row.get(2)?;
    let date = NaiveDate::parse_from_str(&date_text, "%Y-%m-%d").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Expense {
        id: row.get(0)?,
        amount: Money::from_cents(row.get(1)?),
        date,
        description: row.get(3)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::init::create_expense_table;
    use tempfile::TempDir;

    fn test_repository() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("expenses.db");

        let conn = Connection::open(&db_path).unwrap();
        create_expense_table(&conn).unwrap();
        drop(conn);

        (temp_dir, ExpenseRepository::new(db_path))
    }

    fn expense(amount_cents: i64, date: &str, description: &str) -> Expense {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        Expense::new(Money::from_cents(amount_cents), date, description).unwrap()
    }

    #[test]
    fn test_insert_and_query_exact_date() {
        let (_dir, repo) = test_repository();
        let e = expense(4250, "2024-03-15", "lunch");

        repo.insert(&e).unwrap();

        let rows = repo.query(&DateFilter::exact("2024-03-15").unwrap()).unwrap();
        assert_eq!(rows, vec![e]);
    }

    #[test]
    fn test_insert_duplicate_date_fails_and_keeps_prior_row() {
        let (_dir, repo) = test_repository();
        let first = expense(4250, "2024-03-15", "lunch");
        let second = expense(999, "2024-03-15", "coffee");

        repo.insert(&first).unwrap();
        let err = repo.insert(&second).unwrap_err();
        assert!(err.is_duplicate());

        // Prior row is unchanged
        let rows = repo.query(&DateFilter::exact("2024-03-15").unwrap()).unwrap();
        assert_eq!(rows, vec![first]);
    }

    #[test]
    fn test_delete_reports_rows_affected() {
        let (_dir, repo) = test_repository();
        let e = expense(4250, "2024-03-15", "lunch");
        repo.insert(&e).unwrap();

        assert_eq!(repo.delete(e.id).unwrap(), 1);
        // Idempotent: the second delete is a safe no-op
        assert_eq!(repo.delete(e.id).unwrap(), 0);
        assert_eq!(repo.delete(12345).unwrap(), 0);
    }

    #[test]
    fn test_month_filter_matches_whole_month() {
        let (_dir, repo) = test_repository();
        repo.insert(&expense(100, "2024-03-01", "first")).unwrap();
        repo.insert(&expense(200, "2024-03-31", "last")).unwrap();
        repo.insert(&expense(300, "2024-02-29", "before")).unwrap();
        repo.insert(&expense(400, "2024-04-01", "after")).unwrap();

        let rows = repo.query(&DateFilter::month("2024-03").unwrap()).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|e| e.date.format("%Y-%m").to_string() == "2024-03"));
    }

    #[test]
    fn test_year_filter_matches_whole_year() {
        let (_dir, repo) = test_repository();
        repo.insert(&expense(100, "2024-01-01", "jan")).unwrap();
        repo.insert(&expense(200, "2024-12-31", "dec")).unwrap();
        repo.insert(&expense(300, "2023-12-31", "prior year")).unwrap();
        repo.insert(&expense(400, "2025-01-01", "next year")).unwrap();

        let rows = repo.query(&DateFilter::year("2024").unwrap()).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|e| e.date.format("%Y").to_string() == "2024"));
    }

    #[test]
    fn test_query_empty_table() {
        let (_dir, repo) = test_repository();

        for filter in [
            DateFilter::exact("2024-03-15").unwrap(),
            DateFilter::month("2024-03").unwrap(),
            DateFilter::year("2024").unwrap(),
        ] {
            assert!(repo.query(&filter).unwrap().is_empty());
        }
    }
}
