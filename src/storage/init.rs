//! Schema initialization for the expense database
//!
//! Idempotently ensures the data directory and the expense table exist.
//! Runs once at process start, before the interactive loop. Failures here
//! are logged by the caller and are not fatal.

use rusqlite::Connection;

use super::connection;
use crate::config::{Settings, SpendlogPaths};
use crate::error::{SpendlogError, SpendlogResult};

/// DDL for the expense table. Identifiers are compile-time constants; user
/// input never reaches statement text.
const CREATE_EXPENSES_TABLE: &str = "CREATE TABLE IF NOT EXISTS expenses (
    id          INTEGER PRIMARY KEY,
    amount      INTEGER NOT NULL,
    date        TEXT NOT NULL,
    description TEXT NOT NULL
)";

/// Ensure the database and expense table exist
///
/// Two idempotent steps: create the data directory holding the database
/// file, then connect to the database and create the table if absent.
pub fn initialize_storage(paths: &SpendlogPaths, settings: &Settings) -> SpendlogResult<()> {
    paths.ensure_directories()?;
    log::info!("Database directory checked/created");

    let conn = connection::open_database(&paths.database_file(&settings.database_file))?;
    create_expense_table(&conn)?;
    log::info!("Expense table checked/created");

    Ok(())
}

/// Create the expense table on an open connection if it does not exist
pub fn create_expense_table(conn: &Connection) -> SpendlogResult<()> {
    conn.execute(CREATE_EXPENSES_TABLE, [])
        .map_err(|e| SpendlogError::Schema(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_expense_table() {
        let conn = Connection::open_in_memory().unwrap();
        create_expense_table(&conn).unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='expenses'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendlogPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();

        initialize_storage(&paths, &settings).unwrap();
        initialize_storage(&paths, &settings).unwrap();

        assert!(paths.database_file(&settings.database_file).exists());
    }

    #[test]
    fn test_initialize_keeps_existing_rows() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendlogPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();

        initialize_storage(&paths, &settings).unwrap();

        let db_path = paths.database_file(&settings.database_file);
        let conn = connection::open_database(&db_path).unwrap();
        conn.execute(
            "INSERT INTO expenses (id, amount, date, description) VALUES (1, 100, '2024-01-01', 'coffee')",
            [],
        )
        .unwrap();
        drop(conn);

        initialize_storage(&paths, &settings).unwrap();

        let conn = connection::open_database(&db_path).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
