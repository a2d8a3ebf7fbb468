//! Connection provider for the expense database
//!
//! Every repository operation opens its own connection and releases it when
//! the scope ends. The connection and any prepared statements are dropped on
//! every exit path, success or failure.

use rusqlite::Connection;
use std::path::Path;

use crate::error::{SpendlogError, SpendlogResult};

/// Open a connection to the expense database
///
/// Creates the database file if it does not exist yet. Fails with a
/// connection error when the file cannot be opened (missing parent
/// directory, permissions, corruption).
pub fn open_database(path: &Path) -> SpendlogResult<Connection> {
    Connection::open(path).map_err(|e| {
        SpendlogError::Connection(format!("Failed to open database {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_database_file() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("expenses.db");

        let conn = open_database(&db_path).unwrap();
        drop(conn);

        assert!(db_path.exists());
    }

    #[test]
    fn test_open_fails_without_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("missing").join("expenses.db");

        let err = open_database(&db_path).unwrap_err();
        assert!(matches!(err, SpendlogError::Connection(_)));
    }
}
