//! Custom error types for spendlog
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for spendlog operations
#[derive(Error, Debug)]
pub enum SpendlogError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// The database file could not be opened
    #[error("Connection error: {0}")]
    Connection(String),

    /// DDL failures while creating the expense table
    #[error("Schema error: {0}")]
    Schema(String),

    /// Statement execution errors
    #[error("Database error: {0}")]
    Database(String),

    /// Validation errors for user input (amount, date, filter selector)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Primary-key collision: an expense for this date already exists
    #[error("An expense already exists for {date} (id {id})")]
    Duplicate { id: i64, date: String },
}

impl SpendlogError {
    /// Check if this is a duplicate-key error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SpendlogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<rusqlite::Error> for SpendlogError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// Result type alias for spendlog operations
pub type SpendlogResult<T> = Result<T, SpendlogError>;
