//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and view reports for the
//! interactive shell.

pub mod expense;

pub use expense::{format_expense_report, format_expense_row};
