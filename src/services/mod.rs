//! Service layer for spendlog
//!
//! The service layer provides business logic on top of the storage layer,
//! handling input validation and report totals.

pub mod expense;

pub use expense::{ExpenseReport, ExpenseService};
