//! Core data models for spendlog
//!
//! This module contains the data structures that represent the expense
//! domain: the expense record itself, the money type, and query filters.

pub mod expense;
pub mod money;

pub use expense::{parse_date, DateFilter, Expense};
pub use money::Money;
