//! spendlog - single-user expense tracker backed by a local SQLite table
//!
//! This library provides the core functionality for the spendlog CLI: a
//! small interactive tool that records, removes, and views monetary
//! expenses. Each expense is keyed by its date (the Unix timestamp of local
//! midnight), stored in one relational table, and queried by exact date,
//! month, or year.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expense, money, filters)
//! - `storage`: SQLite storage layer (connection provider, schema
//!   initializer, expense repository)
//! - `services`: Business logic layer
//! - `display`: Terminal output formatting
//! - `shell`: The interactive menu loop

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod shell;
pub mod storage;

pub use error::{SpendlogError, SpendlogResult};
