//! Storage layer for spendlog
//!
//! A single SQLite table holds all expenses. Every operation opens its own
//! connection, runs one parameterized statement, and releases the connection
//! on scope exit.

pub mod connection;
pub mod expenses;
pub mod init;

pub use connection::open_database;
pub use expenses::ExpenseRepository;
pub use init::initialize_storage;
