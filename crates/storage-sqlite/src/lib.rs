//! SQLite storage implementation for fintrack.
//!
//! This crate provides the document store used outside of tests, built on
//! Diesel ORM with SQLite. It implements the `DocumentStoreTrait` defined in
//! `fintrack-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The single-table document store
//! - Online backup of the database file
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! The core crate is store-agnostic and works with traits.
//!
//! ```text
//! core (gateways, state)
//!          │
//!          ▼
//!  storage-sqlite (this crate)
//!          │
//!          ▼
//!      SQLite DB
//! ```

pub mod db;
pub mod documents;
pub mod errors;
pub mod schema;

// Re-export database utilities
pub use db::{
    backup_database, create_pool, get_connection, init, run_migrations, spawn_writer,
    DbConnection, DbPool, WriteHandle,
};

pub use documents::SqliteDocumentStore;

// Re-export storage errors
pub use errors::StorageError;

// Re-export from fintrack-core for convenience
pub use fintrack_core::errors::{Error, Result, StoreError};
