//! Fintrack Core - Domain models, remote store gateways, and application state.
//!
//! This crate contains the core logic of the fintrack personal finance
//! tracker. It is store-agnostic and defines the document store trait that
//! is implemented in memory here and on SQLite by the `storage-sqlite` crate.

pub mod bills;
pub mod budgets;
pub mod cards;
pub mod constants;
pub mod documents;
pub mod errors;
pub mod events;
pub mod gateway;
pub mod goals;
pub mod insights;
pub mod notifications;
pub mod profile;
pub mod seed;
pub mod state;
pub mod transactions;
pub mod validation;

// Re-export the state store entry points
pub use gateway::Gateways;
pub use state::{AppSnapshot, AppStateStore};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
