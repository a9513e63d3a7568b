//! Transactions module - income and expense entries.

mod transactions_model;

pub use transactions_model::{NewTransaction, Transaction, TransactionType, TransactionUpdate};
