//! Fintrack command-line front end.
//!
//! Wires the SQLite document store, the gateways and the application state
//! store together and exposes a handful of commands over them.

pub mod commands;
pub mod config;
pub mod events;
pub mod main_lib;

pub use main_lib::{build_state, init_tracing, AppState};
