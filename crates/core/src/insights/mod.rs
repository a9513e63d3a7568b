//! Insights module - aggregates and lookups derived from cached state.
//!
//! Everything here is a pure function over snapshot slices; nothing is
//! written back to the store.

mod insights_model;
mod insights_service;

pub use insights_model::{
    BillFilter, BudgetProgress, CashflowSummary, ChartDatum, GoalProgress, SearchHit,
    SearchScope, TransactionFilter,
};
pub use insights_service::*;
