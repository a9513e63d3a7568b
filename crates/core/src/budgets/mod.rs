//! Budgets module - spending envelopes per period.

mod budgets_model;

pub use budgets_model::{Budget, BudgetPeriod, BudgetUpdate, NewBudget};
