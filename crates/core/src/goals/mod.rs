//! Goals module - savings goals.

mod goals_model;

pub use goals_model::{Goal, GoalUpdate, NewGoal};
