//! User profile module - the single profile record.

mod profile_model;

pub use profile_model::{ProfileUpdate, UserProfile};
