//! State events module.
//!
//! Provides the events the application state store emits after every change
//! to its in-memory state, and the sink trait the presentation layer
//! implements to re-render on them.

mod sink;
mod state_event;

pub use sink::*;
pub use state_event::*;
