//! State event sink trait and implementations.

use std::sync::{Arc, Mutex, PoisonError};

use super::StateEvent;

/// Trait for receiving state events.
///
/// The presentation layer implements this to re-render after each change.
///
/// # Design Rules
///
/// - `emit()` is called while no state lock is held, but must still be fast
///   and non-blocking
/// - Failure to handle an event must not affect the state store
pub trait StateEventSink: Send + Sync {
    /// Emit a single state event.
    fn emit(&self, event: StateEvent);
}

/// No-op implementation for contexts that don't render.
#[derive(Clone, Default)]
pub struct NoOpStateEventSink;

impl StateEventSink for NoOpStateEventSink {
    fn emit(&self, _event: StateEvent) {}
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockStateEventSink {
    events: Arc<Mutex<Vec<StateEvent>>>,
}

impl MockStateEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<StateEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StateEventSink for MockStateEventSink {
    fn emit(&self, event: StateEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}
