//! State event sink that writes every event to the log.

use fintrack_core::events::{StateEvent, StateEventSink};

#[derive(Clone, Default)]
pub struct TracingStateEventSink;

impl StateEventSink for TracingStateEventSink {
    fn emit(&self, event: StateEvent) {
        match &event {
            StateEvent::LoadFailed { reason } => {
                tracing::warn!(reason = %reason, "State load failed")
            }
            StateEvent::MutationFailed {
                kind,
                operation,
                reason,
            } => tracing::warn!(kind = %kind, operation = %operation, reason = %reason, "Mutation failed"),
            _ => tracing::debug!(?event, "State changed"),
        }
    }
}
