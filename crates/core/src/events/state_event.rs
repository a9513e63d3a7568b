//! State event types.

use serde::{Deserialize, Serialize};

use crate::gateway::EntityKind;

/// Kind of change applied to a cached collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Added,
    Updated,
    Deleted,
}

/// Events emitted by the application state store.
///
/// Every successful change to in-memory state produces exactly one event;
/// failed mutations produce `MutationFailed` and leave state untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StateEvent {
    /// The bulk load finished and every collection was populated.
    Loaded,

    /// The bulk load failed; the loading flag is cleared regardless.
    LoadFailed { reason: String },

    /// Records of one collection were added, updated or deleted.
    EntitiesChanged {
        kind: EntityKind,
        change: ChangeKind,
        ids: Vec<String>,
    },

    /// The user profile was merged with an update.
    ProfileChanged,

    /// A remote write failed; nothing changed locally.
    MutationFailed {
        kind: EntityKind,
        operation: String,
        reason: String,
    },
}

impl StateEvent {
    pub fn entities_changed(kind: EntityKind, change: ChangeKind, ids: Vec<String>) -> Self {
        Self::EntitiesChanged { kind, change, ids }
    }

    pub fn mutation_failed(kind: EntityKind, operation: &str, reason: String) -> Self {
        Self::MutationFailed {
            kind,
            operation: operation.to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_event_serialization() {
        let event =
            StateEvent::entities_changed(EntityKind::Card, ChangeKind::Added, vec!["c1".into()]);

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("entities_changed"));
        assert!(json.contains("\"kind\":\"card\""));

        let deserialized: StateEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, event);
    }

    #[test]
    fn test_mutation_failed_serialization() {
        let event = StateEvent::mutation_failed(
            EntityKind::Budget,
            "update",
            "Document not found: budgets/x".to_string(),
        );
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "mutation_failed");
        assert_eq!(json["operation"], "update");
    }
}
