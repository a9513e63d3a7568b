//! Goals domain models.

use serde::{Deserialize, Serialize};

use crate::documents::{deserialize_nullable, OrderBy};
use crate::errors::ValidationError;
use crate::gateway::{Entity, EntityKind};
use crate::validation::{ensure_non_negative, ensure_not_blank, ValidationResult};

/// Domain model representing a savings goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target: f64,
    pub current: f64,
    pub currency: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

/// Input model for creating a new goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub target: f64,
    pub current: f64,
    pub currency: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// `Some(None)` removes the due date.
    #[serde(
        default,
        deserialize_with = "deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<Option<String>>,
}

impl NewGoal {
    /// Checks `0 <= current <= target`.
    pub fn validate(&self) -> ValidationResult {
        ensure_not_blank("name", &self.name)?;
        ensure_non_negative("target", self.target)?;
        ensure_non_negative("current", self.current)?;
        if self.current > self.target {
            return Err(ValidationError::InvariantViolated(format!(
                "current amount {} exceeds target {}",
                self.current, self.target
            )));
        }
        Ok(())
    }
}

impl Entity for Goal {
    type New = NewGoal;
    type Update = GoalUpdate;

    const KIND: EntityKind = EntityKind::Goal;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_new(id: String, new: NewGoal) -> Self {
        Self {
            id,
            name: new.name,
            target: new.target,
            current: new.current,
            currency: new.currency,
            icon: new.icon,
            due_date: new.due_date,
        }
    }

    fn apply_update(&mut self, update: &GoalUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(target) = update.target {
            self.target = target;
        }
        if let Some(current) = update.current {
            self.current = current;
        }
        if let Some(currency) = &update.currency {
            self.currency = currency.clone();
        }
        if let Some(icon) = &update.icon {
            self.icon = icon.clone();
        }
        if let Some(due_date) = &update.due_date {
            self.due_date = due_date.clone();
        }
    }

    fn default_order() -> OrderBy {
        OrderBy::asc("name")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_goal(target: f64, current: f64) -> NewGoal {
        NewGoal {
            name: "Vacations".to_string(),
            target,
            current,
            currency: "USD".to_string(),
            icon: "🏠".to_string(),
            due_date: None,
        }
    }

    #[test]
    fn test_validate_current_within_target() {
        assert!(new_goal(1000.0, 200.0).validate().is_ok());
        assert!(new_goal(1000.0, 1000.0).validate().is_ok());
        assert!(matches!(
            new_goal(1000.0, 1200.0).validate(),
            Err(ValidationError::InvariantViolated(_))
        ));
        assert!(new_goal(1000.0, -1.0).validate().is_err());
    }

    #[test]
    fn test_missing_due_date_is_omitted() {
        let goal = Goal::from_new("g1".to_string(), new_goal(10.0, 1.0));
        let json = serde_json::to_value(&goal).unwrap();
        assert!(json.get("dueDate").is_none());

        let parsed: Goal = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, goal);
    }

    #[test]
    fn test_update_can_set_and_clear_due_date() {
        let mut goal = Goal::from_new("g1".to_string(), new_goal(10.0, 1.0));

        goal.apply_update(&GoalUpdate {
            due_date: Some(Some("2025-06-01".to_string())),
            ..Default::default()
        });
        assert_eq!(goal.due_date.as_deref(), Some("2025-06-01"));

        goal.apply_update(&GoalUpdate {
            current: Some(2.0),
            ..Default::default()
        });
        assert_eq!(goal.due_date.as_deref(), Some("2025-06-01"));

        goal.apply_update(&GoalUpdate {
            due_date: Some(None),
            ..Default::default()
        });
        assert_eq!(goal.due_date, None);
    }
}
