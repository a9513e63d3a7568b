//! Notification domain models.

use serde::{Deserialize, Serialize};

use crate::documents::OrderBy;
use crate::gateway::{Entity, EntityKind};
use crate::validation::{ensure_not_blank, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    BillDue,
    GoalAchieved,
    BudgetExceeded,
    TransactionAdded,
}

impl NotificationType {
    /// Icon shown when a notification carries none of its own.
    pub fn default_icon(&self) -> &'static str {
        match self {
            NotificationType::BillDue => "⚡",
            NotificationType::GoalAchieved => "🎉",
            NotificationType::BudgetExceeded => "⚠️",
            NotificationType::TransactionAdded => "💳",
        }
    }
}

/// Domain model representing a notification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub timestamp: String,
    pub icon: String,
}

/// Input model for creating a new notification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub timestamp: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationUpdate {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub notification_type: Option<NotificationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl NotificationUpdate {
    pub fn mark_read() -> Self {
        Self {
            read: Some(true),
            ..Default::default()
        }
    }
}

impl NewNotification {
    pub fn validate(&self) -> ValidationResult {
        ensure_not_blank("title", &self.title)?;
        ensure_not_blank("timestamp", &self.timestamp)
    }
}

impl Entity for Notification {
    type New = NewNotification;
    type Update = NotificationUpdate;

    const KIND: EntityKind = EntityKind::Notification;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_new(id: String, new: NewNotification) -> Self {
        Self {
            id,
            notification_type: new.notification_type,
            title: new.title,
            message: new.message,
            read: new.read,
            timestamp: new.timestamp,
            icon: new.icon,
        }
    }

    fn apply_update(&mut self, update: &NotificationUpdate) {
        if let Some(notification_type) = update.notification_type {
            self.notification_type = notification_type;
        }
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(message) = &update.message {
            self.message = message.clone();
        }
        if let Some(read) = update.read {
            self.read = read;
        }
        if let Some(timestamp) = &update.timestamp {
            self.timestamp = timestamp.clone();
        }
        if let Some(icon) = &update.icon {
            self.icon = icon.clone();
        }
    }

    fn default_order() -> OrderBy {
        OrderBy::desc("timestamp")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&NotificationType::BillDue).unwrap(),
            "\"bill_due\""
        );
        assert_eq!(
            serde_json::from_str::<NotificationType>("\"budget_exceeded\"").unwrap(),
            NotificationType::BudgetExceeded
        );
    }

    #[test]
    fn test_mark_read_update_only_writes_read() {
        let json = serde_json::to_value(NotificationUpdate::mark_read()).unwrap();
        assert_eq!(json, serde_json::json!({"read": true}));
    }
}
