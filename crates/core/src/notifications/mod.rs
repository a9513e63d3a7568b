//! Notifications module - in-app notices, newest first.

mod notifications_model;

pub use notifications_model::{
    NewNotification, Notification, NotificationType, NotificationUpdate,
};
