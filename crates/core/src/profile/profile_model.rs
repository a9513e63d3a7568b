//! User profile domain models.

use serde::{Deserialize, Serialize};

use crate::constants::PROFILE_DOCUMENT_ID;

/// Domain model for the user profile. Exactly one exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_timezone() -> String {
    "UTC".to_string()
}

/// Placeholder shown until a stored profile is loaded.
impl Default for UserProfile {
    fn default() -> Self {
        Self {
            id: PROFILE_DOCUMENT_ID.to_string(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            currency: default_currency(),
            timezone: default_timezone(),
            avatar: None,
        }
    }
}

/// Partial profile update; only supplied fields are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl UserProfile {
    pub fn apply_update(&mut self, update: &ProfileUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(email) = &update.email {
            self.email = email.clone();
        }
        if let Some(phone) = &update.phone {
            self.phone = phone.clone();
        }
        if let Some(currency) = &update.currency {
            self.currency = currency.clone();
        }
        if let Some(timezone) = &update.timezone {
            self.timezone = timezone.clone();
        }
        if let Some(avatar) = &update.avatar {
            self.avatar = Some(avatar.clone());
        }
    }
}

impl From<UserProfile> for ProfileUpdate {
    fn from(profile: UserProfile) -> Self {
        Self {
            name: Some(profile.name),
            email: Some(profile.email),
            phone: Some(profile.phone),
            currency: Some(profile.currency),
            timezone: Some(profile.timezone),
            avatar: profile.avatar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document_fills_defaults() {
        let profile: UserProfile =
            serde_json::from_value(serde_json::json!({"id": "current", "name": "Habiba"}))
                .unwrap();
        assert_eq!(profile.name, "Habiba");
        assert_eq!(profile.currency, "USD");
        assert_eq!(profile.timezone, "UTC");
        assert!(profile.email.is_empty());
    }

    #[test]
    fn test_apply_update_merges_supplied_fields() {
        let mut profile = UserProfile::default();
        profile.apply_update(&ProfileUpdate {
            currency: Some("AED".to_string()),
            avatar: Some("avatar.png".to_string()),
            ..Default::default()
        });
        assert_eq!(profile.currency, "AED");
        assert_eq!(profile.avatar.as_deref(), Some("avatar.png"));
        assert_eq!(profile.timezone, "UTC");
    }
}
