//! Card domain models.

use serde::{Deserialize, Serialize};

use crate::documents::OrderBy;
use crate::errors::ValidationError;
use crate::gateway::{Entity, EntityKind};
use crate::validation::{ensure_not_blank, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Primary,
    Secondary,
}

/// Domain model representing a payment card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    pub balance: f64,
    pub currency: String,
    pub last_four: String,
    pub expiry: String,
    #[serde(rename = "type")]
    pub card_type: CardType,
}

/// Input model for creating a new card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewCard {
    pub name: String,
    pub balance: f64,
    pub currency: String,
    pub last_four: String,
    pub expiry: String,
    #[serde(rename = "type")]
    pub card_type: CardType,
}

/// Partial card update; only supplied fields are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_four: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub card_type: Option<CardType>,
}

impl NewCard {
    pub fn validate(&self) -> ValidationResult {
        ensure_not_blank("name", &self.name)?;
        ensure_not_blank("currency", &self.currency)?;
        if self.last_four.len() != 4 || !self.last_four.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidInput(format!(
                "lastFour must be exactly four digits, got '{}'",
                self.last_four
            )));
        }
        Ok(())
    }
}

impl Entity for Card {
    type New = NewCard;
    type Update = CardUpdate;

    const KIND: EntityKind = EntityKind::Card;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_new(id: String, new: NewCard) -> Self {
        Self {
            id,
            name: new.name,
            balance: new.balance,
            currency: new.currency,
            last_four: new.last_four,
            expiry: new.expiry,
            card_type: new.card_type,
        }
    }

    fn apply_update(&mut self, update: &CardUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(balance) = update.balance {
            self.balance = balance;
        }
        if let Some(currency) = &update.currency {
            self.currency = currency.clone();
        }
        if let Some(last_four) = &update.last_four {
            self.last_four = last_four.clone();
        }
        if let Some(expiry) = &update.expiry {
            self.expiry = expiry.clone();
        }
        if let Some(card_type) = update.card_type {
            self.card_type = card_type;
        }
    }

    fn default_order() -> OrderBy {
        OrderBy::asc("name")
    }
}
