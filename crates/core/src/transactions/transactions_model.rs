//! Transaction domain models.
//!
//! Amounts are signed: expenses are negative and incomes positive. The sign
//! must agree with the transaction type.

use serde::{Deserialize, Serialize};

use crate::documents::OrderBy;
use crate::errors::ValidationError;
use crate::gateway::{Entity, EntityKind};
use crate::validation::{ensure_not_blank, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Expense,
    Income,
}

impl TransactionType {
    /// Applies the sign convention to an amount of either sign.
    pub fn signed(&self, amount: f64) -> f64 {
        match self {
            TransactionType::Expense => -amount.abs(),
            TransactionType::Income => amount.abs(),
        }
    }

    /// Whether `amount` has the sign this type requires. Zero agrees with both.
    pub fn agrees_with(&self, amount: f64) -> bool {
        match self {
            TransactionType::Expense => amount <= 0.0,
            TransactionType::Income => amount >= 0.0,
        }
    }
}

/// Domain model representing a transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub currency: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category: String,
    pub description: String,
    pub date: String,
    pub icon: String,
}

/// Input model for creating a new transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub name: String,
    pub amount: f64,
    pub currency: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category: String,
    pub description: String,
    pub date: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }
}

impl NewTransaction {
    pub fn validate(&self) -> ValidationResult {
        ensure_not_blank("name", &self.name)?;
        ensure_not_blank("date", &self.date)?;
        if !self.amount.is_finite() {
            return Err(ValidationError::InvalidInput(format!(
                "amount must be a finite number, got {}",
                self.amount
            )));
        }
        if !self.transaction_type.agrees_with(self.amount) {
            return Err(ValidationError::InvariantViolated(format!(
                "amount {} does not match the sign of a {:?} transaction",
                self.amount, self.transaction_type
            )));
        }
        Ok(())
    }
}

impl Entity for Transaction {
    type New = NewTransaction;
    type Update = TransactionUpdate;

    const KIND: EntityKind = EntityKind::Transaction;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_new(id: String, new: NewTransaction) -> Self {
        Self {
            id,
            name: new.name,
            amount: new.amount,
            currency: new.currency,
            transaction_type: new.transaction_type,
            category: new.category,
            description: new.description,
            date: new.date,
            icon: new.icon,
        }
    }

    fn apply_update(&mut self, update: &TransactionUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
        if let Some(currency) = &update.currency {
            self.currency = currency.clone();
        }
        if let Some(transaction_type) = update.transaction_type {
            self.transaction_type = transaction_type;
        }
        if let Some(category) = &update.category {
            self.category = category.clone();
        }
        if let Some(description) = &update.description {
            self.description = description.clone();
        }
        if let Some(date) = &update.date {
            self.date = date.clone();
        }
        if let Some(icon) = &update.icon {
            self.icon = icon.clone();
        }
    }

    fn default_order() -> OrderBy {
        OrderBy::desc("date")
    }
}
