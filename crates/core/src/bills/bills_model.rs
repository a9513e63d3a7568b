//! Bill domain models.

use serde::{Deserialize, Serialize};

use crate::documents::{deserialize_nullable, OrderBy};
use crate::errors::ValidationError;
use crate::gateway::{Entity, EntityKind};
use crate::validation::{ensure_non_negative, ensure_not_blank, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Paid,
    Unpaid,
}

/// Domain model representing a bill
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub currency: String,
    pub status: BillStatus,
    pub due_date: String,
    /// Only meaningful once the bill is paid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    pub icon: String,
}

/// Input model for creating a new bill
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBill {
    pub name: String,
    pub amount: f64,
    pub currency: String,
    pub status: BillStatus,
    pub due_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    pub icon: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BillUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BillStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// `Some(None)` removes the payment method.
    #[serde(
        default,
        deserialize_with = "deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub payment_method: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Bill {
    pub fn is_paid(&self) -> bool {
        self.status == BillStatus::Paid
    }
}

impl NewBill {
    pub fn validate(&self) -> ValidationResult {
        ensure_not_blank("name", &self.name)?;
        ensure_not_blank("dueDate", &self.due_date)?;
        ensure_non_negative("amount", self.amount)?;
        if self.status == BillStatus::Unpaid && self.payment_method.is_some() {
            return Err(ValidationError::InvariantViolated(
                "an unpaid bill cannot carry a payment method".to_string(),
            ));
        }
        Ok(())
    }
}

impl Entity for Bill {
    type New = NewBill;
    type Update = BillUpdate;

    const KIND: EntityKind = EntityKind::Bill;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_new(id: String, new: NewBill) -> Self {
        Self {
            id,
            name: new.name,
            amount: new.amount,
            currency: new.currency,
            status: new.status,
            due_date: new.due_date,
            payment_method: new.payment_method,
            icon: new.icon,
        }
    }

    fn apply_update(&mut self, update: &BillUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
        if let Some(currency) = &update.currency {
            self.currency = currency.clone();
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(due_date) = &update.due_date {
            self.due_date = due_date.clone();
        }
        if let Some(payment_method) = &update.payment_method {
            self.payment_method = payment_method.clone();
        }
        if let Some(icon) = &update.icon {
            self.icon = icon.clone();
        }
    }

    fn default_order() -> OrderBy {
        OrderBy::asc("dueDate")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpaid_bill_with_payment_method_is_flagged() {
        let bill = NewBill {
            name: "Water Bill".to_string(),
            amount: 85.0,
            currency: "USD".to_string(),
            status: BillStatus::Unpaid,
            due_date: "2022-11-11".to_string(),
            payment_method: Some("Google Pay".to_string()),
            icon: "💧".to_string(),
        };
        assert!(bill.validate().is_err());

        let paid = NewBill {
            status: BillStatus::Paid,
            ..bill
        };
        assert!(paid.validate().is_ok());
    }

    #[test]
    fn test_mark_paid_update_keeps_other_fields() {
        let mut bill = Bill::from_new(
            "b1".to_string(),
            NewBill {
                name: "Electricity".to_string(),
                amount: 120.0,
                currency: "USD".to_string(),
                status: BillStatus::Unpaid,
                due_date: "2022-11-11".to_string(),
                payment_method: None,
                icon: "⚡".to_string(),
            },
        );
        bill.apply_update(&BillUpdate {
            status: Some(BillStatus::Paid),
            payment_method: Some(Some("Card".to_string())),
            ..Default::default()
        });

        assert!(bill.is_paid());
        assert_eq!(bill.payment_method.as_deref(), Some("Card"));
        assert_eq!(bill.amount, 120.0);
        assert_eq!(bill.due_date, "2022-11-11");
    }

    #[test]
    fn test_marking_unpaid_clears_payment_method() {
        let mut bill = Bill::from_new(
            "b1".to_string(),
            NewBill {
                name: "Internet".to_string(),
                amount: 60.0,
                currency: "USD".to_string(),
                status: BillStatus::Paid,
                due_date: "2022-11-20".to_string(),
                payment_method: Some("Credit Card".to_string()),
                icon: "🌐".to_string(),
            },
        );
        let update = BillUpdate {
            status: Some(BillStatus::Unpaid),
            payment_method: Some(None),
            ..Default::default()
        };
        bill.apply_update(&update);

        assert!(!bill.is_paid());
        assert_eq!(bill.payment_method, None);
    }

    #[test]
    fn test_update_serializes_cleared_payment_method_as_null() {
        let cleared = BillUpdate {
            payment_method: Some(None),
            ..Default::default()
        };
        let value = serde_json::to_value(&cleared).unwrap();
        assert_eq!(value, serde_json::json!({ "paymentMethod": null }));

        let untouched = serde_json::to_value(BillUpdate::default()).unwrap();
        assert_eq!(untouched, serde_json::json!({}));

        let parsed: BillUpdate = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.payment_method, Some(None));
        let parsed: BillUpdate = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(parsed.payment_method, None);
    }
}
