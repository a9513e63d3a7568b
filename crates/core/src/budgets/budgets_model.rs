//! Budget domain models.

use serde::{Deserialize, Serialize};

use crate::documents::OrderBy;
use crate::gateway::{Entity, EntityKind};
use crate::validation::{ensure_non_negative, ensure_not_blank, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Monthly,
    Weekly,
    Yearly,
}

/// Domain model representing a budget.
///
/// `spent` may exceed `total`; an over-budget state is valid and displayed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub name: String,
    pub total: f64,
    pub spent: f64,
    pub currency: String,
    pub icon: String,
    pub period: BudgetPeriod,
}

/// Input model for creating a new budget
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub name: String,
    pub total: f64,
    pub spent: f64,
    pub currency: String,
    pub icon: String,
    pub period: BudgetPeriod,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<BudgetPeriod>,
}

impl Budget {
    pub fn is_over_budget(&self) -> bool {
        self.spent > self.total
    }
}

impl NewBudget {
    pub fn validate(&self) -> ValidationResult {
        ensure_not_blank("name", &self.name)?;
        ensure_non_negative("total", self.total)?;
        ensure_non_negative("spent", self.spent)
    }
}

impl Entity for Budget {
    type New = NewBudget;
    type Update = BudgetUpdate;

    const KIND: EntityKind = EntityKind::Budget;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_new(id: String, new: NewBudget) -> Self {
        Self {
            id,
            name: new.name,
            total: new.total,
            spent: new.spent,
            currency: new.currency,
            icon: new.icon,
            period: new.period,
        }
    }

    fn apply_update(&mut self, update: &BudgetUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(total) = update.total {
            self.total = total;
        }
        if let Some(spent) = update.spent {
            self.spent = spent;
        }
        if let Some(currency) = &update.currency {
            self.currency = currency.clone();
        }
        if let Some(icon) = &update.icon {
            self.icon = icon.clone();
        }
        if let Some(period) = update.period {
            self.period = period;
        }
    }

    fn default_order() -> OrderBy {
        OrderBy::asc("name")
    }
}
