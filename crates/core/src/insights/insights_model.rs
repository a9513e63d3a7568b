//! Insight models.

use serde::{Deserialize, Serialize};

use crate::gateway::EntityKind;

/// One slice or bar of a chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartDatum {
    pub name: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ChartDatum {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Income versus expenses over a set of transactions.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashflowSummary {
    pub total_income: f64,
    /// Absolute value of all expenses.
    pub total_expenses: f64,
    pub net_savings: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetProgress {
    pub budget_id: String,
    pub percent_used: f64,
    /// Negative when over budget.
    pub remaining: f64,
    pub over_budget: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal_id: String,
    pub percent: f64,
    pub remaining: f64,
    pub achieved: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillFilter {
    #[default]
    All,
    Paid,
    Unpaid,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionFilter {
    #[default]
    All,
    Expense,
    Income,
}

/// Which entity kinds a search covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    #[default]
    All,
    Cards,
    Goals,
    Bills,
    Transactions,
    Budgets,
}

impl SearchScope {
    pub fn includes(&self, kind: EntityKind) -> bool {
        match self {
            SearchScope::All => true,
            SearchScope::Cards => kind == EntityKind::Card,
            SearchScope::Goals => kind == EntityKind::Goal,
            SearchScope::Bills => kind == EntityKind::Bill,
            SearchScope::Transactions => kind == EntityKind::Transaction,
            SearchScope::Budgets => kind == EntityKind::Budget,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub kind: EntityKind,
    pub id: String,
    pub title: String,
    pub subtitle: String,
}
