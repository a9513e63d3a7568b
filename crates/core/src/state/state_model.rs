//! Application state models.

use serde::{Deserialize, Serialize};

use crate::bills::Bill;
use crate::budgets::Budget;
use crate::cards::Card;
use crate::goals::Goal;
use crate::insights::ChartDatum;
use crate::notifications::Notification;
use crate::profile::UserProfile;
use crate::transactions::Transaction;

/// Everything the presentation layer shows, as one cloneable value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppSnapshot {
    pub cards: Vec<Card>,
    pub goals: Vec<Goal>,
    pub bills: Vec<Bill>,
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub notifications: Vec<Notification>,
    pub user_profile: UserProfile,
    pub income_chart_data: Vec<ChartDatum>,
    /// True until the initial bulk load finishes or fails.
    pub loading: bool,
}
