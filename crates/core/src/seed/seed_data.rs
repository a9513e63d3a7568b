//! Demo dataset used to populate an empty store.

use crate::bills::{BillStatus, NewBill};
use crate::budgets::{BudgetPeriod, NewBudget};
use crate::cards::{CardType, NewCard};
use crate::goals::NewGoal;
use crate::notifications::{NewNotification, NotificationType};
use crate::profile::ProfileUpdate;
use crate::transactions::{NewTransaction, TransactionType};

const DEMO_CURRENCY: &str = "USD";

/// Records written by the seeder, grouped by collection.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoDataset {
    pub cards: Vec<NewCard>,
    pub goals: Vec<NewGoal>,
    pub bills: Vec<NewBill>,
    pub transactions: Vec<NewTransaction>,
    pub budgets: Vec<NewBudget>,
    pub notifications: Vec<NewNotification>,
    pub profile: ProfileUpdate,
}

impl DemoDataset {
    /// Number of collection records, excluding the profile.
    pub fn record_count(&self) -> usize {
        self.cards.len()
            + self.goals.len()
            + self.bills.len()
            + self.transactions.len()
            + self.budgets.len()
            + self.notifications.len()
    }
}

fn card(name: &str, balance: f64, last_four: &str, expiry: &str, card_type: CardType) -> NewCard {
    NewCard {
        name: name.to_string(),
        balance,
        currency: DEMO_CURRENCY.to_string(),
        last_four: last_four.to_string(),
        expiry: expiry.to_string(),
        card_type,
    }
}

fn bill(
    name: &str,
    amount: f64,
    status: BillStatus,
    due_date: &str,
    payment_method: Option<&str>,
    icon: &str,
) -> NewBill {
    NewBill {
        name: name.to_string(),
        amount,
        currency: DEMO_CURRENCY.to_string(),
        status,
        due_date: due_date.to_string(),
        payment_method: payment_method.map(str::to_string),
        icon: icon.to_string(),
    }
}

fn transaction(
    name: &str,
    amount: f64,
    category: &str,
    description: &str,
    date: &str,
    icon: &str,
) -> NewTransaction {
    let transaction_type = if amount < 0.0 {
        TransactionType::Expense
    } else {
        TransactionType::Income
    };
    NewTransaction {
        name: name.to_string(),
        amount,
        currency: DEMO_CURRENCY.to_string(),
        transaction_type,
        category: category.to_string(),
        description: description.to_string(),
        date: date.to_string(),
        icon: icon.to_string(),
    }
}

fn budget(name: &str, total: f64, spent: f64, icon: &str) -> NewBudget {
    NewBudget {
        name: name.to_string(),
        total,
        spent,
        currency: DEMO_CURRENCY.to_string(),
        icon: icon.to_string(),
        period: BudgetPeriod::Monthly,
    }
}

fn notification(
    notification_type: NotificationType,
    title: &str,
    message: &str,
    read: bool,
    timestamp: &str,
) -> NewNotification {
    NewNotification {
        notification_type,
        title: title.to_string(),
        message: message.to_string(),
        read,
        timestamp: timestamp.to_string(),
        icon: notification_type.default_icon().to_string(),
    }
}

pub fn demo_dataset() -> DemoDataset {
    DemoDataset {
        cards: vec![
            card("Primary Card Balance", 20000.0, "0123", "04/29", CardType::Primary),
            card("Card Balance", 10000.0, "4567", "12/25", CardType::Secondary),
        ],
        goals: vec![
            NewGoal {
                name: "Vacations".to_string(),
                target: 1000.0,
                current: 200.0,
                currency: DEMO_CURRENCY.to_string(),
                icon: "🏠".to_string(),
                due_date: Some("21st July, 2023".to_string()),
            },
            NewGoal {
                name: "Emergency Fund".to_string(),
                target: 5000.0,
                current: 1500.0,
                currency: DEMO_CURRENCY.to_string(),
                icon: "💰".to_string(),
                due_date: None,
            },
        ],
        bills: vec![
            bill("YouTube Premium", 54.0, BillStatus::Paid, "2022-11-13", Some("Google Pay"), "▶️"),
            bill("Google Drive", 1.0, BillStatus::Paid, "2022-11-13", Some("Google Pay"), "☁️"),
            bill("Food Panda", 25.0, BillStatus::Unpaid, "2022-11-10", None, "🐼"),
            bill("Water Bill", 85.0, BillStatus::Unpaid, "2022-11-11", None, "💧"),
            bill("Electricity", 120.0, BillStatus::Unpaid, "2022-11-11", None, "⚡"),
        ],
        transactions: vec![
            transaction("Restaurant", -54.0, "Food", "Ordered a salad", "2022-11-13", "🥗"),
            transaction(
                "Shopping",
                -100.0,
                "Shopping",
                "Paid bill via Google Pay",
                "2022-11-13",
                "🛍️",
            ),
            transaction("Refund", 154.0, "Refund", "From aliexpress.com", "2022-11-01", "🏷️"),
            transaction(
                "Dentist",
                -100.0,
                "Healthcare",
                "Paid bill via Google Pay",
                "2022-11-01",
                "🏥",
            ),
        ],
        budgets: vec![
            budget("Groceries", 2910.0, 2425.0, "🛒"),
            budget("Bills", 2910.0, 2425.0, "💵"),
            budget("Medicines", 500.0, 200.0, "💊"),
        ],
        notifications: vec![
            notification(
                NotificationType::BillDue,
                "Bill Due Soon",
                "Your electricity bill is due in 2 days",
                false,
                "2024-01-15T10:30:00Z",
            ),
            notification(
                NotificationType::GoalAchieved,
                "Goal Achieved!",
                "Congratulations! You reached your emergency fund goal",
                false,
                "2024-01-14T15:45:00Z",
            ),
            notification(
                NotificationType::BudgetExceeded,
                "Budget Exceeded",
                "You've exceeded your dining budget by $50",
                true,
                "2024-01-13T12:20:00Z",
            ),
            notification(
                NotificationType::TransactionAdded,
                "Transaction Added",
                "New transaction: $25.50 at Starbucks",
                true,
                "2024-01-12T09:15:00Z",
            ),
        ],
        profile: ProfileUpdate {
            name: Some("Habiba".to_string()),
            email: Some("habiba@example.com".to_string()),
            phone: Some("+971 50 123 4567".to_string()),
            currency: Some("AED".to_string()),
            timezone: Some("Asia/Dubai".to_string()),
            avatar: None,
        },
    }
}
