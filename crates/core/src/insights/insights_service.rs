use std::collections::HashMap;

use super::insights_model::{
    BillFilter, BudgetProgress, CashflowSummary, ChartDatum, GoalProgress, SearchHit,
    SearchScope, TransactionFilter,
};
use crate::bills::{Bill, BillStatus};
use crate::budgets::Budget;
use crate::cards::Card;
use crate::gateway::EntityKind;
use crate::goals::Goal;
use crate::notifications::Notification;
use crate::state::AppSnapshot;
use crate::transactions::{Transaction, TransactionType};

const CATEGORY_PALETTE: [&str; 10] = [
    "#a8e6cf", "#ffadad", "#ffd3b6", "#dcedc1", "#ffd93d", "#6bcf7f", "#4d96ff", "#9b59b6",
    "#e74c3c", "#f39c12",
];

/// Chart colour for a spending category.
pub fn category_color(category: &str) -> &'static str {
    CATEGORY_PALETTE[category.chars().count() % CATEGORY_PALETTE.len()]
}

/// Split of income into budget, goals and savings shown on the home screen.
pub fn income_allocation_chart() -> Vec<ChartDatum> {
    vec![
        ChartDatum::new("Budget", 55.0).with_color("#a8e6cf"),
        ChartDatum::new("Goals", 25.0).with_color("#ffadad"),
        ChartDatum::new("Savings", 20.0).with_color("#ffd3b6"),
    ]
}

pub fn total_balance(cards: &[Card]) -> f64 {
    cards.iter().map(|c| c.balance).sum()
}

pub fn cashflow_summary(transactions: &[Transaction]) -> CashflowSummary {
    let total_income: f64 = transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum();
    let total_expenses = transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum::<f64>()
        .abs();

    CashflowSummary {
        total_income,
        total_expenses,
        net_savings: total_income - total_expenses,
    }
}

/// Absolute expense totals per category, largest first.
pub fn spending_by_category(transactions: &[Transaction]) -> Vec<ChartDatum> {
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for t in transactions.iter().filter(|t| t.is_expense()) {
        let entry = totals.entry(t.category.as_str()).or_insert_with(|| {
            order.push(t.category.as_str());
            0.0
        });
        *entry += t.amount.abs();
    }

    let mut data: Vec<ChartDatum> = order
        .into_iter()
        .map(|category| {
            ChartDatum::new(category, totals[category]).with_color(category_color(category))
        })
        .collect();
    data.sort_by(|a, b| b.value.total_cmp(&a.value));
    data
}

pub fn top_spending_categories(transactions: &[Transaction], limit: usize) -> Vec<ChartDatum> {
    let mut data = spending_by_category(transactions);
    data.truncate(limit);
    data
}

pub fn budget_progress(budget: &Budget) -> BudgetProgress {
    let percent_used = if budget.total > 0.0 {
        budget.spent / budget.total * 100.0
    } else {
        0.0
    };
    BudgetProgress {
        budget_id: budget.id.clone(),
        percent_used,
        remaining: budget.total - budget.spent,
        over_budget: budget.is_over_budget(),
    }
}

pub fn goal_progress(goal: &Goal) -> GoalProgress {
    let percent = if goal.target > 0.0 {
        goal.current / goal.target * 100.0
    } else {
        0.0
    };
    GoalProgress {
        goal_id: goal.id.clone(),
        percent,
        remaining: (goal.target - goal.current).max(0.0),
        achieved: goal.target > 0.0 && goal.current >= goal.target,
    }
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

pub fn filter_bills(bills: &[Bill], filter: BillFilter) -> Vec<Bill> {
    bills
        .iter()
        .filter(|b| match filter {
            BillFilter::All => true,
            BillFilter::Paid => b.status == BillStatus::Paid,
            BillFilter::Unpaid => b.status == BillStatus::Unpaid,
        })
        .cloned()
        .collect()
}

pub fn filter_transactions(
    transactions: &[Transaction],
    filter: TransactionFilter,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| match filter {
            TransactionFilter::All => true,
            TransactionFilter::Expense => t.transaction_type == TransactionType::Expense,
            TransactionFilter::Income => t.transaction_type == TransactionType::Income,
        })
        .cloned()
        .collect()
}

fn signed_display(amount: f64) -> String {
    let sign = if amount < 0.0 { '-' } else { '+' };
    format!("{}{}", sign, amount.abs())
}

/// Case-insensitive substring search across the cached collections.
///
/// A blank query matches nothing. Hits come back grouped by kind in the
/// order cards, goals, bills, transactions, budgets.
pub fn search(snapshot: &AppSnapshot, query: &str, scope: SearchScope) -> Vec<SearchHit> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<(EntityKind, String, String, String, String)> = Vec::new();
    candidates.extend(snapshot.cards.iter().map(|c| {
        (
            EntityKind::Card,
            c.id.clone(),
            c.name.clone(),
            format!("•••• {}", c.last_four),
            format!("{} {}", c.name, c.last_four),
        )
    }));
    candidates.extend(snapshot.goals.iter().map(|g| {
        (
            EntityKind::Goal,
            g.id.clone(),
            g.name.clone(),
            format!("{} / {} {}", g.current, g.target, g.currency),
            format!("{} {}", g.name, g.icon),
        )
    }));
    candidates.extend(snapshot.bills.iter().map(|b| {
        (
            EntityKind::Bill,
            b.id.clone(),
            b.name.clone(),
            format!("{} {}", b.amount, b.currency),
            format!("{} {}", b.name, b.icon),
        )
    }));
    candidates.extend(snapshot.transactions.iter().map(|t| {
        (
            EntityKind::Transaction,
            t.id.clone(),
            t.name.clone(),
            format!("{} • {} {}", t.category, signed_display(t.amount), t.currency),
            format!("{} {} {}", t.name, t.description, t.category),
        )
    }));
    candidates.extend(snapshot.budgets.iter().map(|b| {
        (
            EntityKind::Budget,
            b.id.clone(),
            b.name.clone(),
            format!("{} / {} {}", b.spent, b.total, b.currency),
            format!("{} {}", b.name, b.icon),
        )
    }));

    candidates
        .into_iter()
        .filter(|(kind, ..)| scope.includes(*kind))
        .filter(|(.., text)| text.to_lowercase().contains(&needle))
        .map(|(kind, id, title, subtitle, _)| SearchHit {
            kind,
            id,
            title,
            subtitle,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::Entity;
    use crate::seed::demo_dataset;

    fn demo_snapshot() -> AppSnapshot {
        let dataset = demo_dataset();
        let mut snapshot = AppSnapshot::default();
        snapshot.cards = dataset
            .cards
            .into_iter()
            .enumerate()
            .map(|(i, c)| Card::from_new(format!("c{}", i), c))
            .collect();
        snapshot.transactions = dataset
            .transactions
            .into_iter()
            .enumerate()
            .map(|(i, t)| Transaction::from_new(format!("t{}", i), t))
            .collect();
        snapshot.budgets = dataset
            .budgets
            .into_iter()
            .enumerate()
            .map(|(i, b)| Budget::from_new(format!("b{}", i), b))
            .collect();
        snapshot
    }

    #[test]
    fn test_cashflow_summary_of_demo_transactions() {
        let snapshot = demo_snapshot();
        let summary = cashflow_summary(&snapshot.transactions);
        assert_eq!(summary.total_income, 154.0);
        assert_eq!(summary.total_expenses, 254.0);
        assert_eq!(summary.net_savings, -100.0);
    }

    #[test]
    fn test_spending_by_category_sorted_and_coloured() {
        let snapshot = demo_snapshot();
        let data = spending_by_category(&snapshot.transactions);
        let names: Vec<_> = data.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Shopping", "Healthcare", "Food"]);
        assert_eq!(data[2].value, 54.0);
        assert_eq!(data[2].color.as_deref(), Some(category_color("Food")));
        assert_eq!(category_color("Food"), "#ffd93d");

        assert_eq!(top_spending_categories(&snapshot.transactions, 1).len(), 1);
    }

    #[test]
    fn test_budget_and_goal_progress() {
        let snapshot = demo_snapshot();
        let medicines = snapshot
            .budgets
            .iter()
            .find(|b| b.name == "Medicines")
            .unwrap();
        let progress = budget_progress(medicines);
        assert_eq!(progress.percent_used, 40.0);
        assert_eq!(progress.remaining, 300.0);
        assert!(!progress.over_budget);

        let goal = Goal {
            id: "g".to_string(),
            name: "Vacations".to_string(),
            target: 0.0,
            current: 0.0,
            currency: "USD".to_string(),
            icon: String::new(),
            due_date: None,
        };
        assert_eq!(goal_progress(&goal).percent, 0.0);
        assert!(!goal_progress(&goal).achieved);
    }

    #[test]
    fn test_filters() {
        let snapshot = demo_snapshot();
        assert_eq!(
            filter_transactions(&snapshot.transactions, TransactionFilter::Income).len(),
            1
        );
        assert_eq!(
            filter_transactions(&snapshot.transactions, TransactionFilter::All).len(),
            4
        );
        assert!(filter_bills(&[], BillFilter::Paid).is_empty());
        assert_eq!(total_balance(&snapshot.cards), 30000.0);
    }

    #[test]
    fn test_search_is_case_insensitive_and_scoped() {
        let snapshot = demo_snapshot();

        assert!(search(&snapshot, "   ", SearchScope::All).is_empty());

        let hits = search(&snapshot, "google pay", SearchScope::All);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|h| h.kind == EntityKind::Transaction));

        let hits = search(&snapshot, "0123", SearchScope::Cards);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].subtitle, "•••• 0123");

        assert!(search(&snapshot, "0123", SearchScope::Budgets).is_empty());

        let hits = search(&snapshot, "refund", SearchScope::Transactions);
        assert_eq!(hits[0].subtitle, "Refund • +154 USD");
    }
}
