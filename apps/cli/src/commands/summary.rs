use std::fmt::Write;

use fintrack_core::insights::{
    budget_progress, cashflow_summary, goal_progress, top_spending_categories, total_balance,
    unread_count,
};

use crate::main_lib::AppState;

const TOP_CATEGORIES: usize = 3;

pub async fn run(state: &AppState) -> anyhow::Result<String> {
    state.store.load_all().await?;
    let snapshot = state.store.snapshot();
    let currency = snapshot
        .cards
        .first()
        .map(|c| c.currency.as_str())
        .unwrap_or(snapshot.user_profile.currency.as_str());

    let mut out = String::new();
    if !snapshot.user_profile.name.is_empty() {
        writeln!(out, "Hello, {}", snapshot.user_profile.name)?;
    }
    writeln!(
        out,
        "Total balance: {:.2} {} across {} cards",
        total_balance(&snapshot.cards),
        currency,
        snapshot.cards.len()
    )?;

    let cashflow = cashflow_summary(&snapshot.transactions);
    writeln!(
        out,
        "Income {:.2} / Expenses {:.2} / Net {:.2}",
        cashflow.total_income, cashflow.total_expenses, cashflow.net_savings
    )?;

    let top = top_spending_categories(&snapshot.transactions, TOP_CATEGORIES);
    if !top.is_empty() {
        writeln!(out, "Top spending:")?;
        for category in &top {
            writeln!(out, "  {:<14} {:.2}", category.name, category.value)?;
        }
    }

    if !snapshot.budgets.is_empty() {
        writeln!(out, "Budgets:")?;
        for budget in &snapshot.budgets {
            let progress = budget_progress(budget);
            writeln!(
                out,
                "  {:<14} {:>5.1}% used, {:.2} left{}",
                budget.name,
                progress.percent_used,
                progress.remaining,
                if progress.over_budget { " (over budget)" } else { "" }
            )?;
        }
    }

    if !snapshot.goals.is_empty() {
        writeln!(out, "Goals:")?;
        for goal in &snapshot.goals {
            let progress = goal_progress(goal);
            writeln!(
                out,
                "  {:<14} {:>5.1}%{}",
                goal.name,
                progress.percent,
                if progress.achieved { " (achieved)" } else { "" }
            )?;
        }
    }

    let unpaid = snapshot.bills.iter().filter(|b| !b.is_paid()).count();
    writeln!(out, "Unpaid bills: {}", unpaid)?;
    write!(
        out,
        "Unread notifications: {}",
        unread_count(&snapshot.notifications)
    )?;
    Ok(out)
}
