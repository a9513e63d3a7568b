use std::fmt::Write;

use fintrack_core::seed::{demo_dataset, seed_remote_store};

use crate::main_lib::AppState;

/// Writes the demo dataset. Refuses to write into a store that already has
/// records unless `force` is set.
pub async fn run(state: &AppState, force: bool) -> anyhow::Result<String> {
    if !force {
        state.store.load_all().await?;
        let snapshot = state.store.snapshot();
        let existing = snapshot.cards.len()
            + snapshot.goals.len()
            + snapshot.bills.len()
            + snapshot.transactions.len()
            + snapshot.budgets.len()
            + snapshot.notifications.len();
        if existing > 0 {
            tracing::warn!("Refusing to seed a store that already holds {} records", existing);
            return Ok(format!(
                "Store already holds {} records; rerun with --force to seed anyway.",
                existing
            ));
        }
    }

    let report = seed_remote_store(&state.gateways, demo_dataset()).await?;

    let mut out = String::new();
    writeln!(out, "Seeded {} records:", report.total())?;
    writeln!(out, "  cards          {}", report.cards)?;
    writeln!(out, "  goals          {}", report.goals)?;
    writeln!(out, "  bills          {}", report.bills)?;
    writeln!(out, "  transactions   {}", report.transactions)?;
    writeln!(out, "  budgets        {}", report.budgets)?;
    writeln!(out, "  notifications  {}", report.notifications)?;
    write!(out, "  user profile   written")?;
    Ok(out)
}
