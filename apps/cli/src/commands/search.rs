use std::fmt::Write;

use fintrack_core::insights::{search, SearchScope};

use crate::main_lib::AppState;

pub async fn run(state: &AppState, query: &str) -> anyhow::Result<String> {
    state.store.load_all().await?;
    let hits = search(&state.store.snapshot(), query, SearchScope::All);
    if hits.is_empty() {
        return Ok(format!("No matches for '{}'", query.trim()));
    }

    let mut out = String::new();
    writeln!(out, "{} matches for '{}':", hits.len(), query.trim())?;
    for (i, hit) in hits.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write!(out, "  [{}] {} - {}", hit.kind, hit.title, hit.subtitle)?;
    }
    Ok(out)
}
