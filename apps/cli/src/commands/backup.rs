use fintrack_storage_sqlite::backup_database;

use crate::main_lib::AppState;

pub fn run(state: &AppState, path: &str) -> anyhow::Result<String> {
    backup_database(&state.db_path, path)?;
    Ok(format!("Backed up {} to {}", state.db_path, path))
}
