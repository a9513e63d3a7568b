use fintrack_core::insights::unread_count;

use crate::main_lib::AppState;

pub async fn mark_all_read(state: &AppState) -> anyhow::Result<String> {
    state.store.load_all().await?;
    if unread_count(&state.store.snapshot().notifications) == 0 {
        return Ok("No unread notifications".to_string());
    }
    let marked = state.store.mark_all_notifications_as_read().await?;
    Ok(format!("Marked {} notifications as read", marked))
}
