//! History Endpoints

use serde::Serialize;

use crate::models::HistoryEntry;

#[derive(Serialize)]
struct HistoryIdBody {
    history_id: u32,
}

pub async fn list_history() -> Result<Vec<HistoryEntry>, String> {
    super::get("history").await
}

pub async fn delete_history(history_id: u32) -> Result<(), String> {
    super::post("delete_history", &HistoryIdBody { history_id }).await
}
