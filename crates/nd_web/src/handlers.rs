use std::sync::Arc;

use axum::{extract::State, Json};
use nd_core::Snapshot;

use crate::AppState;

pub async fn get_digest(State(state): State<Arc<AppState>>) -> Json<Snapshot> {
    Json(state.newsroom.current().await)
}

pub async fn refresh(State(state): State<Arc<AppState>>) -> Json<Snapshot> {
    Json(state.newsroom.refresh(true).await)
}
