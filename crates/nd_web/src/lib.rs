use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use nd_core::Result;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/digest", get(handlers::get_digest))
        .route("/api/refresh", post(handlers::refresh))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub async fn serve(addr: &str, state: AppState) -> Result<()> {
    let app = create_app(state).await;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🌐 Listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

pub mod prelude {
    pub use crate::AppState;
    pub use nd_core::{NewsDigest, Result, Snapshot};
}
