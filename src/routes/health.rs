use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

use super::now_iso;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    timestamp: String,
    uptime: u64,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "tutor-backend",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: now_iso(),
        uptime: state.uptime_seconds(),
    })
}
