mod chat;
mod health;
mod learning;

use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;

use crate::response::AppError;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/api/chat",
            post(chat::chat)
                .options(chat::preflight)
                .fallback(method_not_allowed),
        )
        .route("/api/learning/progress", get(learning::progress))
        .route("/api/learning/progress/events", post(learning::progress_event))
        .route("/api/learning/achievements", get(learning::achievements))
        .route("/api/learning/answers", post(learning::answer))
        .route("/api/learning/reviews", post(learning::schedule_review))
        .route("/api/learning/reviews/due", get(learning::due_reviews))
        .route("/api/learning/interactions", post(learning::interaction))
        .route("/api/learning/analytics", get(learning::analytics))
        .route("/api/learning/content", post(learning::content))
        .route("/api/learning/path", post(learning::path))
        .fallback(not_found)
        .with_state(state)
}

async fn method_not_allowed() -> Response {
    AppError::method_not_allowed("Method not allowed").into_response()
}

async fn not_found() -> Response {
    AppError::not_found("Not found").into_response()
}

pub(crate) fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
