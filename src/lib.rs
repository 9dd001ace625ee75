#![allow(dead_code)]

pub mod config;
pub mod learning;
pub mod logging;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;

use std::sync::Arc;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::learning::engine::LearningEngine;
use crate::services::llm_provider::LlmClient;
use crate::services::notification::{NotificationSink, TracingSink};
use crate::state::AppState;
use crate::storage::KvStore;

pub fn create_app(config: Config) -> axum::Router {
    let store = KvStore::open(&config.data_dir);
    let sink: Arc<dyn NotificationSink> = Arc::new(TracingSink);
    let engine = LearningEngine::new(store, Some(sink));
    let llm = LlmClient::new(config.llm);
    let state = AppState::new(engine, llm);

    routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
