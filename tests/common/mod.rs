use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::Response;
use axum::Router;

use tutor_backend_rust::config::Config;
use tutor_backend_rust::create_app;
use tutor_backend_rust::services::llm_provider::LlmConfig;

pub fn test_config(data_dir: &Path) -> Config {
    Config {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        log_level: "warn".to_string(),
        data_dir: data_dir.to_path_buf(),
        llm: unreachable_llm(),
    }
}

// Points at a closed local port so chat requests fail fast without touching
// the network.
pub fn unreachable_llm() -> LlmConfig {
    LlmConfig {
        api_key: Some("test-key".to_string()),
        model: "mixtral-8x7b-32768".to_string(),
        api_endpoint: "http://127.0.0.1:1/v1".to_string(),
        timeout: Duration::from_millis(500),
    }
}

pub fn create_test_app(data_dir: &Path) -> Router {
    create_app(test_config(data_dir))
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
