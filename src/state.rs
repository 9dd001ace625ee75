use std::sync::Arc;
use std::time::{Instant, SystemTime};

use parking_lot::RwLock;

use crate::learning::engine::LearningEngine;
use crate::services::llm_provider::LlmClient;

#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    started_at_system: SystemTime,
    engine: Arc<RwLock<LearningEngine>>,
    llm: Arc<LlmClient>,
}

impl AppState {
    pub fn new(engine: LearningEngine, llm: LlmClient) -> Self {
        Self {
            started_at: Instant::now(),
            started_at_system: SystemTime::now(),
            engine: Arc::new(RwLock::new(engine)),
            llm: Arc::new(llm),
        }
    }

    /// The learning engine; mutating handlers take the write guard so state
    /// transitions run to completion one at a time.
    pub fn engine(&self) -> &RwLock<LearningEngine> {
        &self.engine
    }

    pub fn llm(&self) -> &LlmClient {
        &self.llm
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn started_at_system(&self) -> SystemTime {
        self.started_at_system
    }
}
