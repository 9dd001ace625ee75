use crate::storage::KvStore;

use super::types::ProgressState;

pub const PROGRESS_KEY: &str = "learningProgress";

/// Where a loaded state came from, so callers and tests can observe
/// degraded persistence instead of scraping logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Persisted,
    DefaultFallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Degraded,
}

#[derive(Debug, Clone)]
pub struct ProgressStore {
    store: KvStore,
}

impl ProgressStore {
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    /// Loads the persisted state merged over the seed profile. Any read or
    /// parse failure falls back entirely to the defaults; never propagates.
    pub fn load(&self) -> (ProgressState, LoadSource) {
        match self.store.read::<ProgressState>(PROGRESS_KEY) {
            Ok(Some(state)) => (normalize(state), LoadSource::Persisted),
            Ok(None) => (ProgressState::default(), LoadSource::DefaultFallback),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load learning progress, using defaults");
                (ProgressState::default(), LoadSource::DefaultFallback)
            }
        }
    }

    /// Writes the full state. A write failure degrades silently: the state
    /// stays correct in memory and the outcome records the miss.
    pub fn save(&self, state: &ProgressState) -> SaveOutcome {
        match self.store.write(PROGRESS_KEY, state) {
            Ok(()) => SaveOutcome::Saved,
            Err(err) => {
                tracing::warn!(error = %err, "failed to save learning progress");
                SaveOutcome::Degraded
            }
        }
    }
}

// Re-establishes the state invariants on data that was edited or persisted
// by an older build: overall progress in [0,100], achievements unique by id.
fn normalize(mut state: ProgressState) -> ProgressState {
    state.overall_progress = state.overall_progress.clamp(0, 100);

    let mut seen = std::collections::HashSet::new();
    state.achievements.retain(|a| seen.insert(a.id.clone()));

    state
}
