use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::services::notification::NotificationSink;
use crate::storage::KvStore;

use super::achievements;
use super::analytics::{self, SessionReport};
use super::content::{self, PathModule};
use super::difficulty::{self, AnswerReview};
use super::progress::{LoadSource, ProgressStore, SaveOutcome};
use super::review::ReviewScheduler;
use super::types::{
    Achievement, Difficulty, LearningStyle, ProgressEvent, ProgressState, SessionState,
};

/// Owns the learner's cumulative progress, the current session, and the
/// review scheduler. Handlers and tests receive it explicitly; there is no
/// process-wide instance.
pub struct LearningEngine {
    progress: ProgressState,
    session: SessionState,
    progress_store: ProgressStore,
    scheduler: ReviewScheduler,
    sink: Option<Arc<dyn NotificationSink>>,
    load_source: LoadSource,
}

impl LearningEngine {
    pub fn new(store: KvStore, sink: Option<Arc<dyn NotificationSink>>) -> Self {
        let progress_store = ProgressStore::new(store.clone());
        let (progress, load_source) = progress_store.load();

        Self {
            progress,
            session: SessionState::new(Utc::now()),
            progress_store,
            scheduler: ReviewScheduler::new(store),
            sink,
            load_source,
        }
    }

    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn load_source(&self) -> LoadSource {
        self.load_source
    }

    /// Applies one progress event and persists the full state. Returns the
    /// achievements newly unlocked by this event.
    pub fn update_progress(&mut self, event: ProgressEvent) -> Vec<Achievement> {
        let mut unlocked = Vec::new();

        match event {
            ProgressEvent::LessonCompleted => {
                self.progress.completed_lessons += 1;
                self.progress.overall_progress = (self.progress.overall_progress + 2).min(100);
                unlocked = achievements::check_for_achievements(
                    &mut self.progress,
                    &self.session,
                    self.sink.as_ref(),
                );
            }
            ProgressEvent::QuestionAnswered => {
                self.session.questions_asked += 1;
            }
            ProgressEvent::ConceptLearned(concept) => {
                if self.session.learn_concept(&concept) {
                    self.progress.skills_learned += 1;
                }
            }
            ProgressEvent::StudyTime(ms) => {
                self.progress.study_time_ms += ms.max(0);
            }
        }

        self.save();
        unlocked
    }

    pub fn record_interaction(&mut self) -> u64 {
        self.session.interactions += 1;
        self.session.interactions
    }

    /// One difficulty step per reviewed answer; persists even when the
    /// level is already clamped.
    pub fn adapt_difficulty(&mut self, answer: AnswerReview) -> Difficulty {
        self.progress.preferred_difficulty =
            difficulty::adapt(self.progress.preferred_difficulty, answer);
        self.save();
        self.progress.preferred_difficulty
    }

    pub fn schedule_review(&self, concept: &str, score: f64, now: DateTime<Utc>) -> i64 {
        self.scheduler.schedule_review(concept, score, now)
    }

    pub fn due_reviews(&self, now: DateTime<Utc>) -> Vec<String> {
        self.scheduler.due_reviews(now)
    }

    pub fn analyze_session(&self, now: DateTime<Utc>) -> SessionReport {
        analytics::analyze(&self.session, now)
    }

    /// Content template filled for the learner; explicit style/difficulty
    /// override the profile, unrecognized values fall back together.
    pub fn personalized_content(
        &self,
        topic: &str,
        style: Option<&str>,
        difficulty: Option<&str>,
    ) -> String {
        let style = style.map_or(Some(self.progress.learning_style), LearningStyle::parse);
        let difficulty =
            difficulty.map_or(Some(self.progress.preferred_difficulty), Difficulty::parse);
        content::render_template(style, difficulty, topic)
    }

    /// Module list for a target skill; the level defaults to the learner's
    /// preferred difficulty.
    pub fn learning_path(&self, target_skill: &str, current_level: Option<&str>) -> Vec<PathModule> {
        let level = current_level.map_or(self.progress.preferred_difficulty, |value| {
            Difficulty::parse(value).unwrap_or(Difficulty::Beginner)
        });
        content::learning_path(target_skill, level)
    }

    fn save(&self) -> SaveOutcome {
        self.progress_store.save(&self.progress)
    }
}
