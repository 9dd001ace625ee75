use std::sync::Arc;

use parking_lot::Mutex;

use tutor_backend_rust::learning::engine::LearningEngine;
use tutor_backend_rust::learning::progress::{LoadSource, ProgressStore, SaveOutcome};
use tutor_backend_rust::learning::types::{Difficulty, ProgressEvent, ProgressState};
use tutor_backend_rust::learning::difficulty::AnswerReview;
use tutor_backend_rust::services::notification::{NotificationKind, NotificationSink};
use tutor_backend_rust::storage::KvStore;

fn store_in(dir: &tempfile::TempDir) -> KvStore {
    KvStore::open(dir.path())
}

fn engine_in(dir: &tempfile::TempDir) -> LearningEngine {
    LearningEngine::new(store_in(dir), None)
}

#[derive(Default)]
struct RecordingSink {
    messages: Mutex<Vec<(String, &'static str)>>,
}

impl NotificationSink for RecordingSink {
    fn notify(&self, message: &str, kind: NotificationKind) {
        self.messages.lock().push((message.to_string(), kind.as_str()));
    }
}

#[test]
fn corrupt_persisted_progress_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("learningProgress.json"), "{not valid json").unwrap();

    let (state, source) = ProgressStore::new(store_in(&dir)).load();

    assert_eq!(source, LoadSource::DefaultFallback);
    assert_eq!(state, ProgressState::default());
}

#[test]
fn persisted_fields_win_over_defaults_field_by_field() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("learningProgress.json"),
        r#"{"level": 30, "streak": 9}"#,
    )
    .unwrap();

    let (state, source) = ProgressStore::new(store_in(&dir)).load();

    assert_eq!(source, LoadSource::Persisted);
    assert_eq!(state.level, 30);
    assert_eq!(state.streak, 9);
    assert_eq!(state.completed_lessons, 24);
    assert_eq!(state.achievements.len(), 3);
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let progress_store = ProgressStore::new(store_in(&dir));

    let mut state = ProgressState::default();
    state.completed_lessons = 40;
    assert_eq!(progress_store.save(&state), SaveOutcome::Saved);

    let (loaded, source) = progress_store.load();
    assert_eq!(source, LoadSource::Persisted);
    assert_eq!(loaded, state);
}

#[test]
fn unwritable_store_degrades_without_failing() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "x").unwrap();

    // The "directory" is a path under a regular file, so reads and writes
    // both fail at the filesystem level.
    let progress_store = ProgressStore::new(KvStore::open(blocker.join("data")));

    let (state, source) = progress_store.load();
    assert_eq!(source, LoadSource::DefaultFallback);
    assert_eq!(state, ProgressState::default());

    assert_eq!(progress_store.save(&state), SaveOutcome::Degraded);
}

#[test]
fn lesson_completed_increments_and_unlocks_once() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = engine_in(&dir);

    let unlocked = engine.update_progress(ProgressEvent::LessonCompleted);
    assert_eq!(engine.progress().completed_lessons, 25);
    assert_eq!(engine.progress().overall_progress, 75);
    assert_eq!(unlocked.len(), 1);
    assert_eq!(unlocked[0].id, "lesson_master");

    let unlocked = engine.update_progress(ProgressEvent::LessonCompleted);
    assert!(unlocked.is_empty());
    assert_eq!(
        engine
            .progress()
            .achievements
            .iter()
            .filter(|a| a.id == "lesson_master")
            .count(),
        1
    );
}

#[test]
fn progress_mutations_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut engine = engine_in(&dir);
        engine.update_progress(ProgressEvent::LessonCompleted);
        engine.update_progress(ProgressEvent::StudyTime(60_000));
    }

    let engine = engine_in(&dir);
    assert_eq!(engine.load_source(), LoadSource::Persisted);
    assert_eq!(engine.progress().completed_lessons, 25);
    assert_eq!(
        engine.progress().study_time_ms,
        18 * 60 * 60 * 1000 + 60_000
    );
    assert!(engine.progress().has_achievement("lesson_master"));
}

#[test]
fn session_questions_unlock_curious_mind_in_rule_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = engine_in(&dir);

    for _ in 0..10 {
        let unlocked = engine.update_progress(ProgressEvent::QuestionAnswered);
        assert!(unlocked.is_empty());
    }

    // Achievement rules run on lesson completion.
    let unlocked = engine.update_progress(ProgressEvent::LessonCompleted);
    let ids: Vec<&str> = unlocked.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["lesson_master", "curious_mind"]);
}

#[test]
fn concepts_count_once_per_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = engine_in(&dir);
    let baseline = engine.progress().skills_learned;

    engine.update_progress(ProgressEvent::ConceptLearned("closures".to_string()));
    engine.update_progress(ProgressEvent::ConceptLearned("closures".to_string()));
    engine.update_progress(ProgressEvent::ConceptLearned("promises".to_string()));

    assert_eq!(engine.progress().skills_learned, baseline + 2);
    assert_eq!(engine.session().concepts_learned, vec!["closures", "promises"]);
}

#[test]
fn overall_progress_clamps_at_one_hundred() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("learningProgress.json"),
        r#"{"overallProgress": 99}"#,
    )
    .unwrap();
    let mut engine = engine_in(&dir);

    engine.update_progress(ProgressEvent::LessonCompleted);
    assert_eq!(engine.progress().overall_progress, 100);

    engine.update_progress(ProgressEvent::LessonCompleted);
    assert_eq!(engine.progress().overall_progress, 100);
}

#[test]
fn achievement_unlock_notifies_the_sink() {
    let dir = tempfile::tempdir().unwrap();
    let sink = Arc::new(RecordingSink::default());
    let dyn_sink: Arc<dyn NotificationSink> = sink.clone();
    let mut engine = LearningEngine::new(store_in(&dir), Some(dyn_sink));

    engine.update_progress(ProgressEvent::LessonCompleted);

    let messages = sink.messages.lock();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].0.contains("Lesson Master"));
    assert_eq!(messages[0].1, "success");
}

#[test]
fn adapted_difficulty_is_persisted() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut engine = engine_in(&dir);
        let level = engine.adapt_difficulty(AnswerReview {
            is_correct: true,
            time_to_answer_ms: 2_000,
        });
        assert_eq!(level, Difficulty::Advanced);
    }

    let engine = engine_in(&dir);
    assert_eq!(engine.progress().preferred_difficulty, Difficulty::Advanced);
}

#[test]
fn due_reviews_split_on_the_current_instant() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_in(&dir);
    let now = chrono::Utc::now();
    let week = chrono::Duration::days(7);

    engine.schedule_review("due", 0.95, now - week - chrono::Duration::milliseconds(1));
    engine.schedule_review("not-due", 0.95, now - week + chrono::Duration::milliseconds(1));

    assert_eq!(engine.due_reviews(now), vec!["due".to_string()]);
}

#[test]
fn session_state_is_not_persisted() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut engine = engine_in(&dir);
        engine.record_interaction();
        engine.update_progress(ProgressEvent::QuestionAnswered);
    }

    let engine = engine_in(&dir);
    assert_eq!(engine.session().interactions, 0);
    assert_eq!(engine.session().questions_asked, 0);
}
