use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::learning::analytics::SessionReport;
use crate::learning::content::PathModule;
use crate::learning::difficulty::AnswerReview;
use crate::learning::types::{Achievement, Difficulty, ProgressEvent, ProgressState};
use crate::response::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEventResponse {
    pub progress: ProgressState,
    pub new_achievements: Vec<Achievement>,
}

#[derive(Debug, Serialize)]
pub struct AchievementsResponse {
    pub achievements: Vec<Achievement>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResponse {
    pub preferred_difficulty: Difficulty,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleReviewRequest {
    pub concept: String,
    pub score: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleReviewResponse {
    pub concept: String,
    pub next_review: i64,
}

#[derive(Debug, Serialize)]
pub struct DueReviewsResponse {
    pub due: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct InteractionResponse {
    pub interactions: u64,
}

#[derive(Debug, Deserialize)]
pub struct ContentRequest {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ContentResponse {
    pub content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathRequest {
    #[serde(default)]
    pub target_skill: String,
    #[serde(default)]
    pub current_level: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PathResponse {
    pub modules: Vec<PathModule>,
}

pub async fn progress(State(state): State<AppState>) -> Json<ProgressState> {
    Json(state.engine().read().progress().clone())
}

pub async fn progress_event(
    State(state): State<AppState>,
    Json(event): Json<ProgressEvent>,
) -> Json<ProgressEventResponse> {
    let mut engine = state.engine().write();
    let new_achievements = engine.update_progress(event);

    Json(ProgressEventResponse {
        progress: engine.progress().clone(),
        new_achievements,
    })
}

pub async fn achievements(State(state): State<AppState>) -> Json<AchievementsResponse> {
    Json(AchievementsResponse {
        achievements: state.engine().read().progress().achievements.clone(),
    })
}

pub async fn answer(
    State(state): State<AppState>,
    Json(review): Json<AnswerReview>,
) -> Json<AnswerResponse> {
    let preferred_difficulty = state.engine().write().adapt_difficulty(review);
    Json(AnswerResponse {
        preferred_difficulty,
    })
}

pub async fn schedule_review(
    State(state): State<AppState>,
    Json(request): Json<ScheduleReviewRequest>,
) -> Result<Json<ScheduleReviewResponse>, AppError> {
    let concept = request.concept.trim();
    if concept.is_empty() {
        return Err(AppError::bad_request("Concept is required"));
    }
    if !(0.0..=1.0).contains(&request.score) {
        return Err(AppError::bad_request("Score must be between 0 and 1"));
    }

    let next_review = state
        .engine()
        .read()
        .schedule_review(concept, request.score, Utc::now());

    Ok(Json(ScheduleReviewResponse {
        concept: concept.to_string(),
        next_review,
    }))
}

pub async fn due_reviews(State(state): State<AppState>) -> Json<DueReviewsResponse> {
    Json(DueReviewsResponse {
        due: state.engine().read().due_reviews(Utc::now()),
    })
}

pub async fn interaction(State(state): State<AppState>) -> Json<InteractionResponse> {
    Json(InteractionResponse {
        interactions: state.engine().write().record_interaction(),
    })
}

pub async fn analytics(State(state): State<AppState>) -> Json<SessionReport> {
    Json(state.engine().read().analyze_session(Utc::now()))
}

pub async fn content(
    State(state): State<AppState>,
    Json(request): Json<ContentRequest>,
) -> Result<Json<ContentResponse>, AppError> {
    let topic = request.topic.trim();
    if topic.is_empty() {
        return Err(AppError::bad_request("Topic is required"));
    }

    let content = state.engine().read().personalized_content(
        topic,
        request.style.as_deref(),
        request.difficulty.as_deref(),
    );

    Ok(Json(ContentResponse { content }))
}

pub async fn path(
    State(state): State<AppState>,
    Json(request): Json<PathRequest>,
) -> Result<Json<PathResponse>, AppError> {
    let target_skill = request.target_skill.trim();
    if target_skill.is_empty() {
        return Err(AppError::bad_request("Target skill is required"));
    }

    let modules = state
        .engine()
        .read()
        .learning_path(target_skill, request.current_level.as_deref());

    Ok(Json(PathResponse { modules }))
}
