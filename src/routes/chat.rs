use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::response::AppError;
use crate::services::llm_provider::LlmError;
use crate::state::AppState;

use super::now_iso;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatContext {
    pub level: Option<i64>,
    pub streak: Option<i64>,
    pub completed_lessons: Option<i64>,
    pub current_topic: Option<String>,
    pub learning_style: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub context: Option<ChatContext>,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub response: String,
    pub timestamp: String,
}

pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    let message = payload.message.trim();
    if message.is_empty() {
        return Err(AppError::bad_request("Message is required"));
    }

    let context = payload.context.unwrap_or_default();
    let system = system_prompt(&context);

    match state.llm().complete(&system, message).await {
        Ok(response) => Ok(Json(ChatReply {
            response,
            timestamp: now_iso(),
        })),
        Err(LlmError::NotConfigured(_)) => Err(AppError::internal("LLM API key not configured")),
        Err(err) => {
            tracing::error!(error = %err, "chat completion failed");
            Err(AppError::internal_with_message(
                "Failed to process request",
                "I apologize, but I encountered an issue. Please try again.",
            ))
        }
    }
}

pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

fn system_prompt(context: &ChatContext) -> String {
    let level = context
        .level
        .map(|v| v.to_string())
        .unwrap_or_else(|| "Intermediate".to_string());
    let streak = context.streak.unwrap_or(7);
    let completed_lessons = context.completed_lessons.unwrap_or(24);
    let current_topic = context
        .current_topic
        .as_deref()
        .unwrap_or("JavaScript Advanced Concepts");
    let learning_style = context
        .learning_style
        .as_deref()
        .unwrap_or("Visual and hands-on");

    format!(
        "You are an expert AI Learning Tutor with deep knowledge across multiple subjects \
and exceptional teaching abilities.

CORE TEACHING CAPABILITIES:
- Adaptive explanations based on the student's current level
- Breaking down complex concepts into digestible parts
- Providing relevant examples and analogies
- Creating engaging practice problems and exercises
- Offering constructive feedback and encouragement
- Identifying knowledge gaps and addressing them

STUDENT CONTEXT:
- Current level: {level}
- Learning streak: {streak} days
- Completed lessons: {completed_lessons}
- Current topic: {current_topic}
- Learning style: {learning_style}

TEACHING PRINCIPLES:
1. Always start with what the student knows
2. Use the Socratic method - ask guiding questions
3. Provide multiple explanation approaches (visual, conceptual, practical)
4. Include real-world applications and examples
5. Encourage active learning through practice
6. Celebrate progress and maintain motivation
7. Adapt difficulty based on student responses

RESPONSE GUIDELINES:
- Be encouraging and supportive
- Use clear, jargon-free language (unless teaching technical terms)
- Include practical examples and code snippets when relevant
- Suggest follow-up questions or practice exercises
- Use emojis sparingly but effectively for engagement
- Keep responses focused and actionable
- Always end with a question or suggestion to continue learning

Remember: Your goal is to help students truly understand concepts, not just memorize \
them. Focus on building confidence and fostering a love of learning."
    )
}
