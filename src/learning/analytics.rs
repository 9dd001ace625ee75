use chrono::{DateTime, Utc};
use serde::Serialize;

use super::types::SessionState;

const BREAK_AFTER_MS: i64 = 45 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionReport {
    pub session_duration_ms: i64,
    pub session_duration: String,
    pub questions_asked: u64,
    pub questions_per_hour: f64,
    pub concepts_learned: usize,
    pub engagement_level: EngagementLevel,
    pub recommended_break: bool,
    pub next_recommendation: String,
}

/// Derives the session report. Pure: no clock access, no persisted side
/// effects. Rates over a zero-length session are defined as zero.
pub fn analyze(session: &SessionState, now: DateTime<Utc>) -> SessionReport {
    let duration_ms = (now - session.started_at).num_milliseconds().max(0);

    let questions_per_hour = if duration_ms == 0 {
        0.0
    } else {
        let hours = duration_ms as f64 / 3_600_000.0;
        round1(session.questions_asked as f64 / hours)
    };

    let engagement_level = engagement(session.interactions, duration_ms);
    let recommended_break = duration_ms > BREAK_AFTER_MS;
    let next_recommendation = recommendation(
        recommended_break,
        engagement_level,
        session.concepts_learned.len(),
    );

    SessionReport {
        session_duration_ms: duration_ms,
        session_duration: format_duration(duration_ms),
        questions_asked: session.questions_asked,
        questions_per_hour,
        concepts_learned: session.concepts_learned.len(),
        engagement_level,
        recommended_break,
        next_recommendation,
    }
}

fn engagement(interactions: u64, duration_ms: i64) -> EngagementLevel {
    if duration_ms <= 0 {
        return EngagementLevel::Low;
    }
    let per_minute = interactions as f64 / (duration_ms as f64 / 60_000.0);
    if per_minute > 2.0 {
        EngagementLevel::High
    } else if per_minute > 1.0 {
        EngagementLevel::Medium
    } else {
        EngagementLevel::Low
    }
}

// Priority: break first, then engagement, then a review nudge once three
// concepts have been covered.
fn recommendation(break_needed: bool, engagement: EngagementLevel, concepts: usize) -> String {
    if break_needed {
        "Consider taking a 10-15 minute break to maintain focus and retention."
    } else if engagement == EngagementLevel::Low {
        "Try switching to interactive practice problems to boost engagement."
    } else if concepts >= 3 {
        "Great progress! Consider reviewing what you've learned before moving to new concepts."
    } else {
        "You're doing well! Continue with the current lesson or ask questions about anything unclear."
    }
    .to_string()
}

pub fn format_duration(ms: i64) -> String {
    let seconds = ms.max(0) / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;

    if hours > 0 {
        format!("{hours}h {}m", minutes % 60)
    } else if minutes > 0 {
        format!("{minutes}m {}s", seconds % 60)
    } else {
        format!("{seconds}s")
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
