use serde::Deserialize;

use super::types::Difficulty;

// A fast correct answer promotes; a wrong or slow answer demotes.
const PROMOTE_BELOW_MS: u64 = 10_000;
const DEMOTE_ABOVE_MS: u64 = 60_000;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerReview {
    pub is_correct: bool,
    pub time_to_answer_ms: u64,
}

/// Moves the preferred difficulty at most one level per answer, clamped at
/// both ends of the scale.
pub fn adapt(current: Difficulty, answer: AnswerReview) -> Difficulty {
    if answer.is_correct && answer.time_to_answer_ms < PROMOTE_BELOW_MS {
        current.promote()
    } else if !answer.is_correct || answer.time_to_answer_ms > DEMOTE_ABOVE_MS {
        current.demote()
    } else {
        current
    }
}
