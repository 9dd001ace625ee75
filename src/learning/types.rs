use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Kinesthetic,
}

impl LearningStyle {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "visual" => Some(Self::Visual),
            "auditory" => Some(Self::Auditory),
            "kinesthetic" => Some(Self::Kinesthetic),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visual => "visual",
            Self::Auditory => "auditory",
            Self::Kinesthetic => "kinesthetic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Position on the ordered difficulty scale, beginner first.
    pub fn rank(self) -> usize {
        match self {
            Self::Beginner => 0,
            Self::Intermediate => 1,
            Self::Advanced => 2,
        }
    }

    pub fn promote(self) -> Self {
        match self {
            Self::Beginner => Self::Intermediate,
            Self::Intermediate => Self::Advanced,
            Self::Advanced => Self::Advanced,
        }
    }

    pub fn demote(self) -> Self {
        match self {
            Self::Beginner => Self::Beginner,
            Self::Intermediate => Self::Beginner,
            Self::Advanced => Self::Intermediate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentCourse {
    pub name: String,
    pub progress: i64,
    pub total_modules: i64,
}

/// Cumulative learner state, persisted under the `learningProgress` key.
/// Missing fields in persisted data fall back to the seed profile below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressState {
    pub level: i64,
    pub streak: i64,
    pub completed_lessons: i64,
    pub study_time_ms: i64,
    pub skills_learned: i64,
    pub overall_progress: i64,
    pub current_course: CurrentCourse,
    pub achievements: Vec<Achievement>,
    pub learning_style: LearningStyle,
    pub preferred_difficulty: Difficulty,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            level: 12,
            streak: 7,
            completed_lessons: 24,
            study_time_ms: 18 * 60 * 60 * 1000,
            skills_learned: 12,
            overall_progress: 73,
            current_course: CurrentCourse {
                name: "Advanced JavaScript Concepts".to_string(),
                progress: 4,
                total_modules: 7,
            },
            achievements: vec![
                Achievement {
                    id: "problem_solver".to_string(),
                    name: "Problem Solver".to_string(),
                    description: "Completed 10 coding challenges".to_string(),
                    icon: "🎯".to_string(),
                },
                Achievement {
                    id: "quick_learner".to_string(),
                    name: "Quick Learner".to_string(),
                    description: "Finished module in record time".to_string(),
                    icon: "📈".to_string(),
                },
                Achievement {
                    id: "streak_master".to_string(),
                    name: "Streak Master".to_string(),
                    description: "7 days of consistent learning".to_string(),
                    icon: "🔥".to_string(),
                },
            ],
            learning_style: LearningStyle::Visual,
            preferred_difficulty: Difficulty::Intermediate,
        }
    }
}

impl ProgressState {
    pub fn has_achievement(&self, id: &str) -> bool {
        self.achievements.iter().any(|a| a.id == id)
    }
}

/// Per-session counters. Never persisted; reset when the process restarts.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub started_at: DateTime<Utc>,
    pub interactions: u64,
    pub questions_asked: u64,
    pub concepts_learned: Vec<String>,
}

impl SessionState {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            interactions: 0,
            questions_asked: 0,
            concepts_learned: Vec::new(),
        }
    }

    /// Records a concept once per session, preserving insertion order.
    /// Returns true when the concept was not seen before.
    pub fn learn_concept(&mut self, concept: &str) -> bool {
        if self.concepts_learned.iter().any(|c| c == concept) {
            return false;
        }
        self.concepts_learned.push(concept.to_string());
        true
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ProgressEvent {
    LessonCompleted,
    QuestionAnswered,
    ConceptLearned(String),
    StudyTime(i64),
}
