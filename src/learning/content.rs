use serde::Serialize;

use super::types::{Difficulty, LearningStyle};

/// Fixed content template per (style, difficulty) pair.
pub fn content_template(style: LearningStyle, difficulty: Difficulty) -> &'static str {
    use Difficulty::*;
    use LearningStyle::*;

    match (style, difficulty) {
        (Visual, Beginner) => {
            "Let me show you {topic} with simple diagrams and step-by-step visual examples."
        }
        (Visual, Intermediate) => {
            "Here's {topic} explained with interactive code examples and visual representations."
        }
        (Visual, Advanced) => {
            "Let's explore {topic} through complex scenarios and architectural diagrams."
        }
        (Auditory, Beginner) => {
            "I'll explain {topic} using analogies and verbal descriptions you can easily follow."
        }
        (Auditory, Intermediate) => {
            "Let's discuss {topic} with detailed explanations and real-world examples."
        }
        (Auditory, Advanced) => {
            "I'll walk you through {topic} with comprehensive analysis and discussion."
        }
        (Kinesthetic, Beginner) => {
            "Let's learn {topic} by building simple, hands-on examples together."
        }
        (Kinesthetic, Intermediate) => {
            "We'll master {topic} through interactive coding exercises and practical projects."
        }
        (Kinesthetic, Advanced) => {
            "Let's dive deep into {topic} with complex, real-world implementation challenges."
        }
    }
}

/// Fills the template for the given style/difficulty; either missing falls
/// back to the visual/intermediate template.
pub fn render_template(
    style: Option<LearningStyle>,
    difficulty: Option<Difficulty>,
    topic: &str,
) -> String {
    let template = match (style, difficulty) {
        (Some(style), Some(difficulty)) => content_template(style, difficulty),
        _ => content_template(LearningStyle::Visual, Difficulty::Intermediate),
    };
    template.replace("{topic}", topic)
}

/// String-keyed entry point: unrecognized style or difficulty falls back to
/// the visual/intermediate template.
pub fn generate_content(style: &str, difficulty: &str, topic: &str) -> String {
    render_template(LearningStyle::parse(style), Difficulty::parse(difficulty), topic)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathModule {
    pub name: &'static str,
    pub difficulty: Difficulty,
    pub estimated_time: &'static str,
}

const JAVASCRIPT_PATH: &[PathModule] = &[
    PathModule {
        name: "Variables & Data Types",
        difficulty: Difficulty::Beginner,
        estimated_time: "2h",
    },
    PathModule {
        name: "Functions & Scope",
        difficulty: Difficulty::Beginner,
        estimated_time: "3h",
    },
    PathModule {
        name: "Objects & Arrays",
        difficulty: Difficulty::Intermediate,
        estimated_time: "4h",
    },
    PathModule {
        name: "DOM Manipulation",
        difficulty: Difficulty::Intermediate,
        estimated_time: "5h",
    },
    PathModule {
        name: "Async Programming",
        difficulty: Difficulty::Advanced,
        estimated_time: "6h",
    },
    PathModule {
        name: "Advanced Patterns",
        difficulty: Difficulty::Advanced,
        estimated_time: "8h",
    },
];

const PYTHON_PATH: &[PathModule] = &[
    PathModule {
        name: "Python Basics",
        difficulty: Difficulty::Beginner,
        estimated_time: "3h",
    },
    PathModule {
        name: "Data Structures",
        difficulty: Difficulty::Intermediate,
        estimated_time: "4h",
    },
    PathModule {
        name: "Object-Oriented Programming",
        difficulty: Difficulty::Intermediate,
        estimated_time: "5h",
    },
    PathModule {
        name: "Libraries & Frameworks",
        difficulty: Difficulty::Advanced,
        estimated_time: "8h",
    },
];

/// Ordered module list for a target skill, trimmed to start one difficulty
/// rank below the learner's current level (clamped at the first module).
pub fn learning_path(target_skill: &str, current_level: Difficulty) -> Vec<PathModule> {
    let path: &[PathModule] = match target_skill.to_ascii_lowercase().as_str() {
        "javascript" => JAVASCRIPT_PATH,
        "python" => PYTHON_PATH,
        _ => JAVASCRIPT_PATH,
    };

    let start = current_level.rank().saturating_sub(1);
    path[start..].to_vec()
}

/// String-keyed entry point; an unrecognized level behaves as beginner.
pub fn generate_path(target_skill: &str, current_level: &str) -> Vec<PathModule> {
    let level = Difficulty::parse(current_level).unwrap_or(Difficulty::Beginner);
    learning_path(target_skill, level)
}
