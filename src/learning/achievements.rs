use std::sync::Arc;

use crate::services::notification::{NotificationKind, NotificationSink};

use super::types::{Achievement, ProgressState, SessionState};

struct AchievementRule {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    unlocked: fn(&ProgressState, &SessionState) -> bool,
}

fn lesson_master_unlocked(progress: &ProgressState, _session: &SessionState) -> bool {
    progress.completed_lessons >= 25
}

fn curious_mind_unlocked(_progress: &ProgressState, session: &SessionState) -> bool {
    session.questions_asked >= 10
}

// Evaluated in order; each rule can unlock at most once per profile.
const RULES: &[AchievementRule] = &[
    AchievementRule {
        id: "lesson_master",
        name: "Lesson Master",
        description: "Completed 25 lessons",
        icon: "📚",
        unlocked: lesson_master_unlocked,
    },
    AchievementRule {
        id: "curious_mind",
        name: "Curious Mind",
        description: "Asked 10 questions in one session",
        icon: "🤔",
        unlocked: curious_mind_unlocked,
    },
];

/// Appends any newly unlocked achievements in rule order, firing one
/// best-effort notification per unlock. Re-running with unchanged state
/// adds nothing.
pub fn check_for_achievements(
    progress: &mut ProgressState,
    session: &SessionState,
    sink: Option<&Arc<dyn NotificationSink>>,
) -> Vec<Achievement> {
    let mut unlocked = Vec::new();

    for rule in RULES {
        if progress.has_achievement(rule.id) {
            continue;
        }
        if !(rule.unlocked)(progress, session) {
            continue;
        }

        let achievement = Achievement {
            id: rule.id.to_string(),
            name: rule.name.to_string(),
            description: rule.description.to_string(),
            icon: rule.icon.to_string(),
        };

        if let Some(sink) = sink {
            sink.notify(
                &format!("🎉 Achievement Unlocked: {}!", achievement.name),
                NotificationKind::Success,
            );
        }

        progress.achievements.push(achievement.clone());
        unlocked.push(achievement);
    }

    unlocked
}
