use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::storage::KvStore;

pub const REVIEWS_KEY: &str = "scheduledReviews";

/// Concept name to next-due epoch milliseconds.
pub type ReviewSchedule = HashMap<String, i64>;

/// Review interval for a recall score in [0,1], first matching threshold
/// wins.
pub fn interval_for(score: f64) -> Duration {
    if score >= 0.9 {
        Duration::days(7)
    } else if score >= 0.7 {
        Duration::days(3)
    } else if score >= 0.5 {
        Duration::days(1)
    } else {
        Duration::hours(4)
    }
}

#[derive(Debug, Clone)]
pub struct ReviewScheduler {
    store: KvStore,
}

impl ReviewScheduler {
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    /// Schedules the next review for a concept, overwriting any existing
    /// entry, and persists the whole schedule. Returns the due timestamp
    /// in epoch milliseconds.
    pub fn schedule_review(&self, concept: &str, score: f64, now: DateTime<Utc>) -> i64 {
        let due = (now + interval_for(score)).timestamp_millis();

        let mut schedule = self.scheduled_reviews();
        schedule.insert(concept.to_string(), due);

        if let Err(err) = self.store.write(REVIEWS_KEY, &schedule) {
            tracing::warn!(error = %err, concept, "failed to persist review schedule");
        }

        due
    }

    /// The full persisted schedule; a read failure yields an empty map.
    pub fn scheduled_reviews(&self) -> ReviewSchedule {
        match self.store.read::<ReviewSchedule>(REVIEWS_KEY) {
            Ok(Some(schedule)) => schedule,
            Ok(None) => ReviewSchedule::new(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load review schedule, starting empty");
                ReviewSchedule::new()
            }
        }
    }

    /// Concepts whose scheduled time is at or before `now`, ordered by due
    /// time then name for deterministic output.
    pub fn due_reviews(&self, now: DateTime<Utc>) -> Vec<String> {
        let now_ms = now.timestamp_millis();
        let mut due: Vec<(String, i64)> = self
            .scheduled_reviews()
            .into_iter()
            .filter(|(_, at)| *at <= now_ms)
            .collect();
        due.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        due.into_iter().map(|(concept, _)| concept).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduler() -> (tempfile::TempDir, ReviewScheduler) {
        let dir = tempfile::tempdir().unwrap();
        let scheduler = ReviewScheduler::new(KvStore::open(dir.path()));
        (dir, scheduler)
    }

    #[test]
    fn high_score_schedules_seven_days_out() {
        let (_dir, scheduler) = scheduler();
        let now = Utc::now();

        let due = scheduler.schedule_review("closures", 0.95, now);

        assert_eq!(due, (now + Duration::days(7)).timestamp_millis());
    }

    #[test]
    fn interval_thresholds() {
        assert_eq!(interval_for(0.9), Duration::days(7));
        assert_eq!(interval_for(0.7), Duration::days(3));
        assert_eq!(interval_for(0.5), Duration::days(1));
        assert_eq!(interval_for(0.49), Duration::hours(4));
        assert_eq!(interval_for(0.0), Duration::hours(4));
    }

    #[test]
    fn rescheduling_overwrites_the_entry() {
        let (_dir, scheduler) = scheduler();
        let now = Utc::now();

        scheduler.schedule_review("closures", 0.95, now);
        let due = scheduler.schedule_review("closures", 0.3, now);

        let schedule = scheduler.scheduled_reviews();
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule["closures"], due);
        assert_eq!(due, (now + Duration::hours(4)).timestamp_millis());
    }

    #[test]
    fn due_boundary_is_inclusive() {
        let (_dir, scheduler) = scheduler();
        let now = Utc::now();

        scheduler.schedule_review("past", 0.95, now - Duration::days(7) - Duration::milliseconds(1));
        scheduler.schedule_review("future", 0.95, now - Duration::days(7) + Duration::milliseconds(1));

        assert_eq!(scheduler.due_reviews(now), vec!["past".to_string()]);
    }

    #[test]
    fn due_reviews_sorted_by_due_time_then_name() {
        let (_dir, scheduler) = scheduler();
        let now = Utc::now();
        let base = now - Duration::days(8);

        scheduler.schedule_review("b", 0.95, base);
        scheduler.schedule_review("a", 0.95, base);
        scheduler.schedule_review("earlier", 0.95, base - Duration::days(1));

        assert_eq!(
            scheduler.due_reviews(now),
            vec!["earlier".to_string(), "a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn unreadable_schedule_fails_open() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("scheduledReviews.json"), "not json").unwrap();
        let scheduler = ReviewScheduler::new(KvStore::open(dir.path()));

        assert!(scheduler.scheduled_reviews().is_empty());
        assert!(scheduler.due_reviews(Utc::now()).is_empty());
    }
}
