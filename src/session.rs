//! Score and streak tracking shared by both trainers.

/// In-memory counters for one trainer session. `best_streak` is seeded from
/// the persisted stats and only ever grows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakTracker {
    /// Total unaided correct answers this session.
    pub score: u32,
    /// Consecutive unaided correct answers.
    pub streak: u32,
    /// Highest streak ever observed, across sessions.
    pub best_streak: u32,
}

impl StreakTracker {
    pub fn with_best(best_streak: u32) -> Self {
        Self {
            score: 0,
            streak: 0,
            best_streak,
        }
    }

    /// Record a correct answer. Aided answers (a hint was shown for the
    /// puzzle) earn no score or streak. Returns `true` when a new best
    /// streak was reached, so the caller can persist it.
    pub fn record_success(&mut self, aided: bool) -> bool {
        if !aided {
            self.score += 1;
            self.streak += 1;
        }
        if self.streak > self.best_streak {
            self.best_streak = self.streak;
            true
        } else {
            false
        }
    }

    /// Record a wrong answer: the streak resets unconditionally.
    pub fn record_failure(&mut self) {
        self.streak = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unaided_success_increments_score_and_streak() {
        let mut tracker = StreakTracker::default();
        let new_best = tracker.record_success(false);
        assert_eq!(tracker.score, 1);
        assert_eq!(tracker.streak, 1);
        assert_eq!(tracker.best_streak, 1);
        assert!(new_best);
    }

    #[test]
    fn test_aided_success_changes_nothing() {
        let mut tracker = StreakTracker::default();
        let new_best = tracker.record_success(true);
        assert_eq!(tracker.score, 0);
        assert_eq!(tracker.streak, 0);
        assert_eq!(tracker.best_streak, 0);
        assert!(!new_best);
    }

    #[test]
    fn test_failure_resets_streak_but_not_score() {
        let mut tracker = StreakTracker::default();
        tracker.record_success(false);
        tracker.record_success(false);
        tracker.record_failure();
        assert_eq!(tracker.streak, 0);
        assert_eq!(tracker.score, 2);
    }

    #[test]
    fn test_best_streak_is_monotonic() {
        let mut tracker = StreakTracker::with_best(5);
        for _ in 0..3 {
            tracker.record_success(false);
        }
        assert_eq!(tracker.best_streak, 5);

        tracker.record_failure();
        assert_eq!(tracker.best_streak, 5);

        for _ in 0..6 {
            tracker.record_success(false);
        }
        assert_eq!(tracker.best_streak, 6);
    }

    #[test]
    fn test_new_best_reported_only_on_improvement() {
        let mut tracker = StreakTracker::with_best(2);
        assert!(!tracker.record_success(false)); // streak 1
        assert!(!tracker.record_success(false)); // streak 2, ties best
        assert!(tracker.record_success(false)); // streak 3, new best
        assert!(tracker.record_success(false)); // streak 4, new best again
    }
}
