//! Name the Square game state.

use crate::board::Square;
use crate::games::Feedback;
use crate::session::StreakTracker;
use rand::Rng;

/// Ticks of success feedback before the next square appears (1 second).
pub const FEEDBACK_TICKS: u32 = 10;

/// Maximum characters the answer buffer holds (one file + one rank).
pub const ANSWER_LEN: usize = 2;

/// Active square-naming session.
#[derive(Debug, Clone)]
pub struct NamingGame {
    /// The highlighted square the learner must name.
    pub target: Square,
    /// Typed answer so far (lowercase, at most [`ANSWER_LEN`] chars).
    pub input: String,
    pub tracker: StreakTracker,
    /// Latched on the first wrong answer for this target; gates scoring and
    /// keeps the hint visible until the next square.
    pub hint_shown: bool,
    pub feedback: Feedback,
    /// Countdown to the next square while feedback is `Correct`.
    pub feedback_ticks: u32,
}

impl NamingGame {
    pub fn new(best_streak: u32, rng: &mut impl Rng) -> Self {
        Self {
            target: Square::random(rng),
            input: String::new(),
            tracker: StreakTracker::with_best(best_streak),
            hint_shown: false,
            feedback: Feedback::None,
            feedback_ticks: 0,
        }
    }

    /// Whether the current square has been answered and is waiting out the
    /// feedback delay.
    pub fn is_resolved(&self) -> bool {
        self.feedback == Feedback::Correct
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_game_starts_clean() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let game = NamingGame::new(4, &mut rng);
        assert!(game.input.is_empty());
        assert!(!game.hint_shown);
        assert_eq!(game.feedback, Feedback::None);
        assert_eq!(game.tracker.best_streak, 4);
        assert_eq!(game.tracker.score, 0);
        assert!(!game.is_resolved());
    }
}
