//! Capture the Pawn game state.

use crate::board::Square;
use crate::games::Feedback;
use crate::movement::PieceKind;
use crate::session::StreakTracker;

/// Ticks of success feedback before the next puzzle (1.5 seconds).
pub const FEEDBACK_TICKS: u32 = 15;

/// One capture puzzle: a white piece, one pawn it can take, two it cannot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapturePuzzle {
    pub kind: PieceKind,
    /// The white piece's square.
    pub piece: Square,
    /// The one pawn inside the piece's attack set.
    pub capturable: Square,
    /// Two decoy pawns outside the attack set.
    pub decoys: [Square; 2],
}

impl CapturePuzzle {
    /// All three pawn squares, capturable first.
    pub fn pawns(&self) -> [Square; 3] {
        [self.capturable, self.decoys[0], self.decoys[1]]
    }

    pub fn has_pawn_at(&self, square: Square) -> bool {
        self.pawns().contains(&square)
    }
}

/// Active capture-trainer session.
#[derive(Debug, Clone)]
pub struct CaptureGame {
    pub puzzle: CapturePuzzle,
    /// Board cursor, moved with the arrow keys.
    pub cursor: Square,
    /// The selected piece square, if any. At most one selection at a time.
    pub selected: Option<Square>,
    pub tracker: StreakTracker,
    /// Latched on the first wrong capture for this puzzle.
    pub hint_shown: bool,
    pub feedback: Feedback,
    /// Countdown to the next puzzle while feedback is `Correct`.
    pub feedback_ticks: u32,
}

impl CaptureGame {
    pub fn new(puzzle: CapturePuzzle, best_streak: u32) -> Self {
        Self {
            puzzle,
            cursor: Square::new(4, 3),
            selected: None,
            tracker: StreakTracker::with_best(best_streak),
            hint_shown: false,
            feedback: Feedback::None,
            feedback_ticks: 0,
        }
    }

    pub fn move_cursor(&mut self, dc: i8, dr: i8) {
        let col = (self.cursor.col as i8 + dc).clamp(0, 7) as u8;
        let row = (self.cursor.row as i8 + dr).clamp(0, 7) as u8;
        self.cursor = Square::new(col, row);
    }

    /// Whether the current puzzle has been solved and is waiting out the
    /// feedback delay.
    pub fn is_resolved(&self) -> bool {
        self.feedback == Feedback::Correct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_puzzle() -> CapturePuzzle {
        CapturePuzzle {
            kind: PieceKind::Rook,
            piece: Square::new(0, 0),
            capturable: Square::new(5, 0),
            decoys: [Square::new(2, 3), Square::new(6, 5)],
        }
    }

    #[test]
    fn test_new_game_starts_unselected() {
        let game = CaptureGame::new(sample_puzzle(), 3);
        assert!(game.selected.is_none());
        assert!(!game.hint_shown);
        assert_eq!(game.feedback, Feedback::None);
        assert_eq!(game.tracker.best_streak, 3);
    }

    #[test]
    fn test_pawns_lists_all_three() {
        let puzzle = sample_puzzle();
        let pawns = puzzle.pawns();
        assert_eq!(pawns.len(), 3);
        assert!(puzzle.has_pawn_at(Square::new(5, 0)));
        assert!(puzzle.has_pawn_at(Square::new(2, 3)));
        assert!(!puzzle.has_pawn_at(Square::new(0, 0)));
    }

    #[test]
    fn test_cursor_clamps_to_board() {
        let mut game = CaptureGame::new(sample_puzzle(), 0);
        game.cursor = Square::new(0, 0);
        game.move_cursor(-1, -1);
        assert_eq!(game.cursor, Square::new(0, 0));
        game.cursor = Square::new(7, 7);
        game.move_cursor(1, 1);
        assert_eq!(game.cursor, Square::new(7, 7));
        game.move_cursor(-1, 0);
        assert_eq!(game.cursor, Square::new(6, 7));
    }
}
