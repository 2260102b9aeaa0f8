//! Capture the Pawn puzzle generation, selection handling, and evaluation.

use super::types::{CaptureGame, CapturePuzzle, FEEDBACK_TICKS};
use crate::board::Square;
use crate::games::{Feedback, RoundOutcome};
use crate::movement::{attack_squares, PieceKind};
use rand::Rng;

/// Random draws allowed when placing the two decoy pawns.
pub const MAX_DECOY_ATTEMPTS: usize = 100;

/// Whole-puzzle regeneration attempts before falling back to a fixed puzzle.
/// The rejection probability is tiny on an 8x8 board, so the fallback is a
/// termination guarantee rather than something players will ever see.
pub const MAX_PUZZLE_ATTEMPTS: usize = 100;

/// UI-agnostic input events for the capture trainer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureInput {
    Up,
    Down,
    Left,
    Right,
    /// Enter: select the piece, or attempt a capture on a pawn.
    Select,
    /// Esc: clear the current selection.
    Cancel,
}

/// Generate a valid puzzle, retrying whole generations on constraint failure.
pub fn generate_puzzle(rng: &mut impl Rng) -> CapturePuzzle {
    for _ in 0..MAX_PUZZLE_ATTEMPTS {
        if let Some(puzzle) = try_generate(rng) {
            return puzzle;
        }
    }
    fallback_puzzle()
}

/// One generation attempt. Fails when the attack set is empty or the decoy
/// placement budget runs out.
fn try_generate(rng: &mut impl Rng) -> Option<CapturePuzzle> {
    let kind = PieceKind::random(rng);
    let piece = Square::random(rng);

    let attacks = attack_squares(kind, piece);
    if attacks.is_empty() {
        return None;
    }

    let capturable = attacks[rng.gen_range(0..attacks.len())];

    let mut decoys: Vec<Square> = Vec::with_capacity(2);
    for _ in 0..MAX_DECOY_ATTEMPTS {
        if decoys.len() == 2 {
            break;
        }
        let candidate = Square::random(rng);
        let clashes = candidate == piece
            || candidate == capturable
            || attacks.contains(&candidate)
            || decoys.contains(&candidate);
        if !clashes {
            decoys.push(candidate);
        }
    }
    if decoys.len() < 2 {
        return None;
    }

    Some(CapturePuzzle {
        kind,
        piece,
        capturable,
        decoys: [decoys[0], decoys[1]],
    })
}

/// Known-good puzzle used only if random generation somehow keeps failing:
/// rook on a8, capturable pawn on f8, decoys off the rook's lines.
fn fallback_puzzle() -> CapturePuzzle {
    CapturePuzzle {
        kind: PieceKind::Rook,
        piece: Square::new(0, 0),
        capturable: Square::new(5, 0),
        decoys: [Square::new(2, 3), Square::new(6, 5)],
    }
}

/// Process one input event. Input is blocked while success feedback for the
/// previous capture is still on screen.
pub fn process_input(game: &mut CaptureGame, input: CaptureInput) -> RoundOutcome {
    if game.is_resolved() {
        return RoundOutcome::Pending;
    }

    match input {
        CaptureInput::Up => {
            game.move_cursor(0, -1);
            RoundOutcome::Pending
        }
        CaptureInput::Down => {
            game.move_cursor(0, 1);
            RoundOutcome::Pending
        }
        CaptureInput::Left => {
            game.move_cursor(-1, 0);
            RoundOutcome::Pending
        }
        CaptureInput::Right => {
            game.move_cursor(1, 0);
            RoundOutcome::Pending
        }
        CaptureInput::Select => process_select(game),
        CaptureInput::Cancel => {
            game.selected = None;
            RoundOutcome::Pending
        }
    }
}

/// The selection state machine: no selection + piece -> select; selection +
/// pawn -> evaluate the capture; selection + anything else -> deselect.
fn process_select(game: &mut CaptureGame) -> RoundOutcome {
    match game.selected {
        None => {
            if game.cursor == game.puzzle.piece {
                game.selected = Some(game.cursor);
                game.feedback = Feedback::None;
            }
            RoundOutcome::Pending
        }
        Some(_) => {
            if game.puzzle.has_pawn_at(game.cursor) {
                evaluate_capture(game)
            } else {
                game.selected = None;
                RoundOutcome::Pending
            }
        }
    }
}

fn evaluate_capture(game: &mut CaptureGame) -> RoundOutcome {
    if game.cursor == game.puzzle.capturable {
        let new_best = game.tracker.record_success(game.hint_shown);
        game.feedback = Feedback::Correct;
        game.feedback_ticks = FEEDBACK_TICKS;
        game.selected = None;
        RoundOutcome::Correct { new_best }
    } else {
        game.tracker.record_failure();
        game.feedback = Feedback::Wrong;
        game.hint_shown = true;
        game.selected = None;
        RoundOutcome::Wrong
    }
}

/// Advance the feedback countdown; generates the next puzzle when it expires.
pub fn tick(game: &mut CaptureGame, rng: &mut impl Rng) {
    if !game.is_resolved() {
        return;
    }
    if game.feedback_ticks > 0 {
        game.feedback_ticks -= 1;
        return;
    }
    next_puzzle(game, rng);
}

/// Replace the puzzle and clear all per-puzzle state.
pub fn next_puzzle(game: &mut CaptureGame, rng: &mut impl Rng) {
    game.puzzle = generate_puzzle(rng);
    game.selected = None;
    game.hint_shown = false;
    game.feedback = Feedback::None;
    game.feedback_ticks = 0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn scripted_game() -> CaptureGame {
        // Rook on a8, capturable pawn on f8, decoys off the rook's lines.
        CaptureGame::new(fallback_puzzle(), 0)
    }

    fn select_at(game: &mut CaptureGame, square: Square) -> RoundOutcome {
        game.cursor = square;
        process_input(game, CaptureInput::Select)
    }

    #[test]
    fn test_generated_puzzles_satisfy_invariants() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..500 {
            let puzzle = generate_puzzle(&mut rng);
            let attacks = attack_squares(puzzle.kind, puzzle.piece);

            assert!(attacks.contains(&puzzle.capturable));
            for decoy in puzzle.decoys {
                assert!(!attacks.contains(&decoy));
            }

            let occupied = [
                puzzle.piece,
                puzzle.capturable,
                puzzle.decoys[0],
                puzzle.decoys[1],
            ];
            for (i, a) in occupied.iter().enumerate() {
                for b in &occupied[i + 1..] {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_fallback_puzzle_is_valid() {
        let puzzle = fallback_puzzle();
        let attacks = attack_squares(puzzle.kind, puzzle.piece);
        assert!(attacks.contains(&puzzle.capturable));
        assert!(!attacks.contains(&puzzle.decoys[0]));
        assert!(!attacks.contains(&puzzle.decoys[1]));
    }

    #[test]
    fn test_select_piece_then_capture() {
        let mut game = scripted_game();

        let outcome = select_at(&mut game, Square::new(0, 0));
        assert_eq!(outcome, RoundOutcome::Pending);
        assert_eq!(game.selected, Some(Square::new(0, 0)));

        let outcome = select_at(&mut game, Square::new(5, 0));
        assert_eq!(outcome, RoundOutcome::Correct { new_best: true });
        assert_eq!(game.tracker.score, 1);
        assert_eq!(game.tracker.streak, 1);
        assert_eq!(game.feedback, Feedback::Correct);
        assert!(game.selected.is_none());
    }

    #[test]
    fn test_select_on_empty_square_is_noop() {
        let mut game = scripted_game();
        let outcome = select_at(&mut game, Square::new(4, 4));
        assert_eq!(outcome, RoundOutcome::Pending);
        assert!(game.selected.is_none());
    }

    #[test]
    fn test_select_pawn_without_selection_is_noop() {
        let mut game = scripted_game();
        let outcome = select_at(&mut game, Square::new(5, 0));
        assert_eq!(outcome, RoundOutcome::Pending);
        assert!(game.selected.is_none());
        assert_eq!(game.feedback, Feedback::None);
    }

    #[test]
    fn test_wrong_pawn_resets_streak_and_latches_hint() {
        let mut game = scripted_game();
        game.tracker.streak = 4;
        game.tracker.score = 4;

        select_at(&mut game, Square::new(0, 0));
        let outcome = select_at(&mut game, Square::new(2, 3)); // decoy
        assert_eq!(outcome, RoundOutcome::Wrong);
        assert_eq!(game.tracker.streak, 0);
        assert_eq!(game.tracker.score, 4);
        assert!(game.hint_shown);
        assert_eq!(game.feedback, Feedback::Wrong);
        assert!(game.selected.is_none()); // wrong capture deselects
    }

    #[test]
    fn test_correct_after_hint_earns_nothing() {
        let mut game = scripted_game();
        select_at(&mut game, Square::new(0, 0));
        select_at(&mut game, Square::new(6, 5)); // decoy, latches hint

        select_at(&mut game, Square::new(0, 0));
        let outcome = select_at(&mut game, Square::new(5, 0));
        assert_eq!(outcome, RoundOutcome::Correct { new_best: false });
        assert_eq!(game.tracker.score, 0);
        assert_eq!(game.tracker.streak, 0);
        assert_eq!(game.feedback, Feedback::Correct);
    }

    #[test]
    fn test_select_elsewhere_clears_selection_without_evaluation() {
        let mut game = scripted_game();
        select_at(&mut game, Square::new(0, 0));

        let outcome = select_at(&mut game, Square::new(4, 4));
        assert_eq!(outcome, RoundOutcome::Pending);
        assert!(game.selected.is_none());
        assert_eq!(game.tracker.streak, 0);
        assert_eq!(game.feedback, Feedback::None);
    }

    #[test]
    fn test_cancel_clears_selection() {
        let mut game = scripted_game();
        select_at(&mut game, Square::new(0, 0));
        assert!(game.selected.is_some());

        process_input(&mut game, CaptureInput::Cancel);
        assert!(game.selected.is_none());
    }

    #[test]
    fn test_reselecting_piece_clears_wrong_feedback() {
        let mut game = scripted_game();
        select_at(&mut game, Square::new(0, 0));
        select_at(&mut game, Square::new(2, 3));
        assert_eq!(game.feedback, Feedback::Wrong);

        select_at(&mut game, Square::new(0, 0));
        assert_eq!(game.feedback, Feedback::None);
    }

    #[test]
    fn test_input_blocked_during_success_feedback() {
        let mut game = scripted_game();
        select_at(&mut game, Square::new(0, 0));
        select_at(&mut game, Square::new(5, 0));
        assert!(game.is_resolved());

        let cursor = game.cursor;
        let outcome = process_input(&mut game, CaptureInput::Up);
        assert_eq!(outcome, RoundOutcome::Pending);
        assert_eq!(game.cursor, cursor);
    }

    #[test]
    fn test_tick_counts_down_then_regenerates() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut game = scripted_game();
        let original = game.puzzle;
        select_at(&mut game, Square::new(0, 0));
        select_at(&mut game, Square::new(5, 0));

        for _ in 0..FEEDBACK_TICKS {
            tick(&mut game, &mut rng);
            assert!(game.is_resolved());
            assert_eq!(game.puzzle, original);
        }
        tick(&mut game, &mut rng);
        assert_eq!(game.feedback, Feedback::None);
        assert!(!game.hint_shown);
        assert!(game.selected.is_none());

        // The fresh puzzle satisfies the same invariants.
        let attacks = attack_squares(game.puzzle.kind, game.puzzle.piece);
        assert!(attacks.contains(&game.puzzle.capturable));
    }

    #[test]
    fn test_tick_is_noop_while_solving() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut game = scripted_game();
        let original = game.puzzle;
        tick(&mut game, &mut rng);
        assert_eq!(game.puzzle, original);
    }
}
