//! Name the Square input handling and answer evaluation.

use super::types::{NamingGame, ANSWER_LEN, FEEDBACK_TICKS};
use crate::board::Square;
use crate::games::{Feedback, RoundOutcome};
use rand::Rng;

/// UI-agnostic input events for the naming trainer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingInput {
    Char(char),
    Backspace,
    Enter,
}

/// Process one input event. Input is blocked while success feedback for the
/// previous answer is still on screen.
pub fn process_input(game: &mut NamingGame, input: NamingInput) -> RoundOutcome {
    if game.is_resolved() {
        return RoundOutcome::Pending;
    }

    match input {
        NamingInput::Char(c) => {
            if c.is_ascii_alphanumeric() && game.input.len() < ANSWER_LEN {
                game.input.push(c.to_ascii_lowercase());
            }
            // A full file+rank pair auto-submits, like typing in the original.
            if game.input.len() == ANSWER_LEN {
                submit(game)
            } else {
                RoundOutcome::Pending
            }
        }
        NamingInput::Backspace => {
            game.input.pop();
            RoundOutcome::Pending
        }
        NamingInput::Enter => submit(game),
    }
}

/// Evaluate the buffered answer against the target. An empty buffer is a
/// no-op rather than a wrong answer.
fn submit(game: &mut NamingGame) -> RoundOutcome {
    let answer = game.input.trim().to_lowercase();
    if answer.is_empty() {
        return RoundOutcome::Pending;
    }

    if answer == game.target.name() {
        let new_best = game.tracker.record_success(game.hint_shown);
        game.feedback = Feedback::Correct;
        game.feedback_ticks = FEEDBACK_TICKS;
        RoundOutcome::Correct { new_best }
    } else {
        game.tracker.record_failure();
        game.feedback = Feedback::Wrong;
        game.hint_shown = true;
        game.input.clear();
        RoundOutcome::Wrong
    }
}

/// Advance the feedback countdown; picks the next square when it expires.
pub fn tick(game: &mut NamingGame, rng: &mut impl Rng) {
    if !game.is_resolved() {
        return;
    }
    if game.feedback_ticks > 0 {
        game.feedback_ticks -= 1;
        return;
    }
    next_square(game, rng);
}

/// Replace the target and clear all per-puzzle state. The hint latch resets
/// here, so each square allows at most one hint.
pub fn next_square(game: &mut NamingGame, rng: &mut impl Rng) {
    game.target = Square::random(rng);
    game.input.clear();
    game.hint_shown = false;
    game.feedback = Feedback::None;
    game.feedback_ticks = 0;
}
