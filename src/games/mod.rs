//! The two trainers: Name the Square and Capture the Pawn.

pub mod capture;
pub mod naming;

pub use capture::{CaptureGame, CaptureInput, CapturePuzzle};
pub use naming::{NamingGame, NamingInput};

/// Milliseconds per app tick. Feedback delays are expressed in ticks.
pub const TICK_INTERVAL_MS: u64 = 100;

/// Transient feedback shown for the current puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    None,
    Correct,
    Wrong,
}

/// What processing one input did to the current puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Nothing was resolved (cursor move, typing, deselection, no-op).
    Pending,
    /// The answer was correct. `new_best` asks the caller to persist the
    /// improved best streak.
    Correct { new_best: bool },
    /// The answer was wrong.
    Wrong,
}
