//! Capture the Pawn trainer.

pub mod logic;
pub mod types;

pub use logic::CaptureInput;
pub use types::{CaptureGame, CapturePuzzle};
