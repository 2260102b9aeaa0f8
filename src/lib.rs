//! Boardwise - terminal chess-square trainers.
//!
//! Exposes the game logic for the binary and for integration tests.

pub mod board;
pub mod build_info;
pub mod games;
pub mod hints;
pub mod movement;
pub mod session;
pub mod stats;
pub mod ui;
pub mod utils;
