//! Name the Square trainer.

pub mod logic;
pub mod types;

pub use logic::NamingInput;
pub use types::NamingGame;
