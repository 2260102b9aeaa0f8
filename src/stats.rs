//! Persistent trainer stats: one best streak per game, saved as JSON.

use crate::utils::persistence::{load_json_or_default, save_json};
use serde::{Deserialize, Serialize};
use std::io;

/// Stats file name inside ~/.boardwise/.
pub const STATS_FILE: &str = "stats.json";

/// Everything that survives a restart. No versioning; a missing or corrupt
/// file just starts everyone back at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerStats {
    /// Best streak in the square-naming trainer.
    #[serde(default)]
    pub naming_best_streak: u32,
    /// Best streak in the capture trainer.
    #[serde(default)]
    pub capture_best_streak: u32,
    /// Unix timestamp of the last session, for the menu footer.
    #[serde(default)]
    pub last_played: i64,
}

impl TrainerStats {
    pub fn load() -> Self {
        load_json_or_default(STATS_FILE)
    }

    pub fn save(&self) -> io::Result<()> {
        save_json(STATS_FILE, self)
    }
}
