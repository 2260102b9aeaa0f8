//! Terminal rendering. Scenes are thin views over the game structs; all
//! decisions live in the logic modules so the scenes stay untested glue.

pub mod board_grid;
pub mod capture_scene;
pub mod game_common;
pub mod menu_scene;
pub mod naming_scene;
