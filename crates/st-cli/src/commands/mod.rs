pub mod check;
pub mod dump;
pub mod play;
pub mod rooms;

use std::path::Path;

use log::info;
use st_fiction::GameConfig;

/// Load a game definition, or the built-in one when no path is given.
fn load_config(path: Option<&Path>) -> Result<GameConfig, String> {
    match path {
        Some(p) => {
            info!("loading game definition from {}", p.display());
            GameConfig::load(p).map_err(|e| e.to_string())
        }
        None => Ok(GameConfig::builtin()),
    }
}
