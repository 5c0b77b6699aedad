//! Game settings
//!
//! Read from LocalStorage on the web; from the JSON file named by
//! `CENTIPEDE_SETTINGS` natively.

use serde::{Deserialize, Serialize};

use crate::sim::{GameMode, GameState};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Which game to run
    pub mode: GameMode,
    /// Fixed run seed (random per run when unset)
    pub seed: Option<u64>,
    /// Balance overrides
    pub tuning: Tuning,
    /// Draw the tile grid under the field
    pub show_grid: bool,
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "centipede_settings";

    /// Environment variable naming a settings file (native only)
    #[allow(dead_code)]
    const ENV_PATH: &'static str = "CENTIPEDE_SETTINGS";

    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                None
            }
        }
    }

    /// Start a game from these settings, using `fallback_seed` when no seed is pinned
    pub fn new_game(&self, fallback_seed: u64) -> GameState {
        let seed = self.seed.unwrap_or(fallback_seed);
        log::info!("New {:?} game with seed: {}", self.mode, seed);
        GameState::with_config(seed, self.mode, self.tuning.clone())
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from the file named by `CENTIPEDE_SETTINGS` (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::var(Self::ENV_PATH) {
            Ok(path) => Self::load_from_path(std::path::Path::new(&path)),
            Err(_) => Self::default(),
        }
    }

    /// Read a settings file, falling back to defaults when missing or malformed
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json).unwrap_or_default(),
            Err(e) => {
                log::warn!("Could not read settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
