//! Game state and core simulation types
//!
//! Everything a frame reads or writes lives here, including the fire timer
//! and frame counter, so the frame driver carries no hidden globals.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::centipede::{Segment, spawn_centipede};
use super::grid::Grid;
use super::player::Player;
use crate::tuning::Tuning;

/// Which of the two games is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Ship and bullets only: no mushrooms, no centipede
    Shooter,
    #[default]
    Centipede,
}

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Fired,
    MushroomHit { col: i32, row: i32 },
    MushroomDestroyed { col: i32, row: i32 },
    SegmentDestroyed { col: i32, row: i32 },
    WaveSpawned { wave: u32 },
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::new(self.seed, self.stream)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng_state: RngState,
    pub mode: GameMode,
    pub tuning: Tuning,
    pub grid: Grid,
    /// Centipede links, in spawn order
    pub segments: Vec<Segment>,
    pub player: Player,
    /// Frame timestamp of the last shot (ms)
    pub last_shot: f64,
    /// Frames simulated so far
    pub frame: u64,
    pub score: u64,
    /// Current wave (1-based once the first chain spawns)
    pub wave: u32,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a Centipede game with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, GameMode::default(), Tuning::default())
    }

    pub fn with_config(seed: u64, mode: GameMode, tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        let mut state = Self {
            seed,
            rng_state: RngState::new(seed),
            mode,
            grid: Grid::new(tuning.mushroom_hp),
            segments: Vec::new(),
            player: Player::new(tuning.player_speed),
            last_shot: 0.0,
            frame: 0,
            score: 0,
            wave: 0,
            events: Vec::new(),
            tuning,
        };

        if mode == GameMode::Centipede {
            let mut rng = state.rng_state.to_rng();
            state.grid.populate(&mut rng, state.tuning.mushroom_density);
            log::info!("Mushroom field populated: {} mushrooms", state.grid.len());
            state.spawn_wave();
        }

        state
    }

    /// Send a new centipede down from the top row
    pub fn spawn_wave(&mut self) {
        self.wave += 1;
        self.segments = spawn_centipede(self.tuning.centipede_length, 0);
        self.events.push(GameEvent::WaveSpawned { wave: self.wave });
        log::info!("Wave {}: {} segments", self.wave, self.segments.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_new_centipede_game() {
        let state = GameState::new(12345);
        assert_eq!(state.mode, GameMode::Centipede);
        assert_eq!(state.wave, 1);
        assert_eq!(state.segments.len(), CENTIPEDE_LENGTH);
        assert_eq!(state.events, vec![GameEvent::WaveSpawned { wave: 1 }]);
        assert!(state.player.bullets.is_empty());
    }

    #[test]
    fn test_shooter_mode_is_empty_field() {
        let state = GameState::with_config(1, GameMode::Shooter, Tuning::default());
        assert!(state.grid.is_empty());
        assert!(state.segments.is_empty());
        assert_eq!(state.wave, 0);
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = GameState::new(777);
        let b = GameState::new(777);
        assert!(a.grid.iter().eq(b.grid.iter()));
    }

    #[test]
    fn test_config_hp_reaches_grid() {
        let tuning = Tuning {
            mushroom_hp: 2,
            mushroom_density: 1.0,
            ..Default::default()
        };
        let state = GameState::with_config(3, GameMode::Centipede, tuning);
        assert!(state.grid.iter().all(|m| m.hp == 2));
    }
}
