//! Data-driven game balance
//!
//! Every value defaults to the matching constant in [`crate::consts`]; a
//! `Tuning` travels with the game state so a run can be replayed exactly.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::SegmentRemoval;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Player movement per frame, per axis (pixels)
    pub player_speed: f32,
    /// Bullet climb per frame (pixels)
    pub bullet_speed: f32,
    /// Minimum gap between shots (ms)
    pub fire_cooldown_ms: f64,
    /// Chance a mushroom-band cell starts occupied
    pub mushroom_density: f64,
    /// Hits a mushroom absorbs before clearing
    pub mushroom_hp: u8,
    /// Per-axis bullet/segment hit distance (pixels)
    pub hit_threshold: f32,
    /// Segments advance every N frames
    pub segment_cadence: u64,
    /// Segments per spawned chain
    pub centipede_length: usize,
    /// How destroyed segments leave the chain during a collision pass
    pub segment_removal: SegmentRemoval,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            bullet_speed: BULLET_SPEED,
            fire_cooldown_ms: FIRE_COOLDOWN_MS,
            mushroom_density: MUSHROOM_DENSITY,
            mushroom_hp: MUSHROOM_MAX_HP,
            hit_threshold: HIT_THRESHOLD,
            segment_cadence: SEGMENT_CADENCE,
            centipede_length: CENTIPEDE_LENGTH,
            segment_removal: SegmentRemoval::default(),
        }
    }
}

impl Tuning {
    /// Clamp values that would stall or break the simulation
    pub fn sanitized(mut self) -> Self {
        self.segment_cadence = self.segment_cadence.max(1);
        self.mushroom_hp = self.mushroom_hp.max(1);
        self.mushroom_density = self.mushroom_density.clamp(0.0, 1.0);
        self.fire_cooldown_ms = self.fire_cooldown_ms.max(0.0);
        self
    }
}
