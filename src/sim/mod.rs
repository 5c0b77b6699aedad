//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame timestamps come in from the caller, never from a clock
//! - Seeded RNG only
//! - Stable iteration order (firing order for bullets, spawn order for segments)
//! - No rendering or platform dependencies

pub mod centipede;
pub mod collision;
pub mod grid;
pub mod player;
pub mod state;
pub mod tick;

pub use centipede::{Heading, Segment, spawn_centipede};
pub use collision::{SegmentRemoval, bullet_reaches_segment, resolve_bullet_hits};
pub use grid::{Grid, Mushroom};
pub use player::{Bullet, Player};
pub use state::{GameEvent, GameMode, GameState, RngState};
pub use tick::{TickInput, tick};
