//! Centipede - A mushroom-field arcade shooter for the browser canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, centipede, player, collisions)
//! - `renderer`: 2D canvas drawing pass
//! - `platform`: Browser input capture
//! - `tuning`: Data-driven game balance
//! - `settings`: Persisted user configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Play field dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 480.0;
    pub const FIELD_HEIGHT: f32 = 640.0;

    /// Edge length of one grid cell (pixels)
    pub const TILE_SIZE: f32 = 16.0;
    /// Grid dimensions (cells)
    pub const COLS: i32 = 30;
    pub const ROWS: i32 = 40;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 4.0;
    pub const PLAYER_SIZE: f32 = 10.0;
    /// Height of the strip at the bottom of the field the player may roam
    pub const PLAYER_BAND: f32 = 160.0;
    /// Spawn offset from the bottom edge
    pub const PLAYER_START_OFFSET: f32 = 40.0;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 6.0;
    pub const BULLET_WIDTH: f32 = 4.0;
    pub const BULLET_HEIGHT: f32 = 8.0;
    /// Minimum time between shots (ms, measured on frame timestamps)
    pub const FIRE_COOLDOWN_MS: f64 = 300.0;

    /// Mushroom defaults
    pub const MUSHROOM_MAX_HP: u8 = 4;
    /// Chance a cell in the mushroom band starts occupied
    pub const MUSHROOM_DENSITY: f64 = 0.05;
    /// Rows eligible for the initial mushroom scatter, [start, end)
    pub const MUSHROOM_ROW_START: i32 = 2;
    pub const MUSHROOM_ROW_END: i32 = ROWS - 10;

    /// Centipede defaults
    pub const CENTIPEDE_LENGTH: usize = 10;
    /// Segments advance once every this many frames
    pub const SEGMENT_CADENCE: u64 = 10;
    /// Per-axis distance under which a bullet hits a segment
    pub const HIT_THRESHOLD: f32 = 8.0;

    /// Score awards
    pub const MUSHROOM_POINTS: u64 = 1;
    pub const SEGMENT_POINTS: u64 = 100;
}

/// Top-left pixel corner of a grid cell
#[inline]
pub fn tile_origin(col: i32, row: i32) -> Vec2 {
    Vec2::new(col as f32 * consts::TILE_SIZE, row as f32 * consts::TILE_SIZE)
}

/// Pixel center of a grid cell
#[inline]
pub fn tile_center(col: i32, row: i32) -> Vec2 {
    tile_origin(col, row) + Vec2::splat(consts::TILE_SIZE / 2.0)
}

/// Grid cell (col, row) containing a pixel position
#[inline]
pub fn pixel_to_tile(pos: Vec2) -> (i32, i32) {
    let cell = (pos / consts::TILE_SIZE).floor();
    (cell.x as i32, cell.y as i32)
}
