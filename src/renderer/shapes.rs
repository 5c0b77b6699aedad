//! Per-entity draw calls

use super::{Canvas2d, palette};
use crate::consts::*;
use crate::sim::{Bullet, Mushroom, Player, Segment};
use crate::{tile_center, tile_origin};

/// Mushroom shrinks and darkens as it is worn down
pub fn mushroom(canvas: &mut impl Canvas2d, m: &Mushroom, max_hp: u8) {
    let max_hp = max_hp.max(1) as f32;
    let health = (m.hp as f32 / max_hp).clamp(0.0, 1.0);
    // Never smaller than a quarter tile
    let size = TILE_SIZE * (0.25 + 0.75 * health);
    let inset = (TILE_SIZE - size) / 2.0;
    let origin = tile_origin(m.col, m.row);

    let shade = ((health * palette::MUSHROOM.len() as f32).ceil() as usize)
        .clamp(1, palette::MUSHROOM.len())
        - 1;
    canvas.fill_rect(origin.x + inset, origin.y + inset, size, size, palette::MUSHROOM[shade]);
}

pub fn segment(canvas: &mut impl Canvas2d, s: &Segment) {
    let c = tile_center(s.col, s.row);
    canvas.fill_circle(c.x, c.y, TILE_SIZE / 2.0 - 1.0, palette::SEGMENT);
}

pub fn player(canvas: &mut impl Canvas2d, p: &Player) {
    let half = PLAYER_SIZE / 2.0;
    canvas.fill_rect(p.pos.x - half, p.pos.y - half, PLAYER_SIZE, PLAYER_SIZE, palette::PLAYER);
}

/// Bullet streak, nose slightly above its position
pub fn bullet(canvas: &mut impl Canvas2d, b: &Bullet) {
    canvas.fill_rect(
        b.pos.x - BULLET_WIDTH / 2.0,
        b.pos.y - 6.0,
        BULLET_WIDTH,
        BULLET_HEIGHT,
        palette::BULLET,
    );
}

pub fn grid_lines(canvas: &mut impl Canvas2d) {
    for row in 0..ROWS {
        for col in 0..COLS {
            let o = tile_origin(col, row);
            canvas.stroke_rect(o.x, o.y, TILE_SIZE, TILE_SIZE, palette::GRID_LINE);
        }
    }
}
