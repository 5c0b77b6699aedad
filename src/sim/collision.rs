//! Bullet collision resolution
//!
//! Runs once per frame after the player has moved its bullets. Each live
//! bullet, in firing order, is checked against the mushroom in its cell and
//! then against every centipede segment. The two checks are independent: a
//! bullet can chip a mushroom and kill a segment on the same frame, and is
//! spent once either happens.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::centipede::Segment;
use super::grid::Grid;
use super::player::Bullet;
use super::state::GameEvent;
use crate::pixel_to_tile;

/// How killed segments leave the chain during a collision pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SegmentRemoval {
    /// Remove every segment in reach; nothing is skipped
    #[default]
    Compact,
    /// Remove in place while scanning by index, so the segment right after
    /// a kill is not tested against the same bullet
    SkipNext,
}

/// Axis-aligned reach test between a bullet and a segment center
#[inline]
pub fn bullet_reaches_segment(bullet: Vec2, segment: &Segment, threshold: f32) -> bool {
    let d = (bullet - segment.center()).abs();
    d.x < threshold && d.y < threshold
}

/// Hit the mushroom under a bullet, if any. Returns whether a mushroom was struck.
fn strike_mushroom(bullet: &Bullet, grid: &mut Grid, events: &mut Vec<GameEvent>) -> bool {
    let (col, row) = pixel_to_tile(bullet.pos);
    match grid.hit(col, row) {
        Some(destroyed) => {
            events.push(GameEvent::MushroomHit { col, row });
            if destroyed {
                events.push(GameEvent::MushroomDestroyed { col, row });
            }
            true
        }
        None => false,
    }
}

/// Kill a segment: a fresh mushroom grows where it died
fn kill_segment(segment: &Segment, grid: &mut Grid, events: &mut Vec<GameEvent>) {
    grid.place(segment.col, segment.row);
    events.push(GameEvent::SegmentDestroyed {
        col: segment.col,
        row: segment.row,
    });
    log::debug!("Segment destroyed at ({}, {})", segment.col, segment.row);
}

/// Test one bullet against the chain. Returns whether it killed anything.
fn strike_segments(
    bullet: &Bullet,
    segments: &mut Vec<Segment>,
    grid: &mut Grid,
    threshold: f32,
    removal: SegmentRemoval,
    events: &mut Vec<GameEvent>,
) -> bool {
    let mut killed = false;
    match removal {
        SegmentRemoval::Compact => {
            segments.retain(|seg| {
                if bullet_reaches_segment(bullet.pos, seg, threshold) {
                    kill_segment(seg, grid, events);
                    killed = true;
                    false
                } else {
                    true
                }
            });
        }
        SegmentRemoval::SkipNext => {
            let mut i = 0;
            while i < segments.len() {
                if bullet_reaches_segment(bullet.pos, &segments[i], threshold) {
                    let seg = segments.remove(i);
                    kill_segment(&seg, grid, events);
                    killed = true;
                }
                i += 1;
            }
        }
    }
    killed
}

/// Resolve every live bullet against the mushroom field and the centipede
pub fn resolve_bullet_hits(
    bullets: &mut [Bullet],
    grid: &mut Grid,
    segments: &mut Vec<Segment>,
    threshold: f32,
    removal: SegmentRemoval,
    events: &mut Vec<GameEvent>,
) {
    for bullet in bullets.iter_mut().filter(|b| !b.spent) {
        let hit_mushroom = strike_mushroom(bullet, grid, events);
        let hit_segment = strike_segments(bullet, segments, grid, threshold, removal, events);
        if hit_mushroom || hit_segment {
            bullet.spent = true;
        }
    }
}
