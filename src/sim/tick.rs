//! Per-frame simulation step
//!
//! One call per animation frame, driven by the frame's timestamp.

use super::collision::resolve_bullet_hits;
use super::state::{GameEvent, GameMode, GameState};
use crate::consts::*;

/// Held keys for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Fire held
    pub fire: bool,
}

/// Advance the game by one frame.
///
/// `timestamp` is the animation frame time in milliseconds; only its
/// difference from the last shot matters.
pub fn tick(state: &mut GameState, input: &TickInput, timestamp: f64) {
    state.events.clear();
    state.frame += 1;

    // Fire control
    if input.fire && timestamp - state.last_shot > state.tuning.fire_cooldown_ms {
        state.player.shoot(state.tuning.bullet_speed);
        state.last_shot = timestamp;
        state.events.push(GameEvent::Fired);
    }

    // Move the ship, advance bullets, drop spent ones
    state.player.update(input);

    if state.mode == GameMode::Shooter {
        return;
    }

    resolve_bullet_hits(
        &mut state.player.bullets,
        &mut state.grid,
        &mut state.segments,
        state.tuning.hit_threshold,
        state.tuning.segment_removal,
        &mut state.events,
    );

    for event in &state.events {
        state.score += match event {
            GameEvent::MushroomDestroyed { .. } => MUSHROOM_POINTS,
            GameEvent::SegmentDestroyed { .. } => SEGMENT_POINTS,
            _ => 0,
        };
    }

    // Segments only move on the pacing cadence. Counted in frames, not
    // timestamp milliseconds: rAF timestamps are fractional.
    if state.frame % state.tuning.segment_cadence == 0 {
        let grid = &state.grid;
        for segment in &mut state.segments {
            segment.step(grid);
        }
    }

    if state.segments.is_empty() {
        state.spawn_wave();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::centipede::{Heading, Segment};
    use crate::sim::collision::SegmentRemoval;
    use crate::tuning::Tuning;
    use crate::tile_center;
    use glam::Vec2;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    fn fire() -> TickInput {
        TickInput {
            fire: true,
            ..Default::default()
        }
    }

    /// A quiet Centipede board: no mushrooms, one parked segment far from the ship
    fn quiet_state() -> GameState {
        let tuning = Tuning {
            mushroom_density: 0.0,
            ..Default::default()
        };
        let mut state = GameState::with_config(1, GameMode::Centipede, tuning);
        state.segments = vec![Segment::new(0, 0, Heading::Right)];
        state
    }

    #[test]
    fn test_fire_cooldown_uses_frame_time() {
        let mut state = GameState::with_config(1, GameMode::Shooter, Tuning::default());

        tick(&mut state, &fire(), 100.0);
        assert_eq!(state.player.bullets.len(), 0, "within cooldown of t=0");

        tick(&mut state, &fire(), 300.5);
        assert_eq!(state.player.bullets.len(), 1);
        assert_eq!(state.events, vec![GameEvent::Fired]);

        // Exactly 300ms later is still too soon
        tick(&mut state, &fire(), 600.5);
        assert_eq!(state.player.bullets.len(), 1);

        tick(&mut state, &fire(), 601.0);
        assert_eq!(state.player.bullets.len(), 2);
    }

    #[test]
    fn test_fire_not_held_never_shoots() {
        let mut state = GameState::with_config(1, GameMode::Shooter, Tuning::default());
        for i in 1..100 {
            tick(&mut state, &TickInput::default(), i as f64 * 1000.0);
        }
        assert!(state.player.bullets.is_empty());
    }

    #[test]
    fn test_bullet_leaves_with_ship_then_climbs() {
        let mut state = GameState::with_config(1, GameMode::Shooter, Tuning::default());
        let start = state.player.pos;
        tick(&mut state, &fire(), 1000.0);
        // Fired before the ship moved, then advanced once in the same frame
        assert_eq!(state.player.bullets[0].pos, start - Vec2::new(0.0, BULLET_SPEED));
    }

    #[test]
    fn test_segments_move_on_cadence_only() {
        let mut state = quiet_state();
        let cadence = state.tuning.segment_cadence;

        for f in 1..cadence {
            tick(&mut state, &TickInput::default(), f as f64 * FRAME_MS);
            assert_eq!(state.segments[0].col, 0, "moved early on frame {f}");
        }
        tick(&mut state, &TickInput::default(), cadence as f64 * FRAME_MS);
        assert_eq!(state.segments[0].col, 1);

        for f in cadence + 1..=cadence * 3 {
            tick(&mut state, &TickInput::default(), f as f64 * FRAME_MS);
        }
        assert_eq!(state.segments[0].col, 3);
    }

    #[test]
    fn test_killing_last_segment_spawns_next_wave() {
        let mut state = quiet_state();
        state.events.clear();
        // Bullet one step below the segment so it arrives this frame
        let target = tile_center(0, 0);
        state
            .player
            .bullets
            .push(crate::sim::Bullet::new(target + Vec2::new(0.0, BULLET_SPEED), BULLET_SPEED));

        tick(&mut state, &TickInput::default(), FRAME_MS);

        assert!(state.events.contains(&GameEvent::SegmentDestroyed { col: 0, row: 0 }));
        assert!(state.events.contains(&GameEvent::WaveSpawned { wave: 2 }));
        assert_eq!(state.score, SEGMENT_POINTS);
        assert_eq!(state.wave, 2);
        assert_eq!(state.segments.len(), CENTIPEDE_LENGTH);
        assert!(state.grid.is_occupied(0, 0));
    }

    #[test]
    fn test_consumed_bullet_reaped_next_frame() {
        let mut state = quiet_state();
        state.grid.place(10, 20);
        let target = tile_center(10, 20);
        state
            .player
            .bullets
            .push(crate::sim::Bullet::new(target + Vec2::new(0.0, BULLET_SPEED), BULLET_SPEED));

        tick(&mut state, &TickInput::default(), FRAME_MS);
        assert_eq!(state.player.bullets.len(), 1);
        assert!(state.player.bullets[0].spent);

        tick(&mut state, &TickInput::default(), 2.0 * FRAME_MS);
        assert!(state.player.bullets.is_empty());
        assert_eq!(state.grid.cell_at(10, 20).map(|m| m.hp), Some(MUSHROOM_MAX_HP - 1));
    }

    #[test]
    fn test_four_shots_clear_mushroom_and_score() {
        let mut state = quiet_state();
        state.player.pos = Vec2::new(tile_center(12, 0).x, FIELD_HEIGHT - 20.0);
        state.grid.place(12, 25);

        let mut t = 0.0;
        while state.grid.is_occupied(12, 25) && t < 20_000.0 {
            t += FRAME_MS;
            tick(&mut state, &fire(), t);
        }
        assert!(!state.grid.is_occupied(12, 25));
        assert_eq!(state.score, MUSHROOM_POINTS);
    }

    #[test]
    fn test_chain_below_field_keeps_walking_without_new_wave() {
        let mut state = quiet_state();
        state.segments = vec![Segment::new(3, ROWS + 2, Heading::Left)];
        let cadence = state.tuning.segment_cadence;

        for f in 1..=cadence * 5 {
            tick(&mut state, &TickInput::default(), f as f64 * FRAME_MS);
        }

        assert_eq!(state.wave, 1);
        assert_eq!(state.segments.len(), 1);
        // Three steps to the wall, a turn-and-drop, then one step back
        assert_eq!(state.segments[0], Segment::new(1, ROWS + 3, Heading::Right));
    }

    #[test]
    fn test_shooter_mode_has_no_waves() {
        let mut state = GameState::with_config(9, GameMode::Shooter, Tuning::default());
        for f in 1..=60 {
            tick(&mut state, &fire(), f as f64 * FRAME_MS);
        }
        assert_eq!(state.wave, 0);
        assert!(state.segments.is_empty());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_removal_policy_flows_from_tuning() {
        let tuning = Tuning {
            mushroom_density: 0.0,
            segment_removal: SegmentRemoval::SkipNext,
            ..Default::default()
        };
        let mut state = GameState::with_config(1, GameMode::Centipede, tuning);
        state.segments = vec![
            Segment::new(5, 5, Heading::Right),
            Segment::new(5, 5, Heading::Left),
        ];
        let target = tile_center(5, 5);
        state
            .player
            .bullets
            .push(crate::sim::Bullet::new(target + Vec2::new(0.0, BULLET_SPEED), BULLET_SPEED));

        tick(&mut state, &TickInput::default(), FRAME_MS);
        assert_eq!(state.segments.len(), 1);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TickInput {
                left: true,
                fire: true,
                ..Default::default()
            },
            fire(),
            TickInput {
                right: true,
                up: true,
                fire: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for f in 1..=600u32 {
            let input = &inputs[(f as usize / 37) % inputs.len()];
            tick(&mut state1, input, f as f64 * FRAME_MS);
            tick(&mut state2, input, f as f64 * FRAME_MS);
        }

        assert_eq!(
            serde_json::to_string(&state1).unwrap(),
            serde_json::to_string(&state2).unwrap()
        );
    }
}
