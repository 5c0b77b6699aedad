//! 2D canvas rendering
//!
//! The simulation never draws. Each frame the host clears the surface and
//! hands the current [`GameState`] to [`draw_frame`], which issues flat
//! fill calls against anything implementing [`Canvas2d`].

pub mod recorder;
pub mod shapes;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use recorder::{DrawCommand, RecordingCanvas};

use crate::consts::*;
use crate::sim::GameState;

/// The drawing primitives the game needs from a 2D surface
pub trait Canvas2d {
    /// Erase a rectangle back to transparent
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str);
    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
}

/// Palette (CSS colors)
pub mod palette {
    pub const PLAYER: &str = "lime";
    pub const BULLET: &str = "white";
    pub const SEGMENT: &str = "#e03cff";
    pub const GRID_LINE: &str = "#1a1a1a";
    /// Mushroom color by remaining hit points, worn to fresh
    pub const MUSHROOM: [&str; 4] = ["#5a3d1a", "#8b5a2b", "#c8762f", "#ff9933"];
}

/// Draw one frame: clear, then mushrooms, centipede, ship and bullets
pub fn draw_frame(canvas: &mut impl Canvas2d, state: &GameState, show_grid: bool) {
    canvas.clear_rect(0.0, 0.0, FIELD_WIDTH, FIELD_HEIGHT);

    if show_grid {
        shapes::grid_lines(canvas);
    }

    for mushroom in state.grid.iter() {
        shapes::mushroom(canvas, mushroom, state.tuning.mushroom_hp);
    }
    for segment in &state.segments {
        shapes::segment(canvas, segment);
    }

    shapes::player(canvas, &state.player);
    for bullet in state.player.bullets.iter().filter(|b| !b.spent) {
        shapes::bullet(canvas, bullet);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameMode, TickInput, tick};
    use crate::tuning::Tuning;

    #[test]
    fn test_frame_starts_with_full_clear() {
        let state = GameState::new(1);
        let mut canvas = RecordingCanvas::default();
        draw_frame(&mut canvas, &state, false);
        assert_eq!(
            canvas.commands.first(),
            Some(&DrawCommand::Clear {
                x: 0.0,
                y: 0.0,
                w: FIELD_WIDTH,
                h: FIELD_HEIGHT
            })
        );
    }

    #[test]
    fn test_every_live_entity_drawn_once() {
        let mut state = GameState::new(2024);
        tick(
            &mut state,
            &TickInput {
                fire: true,
                ..Default::default()
            },
            1000.0,
        );
        let mut canvas = RecordingCanvas::default();
        draw_frame(&mut canvas, &state, false);

        let circles = canvas
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count();
        assert_eq!(circles, state.segments.len());

        // clear + mushrooms + ship + one bullet
        let rects = canvas
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count();
        assert_eq!(rects, state.grid.len() + 2);
    }

    #[test]
    fn test_grid_overlay_only_when_enabled() {
        let state = GameState::with_config(1, GameMode::Shooter, Tuning::default());
        let mut plain = RecordingCanvas::default();
        draw_frame(&mut plain, &state, false);
        let mut gridded = RecordingCanvas::default();
        draw_frame(&mut gridded, &state, true);

        let strokes = |c: &RecordingCanvas| {
            c.commands
                .iter()
                .filter(|c| matches!(c, DrawCommand::Stroke { .. }))
                .count()
        };
        assert_eq!(strokes(&plain), 0);
        assert_eq!(strokes(&gridded), (COLS * ROWS) as usize);
    }
}
