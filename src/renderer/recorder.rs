//! Headless canvas that records draw calls
//!
//! Used by the native build and by tests in place of a browser surface.

use super::Canvas2d;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { x: f32, y: f32, w: f32, h: f32 },
    Rect { x: f32, y: f32, w: f32, h: f32, color: String },
    Circle { x: f32, y: f32, radius: f32, color: String },
    Stroke { x: f32, y: f32, w: f32, h: f32, color: String },
}

#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Drop recorded commands, keeping the allocation
    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl Canvas2d for RecordingCanvas {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::Clear { x, y, w, h });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            w,
            h,
            color: color.to_owned(),
        });
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str) {
        self.commands.push(DrawCommand::Circle {
            x,
            y,
            radius,
            color: color.to_owned(),
        });
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.commands.push(DrawCommand::Stroke {
            x,
            y,
            w,
            h,
            color: color.to_owned(),
        });
    }
}
