//! Browser `CanvasRenderingContext2d` surface

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::Canvas2d;

impl Canvas2d for CanvasRenderingContext2d {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        CanvasRenderingContext2d::clear_rect(self, x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.set_fill_style_str(color);
        CanvasRenderingContext2d::fill_rect(self, x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str) {
        self.set_fill_style_str(color);
        self.begin_path();
        // Only fails on a negative radius
        if self
            .arc(x as f64, y as f64, radius.max(0.0) as f64, 0.0, TAU)
            .is_ok()
        {
            self.fill();
        }
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.set_stroke_style_str(color);
        CanvasRenderingContext2d::stroke_rect(self, x as f64, y as f64, w as f64, h as f64);
    }
}
