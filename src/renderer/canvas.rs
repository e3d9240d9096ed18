//! `Surface` backed by the browser's canvas 2D context

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::Surface;

impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f32, height: f32) {
        self.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn set_fill_color(&mut self, color: &str) {
        self.set_fill_style_str(color);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        CanvasRenderingContext2d::fill_rect(self, x as f64, y as f64, w as f64, h as f64);
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.set_stroke_style_str(color);
    }

    fn set_line_width(&mut self, width: f32) {
        CanvasRenderingContext2d::set_line_width(self, width as f64);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2) {
        self.stroke_lines(&[(from, to)]);
    }

    fn stroke_lines(&mut self, segments: &[(Vec2, Vec2)]) {
        self.begin_path();
        for (from, to) in segments {
            self.move_to(from.x as f64, from.y as f64);
            self.line_to(to.x as f64, to.y as f64);
        }
        self.stroke();
    }
}
