//! In-memory surface that records draw calls
//!
//! Used for headless runs and to inspect frames in tests.

use glam::Vec2;

use super::Surface;

/// One primitive call issued to a surface
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear { width: f32, height: f32 },
    FillColor(String),
    Rect([f32; 4]),
    StrokeColor(String),
    LineWidth(f32),
    Line { from: Vec2, to: Vec2 },
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    /// Forget everything recorded so far
    pub fn reset(&mut self) {
        self.calls.clear();
    }

    pub fn clears(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Clear { .. }))
            .count()
    }

    pub fn rect_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Rect(_)))
            .count()
    }

    /// Rectangles filled while `color` was the fill style, with their call index
    pub fn rects_with_fill(&self, color: &str) -> Vec<(usize, [f32; 4])> {
        let mut current: Option<&str> = None;
        let mut rects = Vec::new();
        for (i, call) in self.calls.iter().enumerate() {
            match call {
                DrawCall::FillColor(c) => current = Some(c.as_str()),
                DrawCall::Rect(r) if current == Some(color) => rects.push((i, *r)),
                _ => {}
            }
        }
        rects
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.calls.push(DrawCall::Clear { width, height });
    }

    fn set_fill_color(&mut self, color: &str) {
        self.calls.push(DrawCall::FillColor(color.to_string()));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.calls.push(DrawCall::Rect([x, y, w, h]));
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.calls.push(DrawCall::StrokeColor(color.to_string()));
    }

    fn set_line_width(&mut self, width: f32) {
        self.calls.push(DrawCall::LineWidth(width));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2) {
        self.calls.push(DrawCall::Line { from, to });
    }
}
