//! Road background and lane markings

use glam::Vec2;

use super::{Surface, colors};
use crate::consts::{DASH_LENGTH, DASH_PERIOD, SHOULDER_WIDTH};

const CENTER_LINE_WIDTH: f32 = 4.0;
const EDGE_LINE_WIDTH: f32 = 3.0;

/// Grass shoulders, asphalt, animated center dashes and solid edge lines
pub fn draw_road<S: Surface + ?Sized>(surface: &mut S, width: f32, height: f32, offset: f32) {
    surface.set_fill_color(colors::GRASS);
    surface.fill_rect(0.0, 0.0, SHOULDER_WIDTH, height);
    surface.fill_rect(width - SHOULDER_WIDTH, 0.0, SHOULDER_WIDTH, height);

    surface.set_fill_color(colors::ASPHALT);
    surface.fill_rect(SHOULDER_WIDTH, 0.0, width - 2.0 * SHOULDER_WIDTH, height);

    surface.set_stroke_color(colors::CENTER_LINE);
    surface.set_line_width(CENTER_LINE_WIDTH);
    let center_x = width / 2.0;
    for y in dash_starts(offset, height) {
        surface.stroke_line(
            Vec2::new(center_x, y),
            Vec2::new(center_x, y + DASH_LENGTH),
        );
    }

    surface.set_stroke_color(colors::EDGE_LINE);
    surface.set_line_width(EDGE_LINE_WIDTH);
    surface.stroke_lines(&[
        (Vec2::new(SHOULDER_WIDTH, 0.0), Vec2::new(SHOULDER_WIDTH, height)),
        (
            Vec2::new(width - SHOULDER_WIDTH, 0.0),
            Vec2::new(width - SHOULDER_WIDTH, height),
        ),
    ]);
}

/// Top y of every center dash visible for a scroll offset
pub fn dash_starts(offset: f32, height: f32) -> impl Iterator<Item = f32> {
    let first = offset.rem_euclid(DASH_PERIOD);
    (0..)
        .map(move |i| first + i as f32 * DASH_PERIOD)
        .take_while(move |y| *y < height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCall, RecordingSurface};

    #[test]
    fn test_dash_starts_wrap_with_offset() {
        let starts: Vec<f32> = dash_starts(0.0, 600.0).collect();
        assert_eq!(starts.len(), 15);
        assert_eq!(starts[0], 0.0);

        let shifted: Vec<f32> = dash_starts(45.0, 600.0).collect();
        assert_eq!(shifted[0], 5.0);
        assert_eq!(shifted.len(), 15);
        assert!(shifted.iter().all(|y| *y < 600.0));
    }

    #[test]
    fn test_road_layers() {
        let mut surface = RecordingSurface::default();
        draw_road(&mut surface, 400.0, 600.0, 0.0);

        assert_eq!(
            surface.rects_with_fill(colors::GRASS).len(),
            2,
            "two shoulders"
        );
        let asphalt = surface.rects_with_fill(colors::ASPHALT);
        assert_eq!(asphalt[0].1, [100.0, 0.0, 200.0, 600.0]);

        let lines = surface
            .calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Line { .. }))
            .count();
        assert_eq!(lines, 15 + 2);
    }
}
