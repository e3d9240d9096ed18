//! Procedural car drawing

use glam::Vec2;

use super::{Surface, colors};

const WINDOW_INSET: f32 = 8.0;
const WINDOW_SIZE: Vec2 = Vec2::new(34.0, 25.0);
const WHEEL_SIZE: Vec2 = Vec2::new(10.0, 25.0);
const HEADLIGHT_SIZE: Vec2 = Vec2::new(5.0, 15.0);
/// Vertical offsets of the front and rear axle (and window rows)
const ROWS: [f32; 2] = [10.0, 45.0];

/// Draw a car with its top-left corner at `pos`.
///
/// Layers: body, windows, wheels, then headlights when `headlights` is set.
pub fn draw_car<S: Surface + ?Sized>(
    surface: &mut S,
    pos: Vec2,
    size: Vec2,
    body_color: &str,
    headlights: bool,
) {
    surface.set_fill_color(body_color);
    surface.fill_rect(pos.x, pos.y, size.x, size.y);

    surface.set_fill_color(colors::WINDOW);
    for row in ROWS {
        surface.fill_rect(pos.x + WINDOW_INSET, pos.y + row, WINDOW_SIZE.x, WINDOW_SIZE.y);
    }

    // Wheels straddle both sides of the body
    surface.set_fill_color(colors::WHEEL);
    let half_wheel = WHEEL_SIZE.x / 2.0;
    for row in ROWS {
        for x in [pos.x - half_wheel, pos.x + size.x - half_wheel] {
            surface.fill_rect(x, pos.y + row, WHEEL_SIZE.x, WHEEL_SIZE.y);
        }
    }

    if headlights {
        surface.set_fill_color(colors::HEADLIGHT);
        surface.fill_rect(pos.x, pos.y, HEADLIGHT_SIZE.x, HEADLIGHT_SIZE.y);
        surface.fill_rect(
            pos.x + size.x - HEADLIGHT_SIZE.x,
            pos.y,
            HEADLIGHT_SIZE.x,
            HEADLIGHT_SIZE.y,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSurface;

    #[test]
    fn test_car_layers_at_fixed_offsets() {
        let mut surface = RecordingSurface::default();
        draw_car(&mut surface, Vec2::new(175.0, 480.0), Vec2::new(50.0, 80.0), "#e74c3c", true);

        let windows: Vec<_> = surface
            .rects_with_fill(colors::WINDOW)
            .into_iter()
            .map(|(_, r)| r)
            .collect();
        assert_eq!(windows, vec![[183.0, 490.0, 34.0, 25.0], [183.0, 525.0, 34.0, 25.0]]);

        let wheels: Vec<_> = surface
            .rects_with_fill(colors::WHEEL)
            .into_iter()
            .map(|(_, r)| r)
            .collect();
        assert_eq!(
            wheels,
            vec![
                [170.0, 490.0, 10.0, 25.0],
                [220.0, 490.0, 10.0, 25.0],
                [170.0, 525.0, 10.0, 25.0],
                [220.0, 525.0, 10.0, 25.0],
            ]
        );

        let lights = surface.rects_with_fill(colors::HEADLIGHT);
        assert_eq!(lights.len(), 2);
        assert_eq!(lights[1].1, [220.0, 480.0, 5.0, 15.0]);
    }

    #[test]
    fn test_obstacle_has_no_headlights() {
        let mut surface = RecordingSurface::default();
        draw_car(&mut surface, Vec2::ZERO, Vec2::new(50.0, 80.0), "#3498db", false);
        assert!(surface.rects_with_fill(colors::HEADLIGHT).is_empty());
        assert_eq!(surface.rect_count(), 1 + 2 + 4);
    }
}
