//! Outline, highlight and background brush for a widget's body shape.
//!
//! Every outline is inset by one unit on width and height so a one-unit
//! stroke stays inside the container.

use crate::basics::{PointD, RectD};
use crate::color::Color;
use crate::paint::Brush;
use crate::path_storage::Path;

/// Corner radius of a rounded body, as a fraction of its shorter side.
pub const ROUNDED_RECT_RADIUS_PERCENT: f64 = 0.05;

const SHINE_ARC_START_DEGREES: f64 = 180.0;
const SHINE_ARC_SWEEP_DEGREES: f64 = 142.0;

/// Body shape of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ControlShape {
    #[default]
    Rect,
    RoundedRect,
    Circular,
}

fn inset(container: &RectD) -> RectD {
    RectD::new(
        container.x,
        container.y,
        container.width - 1.0,
        container.height - 1.0,
    )
}

/// Corner radius used for a rounded body of this size, truncated to a whole
/// unit.
pub fn rounded_rect_radius(rect: &RectD) -> f64 {
    (rect.width.min(rect.height) * ROUNDED_RECT_RADIUS_PERCENT).trunc()
}

/// Closed outline of the widget body.
pub fn control_path(container: &RectD, shape: ControlShape) -> Path {
    let rect = inset(container);
    let mut path = Path::new();
    match shape {
        ControlShape::Rect => path.add_rectangle(&rect),
        ControlShape::RoundedRect => path.add_rounded_rectangle(&rect, rounded_rect_radius(&rect)),
        ControlShape::Circular => path.add_ellipse(&rect),
    }
    path
}

/// Highlight covering the upper part of the body, for a glassy look.
///
/// Rectangular bodies get their upper half. A circular body gets an arc
/// over the top joined back to its start by a curve that dips through the
/// middle. Empty when the inset body has no area.
pub fn shine_path(container: &RectD, shape: ControlShape) -> Path {
    let rect = inset(container);
    let mut path = Path::new();
    if rect.is_empty() {
        return path;
    }

    let half = RectD::new(rect.x, rect.y, rect.width, rect.height / 2.0);
    match shape {
        ControlShape::Rect => path.add_rectangle(&half),
        ControlShape::RoundedRect => path.add_rounded_rectangle(&half, rounded_rect_radius(&half)),
        ControlShape::Circular => {
            path.add_arc(&rect, SHINE_ARC_START_DEGREES, SHINE_ARC_SWEEP_DEGREES);
            let first = path.vertices()[0];
            if let Some(last) = path.last_point() {
                path.add_curve(&[
                    last,
                    PointD::new(
                        container.x + container.width * 0.70,
                        container.y + container.height * 0.33,
                    ),
                    PointD::new(
                        container.x + container.width * 0.25,
                        container.y + container.height * 0.5,
                    ),
                    PointD::new(first.x, first.y),
                ]);
            }
            path.close_figure();
        }
    }
    path
}

/// Background brush fading `color` out to transparent.
///
/// Rectangular bodies fade from top to bottom. A circular body fades
/// outward from a center placed one body height below its bottom edge, so
/// only the outer part of the blend is visible.
pub fn gradient_brush(container: &RectD, shape: ControlShape, color: Color) -> Brush {
    match shape {
        ControlShape::Rect | ControlShape::RoundedRect => {
            Brush::vertical_gradient(container, color, Color::TRANSPARENT)
        }
        ControlShape::Circular => Brush::PathGradient {
            bounds: *container,
            center: PointD::new(
                container.left() + container.width * 0.5,
                container.bottom() + container.height,
            ),
            center_color: color,
            surround_color: Color::TRANSPARENT,
            focus_scale: 0.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::is_curve;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_control_path_rect_inset() {
        let c = RectD::new(10.0, 20.0, 100.0, 50.0);
        let p = control_path(&c, ControlShape::Rect);
        assert!(p.is_closed());
        assert_eq!(p.bounding_rect(), Some(RectD::new(10.0, 20.0, 99.0, 49.0)));
    }

    #[test]
    fn test_rounded_radius_truncated() {
        // Shorter inset side is 49, 5% of which is 2.45.
        let c = RectD::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(rounded_rect_radius(&inset(&c)), 2.0);

        let p = control_path(&c, ControlShape::RoundedRect);
        assert!(p.is_closed());
        let start = p.vertices()[0];
        assert!((start.x - 0.0).abs() < EPS);
        assert!((start.y - 2.0).abs() < EPS);
    }

    #[test]
    fn test_rounded_small_body_falls_back_to_rect() {
        let c = RectD::new(0.0, 0.0, 10.0, 10.0);
        let rounded = control_path(&c, ControlShape::RoundedRect);
        let plain = control_path(&c, ControlShape::Rect);
        assert_eq!(rounded, plain);
    }

    #[test]
    fn test_control_path_circular() {
        let c = RectD::new(0.0, 0.0, 41.0, 21.0);
        let p = control_path(&c, ControlShape::Circular);
        assert!(p.is_closed());
        let b = p.bounding_rect().unwrap();
        assert!((b.width - 40.0).abs() < EPS);
        assert!((b.height - 20.0).abs() < EPS);
    }

    #[test]
    fn test_shine_rect_is_upper_half() {
        let c = RectD::new(0.0, 0.0, 101.0, 61.0);
        let p = shine_path(&c, ControlShape::Rect);
        assert_eq!(p.bounding_rect(), Some(RectD::new(0.0, 0.0, 100.0, 30.0)));
    }

    #[test]
    fn test_shine_circular_closed_and_starts_west() {
        let c = RectD::new(0.0, 0.0, 101.0, 101.0);
        let p = shine_path(&c, ControlShape::Circular);
        assert!(p.is_closed());
        assert_eq!(p.figure_count(), 1);
        let start = p.vertices()[0];
        assert!((start.x - 0.0).abs() < EPS);
        assert!((start.y - 50.0).abs() < EPS);
        // Arc (2 curves) then a 3-segment return curve, all cubic.
        let curve_vertices = p.vertices().iter().filter(|v| is_curve(v.cmd)).count();
        assert_eq!(curve_vertices, (2 + 3) * 3);
    }

    #[test]
    fn test_shine_empty_for_degenerate_body() {
        for shape in [
            ControlShape::Rect,
            ControlShape::RoundedRect,
            ControlShape::Circular,
        ] {
            assert!(shine_path(&RectD::new(0.0, 0.0, 1.0, 40.0), shape).is_empty());
            assert!(shine_path(&RectD::new(0.0, 0.0, 0.0, 0.0), shape).is_empty());
        }
    }

    #[test]
    fn test_gradient_brush_shapes() {
        let c = RectD::new(10.0, 10.0, 40.0, 20.0);
        match gradient_brush(&c, ControlShape::Rect, Color::RED) {
            Brush::LinearGradient {
                start,
                end,
                start_color,
                end_color,
            } => {
                assert_eq!(start.y, 10.0);
                assert_eq!(end.y, 30.0);
                assert_eq!(start_color, Color::RED);
                assert_eq!(end_color, Color::TRANSPARENT);
            }
            other => panic!("unexpected brush {other:?}"),
        }
        match gradient_brush(&c, ControlShape::Circular, Color::RED) {
            Brush::PathGradient {
                bounds,
                center,
                center_color,
                surround_color,
                ..
            } => {
                assert_eq!(bounds, c);
                assert_eq!(center, PointD::new(30.0, 50.0));
                assert_eq!(center_color, Color::RED);
                assert_eq!(surround_color, Color::TRANSPARENT);
            }
            other => panic!("unexpected brush {other:?}"),
        }
    }
}
