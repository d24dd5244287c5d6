//! Host-agnostic fill and stroke descriptions.
//!
//! Engines publish what to draw as a list of [`DrawOp`]s borrowing their
//! own paths. A host maps each brush and pen onto its rendering API.

use crate::basics::{PointD, RectD};
use crate::color::Color;
use crate::path_storage::Path;

/// Fill style.
#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    /// Flat color.
    Solid(Color),
    /// Two-color gradient along the line from `start` to `end`.
    LinearGradient {
        start: PointD,
        end: PointD,
        start_color: Color,
        end_color: Color,
    },
    /// Gradient from `center_color` at `center` out to `surround_color` on
    /// the boundary of the ellipse inscribed in `bounds`.
    ///
    /// `focus_scale` is the fraction of the way out to the boundary over
    /// which the center color is held before blending starts.
    PathGradient {
        bounds: RectD,
        center: PointD,
        center_color: Color,
        surround_color: Color,
        focus_scale: f64,
    },
}

impl Default for Brush {
    fn default() -> Self {
        Brush::Solid(Color::BLACK)
    }
}

impl From<Color> for Brush {
    fn from(c: Color) -> Self {
        Brush::Solid(c)
    }
}

impl Brush {
    pub fn solid(color: Color) -> Self {
        Brush::Solid(color)
    }

    /// Vertical gradient over `rect`, `top` color at the top edge.
    pub fn vertical_gradient(rect: &RectD, top: Color, bottom: Color) -> Self {
        Brush::LinearGradient {
            start: PointD::new(rect.left(), rect.top()),
            end: PointD::new(rect.left(), rect.bottom()),
            start_color: top,
            end_color: bottom,
        }
    }

    /// Path gradient centered in `bounds` with no focus scaling.
    pub fn path_gradient(bounds: RectD, center_color: Color, surround_color: Color) -> Self {
        Brush::PathGradient {
            bounds,
            center: bounds.center(),
            center_color,
            surround_color,
            focus_scale: 0.0,
        }
    }

    /// The color a host without gradient support should fall back to.
    pub fn primary_color(&self) -> Color {
        match self {
            Brush::Solid(c) => *c,
            Brush::LinearGradient { start_color, .. } => *start_color,
            Brush::PathGradient { center_color, .. } => *center_color,
        }
    }
}

/// Outline style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pen {
    pub color: Color,
    pub width: f64,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

impl Pen {
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// One step of a widget's render order.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp<'a> {
    Fill { path: &'a Path, brush: Brush },
    Stroke { path: &'a Path, pen: Pen },
}

impl<'a> DrawOp<'a> {
    pub fn fill(path: &'a Path, brush: impl Into<Brush>) -> Self {
        DrawOp::Fill {
            path,
            brush: brush.into(),
        }
    }

    pub fn stroke(path: &'a Path, pen: Pen) -> Self {
        DrawOp::Stroke { path, pen }
    }

    pub fn path(&self) -> &'a Path {
        match self {
            DrawOp::Fill { path, .. } | DrawOp::Stroke { path, .. } => *path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brush_defaults_and_conversions() {
        assert_eq!(Brush::default(), Brush::Solid(Color::BLACK));
        assert_eq!(Brush::from(Color::RED), Brush::solid(Color::RED));
        assert_eq!(Pen::default().width, 1.0);
    }

    #[test]
    fn test_vertical_gradient_runs_top_to_bottom() {
        let r = RectD::new(5.0, 10.0, 20.0, 40.0);
        let b = Brush::vertical_gradient(&r, Color::RED, Color::TRANSPARENT);
        match &b {
            Brush::LinearGradient { start, end, .. } => {
                assert_eq!(*start, PointD::new(5.0, 10.0));
                assert_eq!(*end, PointD::new(5.0, 50.0));
            }
            other => panic!("unexpected brush {other:?}"),
        }
        assert_eq!(b.primary_color(), Color::RED);
    }

    #[test]
    fn test_path_gradient_centered() {
        let r = RectD::new(0.0, 0.0, 10.0, 20.0);
        let b = Brush::path_gradient(r, Color::WHITE, Color::BLACK);
        match &b {
            Brush::PathGradient {
                center,
                focus_scale,
                ..
            } => {
                assert_eq!(*center, PointD::new(5.0, 10.0));
                assert_eq!(*focus_scale, 0.0);
            }
            other => panic!("unexpected brush {other:?}"),
        }
    }

    #[test]
    fn test_draw_op_path_accessor() {
        let mut p = Path::new();
        p.add_rectangle(&RectD::new(0.0, 0.0, 1.0, 1.0));
        let fill = DrawOp::fill(&p, Color::RED);
        let stroke = DrawOp::stroke(&p, Pen::new(Color::BLACK, 2.0));
        assert!(std::ptr::eq(fill.path(), &p));
        assert!(std::ptr::eq(stroke.path(), &p));
    }
}
