//! Smooth curves through point sequences.
//!
//! A cardinal spline through N points is emitted as N-1 cubic Bezier
//! segments. At tension 0.5 this is the Catmull-Rom spline. The first and
//! last segments use their own end point as the missing outer neighbour.

use crate::basics::PointD;

/// Tension of the smooth curves drawn through sampled points.
pub const SPLINE_TENSION: f64 = 0.5;

// ============================================================================
// Curve4Points
// ============================================================================

/// Eight control-point coordinates for a cubic Bezier curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Curve4Points {
    pub cp: [f64; 8],
}

impl Curve4Points {
    #[allow(clippy::too_many_arguments)]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64, x4: f64, y4: f64) -> Self {
        Self {
            cp: [x1, y1, x2, y2, x3, y3, x4, y4],
        }
    }

    pub fn start(&self) -> PointD {
        PointD::new(self.cp[0], self.cp[1])
    }

    pub fn ctrl1(&self) -> PointD {
        PointD::new(self.cp[2], self.cp[3])
    }

    pub fn ctrl2(&self) -> PointD {
        PointD::new(self.cp[4], self.cp[5])
    }

    pub fn end(&self) -> PointD {
        PointD::new(self.cp[6], self.cp[7])
    }
}

impl std::ops::Index<usize> for Curve4Points {
    type Output = f64;
    fn index(&self, i: usize) -> &f64 {
        &self.cp[i]
    }
}

// ============================================================================
// Curve conversion functions
// ============================================================================

/// Convert one cardinal spline segment (from `p1` to `p2`) to cubic Bezier
/// control points.
pub fn cardinal_to_bezier(
    p0: PointD,
    p1: PointD,
    p2: PointD,
    p3: PointD,
    tension: f64,
) -> Curve4Points {
    let k = tension / 3.0;
    Curve4Points::new(
        p1.x,
        p1.y,
        p1.x + (p2.x - p0.x) * k,
        p1.y + (p2.y - p0.y) * k,
        p2.x - (p3.x - p1.x) * k,
        p2.y - (p3.y - p1.y) * k,
        p2.x,
        p2.y,
    )
}

/// Cubic segments of the cardinal spline through `points`.
///
/// Fewer than two points produce no segments.
pub fn cardinal_spline(points: &[PointD], tension: f64) -> Vec<Curve4Points> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    (0..n - 1)
        .map(|i| {
            let p0 = points[i.saturating_sub(1)];
            let p3 = points[(i + 2).min(n - 1)];
            cardinal_to_bezier(p0, points[i], points[i + 1], p3, tension)
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
