//! Elliptical arcs as cubic Bezier curves.
//!
//! Angles are in radians, measured from the positive x axis toward the
//! positive y axis. With y growing downward a positive sweep therefore runs
//! clockwise on screen. Arcs are split into pieces of at most a quarter
//! turn, so a full ellipse is exactly four curves.

use crate::basics::{PointD, PI};
use crate::curves::Curve4Points;

/// Epsilon to prevent adding degenerate curves.
const BEZIER_ARC_ANGLE_EPSILON: f64 = 0.01;

/// Convert an arc segment to a single cubic Bezier curve (4 control points).
///
/// Writes 8 values to `curve`: `[x0, y0, x1, y1, x2, y2, x3, y3]`.
pub fn arc_to_bezier(
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    start_angle: f64,
    sweep_angle: f64,
    curve: &mut [f64],
) {
    let x0 = (sweep_angle / 2.0).cos();
    let y0 = (sweep_angle / 2.0).sin();
    let tx = (1.0 - x0) * 4.0 / 3.0;
    let ty = y0 - tx * x0 / y0;

    let px = [x0, x0 + tx, x0 + tx, x0];
    let py = [-y0, -ty, ty, y0];

    let sn = (start_angle + sweep_angle / 2.0).sin();
    let cs = (start_angle + sweep_angle / 2.0).cos();

    for i in 0..4 {
        curve[i * 2] = cx + rx * (px[i] * cs - py[i] * sn);
        curve[i * 2 + 1] = cy + ry * (px[i] * sn + py[i] * cs);
    }
}

/// Point on the ellipse centered at `(cx, cy)` at parametric `angle`.
pub fn ellipse_point(cx: f64, cy: f64, rx: f64, ry: f64, angle: f64) -> PointD {
    PointD::new(cx + rx * angle.cos(), cy + ry * angle.sin())
}

/// Split an elliptical arc into at most four consecutive cubic curves.
///
/// The sweep is clamped to one full turn. A sweep too small to bend returns
/// no curves; callers connect the endpoints with a straight line instead.
pub fn bezier_arc(
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    start_angle: f64,
    sweep_angle: f64,
) -> Vec<Curve4Points> {
    let mut start_angle = start_angle % (2.0 * PI);
    let sweep_angle = sweep_angle.clamp(-2.0 * PI, 2.0 * PI);

    let mut curves = Vec::with_capacity(4);
    if sweep_angle.abs() < 1e-10 {
        return curves;
    }

    let mut total_sweep = 0.0;
    let mut done = false;
    while !done && curves.len() < 4 {
        let prev_sweep = total_sweep;
        let mut local_sweep;
        if sweep_angle < 0.0 {
            local_sweep = -PI * 0.5;
            total_sweep -= PI * 0.5;
            if total_sweep <= sweep_angle + BEZIER_ARC_ANGLE_EPSILON {
                local_sweep = sweep_angle - prev_sweep;
                done = true;
            }
        } else {
            local_sweep = PI * 0.5;
            total_sweep += PI * 0.5;
            if total_sweep >= sweep_angle - BEZIER_ARC_ANGLE_EPSILON {
                local_sweep = sweep_angle - prev_sweep;
                done = true;
            }
        }

        let mut cp = [0.0; 8];
        arc_to_bezier(cx, cy, rx, ry, start_angle, local_sweep, &mut cp);
        curves.push(Curve4Points { cp });
        start_angle += local_sweep;
    }
    curves
}

/// The four quarter curves of a full ellipse, starting at east.
pub fn ellipse_curves(cx: f64, cy: f64, rx: f64, ry: f64) -> Vec<Curve4Points> {
    bezier_arc(cx, cy, rx, ry, 0.0, 2.0 * PI)
}

// ============================================================================
// Tests
// ============================================================================
