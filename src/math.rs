//! Polar placement helpers for dial geometry.
//!
//! Dial angles are in degrees, counter-clockwise from east as seen on a
//! y-down surface: 0 is east, 90 north, 180 west and 270 south.

use crate::basics::{PointD, RectD, PI};
use crate::path_storage::Path;

/// Number of steps an arc is sampled in; the path passes through one more
/// point than this.
pub const ARC_STEPS: usize = 100;

/// Point on the ellipse inscribed in `rect` at `degrees`, pushed outward
/// along the radius by `offset` (inward when negative).
pub fn point_on_arc(rect: &RectD, degrees: f64, offset: f64) -> PointD {
    let c = rect.center();
    let rads = (PI / 180.0) * (degrees + 90.0);
    PointD::new(
        c.x + (offset + rect.width / 2.0) * rads.sin(),
        c.y + (offset + rect.height / 2.0) * rads.cos(),
    )
}

/// Open smooth curve along the ellipse inscribed in `rect`, beginning at
/// `start_degrees` and running clockwise for `arc_length_degrees`.
pub fn arc_path(rect: &RectD, start_degrees: f64, arc_length_degrees: f64) -> Path {
    let delta = arc_length_degrees / ARC_STEPS as f64;
    let points: Vec<PointD> = (0..=ARC_STEPS)
        .map(|i| point_on_arc(rect, start_degrees - i as f64 * delta, 0.0))
        .collect();

    let mut path = Path::new();
    path.add_curve(&points);
    path
}
