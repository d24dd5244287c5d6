//! # gauge-geometry
//!
//! Vector geometry for gauge widgets, independent of any windowing toolkit.
//!
//! Given a container rectangle and a handful of shape parameters, the crate
//! produces closed outlines for two widgets:
//!
//! - **Digital bar segments** ([`DigitalBar`]): straight bars with square or
//!   notched ends, the building block of segmented displays.
//! - **Dial needles** ([`Needle`]): a tapered needle on a round hub with a
//!   translucent drop shadow.
//!
//! Each widget also reports a redraw [`Region`] covering what it drew, and
//! its render order as a list of [`DrawOp`]s a host can map onto any
//! drawing API.
//!
//! ## Architecture
//!
//! 1. **Foundation**: points, rectangles, path commands, colors.
//! 2. **Geometry**: Bezier arcs, cardinal splines and the [`Path`]
//!    container.
//! 3. **Widgets**: the bar and needle engines, sharing the [`Drawable`]
//!    trait and change notification.
//!
//! ```
//! use gauge_geometry::{Drawable, Needle, RectD};
//!
//! let mut needle = Needle::new();
//! needle.apply(|s| s.set_orientation_degrees(45.0)).unwrap();
//! needle.ensure_paths(&RectD::new(0.0, 0.0, 200.0, 200.0));
//! assert_eq!(needle.draw_ops().len(), 5);
//! ```

// Foundation
pub mod basics;
pub mod color;
pub mod error;
pub mod math;

// Geometry
pub mod bezier_arc;
pub mod bounding_rect;
pub mod curves;
pub mod path_storage;
pub mod region;
pub mod shapes;

// Widgets
pub mod digital_bar;
pub mod drawable;
pub mod needle;
pub mod paint;

pub use basics::{FillingRule, PointD, RectD, VertexD, VertexSource};
pub use color::{mix_color, Color};
pub use digital_bar::{
    compute_segment, BarSegmentSpec, DigitalBar, SegmentCorners, SegmentOrientation,
};
pub use drawable::{Change, Drawable, ObserverId};
pub use error::{GaugeError, Result};
pub use math::{arc_path, point_on_arc};
pub use needle::{compute_paths, Needle, NeedlePaths, NeedleSpec};
pub use paint::{Brush, DrawOp, Pen};
pub use path_storage::Path;
pub use region::Region;
pub use shapes::{control_path, gradient_brush, shine_path, ControlShape};
