//! One segment of a segmented "digital" bar display.
//!
//! A segment is a bar whose ends are either square or notched into a
//! pointed tip, so neighbouring segments (as in a seven-segment digit) can
//! meet along a diagonal. Each of the four corners is chosen independently.
//!
//! The outline is built from up to eight points walked clockwise from the
//! middle of the left end:
//!
//! ```text
//!        topLeftOffset   topCenter        topRightOffset
//!              +-------------+---------------+
//!  leftCenter +                                 + rightCenter
//!              +-------------+---------------+
//!     bottomLeftOffset  bottomCenter   bottomRightOffset
//! ```
//!
//! A square corner replaces its notch points with the rectangle corner.

use bitflags::bitflags;
use tracing::{debug, trace};

use crate::basics::{PointD, RectD};
use crate::color::Color;
use crate::drawable::{Change, Drawable, ObserverId, Observers};
use crate::error::{check_non_negative, check_ratio, Result};
use crate::paint::DrawOp;
use crate::path_storage::Path;
use crate::region::Region;

/// Axis a segment runs along. Padding and the tip length apply along it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SegmentOrientation {
    #[default]
    Horizontal,
    Vertical,
}

bitflags! {
    /// Corners drawn square. A corner whose flag is clear is notched.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SegmentCorners: u32 {
        const TOP_LEFT = 0x1;
        const BOTTOM_LEFT = 0x2;
        const TOP_RIGHT = 0x4;
        const BOTTOM_RIGHT = 0x8;
        const ALL = 0xF;
        const BOTH_TOP = Self::TOP_LEFT.bits() | Self::TOP_RIGHT.bits();
        const BOTH_RIGHT = Self::TOP_RIGHT.bits() | Self::BOTTOM_RIGHT.bits();
        const BOTH_BOTTOM = Self::BOTTOM_LEFT.bits() | Self::BOTTOM_RIGHT.bits();
        const BOTH_LEFT = Self::TOP_LEFT.bits() | Self::BOTTOM_LEFT.bits();
    }
}

// ============================================================================
// BarSegmentSpec
// ============================================================================

/// Shape and appearance of one bar segment.
///
/// Every setter validates first and reports whether the assignment changed
/// the outline ([`Change::Layout`]) or only its colors
/// ([`Change::Appearance`]). A rejected value leaves the settings untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSegmentSpec {
    orientation: SegmentOrientation,
    corners: SegmentCorners,
    padding: f64,
    tip_length: f64,
    color: Color,
    opacity_when_off: f64,
    is_on: bool,
}

impl Default for BarSegmentSpec {
    fn default() -> Self {
        Self {
            orientation: SegmentOrientation::Horizontal,
            corners: SegmentCorners::empty(),
            padding: 0.0,
            tip_length: 0.0,
            color: Color::BLACK,
            opacity_when_off: 0.1,
            is_on: true,
        }
    }
}

impl BarSegmentSpec {
    pub fn new(orientation: SegmentOrientation) -> Self {
        Self {
            orientation,
            ..Self::default()
        }
    }

    pub fn orientation(&self) -> SegmentOrientation {
        self.orientation
    }

    pub fn corners(&self) -> SegmentCorners {
        self.corners
    }

    /// Gap left at each end of the segment along its axis.
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Depth of a notched end, usually the segment's thickness.
    pub fn tip_length(&self) -> f64 {
        self.tip_length
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn opacity_when_off(&self) -> f64 {
        self.opacity_when_off
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// `color` with its alpha replaced by `round(255 * opacity_when_off)`.
    pub fn off_color(&self) -> Color {
        self.color.with_opacity(self.opacity_when_off)
    }

    /// Color the segment is filled with in its current state.
    pub fn fill_color(&self) -> Color {
        if self.is_on {
            self.color
        } else {
            self.off_color()
        }
    }

    pub fn set_orientation(&mut self, orientation: SegmentOrientation) -> Result<Change> {
        self.orientation = orientation;
        Ok(Change::Layout)
    }

    pub fn set_corners(&mut self, corners: SegmentCorners) -> Result<Change> {
        self.corners = corners;
        Ok(Change::Layout)
    }

    pub fn set_padding(&mut self, padding: f64) -> Result<Change> {
        self.padding = check_non_negative("padding", padding)?;
        Ok(Change::Layout)
    }

    pub fn set_tip_length(&mut self, tip_length: f64) -> Result<Change> {
        self.tip_length = check_non_negative("tip_length", tip_length)?;
        Ok(Change::Layout)
    }

    pub fn set_color(&mut self, color: Color) -> Result<Change> {
        self.color = color;
        Ok(Change::Appearance)
    }

    pub fn set_opacity_when_off(&mut self, opacity: f64) -> Result<Change> {
        self.opacity_when_off = check_ratio("opacity_when_off", opacity)?;
        Ok(Change::Appearance)
    }

    pub fn set_on(&mut self, is_on: bool) -> Result<Change> {
        self.is_on = is_on;
        Ok(Change::Appearance)
    }

    /// `true` if both produce the same outline for any container.
    pub fn same_layout(&self, other: &Self) -> bool {
        self.orientation == other.orientation
            && self.corners == other.corners
            && self.padding == other.padding
            && self.tip_length == other.tip_length
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// Outline points of a segment filling `container`.
pub fn segment_points(container: &RectD, spec: &BarSegmentSpec) -> Vec<PointD> {
    let horizontal = spec.orientation == SegmentOrientation::Horizontal;
    let rect = if horizontal {
        container.deflated(spec.padding, 0.0)
    } else {
        container.deflated(0.0, spec.padding)
    };

    let top_left = PointD::new(rect.left(), rect.top());
    let top_right = PointD::new(rect.right(), rect.top());
    let bottom_left = PointD::new(rect.left(), rect.bottom());
    let bottom_right = PointD::new(rect.right(), rect.bottom());

    let (xo, yo) = if horizontal {
        (spec.tip_length, 0.0)
    } else {
        (0.0, spec.tip_length)
    };
    let top_left_offset = PointD::new(top_left.x + xo, top_left.y + yo);
    let top_right_offset = PointD::new(top_right.x - xo, top_right.y + yo);
    let bottom_left_offset = PointD::new(bottom_left.x + xo, bottom_left.y - yo);
    let bottom_right_offset = PointD::new(bottom_right.x - xo, bottom_right.y - yo);

    let top_center = PointD::new(rect.left() + rect.width / 2.0, rect.top() + yo / 2.0);
    let left_center = PointD::new(rect.left() + xo / 2.0, rect.top() + rect.height / 2.0);
    let bottom_center = PointD::new(top_center.x, rect.bottom() - yo / 2.0);
    let right_center = PointD::new(rect.right() - xo / 2.0, left_center.y);

    let square = |c: SegmentCorners| spec.corners.contains(c);
    let mut points = Vec::with_capacity(8);

    points.push(left_center);
    if square(SegmentCorners::TOP_LEFT) {
        points.push(top_left);
    } else {
        points.push(top_left_offset);
        points.push(top_center);
    }
    if square(SegmentCorners::TOP_RIGHT) {
        points.push(top_right);
    } else {
        points.push(top_right_offset);
    }
    if square(SegmentCorners::BOTTOM_RIGHT) {
        points.push(bottom_right);
    } else {
        points.push(right_center);
        points.push(bottom_right_offset);
    }
    if square(SegmentCorners::BOTTOM_LEFT) {
        points.push(bottom_left);
    } else {
        points.push(bottom_center);
        points.push(bottom_left_offset);
    }
    if square(SegmentCorners::TOP_LEFT) {
        points.push(top_left);
    }
    points
}

/// Closed outline of a segment filling `container`, plus its fill color.
pub fn compute_segment(container: &RectD, spec: &BarSegmentSpec) -> (Path, Color) {
    let mut path = Path::new();
    path.add_lines(&segment_points(container, spec));
    path.close_figure();
    (path, spec.fill_color())
}

// ============================================================================
// DigitalBar
// ============================================================================

/// A bar segment that owns its computed outline and redraw region.
#[derive(Debug)]
pub struct DigitalBar {
    spec: BarSegmentSpec,
    path: Option<Path>,
    region: Option<Region>,
    container: Option<RectD>,
    dirty: bool,
    observers: Observers,
}

impl Default for DigitalBar {
    fn default() -> Self {
        Self::with_spec(BarSegmentSpec::default())
    }
}

impl DigitalBar {
    pub fn new(orientation: SegmentOrientation) -> Self {
        Self::with_spec(BarSegmentSpec::new(orientation))
    }

    pub fn with_spec(spec: BarSegmentSpec) -> Self {
        Self {
            spec,
            path: None,
            region: None,
            container: None,
            dirty: true,
            observers: Observers::default(),
        }
    }

    pub fn spec(&self) -> &BarSegmentSpec {
        &self.spec
    }

    /// Apply one settings assignment.
    ///
    /// The closure may make several assignments. If it fails, every
    /// assignment it made is rolled back and nobody is notified. On success
    /// the change is classified by comparing the outline fields before and
    /// after, so a layout change always marks the paths stale whatever the
    /// closure reports.
    ///
    /// ```
    /// use gauge_geometry::{Change, DigitalBar, SegmentOrientation};
    ///
    /// let mut bar = DigitalBar::new(SegmentOrientation::Vertical);
    /// assert_eq!(bar.apply(|s| s.set_padding(2.0)), Ok(Change::Layout));
    /// assert!(bar.apply(|s| s.set_padding(-1.0)).is_err());
    /// assert_eq!(bar.spec().padding(), 2.0);
    /// ```
    pub fn apply<F>(&mut self, assign: F) -> Result<Change>
    where
        F: FnOnce(&mut BarSegmentSpec) -> Result<Change>,
    {
        let before = self.spec.clone();
        let reported = match assign(&mut self.spec) {
            Ok(change) => change,
            Err(e) => {
                self.spec = before;
                return Err(e);
            }
        };
        let change = if self.spec.same_layout(&before) {
            reported
        } else {
            Change::Layout
        };
        if change == Change::Layout {
            self.dirty = true;
        }
        self.observers.notify(change);
        Ok(change)
    }

    pub fn subscribe<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(Change) + Send + 'static,
    {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// `true` if the outline must be recomputed before the next render.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    pub fn fill_color(&self) -> Color {
        self.spec.fill_color()
    }

    pub fn off_color(&self) -> Color {
        self.spec.off_color()
    }
}

impl Drawable for DigitalBar {
    fn calculate_paths(&mut self, container: &RectD) {
        self.release();

        let (path, _) = compute_segment(container, &self.spec);
        trace!(
            ?container,
            vertices = path.total_vertices(),
            "bar segment computed"
        );
        self.region = Some(Region::from_paths([&path]));
        self.path = Some(path);
        self.container = Some(*container);
        self.dirty = false;
    }

    fn ensure_paths(&mut self, container: &RectD) -> bool {
        if self.dirty || self.path.is_none() || self.container != Some(*container) {
            self.calculate_paths(container);
            true
        } else {
            false
        }
    }

    fn redraw_region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    fn draw_ops(&self) -> Vec<DrawOp<'_>> {
        match &self.path {
            Some(path) => vec![DrawOp::fill(path, self.fill_color())],
            None => Vec::new(),
        }
    }

    fn release(&mut self) {
        if self.path.is_some() || self.region.is_some() {
            debug!("bar segment paths released");
        }
        self.path = None;
        self.region = None;
    }
}

impl Drop for DigitalBar {
    fn drop(&mut self) {
        self.release();
    }
}

// ============================================================================
// Tests
// ============================================================================
