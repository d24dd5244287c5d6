//! Dial pointer: a tapered needle turning on a round hub, with a drop
//! shadow.
//!
//! All sizes are fractions of the container, so the pointer scales with
//! the dial. The needle is a smooth rounded base around the hub center, two
//! straight flanks and a blunt smooth tip slightly past its nominal radius.

use tracing::{debug, trace};

use crate::basics::{FillingRule, RectD};
use crate::color::{mix_color, Color};
use crate::drawable::{Change, Drawable, ObserverId, Observers};
use crate::error::{check_finite, check_non_negative, check_ratio, Result};
use crate::math::point_on_arc;
use crate::paint::{Brush, DrawOp, Pen};
use crate::path_storage::Path;
use crate::region::Region;

/// Shadow offset as a fraction of the container, on each axis.
pub const DROP_SHADOW_PERCENT: f64 = 0.01;
/// Fraction of the hub radius held at the hub color before shading starts.
pub const HUB_BEVEL_PERCENT: f64 = 0.8;
/// Alpha of the black drop shadow.
pub const SHADOW_ALPHA: u8 = 100;
/// How far the needle outline is blended toward black.
pub const NEEDLE_OUTLINE_DARKEN: f64 = 0.75;

// ============================================================================
// NeedleSpec
// ============================================================================

/// Shape and appearance of a needle and its hub.
///
/// Setters validate before assigning and report the kind of change; a
/// rejected value leaves the settings untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct NeedleSpec {
    orientation_degrees: f64,
    radius_percent: f64,
    base_size_percent: f64,
    hub_size_percent: f64,
    tip_width_degrees: f64,
    tip_extension_percent: f64,
    needle_color: Color,
    hub_color: Color,
    hub_shade_color: Color,
    shadows_visible: bool,
    needle_above_hub: bool,
}

impl Default for NeedleSpec {
    fn default() -> Self {
        Self {
            orientation_degrees: 90.0,
            radius_percent: 0.85,
            base_size_percent: 0.02,
            hub_size_percent: 0.13,
            tip_width_degrees: 1.0,
            tip_extension_percent: 0.01,
            needle_color: Color::RED,
            hub_color: Color::BLACK,
            hub_shade_color: Color::BLACK,
            shadows_visible: true,
            needle_above_hub: false,
        }
    }
}

impl NeedleSpec {
    /// Direction the needle points: 0 east, 90 north, 180 west, 270 south.
    pub fn orientation_degrees(&self) -> f64 {
        self.orientation_degrees
    }

    /// Needle length as a fraction of the container.
    pub fn radius_percent(&self) -> f64 {
        self.radius_percent
    }

    /// Width of the needle base as a fraction of the container.
    pub fn base_size_percent(&self) -> f64 {
        self.base_size_percent
    }

    /// Hub diameter as a fraction of the container.
    pub fn hub_size_percent(&self) -> f64 {
        self.hub_size_percent
    }

    /// Angular width of the blunt tip.
    pub fn tip_width_degrees(&self) -> f64 {
        self.tip_width_degrees
    }

    /// How far the tip point reaches past the radius, as a fraction of the
    /// container.
    pub fn tip_extension_percent(&self) -> f64 {
        self.tip_extension_percent
    }

    pub fn needle_color(&self) -> Color {
        self.needle_color
    }

    pub fn hub_color(&self) -> Color {
        self.hub_color
    }

    pub fn hub_shade_color(&self) -> Color {
        self.hub_shade_color
    }

    pub fn shadows_visible(&self) -> bool {
        self.shadows_visible
    }

    pub fn needle_above_hub(&self) -> bool {
        self.needle_above_hub
    }

    /// Outline color: the needle color darkened toward black.
    pub fn needle_outline_color(&self) -> Color {
        mix_color(self.needle_color, Color::BLACK, NEEDLE_OUTLINE_DARKEN)
    }

    pub fn shadow_color(&self) -> Color {
        Color::BLACK.with_alpha(SHADOW_ALPHA)
    }

    /// Hub fill: `hub_color` in the middle shading out to `hub_shade_color`.
    pub fn hub_brush(&self, hub_rect: &RectD) -> Brush {
        Brush::PathGradient {
            bounds: *hub_rect,
            center: hub_rect.center(),
            center_color: self.hub_color,
            surround_color: self.hub_shade_color,
            focus_scale: HUB_BEVEL_PERCENT,
        }
    }

    pub fn hub_pen(&self) -> Pen {
        Pen::new(self.hub_shade_color, 1.0)
    }

    pub fn needle_pen(&self) -> Pen {
        Pen::new(self.needle_outline_color(), 1.0)
    }

    pub fn set_orientation_degrees(&mut self, degrees: f64) -> Result<Change> {
        self.orientation_degrees = check_finite("orientation_degrees", degrees)?;
        Ok(Change::Layout)
    }

    pub fn set_radius_percent(&mut self, value: f64) -> Result<Change> {
        self.radius_percent = check_ratio("radius_percent", value)?;
        Ok(Change::Layout)
    }

    pub fn set_base_size_percent(&mut self, value: f64) -> Result<Change> {
        self.base_size_percent = check_ratio("base_size_percent", value)?;
        Ok(Change::Layout)
    }

    pub fn set_hub_size_percent(&mut self, value: f64) -> Result<Change> {
        self.hub_size_percent = check_ratio("hub_size_percent", value)?;
        Ok(Change::Layout)
    }

    pub fn set_tip_width_degrees(&mut self, value: f64) -> Result<Change> {
        self.tip_width_degrees = check_non_negative("tip_width_degrees", value)?;
        Ok(Change::Layout)
    }

    pub fn set_tip_extension_percent(&mut self, value: f64) -> Result<Change> {
        self.tip_extension_percent = check_ratio("tip_extension_percent", value)?;
        Ok(Change::Layout)
    }

    pub fn set_needle_color(&mut self, color: Color) -> Result<Change> {
        self.needle_color = color;
        Ok(Change::Appearance)
    }

    pub fn set_hub_color(&mut self, color: Color) -> Result<Change> {
        self.hub_color = color;
        Ok(Change::Appearance)
    }

    pub fn set_hub_shade_color(&mut self, color: Color) -> Result<Change> {
        self.hub_shade_color = color;
        Ok(Change::Appearance)
    }

    pub fn set_shadows_visible(&mut self, visible: bool) -> Result<Change> {
        self.shadows_visible = visible;
        Ok(Change::Appearance)
    }

    pub fn set_needle_above_hub(&mut self, above: bool) -> Result<Change> {
        self.needle_above_hub = above;
        Ok(Change::Appearance)
    }

    /// `true` if both produce the same outlines for any container.
    pub fn same_layout(&self, other: &Self) -> bool {
        self.orientation_degrees == other.orientation_degrees
            && self.radius_percent == other.radius_percent
            && self.base_size_percent == other.base_size_percent
            && self.hub_size_percent == other.hub_size_percent
            && self.tip_width_degrees == other.tip_width_degrees
            && self.tip_extension_percent == other.tip_extension_percent
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// Computed outlines of a needle.
#[derive(Debug, Clone, PartialEq)]
pub struct NeedlePaths {
    pub needle: Path,
    pub hub: Path,
    /// Enlarged hub ellipse plus the offset needle, filled non-zero so the
    /// overlap is not punched out.
    pub shadow: Path,
    /// Rectangle the hub ellipse is inscribed in.
    pub hub_rect: RectD,
}

/// Container shrunk to `percent` of its size about its center.
fn scaled(container: &RectD, percent: f64) -> RectD {
    container.deflated(
        container.width * (1.0 - percent) / 2.0,
        container.height * (1.0 - percent) / 2.0,
    )
}

/// Build the needle, hub and shadow outlines for `container`.
pub fn compute_paths(container: &RectD, spec: &NeedleSpec) -> NeedlePaths {
    let hub_rect = scaled(container, spec.hub_size_percent);
    let needle_rect = scaled(container, spec.radius_percent);
    let base_rect = scaled(container, spec.base_size_percent);
    let tip_rect = needle_rect.inflated(
        container.width * spec.tip_extension_percent / 2.0,
        container.height * spec.tip_extension_percent / 2.0,
    );

    let o = spec.orientation_degrees;
    let half_tip = spec.tip_width_degrees / 2.0;
    let tip = point_on_arc(&tip_rect, o, 0.0);
    let tip_more = point_on_arc(&needle_rect, o + half_tip, 0.0);
    let tip_less = point_on_arc(&needle_rect, o - half_tip, 0.0);
    let base_more = point_on_arc(&base_rect, o + 90.0, 0.0);
    let base_less = point_on_arc(&base_rect, o - 90.0, 0.0);
    let base_ext = point_on_arc(&base_rect, o + 180.0, 0.0);

    let mut needle = Path::new();
    needle.add_curve(&[base_less, base_ext, base_more]);
    needle.add_line(base_more, tip_more);
    needle.add_curve(&[tip_more, tip, tip_less]);
    needle.close_figure();

    let mut hub = Path::new();
    hub.add_ellipse(&hub_rect);

    let dx = container.width * DROP_SHADOW_PERCENT;
    let dy = container.height * DROP_SHADOW_PERCENT;
    let mut shadow = Path::with_fill_rule(FillingRule::NonZero);
    shadow.add_ellipse(&RectD::new(
        hub_rect.x,
        hub_rect.y,
        hub_rect.width + dx,
        hub_rect.height + dy,
    ));
    shadow.add_path(&needle.translated(dx, dy), true);

    NeedlePaths {
        needle,
        hub,
        shadow,
        hub_rect,
    }
}

// ============================================================================
// Needle
// ============================================================================

/// A needle that owns its computed outlines and redraw region.
#[derive(Debug)]
pub struct Needle {
    spec: NeedleSpec,
    paths: Option<NeedlePaths>,
    region: Option<Region>,
    container: Option<RectD>,
    dirty: bool,
    observers: Observers,
}

impl Default for Needle {
    fn default() -> Self {
        Self::with_spec(NeedleSpec::default())
    }
}

impl Needle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spec(spec: NeedleSpec) -> Self {
        Self {
            spec,
            paths: None,
            region: None,
            container: None,
            dirty: true,
            observers: Observers::default(),
        }
    }

    pub fn spec(&self) -> &NeedleSpec {
        &self.spec
    }

    /// Apply one or more settings assignments, rolling all of them back on
    /// failure. See [`crate::DigitalBar::apply`].
    pub fn apply<F>(&mut self, assign: F) -> Result<Change>
    where
        F: FnOnce(&mut NeedleSpec) -> Result<Change>,
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

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn paths(&self) -> Option<&NeedlePaths> {
        self.paths.as_ref()
    }
}

impl Drawable for Needle {
    fn calculate_paths(&mut self, container: &RectD) {
        self.release();

        let paths = compute_paths(container, &self.spec);
        trace!(
            ?container,
            orientation = self.spec.orientation_degrees,
            needle_vertices = paths.needle.total_vertices(),
            shadow_vertices = paths.shadow.total_vertices(),
            "needle computed"
        );
        self.region = Some(Region::from_paths([
            &paths.shadow,
            &paths.needle,
            &paths.hub,
        ]));
        self.paths = Some(paths);
        self.container = Some(*container);
        self.dirty = false;
    }

    fn ensure_paths(&mut self, container: &RectD) -> bool {
        if self.dirty || self.paths.is_none() || self.container != Some(*container) {
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
        let Some(paths) = &self.paths else {
            return Vec::new();
        };
        let spec = &self.spec;
        let needle = [
            DrawOp::fill(&paths.needle, spec.needle_color),
            DrawOp::stroke(&paths.needle, spec.needle_pen()),
        ];
        let hub = [
            DrawOp::fill(&paths.hub, spec.hub_brush(&paths.hub_rect)),
            DrawOp::stroke(&paths.hub, spec.hub_pen()),
        ];

        let mut ops = Vec::with_capacity(5);
        if spec.shadows_visible {
            ops.push(DrawOp::fill(&paths.shadow, spec.shadow_color()));
        }
        if spec.needle_above_hub {
            ops.extend(hub);
            ops.extend(needle);
        } else {
            ops.extend(needle);
            ops.extend(hub);
        }
        ops
    }

    fn release(&mut self) {
        if self.paths.is_some() || self.region.is_some() {
            debug!("needle paths released");
        }
        self.paths = None;
        self.region = None;
    }
}

impl Drop for Needle {
    fn drop(&mut self) {
        self.release();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::{unite_rectangles, PointD};
    use crate::error::GaugeError;
    use std::sync::{Arc, Mutex};

    const EPS: f64 = 1e-9;

    fn container() -> RectD {
        RectD::new(0.0, 0.0, 200.0, 200.0)
    }

    fn spec_at(degrees: f64) -> NeedleSpec {
        let mut s = NeedleSpec::default();
        s.set_orientation_degrees(degrees).unwrap();
        s
    }

    fn near(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_defaults() {
        let s = NeedleSpec::default();
        assert_eq!(s.orientation_degrees(), 90.0);
        assert_eq!(s.radius_percent(), 0.85);
        assert_eq!(s.base_size_percent(), 0.02);
        assert_eq!(s.hub_size_percent(), 0.13);
        assert_eq!(s.tip_width_degrees(), 1.0);
        assert_eq!(s.tip_extension_percent(), 0.01);
        assert_eq!(s.needle_color(), Color::RED);
        assert_eq!(s.hub_color(), Color::BLACK);
        assert_eq!(s.hub_shade_color(), Color::BLACK);
        assert!(s.shadows_visible());
        assert!(!s.needle_above_hub());
    }

    #[test]
    fn test_radius_validation() {
        let mut s = NeedleSpec::default();
        assert_eq!(s.set_radius_percent(0.5), Ok(Change::Layout));
        assert_eq!(
            s.set_radius_percent(1.5),
            Err(GaugeError::OutOfRange {
                field: "radius_percent",
                value: 1.5
            })
        );
        assert_eq!(s.radius_percent(), 0.5);
        assert_eq!(s.set_radius_percent(0.85), Ok(Change::Layout));
        assert_eq!(s.radius_percent(), 0.85);
    }

    #[test]
    fn test_other_validation() {
        let mut s = NeedleSpec::default();
        let before = s.clone();
        assert!(s.set_base_size_percent(-0.1).is_err());
        assert!(s.set_hub_size_percent(1.01).is_err());
        assert!(s.set_tip_extension_percent(2.0).is_err());
        assert!(matches!(
            s.set_tip_width_degrees(-1.0),
            Err(GaugeError::Negative { .. })
        ));
        assert!(matches!(
            s.set_orientation_degrees(f64::INFINITY),
            Err(GaugeError::NotFinite {
                field: "orientation_degrees"
            })
        ));
        assert_eq!(s, before);
        // Orientation itself is unbounded.
        assert!(s.set_orientation_degrees(-450.0).is_ok());
    }

    #[test]
    fn test_derived_colors() {
        let s = NeedleSpec::default();
        assert_eq!(s.needle_outline_color(), Color::from_argb(255, 63, 0, 0));
        assert_eq!(s.shadow_color(), Color::from_argb(100, 0, 0, 0));
        assert_eq!(s.hub_pen(), Pen::new(Color::BLACK, 1.0));
    }

    #[test]
    fn test_paths_closed_and_shaped() {
        let p = compute_paths(&container(), &NeedleSpec::default());
        assert!(p.needle.is_closed());
        assert!(p.hub.is_closed());
        assert!(p.shadow.is_closed());
        assert_eq!(p.shadow.figure_count(), 2);
        assert_eq!(p.shadow.fill_rule(), FillingRule::NonZero);
        // Base curve (2 segments), flank line, tip curve (2 segments), close.
        assert_eq!(p.needle.total_vertices(), 1 + 6 + 1 + 6 + 1);
        assert_eq!(p.needle.figure_count(), 1);
    }

    #[test]
    fn test_tip_and_hub_placement() {
        let p = compute_paths(&container(), &NeedleSpec::default());
        // Needle rect (15, 15, 170, 170), tip rect grown by 1 each side.
        // The tip ends the first segment of the tip curve.
        let tip = p.needle.vertices()[1 + 6 + 1 + 2];
        assert!(near(tip.x, 100.0) && near(tip.y, 14.0), "tip {tip:?}");

        assert!(near(p.hub_rect.x, 87.0) && near(p.hub_rect.width, 26.0));
        let hub = p.hub.bounding_rect().unwrap();
        assert!(near(hub.left(), 87.0) && near(hub.right(), 113.0));
        assert!(near(hub.top(), 87.0) && near(hub.bottom(), 113.0));
    }

    #[test]
    fn test_compute_is_idempotent() {
        let s = spec_at(217.5);
        let c = RectD::new(5.0, 9.0, 120.0, 80.0);
        assert_eq!(compute_paths(&c, &s), compute_paths(&c, &s));
    }

    fn translated_union(p: &NeedlePaths, c: &RectD) -> RectD {
        let needle = p.needle.bounding_rect().unwrap();
        let hub = p.hub.bounding_rect().unwrap();
        unite_rectangles(&needle, &hub).offset(c.width * 0.01, c.height * 0.01)
    }

    #[test]
    fn test_shadow_bounds_when_needle_points_up_left() {
        let c = container();
        let p = compute_paths(&c, &spec_at(135.0));
        let expected = translated_union(&p, &c);
        let shadow = p.shadow.bounding_rect().unwrap();
        assert!(near(shadow.left(), expected.left()));
        assert!(near(shadow.top(), expected.top()));
        assert!(near(shadow.right(), expected.right()));
        assert!(near(shadow.bottom(), expected.bottom()));
    }

    #[test]
    fn test_shadow_bounds_contain_translated_box() {
        let c = RectD::new(10.0, 20.0, 300.0, 180.0);
        for degrees in [0.0, 45.0, 90.0, 180.0, 270.0, 315.0] {
            let p = compute_paths(&c, &spec_at(degrees));
            let expected = translated_union(&p, &c);
            let shadow = p.shadow.bounding_rect().unwrap();
            assert!(shadow.left() <= expected.left() + EPS, "{degrees}");
            assert!(shadow.top() <= expected.top() + EPS, "{degrees}");
            assert!(near(shadow.right(), expected.right()), "{degrees}");
            assert!(near(shadow.bottom(), expected.bottom()), "{degrees}");
        }
    }

    #[test]
    fn test_degenerate_container() {
        let p = compute_paths(&RectD::default(), &NeedleSpec::default());
        assert!(p.needle.is_closed() && p.hub.is_closed() && p.shadow.is_closed());
        for path in [&p.needle, &p.hub, &p.shadow] {
            assert!(path.points().all(|q| q == PointD::new(0.0, 0.0)));
        }
    }

    #[test]
    fn test_negative_container_is_well_formed() {
        let c = RectD::new(0.0, 0.0, -10.0, -5.0);
        for degrees in [0.0, 135.0, 300.0] {
            let p = compute_paths(&c, &spec_at(degrees));
            for path in [&p.needle, &p.hub, &p.shadow] {
                assert!(path.is_closed(), "{degrees}");
                assert!(path.points().all(|q| q.x.is_finite() && q.y.is_finite()));
            }
        }
        let mut n = Needle::new();
        n.calculate_paths(&c);
        assert!(n.redraw_region().is_some_and(|r| !r.is_empty()));
        assert_eq!(n.draw_ops().len(), 5);
    }

    #[test]
    fn test_draw_order_default() {
        let mut n = Needle::new();
        n.calculate_paths(&container());
        let paths = n.paths().unwrap();
        let ops = n.draw_ops();
        assert_eq!(ops.len(), 5);
        assert_eq!(
            ops[0],
            DrawOp::fill(&paths.shadow, Color::BLACK.with_alpha(100))
        );
        assert_eq!(ops[1], DrawOp::fill(&paths.needle, Color::RED));
        assert_eq!(
            ops[2],
            DrawOp::stroke(&paths.needle, Pen::new(Color::from_argb(255, 63, 0, 0), 1.0))
        );
        assert!(std::ptr::eq(ops[3].path(), &paths.hub));
        match &ops[3] {
            DrawOp::Fill {
                brush: Brush::PathGradient { focus_scale, .. },
                ..
            } => assert_eq!(*focus_scale, HUB_BEVEL_PERCENT),
            other => panic!("unexpected op {other:?}"),
        }
        assert_eq!(ops[4], DrawOp::stroke(&paths.hub, Pen::new(Color::BLACK, 1.0)));
    }

    #[test]
    fn test_draw_order_needle_above_without_shadow() {
        let mut n = Needle::new();
        n.apply(|s| s.set_shadows_visible(false)).unwrap();
        n.apply(|s| s.set_needle_above_hub(true)).unwrap();
        n.ensure_paths(&container());
        let paths = n.paths().unwrap();
        let order: Vec<*const Path> = n
            .draw_ops()
            .iter()
            .map(|op| op.path() as *const Path)
            .collect();
        let hub = &paths.hub as *const Path;
        let needle = &paths.needle as *const Path;
        assert_eq!(order, vec![hub, hub, needle, needle]);
    }

    #[test]
    fn test_redraw_region_covers_all_paths() {
        let mut n = Needle::new();
        assert!(n.redraw_region().is_none());
        n.calculate_paths(&container());
        let p = n.paths().unwrap();
        let mut expected = p.shadow.bounding_rect().unwrap();
        for path in [&p.needle, &p.hub] {
            expected = unite_rectangles(&expected, &path.bounding_rect().unwrap());
        }
        assert_eq!(n.redraw_region().unwrap().bounds(), Some(expected));
    }

    #[test]
    fn test_observer_classification() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut n = Needle::new();
        let log = Arc::clone(&seen);
        n.subscribe(move |c| log.lock().unwrap().push(c));

        n.apply(|s| s.set_orientation_degrees(10.0)).unwrap();
        n.apply(|s| s.set_hub_size_percent(0.2)).unwrap();
        n.apply(|s| s.set_needle_color(Color::WHITE)).unwrap();
        n.apply(|s| s.set_hub_shade_color(Color::WHITE)).unwrap();
        assert!(n.apply(|s| s.set_radius_percent(1.5)).is_err());

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                Change::Layout,
                Change::Layout,
                Change::Appearance,
                Change::Appearance
            ]
        );
    }

    #[test]
    fn test_ensure_paths_tracks_layout() {
        let mut n = Needle::new();
        let c = container();
        assert!(n.ensure_paths(&c));
        assert!(!n.ensure_paths(&c));
        n.apply(|s| s.set_hub_color(Color::WHITE)).unwrap();
        assert!(!n.ensure_paths(&c));
        n.apply(|s| s.set_orientation_degrees(0.0)).unwrap();
        assert!(n.is_dirty());
        assert!(n.ensure_paths(&c));
        assert!(!n.is_dirty());
    }

    #[test]
    fn test_failed_apply_rolls_back_earlier_assignments() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut n = Needle::new();
        let log = Arc::clone(&seen);
        n.subscribe(move |c| log.lock().unwrap().push(c));
        n.ensure_paths(&container());

        let result = n.apply(|s| {
            s.set_orientation_degrees(10.0)?;
            s.set_needle_color(Color::WHITE)?;
            s.set_radius_percent(1.5)
        });
        assert!(matches!(result, Err(GaugeError::OutOfRange { .. })));
        assert_eq!(n.spec(), &NeedleSpec::default());
        assert!(!n.is_dirty());
        assert!(!n.ensure_paths(&container()));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_apply_detects_discarded_layout_change() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut n = Needle::new();
        let log = Arc::clone(&seen);
        n.subscribe(move |c| log.lock().unwrap().push(c));
        let c = container();
        n.ensure_paths(&c);
        let before = n.paths().cloned().unwrap();

        let result = n.apply(|s| {
            let _ = s.set_orientation_degrees(200.0);
            s.set_hub_color(Color::WHITE)
        });
        assert_eq!(result, Ok(Change::Layout));
        assert!(n.is_dirty());
        assert!(n.ensure_paths(&c));
        assert_ne!(n.paths(), Some(&before));
        assert_eq!(*seen.lock().unwrap(), vec![Change::Layout]);
    }

    #[test]
    fn test_release_twice_is_noop() {
        let mut n = Needle::new();
        n.calculate_paths(&container());
        n.release();
        n.release();
        assert!(n.paths().is_none());
        assert!(n.redraw_region().is_none());
        assert!(n.draw_ops().is_empty());
    }

    #[test]
    fn test_engine_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Needle>();
    }
}
