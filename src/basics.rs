//! Points, rectangles, path commands and the `VertexSource` trait.
//!
//! Coordinates are screen-style: x grows to the right, y grows downward.

pub const PI: f64 = std::f64::consts::PI;

/// Round half up to an unsigned integer. Negative input saturates at 0.
#[inline]
pub fn uround(v: f64) -> u32 {
    (v + 0.5) as u32
}

// ============================================================================
// Filling rule
// ============================================================================

/// How overlapping figures of one path combine when filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillingRule {
    /// Any area wound at least once is filled.
    NonZero,
    /// Areas covered an odd number of times are filled.
    #[default]
    EvenOdd,
}

// ============================================================================
// Point
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointD {
    pub x: f64,
    pub y: f64,
}

impl PointD {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Rect
// ============================================================================

/// An axis-aligned rectangle given by its top-left corner and size.
///
/// Widths and heights may be zero or negative. Such rectangles are
/// degenerate but every operation on them stays well defined.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectD {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectD {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> PointD {
        PointD::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Copy grown outward by `dx` on the left and right and `dy` on the
    /// top and bottom. The center stays put.
    pub fn inflated(&self, dx: f64, dy: f64) -> Self {
        Self::new(
            self.x - dx,
            self.y - dy,
            self.width + 2.0 * dx,
            self.height + 2.0 * dy,
        )
    }

    /// Copy shrunk inward by `(dx, dy)`; may go negative.
    pub fn deflated(&self, dx: f64, dy: f64) -> Self {
        self.inflated(-dx, -dy)
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Edges count as inside.
    pub fn hit_test(&self, x: f64, y: f64) -> bool {
        (self.left()..=self.right()).contains(&x) && (self.top()..=self.bottom()).contains(&y)
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

/// Smallest rectangle covering both.
pub fn unite_rectangles(r1: &RectD, r2: &RectD) -> RectD {
    RectD::from_ltrb(
        r1.left().min(r2.left()),
        r1.top().min(r2.top()),
        r1.right().max(r2.right()),
        r1.bottom().max(r2.bottom()),
    )
}

// ============================================================================
// Path commands
// ============================================================================

pub const PATH_CMD_STOP: u32 = 0;
pub const PATH_CMD_MOVE_TO: u32 = 1;
pub const PATH_CMD_LINE_TO: u32 = 2;
pub const PATH_CMD_CURVE4: u32 = 4;
pub const PATH_CMD_END_POLY: u32 = 0x0F;

/// Set on an end-poly command when the figure is closed.
pub const PATH_FLAGS_CLOSE: u32 = 0x40;

#[inline]
pub fn is_stop(c: u32) -> bool {
    c == PATH_CMD_STOP
}

/// Move, line or curve: a command that carries a coordinate.
#[inline]
pub fn is_vertex(c: u32) -> bool {
    (PATH_CMD_MOVE_TO..=PATH_CMD_CURVE4).contains(&c)
}

#[inline]
pub fn is_move_to(c: u32) -> bool {
    c == PATH_CMD_MOVE_TO
}

#[inline]
pub fn is_line_to(c: u32) -> bool {
    c == PATH_CMD_LINE_TO
}

#[inline]
pub fn is_curve(c: u32) -> bool {
    c == PATH_CMD_CURVE4
}

/// End of a figure, closed or not.
#[inline]
pub fn is_end_poly(c: u32) -> bool {
    c & !PATH_FLAGS_CLOSE == PATH_CMD_END_POLY
}

#[inline]
pub fn is_close(c: u32) -> bool {
    c == PATH_CMD_END_POLY | PATH_FLAGS_CLOSE
}

// ============================================================================
// Vertex
// ============================================================================

/// A stored path entry: coordinates plus the command that uses them.
///
/// End-poly entries carry `(0, 0)`; readers must not treat them as points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexD {
    pub x: f64,
    pub y: f64,
    pub cmd: u32,
}

impl VertexD {
    pub const fn new(x: f64, y: f64, cmd: u32) -> Self {
        Self { x, y, cmd }
    }
}

// ============================================================================
// VertexSource trait
// ============================================================================

/// A rewindable stream of path vertices.
pub trait VertexSource {
    /// Restart iteration. `path_id` is the index of the first vertex to
    /// emit; 0 for the start.
    fn rewind(&mut self, path_id: u32);

    /// Write the next coordinates to `x`/`y` and return their command, or
    /// `PATH_CMD_STOP` once exhausted.
    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32;
}

impl<T: VertexSource> VertexSource for &mut T {
    fn rewind(&mut self, path_id: u32) {
        (*self).rewind(path_id);
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        (*self).vertex(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uround() {
        assert_eq!(uround(127.5), 128);
        assert_eq!(uround(127.49), 127);
        assert_eq!(uround(0.0), 0);
        assert_eq!(uround(-3.0), 0);
    }

    #[test]
    fn test_rect_edges_and_center() {
        let r = RectD::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(
            (r.left(), r.top(), r.right(), r.bottom()),
            (10.0, 20.0, 110.0, 70.0)
        );
        assert_eq!(r.center(), PointD::new(60.0, 45.0));
        assert_eq!(RectD::from_ltrb(10.0, 20.0, 110.0, 70.0), r);
    }

    #[test]
    fn test_inflate_keeps_center() {
        let r = RectD::new(10.0, 10.0, 100.0, 60.0);
        let big = r.inflated(5.0, 2.0);
        assert_eq!(big, RectD::new(5.0, 8.0, 110.0, 64.0));
        assert_eq!(big.deflated(5.0, 2.0), r);
        assert_eq!(r.deflated(20.0, 10.0).center(), r.center());
    }

    #[test]
    fn test_deflate_past_zero() {
        let r = RectD::new(0.0, 0.0, 10.0, 10.0).deflated(8.0, 0.0);
        assert_eq!(r.width, -6.0);
        assert!(r.is_empty());
        assert_eq!(r.center(), PointD::new(5.0, 5.0));
        assert!(RectD::new(3.0, 3.0, 0.0, 5.0).is_empty());
        assert!(!RectD::new(3.0, 3.0, 1.0, 5.0).is_empty());
    }

    #[test]
    fn test_hit_test_includes_edges() {
        let r = RectD::new(10.0, 20.0, 20.0, 20.0);
        assert!(r.hit_test(10.0, 20.0));
        assert!(r.hit_test(30.0, 40.0));
        assert!(r.hit_test(15.0, 25.0));
        assert!(!r.hit_test(5.0, 25.0));
        assert!(!r.hit_test(15.0, 40.5));
    }

    #[test]
    fn test_unite_and_offset() {
        let a = RectD::new(10.0, 20.0, 20.0, 20.0);
        let b = RectD::new(50.0, 0.0, 5.0, 5.0);
        assert_eq!(unite_rectangles(&a, &b), RectD::from_ltrb(10.0, 0.0, 55.0, 40.0));
        assert_eq!(a.offset(1.0, -2.0), RectD::new(11.0, 18.0, 20.0, 20.0));
    }

    #[test]
    fn test_command_classification() {
        assert!(is_stop(PATH_CMD_STOP));
        for c in [PATH_CMD_MOVE_TO, PATH_CMD_LINE_TO, PATH_CMD_CURVE4] {
            assert!(is_vertex(c));
            assert!(!is_end_poly(c));
        }
        assert!(!is_vertex(PATH_CMD_STOP));
        assert!(!is_vertex(PATH_CMD_END_POLY));
        assert!(is_curve(PATH_CMD_CURVE4));
        assert!(!is_curve(PATH_CMD_LINE_TO));

        assert!(is_end_poly(PATH_CMD_END_POLY));
        assert!(is_end_poly(PATH_CMD_END_POLY | PATH_FLAGS_CLOSE));
        assert!(is_close(PATH_CMD_END_POLY | PATH_FLAGS_CLOSE));
        assert!(!is_close(PATH_CMD_END_POLY));
    }
}
