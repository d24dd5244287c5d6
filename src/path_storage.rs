//! Path storage: the vertex container every shape is built into.
//!
//! A `Path` is an ordered list of vertices, each an (x, y) coordinate plus a
//! path command. A path may hold several figures; each begins with a
//! `move_to` and a closed figure ends with `end_poly | close`. Curves are
//! stored as cubic Bezier control points (`curve4`, three vertices per
//! segment) and are never flattened here; the host decides how finely to
//! render them.

use crate::basics::{
    is_close, is_end_poly, is_move_to, is_stop, is_vertex, FillingRule, PointD, RectD, VertexD,
    VertexSource, PATH_CMD_CURVE4, PATH_CMD_END_POLY, PATH_CMD_LINE_TO, PATH_CMD_MOVE_TO,
    PATH_CMD_STOP, PATH_FLAGS_CLOSE,
};
use crate::bezier_arc::{bezier_arc, ellipse_curves, ellipse_point};
use crate::bounding_rect::bounding_rect_single;
use crate::curves::{cardinal_spline, Curve4Points, SPLINE_TENSION};

/// Path storage, the main vertex container.
///
/// Implements `VertexSource` so it can be walked by anything that consumes
/// vertices. For read-only walks that should not disturb the internal
/// cursor use [`Path::vertex_source`].
#[derive(Debug, Clone, Default)]
pub struct Path {
    vertices: Vec<VertexD>,
    iterator: usize,
    fill_rule: FillingRule,
    new_figure: bool,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.fill_rule == other.fill_rule && self.vertices == other.vertices
    }
}

impl Path {
    /// Create an empty path with the even-odd fill rule.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fill_rule(fill_rule: FillingRule) -> Self {
        Self {
            fill_rule,
            ..Self::default()
        }
    }

    pub fn fill_rule(&self) -> FillingRule {
        self.fill_rule
    }

    pub fn set_fill_rule(&mut self, fill_rule: FillingRule) {
        self.fill_rule = fill_rule;
    }

    // ---------------------------------------------------------------
    // Primitive commands
    // ---------------------------------------------------------------

    /// Begin a new figure at (x, y).
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.new_figure = false;
        self.vertices.push(VertexD::new(x, y, PATH_CMD_MOVE_TO));
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.vertices.push(VertexD::new(x, y, PATH_CMD_LINE_TO));
    }

    /// Add a cubic Bezier curve from the current point.
    pub fn curve4(
        &mut self,
        x_ctrl1: f64,
        y_ctrl1: f64,
        x_ctrl2: f64,
        y_ctrl2: f64,
        x_to: f64,
        y_to: f64,
    ) {
        self.vertices
            .push(VertexD::new(x_ctrl1, y_ctrl1, PATH_CMD_CURVE4));
        self.vertices
            .push(VertexD::new(x_ctrl2, y_ctrl2, PATH_CMD_CURVE4));
        self.vertices.push(VertexD::new(x_to, y_to, PATH_CMD_CURVE4));
    }

    /// Close the current figure. Does nothing if no figure is open.
    pub fn close_figure(&mut self) {
        if is_vertex(self.last_command()) {
            self.vertices
                .push(VertexD::new(0.0, 0.0, PATH_CMD_END_POLY | PATH_FLAGS_CLOSE));
        }
    }

    // ---------------------------------------------------------------
    // Figure building
    // ---------------------------------------------------------------

    /// Continue the open figure to `p`, or start a new figure at `p`.
    ///
    /// A point equal to the current end point is not repeated.
    fn join_point(&mut self, p: PointD) {
        match self.last_point() {
            Some(last) if self.is_figure_open() => {
                if last != p {
                    self.line_to(p.x, p.y);
                }
            }
            _ => self.move_to(p.x, p.y),
        }
    }

    fn push_curve(&mut self, c: &Curve4Points) {
        self.curve4(c[2], c[3], c[4], c[5], c[6], c[7]);
    }

    /// Append a single line segment to the open figure.
    pub fn add_line(&mut self, p1: PointD, p2: PointD) {
        self.join_point(p1);
        self.line_to(p2.x, p2.y);
    }

    /// Append connected line segments through `points`.
    pub fn add_lines(&mut self, points: &[PointD]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.join_point(*first);
        for p in rest {
            self.line_to(p.x, p.y);
        }
    }

    /// Append a smooth curve passing through every point in `points`.
    pub fn add_curve(&mut self, points: &[PointD]) {
        self.add_curve_with_tension(points, SPLINE_TENSION);
    }

    /// Append a cardinal spline of the given tension through `points`.
    pub fn add_curve_with_tension(&mut self, points: &[PointD], tension: f64) {
        let Some(first) = points.first() else {
            return;
        };
        self.join_point(*first);
        for seg in cardinal_spline(points, tension) {
            self.push_curve(&seg);
        }
    }

    /// Append an elliptical arc of the ellipse inscribed in `rect`.
    ///
    /// Angles are in degrees, clockwise from east on a y-down surface.
    pub fn add_arc(&mut self, rect: &RectD, start_degrees: f64, sweep_degrees: f64) {
        let c = rect.center();
        let (rx, ry) = (rect.width / 2.0, rect.height / 2.0);
        let start = start_degrees.to_radians();
        let sweep = sweep_degrees.to_radians();

        self.join_point(ellipse_point(c.x, c.y, rx, ry, start));
        let curves = bezier_arc(c.x, c.y, rx, ry, start, sweep);
        if curves.is_empty() {
            let end = ellipse_point(c.x, c.y, rx, ry, start + sweep);
            self.line_to(end.x, end.y);
        }
        for seg in &curves {
            self.push_curve(seg);
        }
    }

    /// Add a closed axis-aligned rectangle as its own figure.
    pub fn add_rectangle(&mut self, rect: &RectD) {
        self.move_to(rect.left(), rect.top());
        self.line_to(rect.right(), rect.top());
        self.line_to(rect.right(), rect.bottom());
        self.line_to(rect.left(), rect.bottom());
        self.close_figure();
    }

    /// Add a closed rectangle with quarter-circle corners of `radius`.
    ///
    /// A non-positive radius gives a plain rectangle.
    pub fn add_rounded_rectangle(&mut self, rect: &RectD, radius: f64) {
        if radius <= 0.0 {
            self.add_rectangle(rect);
            return;
        }
        let d = radius * 2.0;
        let (l, t) = (rect.left(), rect.top());
        let (r, b) = (rect.right() - d, rect.bottom() - d);

        self.start_figure();
        self.add_arc(&RectD::new(l, t, d, d), 180.0, 90.0);
        self.add_arc(&RectD::new(r, t, d, d), 270.0, 90.0);
        self.add_arc(&RectD::new(r, b, d, d), 0.0, 90.0);
        self.add_arc(&RectD::new(l, b, d, d), 90.0, 90.0);
        self.close_figure();
    }

    /// Add the closed ellipse inscribed in `rect`, starting at east.
    pub fn add_ellipse(&mut self, rect: &RectD) {
        let c = rect.center();
        let (rx, ry) = (rect.width / 2.0, rect.height / 2.0);
        self.move_to(c.x + rx, c.y);
        for seg in ellipse_curves(c.x, c.y, rx, ry) {
            self.push_curve(&seg);
        }
        self.close_figure();
    }

    /// Make the next building call start a new figure instead of joining.
    pub fn start_figure(&mut self) {
        self.new_figure = true;
    }

    fn is_figure_open(&self) -> bool {
        !self.new_figure && is_vertex(self.last_command())
    }

    /// Append every vertex of `other`.
    ///
    /// With `connect`, the first figure of `other` continues the open figure
    /// of this path instead of starting a new one.
    pub fn add_path(&mut self, other: &Path, connect: bool) {
        let mut rest = other.vertices.as_slice();
        if connect && self.is_figure_open() {
            if let Some((first, tail)) = rest.split_first() {
                if is_move_to(first.cmd) {
                    self.join_point(PointD::new(first.x, first.y));
                    rest = tail;
                }
            }
        }
        self.new_figure = false;
        self.vertices.extend_from_slice(rest);
    }

    // ---------------------------------------------------------------
    // Transformations
    // ---------------------------------------------------------------

    /// Translate all vertices in all figures.
    pub fn translate_all_paths(&mut self, dx: f64, dy: f64) {
        for v in &mut self.vertices {
            if is_vertex(v.cmd) {
                v.x += dx;
                v.y += dy;
            }
        }
    }

    /// Copy of this path moved by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Path {
        let mut p = self.clone();
        p.iterator = 0;
        p.translate_all_paths(dx, dy);
        p
    }

    // ---------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------

    /// Total number of vertices stored, commands included.
    pub fn total_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[VertexD] {
        &self.vertices
    }

    /// Coordinates of every stored point, control points included.
    pub fn points(&self) -> impl Iterator<Item = PointD> + '_ {
        self.vertices
            .iter()
            .filter(|v| is_vertex(v.cmd))
            .map(|v| PointD::new(v.x, v.y))
    }

    /// Get the last command (or `PATH_CMD_STOP` if empty).
    pub fn last_command(&self) -> u32 {
        self.vertices.last().map_or(PATH_CMD_STOP, |v| v.cmd)
    }

    /// Most recent coordinate, skipping close and separator commands.
    pub fn last_point(&self) -> Option<PointD> {
        self.vertices
            .iter()
            .rev()
            .find(|v| is_vertex(v.cmd))
            .map(|v| PointD::new(v.x, v.y))
    }

    /// Number of figures (each starts with a `move_to`).
    pub fn figure_count(&self) -> usize {
        self.vertices.iter().filter(|v| is_move_to(v.cmd)).count()
    }

    /// `true` if the path has at least one figure and every figure is
    /// closed.
    pub fn is_closed(&self) -> bool {
        let mut open = false;
        let mut figures = 0;
        for v in &self.vertices {
            if is_move_to(v.cmd) {
                if open {
                    return false;
                }
                open = true;
                figures += 1;
            } else if is_close(v.cmd) {
                open = false;
            } else if is_end_poly(v.cmd) || is_stop(v.cmd) {
                if open {
                    return false;
                }
            }
        }
        figures > 0 && !open
    }

    /// Bounding box of every stored point, control points included, so
    /// the box always covers the rendered curve.
    pub fn bounding_rect(&self) -> Option<RectD> {
        bounding_rect_single(&mut self.vertex_source(), 0)
    }

    /// Borrowing vertex source with its own cursor.
    pub fn vertex_source(&self) -> PathVertices<'_> {
        PathVertices {
            vertices: &self.vertices,
            index: 0,
        }
    }
}

impl VertexSource for Path {
    fn rewind(&mut self, path_id: u32) {
        self.iterator = path_id as usize;
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        next_vertex(&self.vertices, &mut self.iterator, x, y)
    }
}

// ===================================================================
// Adaptors
// ===================================================================

/// Read-only `VertexSource` view over a path's vertices.
pub struct PathVertices<'a> {
    vertices: &'a [VertexD],
    index: usize,
}

impl VertexSource for PathVertices<'_> {
    fn rewind(&mut self, path_id: u32) {
        self.index = path_id as usize;
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        next_vertex(self.vertices, &mut self.index, x, y)
    }
}

fn next_vertex(vertices: &[VertexD], index: &mut usize, x: &mut f64, y: &mut f64) -> u32 {
    match vertices.get(*index) {
        Some(v) => {
            *x = v.x;
            *y = v.y;
            *index += 1;
            v.cmd
        }
        None => PATH_CMD_STOP,
    }
}

// ============================================================================
// Tests
// ============================================================================
