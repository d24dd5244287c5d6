//! SVG serialization of gauge-geometry draw lists.
//!
//! Paths map onto SVG path data one command at a time, linear gradients
//! onto `<linearGradient>` and path gradients onto an approximating
//! `<radialGradient>`.

use std::fmt::Write;

use gauge_geometry::basics::{is_close, is_curve, is_end_poly, is_line_to, is_move_to};
use gauge_geometry::{Brush, Color, DrawOp, FillingRule, Path, Pen, PointD, RectD};

/// SVG path data (`d` attribute) for `path`.
///
/// Cubic vertices are consumed three at a time. A trailing partial cubic
/// is dropped.
pub fn path_data(path: &Path) -> String {
    let mut d = String::new();
    let v = path.vertices();
    let mut i = 0;
    while i < v.len() {
        let cmd = v[i].cmd;
        if is_move_to(cmd) {
            push_cmd(&mut d, 'M', &[(v[i].x, v[i].y)]);
            i += 1;
        } else if is_line_to(cmd) {
            push_cmd(&mut d, 'L', &[(v[i].x, v[i].y)]);
            i += 1;
        } else if is_curve(cmd) {
            if i + 2 >= v.len() {
                break;
            }
            push_cmd(
                &mut d,
                'C',
                &[(v[i].x, v[i].y), (v[i + 1].x, v[i + 1].y), (v[i + 2].x, v[i + 2].y)],
            );
            i += 3;
        } else {
            if is_end_poly(cmd) && is_close(cmd) {
                if !d.is_empty() {
                    d.push(' ');
                }
                d.push('Z');
            }
            i += 1;
        }
    }
    d
}

fn push_cmd(d: &mut String, op: char, points: &[(f64, f64)]) {
    if !d.is_empty() {
        d.push(' ');
    }
    d.push(op);
    for (x, y) in points {
        let _ = write!(d, " {} {}", num(*x), num(*y));
    }
}

/// Shortest stable text for a coordinate: three decimals, trailing zeros
/// trimmed.
fn num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// `#rrggbb` for the color channels. Alpha goes in a separate opacity
/// attribute.
pub fn hex(c: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn opacity(c: Color) -> String {
    num(c.opacity())
}

fn fill_rule(rule: FillingRule) -> &'static str {
    match rule {
        FillingRule::NonZero => "nonzero",
        FillingRule::EvenOdd => "evenodd",
    }
}

fn farthest_corner(bounds: &RectD, center: PointD) -> f64 {
    [
        (bounds.left(), bounds.top()),
        (bounds.right(), bounds.top()),
        (bounds.left(), bounds.bottom()),
        (bounds.right(), bounds.bottom()),
    ]
    .iter()
    .map(|(x, y)| ((x - center.x).powi(2) + (y - center.y).powi(2)).sqrt())
    .fold(0.0, f64::max)
}

/// An SVG document under construction.
#[derive(Debug)]
pub struct SvgDocument {
    width: f64,
    height: f64,
    defs: String,
    body: String,
    next_gradient: usize,
}

impl SvgDocument {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            defs: String::new(),
            body: String::new(),
            next_gradient: 0,
        }
    }

    /// Append every op in order.
    pub fn push_ops(&mut self, ops: &[DrawOp<'_>]) {
        for op in ops {
            match op {
                DrawOp::Fill { path, brush } => self.fill(path, brush),
                DrawOp::Stroke { path, pen } => self.stroke(path, pen),
            }
        }
    }

    pub fn fill(&mut self, path: &Path, brush: &Brush) {
        if path.is_empty() {
            return;
        }
        let paint = self.paint_for(brush);
        let _ = writeln!(
            self.body,
            "  <path d=\"{}\" fill-rule=\"{}\" {} stroke=\"none\"/>",
            path_data(path),
            fill_rule(path.fill_rule()),
            paint
        );
    }

    pub fn stroke(&mut self, path: &Path, pen: &Pen) {
        if path.is_empty() {
            return;
        }
        let _ = writeln!(
            self.body,
            "  <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-opacity=\"{}\" stroke-width=\"{}\"/>",
            path_data(path),
            hex(pen.color),
            opacity(pen.color),
            num(pen.width)
        );
    }

    fn paint_for(&mut self, brush: &Brush) -> String {
        match brush {
            Brush::Solid(c) => format!("fill=\"{}\" fill-opacity=\"{}\"", hex(*c), opacity(*c)),
            Brush::LinearGradient {
                start,
                end,
                start_color,
                end_color,
            } => {
                let id = self.gradient_id();
                let _ = writeln!(
                    self.defs,
                    "    <linearGradient id=\"{id}\" gradientUnits=\"userSpaceOnUse\" \
                     x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\">",
                    num(start.x),
                    num(start.y),
                    num(end.x),
                    num(end.y)
                );
                self.push_stop(0.0, *start_color);
                self.push_stop(1.0, *end_color);
                self.defs.push_str("    </linearGradient>\n");
                format!("fill=\"url(#{id})\"")
            }
            Brush::PathGradient {
                bounds,
                center,
                center_color,
                surround_color,
                focus_scale,
            } => {
                let id = self.gradient_id();
                let _ = writeln!(
                    self.defs,
                    "    <radialGradient id=\"{id}\" gradientUnits=\"userSpaceOnUse\" \
                     cx=\"{}\" cy=\"{}\" r=\"{}\">",
                    num(center.x),
                    num(center.y),
                    num(farthest_corner(bounds, *center))
                );
                self.push_stop(0.0, *center_color);
                if *focus_scale > 0.0 {
                    self.push_stop(focus_scale.min(1.0), *center_color);
                }
                self.push_stop(1.0, *surround_color);
                self.defs.push_str("    </radialGradient>\n");
                format!("fill=\"url(#{id})\"")
            }
        }
    }

    fn gradient_id(&mut self) -> String {
        let id = format!("g{}", self.next_gradient);
        self.next_gradient += 1;
        id
    }

    fn push_stop(&mut self, offset: f64, color: Color) {
        let _ = writeln!(
            self.defs,
            "      <stop offset=\"{}\" stop-color=\"{}\" stop-opacity=\"{}\"/>",
            num(offset),
            hex(color),
            opacity(color)
        );
    }

    /// The complete document text.
    pub fn finish(self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
             viewBox=\"0 0 {w} {h}\">",
            w = num(self.width),
            h = num(self.height)
        );
        if !self.defs.is_empty() {
            out.push_str("  <defs>\n");
            out.push_str(&self.defs);
            out.push_str("  </defs>\n");
        }
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}
