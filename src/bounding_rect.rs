//! Bounding rectangle calculation.
//!
//! Computes the axis-aligned bounding box of a vertex source.
//! Only vertex commands contribute; close and separator commands carry no
//! coordinates.

use crate::basics::{is_stop, is_vertex, RectD, VertexSource};

/// Running min/max accumulator.
#[derive(Default)]
struct Extent {
    bounds: Option<(f64, f64, f64, f64)>,
}

impl Extent {
    fn add(&mut self, x: f64, y: f64) {
        self.bounds = Some(match self.bounds {
            None => (x, y, x, y),
            Some((x1, y1, x2, y2)) => (x1.min(x), y1.min(y), x2.max(x), y2.max(y)),
        });
    }

    fn scan(&mut self, vs: &mut dyn VertexSource, path_id: u32) {
        let mut x = 0.0;
        let mut y = 0.0;
        vs.rewind(path_id);
        loop {
            let cmd = vs.vertex(&mut x, &mut y);
            if is_stop(cmd) {
                break;
            }
            if is_vertex(cmd) {
                self.add(x, y);
            }
        }
    }

    fn rect(&self) -> Option<RectD> {
        self.bounds
            .map(|(x1, y1, x2, y2)| RectD::from_ltrb(x1, y1, x2, y2))
    }
}

/// Compute the bounding rectangle of a single path from a vertex source.
///
/// Rewinds the vertex source to `path_id`, iterates all vertices, and
/// returns the axis-aligned bounding box. Returns `None` if no vertices
/// are found.
pub fn bounding_rect_single(vs: &mut dyn VertexSource, path_id: u32) -> Option<RectD> {
    let mut extent = Extent::default();
    extent.scan(vs, path_id);
    extent.rect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::{
        PATH_CMD_END_POLY, PATH_CMD_LINE_TO, PATH_CMD_MOVE_TO, PATH_CMD_STOP, PATH_FLAGS_CLOSE,
    };

    /// Minimal test vertex source: a closed triangle.
    struct Triangle {
        vertices: [(f64, f64); 3],
        index: usize,
    }

    impl Triangle {
        fn new(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> Self {
            Self {
                vertices: [(x1, y1), (x2, y2), (x3, y3)],
                index: 0,
            }
        }
    }

    impl VertexSource for Triangle {
        fn rewind(&mut self, _path_id: u32) {
            self.index = 0;
        }

        fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
            self.index += 1;
            match self.index {
                1..=3 => {
                    let (vx, vy) = self.vertices[self.index - 1];
                    *x = vx;
                    *y = vy;
                    if self.index == 1 {
                        PATH_CMD_MOVE_TO
                    } else {
                        PATH_CMD_LINE_TO
                    }
                }
                4 => {
                    // Close carries (0, 0), which must not widen the box.
                    *x = 0.0;
                    *y = 0.0;
                    PATH_CMD_END_POLY | PATH_FLAGS_CLOSE
                }
                _ => PATH_CMD_STOP,
            }
        }
    }

    #[test]
    fn test_bounding_rect_single_triangle() {
        let mut tri = Triangle::new(10.0, 20.0, 50.0, 80.0, 30.0, 10.0);
        let r = bounding_rect_single(&mut tri, 0).unwrap();
        assert_eq!(r, RectD::from_ltrb(10.0, 10.0, 50.0, 80.0));
    }

    #[test]
    fn test_bounding_rect_empty_returns_none() {
        struct Empty;
        impl VertexSource for Empty {
            fn rewind(&mut self, _: u32) {}
            fn vertex(&mut self, _x: &mut f64, _y: &mut f64) -> u32 {
                PATH_CMD_STOP
            }
        }
        let mut e = Empty;
        assert!(bounding_rect_single(&mut e, 0).is_none());
    }

    #[test]
    fn test_bounding_rect_degenerate_point() {
        let mut tri = Triangle::new(5.0, 5.0, 5.0, 5.0, 5.0, 5.0);
        let r = bounding_rect_single(&mut tri, 0).unwrap();
        assert_eq!(r, RectD::new(5.0, 5.0, 0.0, 0.0));
    }
}
