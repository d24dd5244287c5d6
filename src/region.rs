//! Redraw regions.
//!
//! A `Region` is a coarse description of the area a host must repaint: a
//! list of rectangles, each the bounding box of a path that was united into
//! it. It only grows; there is no subtraction or intersection.

use crate::basics::{unite_rectangles, RectD};
use crate::path_storage::Path;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Region {
    rects: Vec<RectD>,
}

impl Region {
    pub fn new() -> Self {
        Self::default()
    }

    /// Region covering the given paths.
    pub fn from_paths<'a>(paths: impl IntoIterator<Item = &'a Path>) -> Self {
        let mut region = Self::new();
        for p in paths {
            region.union_path(p);
        }
        region
    }

    /// Grow the region to cover `path`. Empty paths add nothing.
    pub fn union_path(&mut self, path: &Path) {
        if let Some(r) = path.bounding_rect() {
            self.union_rect(r);
        }
    }

    /// Grow the region to cover `r`.
    ///
    /// A rectangle already inside a member is dropped, and members inside
    /// `r` are replaced by it.
    pub fn union_rect(&mut self, r: RectD) {
        if self.rects.iter().any(|m| contains(m, &r)) {
            return;
        }
        self.rects.retain(|m| !contains(&r, m));
        self.rects.push(r);
    }

    /// Grow the region to cover all of `other`.
    pub fn union_region(&mut self, other: &Region) {
        for r in &other.rects {
            self.union_rect(*r);
        }
    }

    pub fn rects(&self) -> &[RectD] {
        &self.rects
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Smallest rectangle enclosing the whole region.
    pub fn bounds(&self) -> Option<RectD> {
        self.rects
            .iter()
            .copied()
            .reduce(|a, b| unite_rectangles(&a, &b))
    }

    /// `true` if (x, y) falls inside any member rectangle, edges included.
    pub fn hit_test(&self, x: f64, y: f64) -> bool {
        self.rects.iter().any(|r| r.hit_test(x, y))
    }

    pub fn clear(&mut self) {
        self.rects.clear();
    }
}

fn contains(outer: &RectD, inner: &RectD) -> bool {
    inner.left() >= outer.left()
        && inner.top() >= outer.top()
        && inner.right() <= outer.right()
        && inner.bottom() <= outer.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_path(r: RectD) -> Path {
        let mut p = Path::new();
        p.add_rectangle(&r);
        p
    }

    #[test]
    fn test_empty_region() {
        let region = Region::new();
        assert!(region.is_empty());
        assert_eq!(region.bounds(), None);
        assert!(!region.hit_test(0.0, 0.0));
    }

    #[test]
    fn test_union_paths_bounds() {
        let a = rect_path(RectD::new(0.0, 0.0, 10.0, 10.0));
        let b = rect_path(RectD::new(20.0, 5.0, 10.0, 10.0));
        let region = Region::from_paths([&a, &b]);
        assert_eq!(region.rects().len(), 2);
        assert_eq!(region.bounds(), Some(RectD::from_ltrb(0.0, 0.0, 30.0, 15.0)));
        assert!(region.hit_test(5.0, 5.0));
        assert!(region.hit_test(25.0, 14.0));
        // Inside the bounds but outside both members.
        assert!(!region.hit_test(15.0, 2.0));
    }

    #[test]
    fn test_union_empty_path_adds_nothing() {
        let mut region = Region::new();
        region.union_path(&Path::new());
        assert!(region.is_empty());
    }

    #[test]
    fn test_contained_rects_collapse() {
        let mut region = Region::new();
        region.union_rect(RectD::new(2.0, 2.0, 2.0, 2.0));
        region.union_rect(RectD::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(region.rects(), &[RectD::new(0.0, 0.0, 10.0, 10.0)]);
        region.union_rect(RectD::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(region.rects().len(), 1);
    }

    #[test]
    fn test_union_region() {
        let mut old = Region::new();
        old.union_rect(RectD::new(0.0, 0.0, 5.0, 5.0));
        let mut new = Region::new();
        new.union_rect(RectD::new(10.0, 0.0, 5.0, 5.0));
        old.union_region(&new);
        assert_eq!(old.bounds(), Some(RectD::from_ltrb(0.0, 0.0, 15.0, 5.0)));
        old.clear();
        assert!(old.is_empty());
    }

    #[test]
    fn test_degenerate_path_still_covered() {
        let mut p = Path::new();
        p.add_lines(&[crate::basics::PointD::new(3.0, 3.0); 3]);
        p.close_figure();
        let region = Region::from_paths([&p]);
        assert_eq!(region.bounds(), Some(RectD::new(3.0, 3.0, 0.0, 0.0)));
        assert!(region.hit_test(3.0, 3.0));
    }
}
