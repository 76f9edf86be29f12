use glam::Vec2;

use crate::geometry::segment::LineSegment;
use crate::geometry::triangle::Triangle;

/// Axis-aligned floating-point rectangle, top-left origin, Y pointing down.
///
/// A plain value type: corners are derived from `(x, y, width, height)` on
/// every access, so there is no cache that can go stale after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectangleF {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectangleF {
    /// Create a rectangle from its top-left corner and size.
    ///
    /// Extents must be non-negative; this is only checked in debug builds.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(width >= 0.0, "negative rectangle width: {width}");
        debug_assert!(height >= 0.0, "negative rectangle height: {height}");
        Self { x, y, width, height }
    }

    /// Smallest rectangle spanning two opposite corners, in any order.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    // -- Edges and corners --

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.left(), self.top())
    }

    pub fn top_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.top())
    }

    pub fn bottom_left(&self) -> Vec2 {
        Vec2::new(self.left(), self.bottom())
    }

    pub fn bottom_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    /// Corners in outline order: TL, TR, BR, BL.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.top_left(),
            self.top_right(),
            self.bottom_right(),
            self.bottom_left(),
        ]
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Center of the bottom edge (where a standing body's feet are).
    pub fn bottom_center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.bottom())
    }

    /// Distance from the center to a corner.
    pub fn extents(&self) -> f32 {
        (self.size() / 2.0).length()
    }

    // -- Mutators --

    /// Move the top-left corner, keeping the size.
    pub fn set_position(&mut self, top_left: Vec2) {
        self.x = top_left.x;
        self.y = top_left.y;
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        debug_assert!(width >= 0.0 && height >= 0.0, "negative rectangle size");
        self.width = width;
        self.height = height;
    }

    /// Copy of this rectangle moved by `offset`.
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            ..*self
        }
    }

    // -- Queries --

    /// Boundary-inclusive overlap test: rectangles sharing only an edge intersect.
    pub fn intersects(&self, other: &RectangleF) -> bool {
        self.right() >= other.left()
            && self.bottom() >= other.top()
            && self.left() <= other.right()
            && self.top() <= other.bottom()
    }

    /// [`intersects`](Self::intersects) as if this rectangle were moved by `-offset`.
    pub fn intersects_offset(&self, other: &RectangleF, offset: Vec2) -> bool {
        self.translated(-offset).intersects(other)
    }

    /// Boundary-inclusive point containment.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Signed overlap between this rectangle (A) and `other` (B).
    ///
    /// Returns zero unless the rectangles strictly overlap on both axes
    /// (touching edges give zero). Otherwise each component is the smallest
    /// displacement of A along that axis that separates the two, signed
    /// away from B's center.
    pub fn intersection_depth(&self, other: &RectangleF) -> Vec2 {
        let half_a = self.size() / 2.0;
        let half_b = other.size() / 2.0;

        let distance = self.center() - other.center();
        let min_distance = half_a + half_b;

        if distance.x.abs() >= min_distance.x || distance.y.abs() >= min_distance.y {
            return Vec2::ZERO;
        }

        let depth_x = if distance.x > 0.0 {
            min_distance.x - distance.x
        } else {
            -min_distance.x - distance.x
        };
        let depth_y = if distance.y > 0.0 {
            min_distance.y - distance.y
        } else {
            -min_distance.y - distance.y
        };
        Vec2::new(depth_x, depth_y)
    }

    /// [`intersection_depth`](Self::intersection_depth) as if this rectangle
    /// were moved by `-offset`.
    pub fn intersection_depth_offset(&self, other: &RectangleF, offset: Vec2) -> Vec2 {
        self.translated(-offset).intersection_depth(other)
    }

    /// True if any part of the triangle's outline or interior touches this rectangle.
    pub fn intersects_triangle(&self, tri: &Triangle) -> bool {
        tri.intersects_rect(self)
    }

    pub fn intersects_segment(&self, line: &LineSegment) -> bool {
        line.intersects_rect(self)
    }

    /// Points where `line` crosses this rectangle's outline.
    pub fn segment_intersections(&self, line: &LineSegment) -> Vec<Vec2> {
        line.intersections_with_rect(self)
    }

    /// The four edges, clockwise from the top.
    pub fn edges(&self) -> [LineSegment; 4] {
        let [tl, tr, br, bl] = self.corners();
        [
            LineSegment::new(tl, tr),
            LineSegment::new(tr, br),
            LineSegment::new(br, bl),
            LineSegment::new(bl, tl),
        ]
    }
}
