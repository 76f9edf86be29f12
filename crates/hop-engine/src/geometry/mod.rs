//! 2D shape primitives.
//!
//! Only [`RectangleF`] takes part in authoritative collision resolution.
//! Segments and triangles answer overlap queries for level geometry.

pub mod rect;
pub mod segment;
pub mod triangle;

pub use rect::RectangleF;
pub use segment::LineSegment;
pub use triangle::Triangle;

use glam::Vec2;

/// Shared query surface of every shape.
pub trait Collidable {
    /// Representative center point.
    fn origin(&self) -> Vec2;
    /// Radius of a circle around [`origin`](Self::origin) that covers the shape.
    fn extents(&self) -> f32;
    fn intersects_rect(&self, rect: &RectangleF) -> bool;
    fn intersects_triangle(&self, tri: &Triangle) -> bool;
    fn intersects_segment(&self, line: &LineSegment) -> bool;
    fn contains(&self, point: Vec2) -> bool;
    /// Points where `line` crosses this shape.
    fn segment_intersections(&self, line: &LineSegment) -> Vec<Vec2>;

    /// Cheap rejection: can the two shapes possibly touch?
    fn may_touch(&self, other: &dyn Collidable) -> bool {
        self.origin().distance(other.origin()) <= self.extents() + other.extents()
    }
}

impl Collidable for RectangleF {
    fn origin(&self) -> Vec2 {
        self.center()
    }

    fn extents(&self) -> f32 {
        RectangleF::extents(self)
    }

    fn intersects_rect(&self, rect: &RectangleF) -> bool {
        self.intersects(rect)
    }

    fn intersects_triangle(&self, tri: &Triangle) -> bool {
        RectangleF::intersects_triangle(self, tri)
    }

    fn intersects_segment(&self, line: &LineSegment) -> bool {
        RectangleF::intersects_segment(self, line)
    }

    fn contains(&self, point: Vec2) -> bool {
        RectangleF::contains(self, point)
    }

    fn segment_intersections(&self, line: &LineSegment) -> Vec<Vec2> {
        RectangleF::segment_intersections(self, line)
    }
}

impl Collidable for LineSegment {
    fn origin(&self) -> Vec2 {
        LineSegment::origin(self)
    }

    fn extents(&self) -> f32 {
        self.length() / 2.0
    }

    fn intersects_rect(&self, rect: &RectangleF) -> bool {
        LineSegment::intersects_rect(self, rect)
    }

    fn intersects_triangle(&self, tri: &Triangle) -> bool {
        LineSegment::intersects_triangle(self, tri)
    }

    fn intersects_segment(&self, line: &LineSegment) -> bool {
        self.intersection_point(line).is_some()
    }

    fn contains(&self, point: Vec2) -> bool {
        LineSegment::contains(self, point)
    }

    fn segment_intersections(&self, line: &LineSegment) -> Vec<Vec2> {
        self.intersection_point(line).into_iter().collect()
    }
}

impl Collidable for Triangle {
    fn origin(&self) -> Vec2 {
        Triangle::origin(self)
    }

    fn extents(&self) -> f32 {
        Triangle::extents(self)
    }

    fn intersects_rect(&self, rect: &RectangleF) -> bool {
        Triangle::intersects_rect(self, rect)
    }

    fn intersects_triangle(&self, tri: &Triangle) -> bool {
        Triangle::intersects_triangle(self, tri)
    }

    fn intersects_segment(&self, line: &LineSegment) -> bool {
        Triangle::intersects_segment(self, line)
    }

    fn contains(&self, point: Vec2) -> bool {
        Triangle::contains(self, point)
    }

    fn segment_intersections(&self, line: &LineSegment) -> Vec<Vec2> {
        self.intersections_with_segment(line)
    }
}
