use glam::Vec2;

use crate::geometry::rect::RectangleF;
use crate::geometry::triangle::Triangle;

/// Below this magnitude a cross product is treated as zero (parallel lines).
const PARALLEL_EPSILON: f32 = 1e-5;

/// A 2D line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineSegment {
    pub start: Vec2,
    pub end: Vec2,
}

impl LineSegment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Midpoint of the segment.
    pub fn origin(&self) -> Vec2 {
        (self.start + self.end) / 2.0
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Proper crossing test: the segments cross at a single interior point.
    /// Collinear or merely touching segments do not count.
    pub fn intersects_segment(&self, other: &LineSegment) -> bool {
        let a1 = signed_tri_area(self.start, self.end, other.end);
        let a2 = signed_tri_area(self.start, self.end, other.start);

        if a1 * a2 < 0.0 {
            let a3 = signed_tri_area(other.start, other.end, self.start);
            let a4 = a3 + a2 - a1;
            return a3 * a4 < 0.0;
        }
        false
    }

    /// Point where the two segments meet, endpoints included.
    ///
    /// For overlapping collinear segments the first endpoint shared by the
    /// overlap is returned.
    pub fn intersection_point(&self, other: &LineSegment) -> Option<Vec2> {
        let d_self = self.end - self.start;
        let d_other = other.end - other.start;
        let between = self.start - other.start;

        let denominator = d_other.y * d_self.x - d_other.x * d_self.y;
        let ua = d_other.x * between.y - d_other.y * between.x;
        let ub = d_self.x * between.y - d_self.y * between.x;

        if denominator.abs() <= PARALLEL_EPSILON {
            if ua.abs() <= PARALLEL_EPSILON && ub.abs() <= PARALLEL_EPSILON {
                return collinear_overlap(self, other);
            }
            return None;
        }

        let ua = ua / denominator;
        let ub = ub / denominator;
        if (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub) {
            Some(self.start + d_self * ua)
        } else {
            None
        }
    }

    /// True if the segment lies partly inside the rectangle or crosses its outline.
    pub fn intersects_rect(&self, rect: &RectangleF) -> bool {
        if rect.contains(self.start) || rect.contains(self.end) {
            return true;
        }
        rect.edges()
            .iter()
            .any(|edge| edge.intersection_point(self).is_some())
    }

    /// First point of contact with the rectangle when walking from `start`.
    pub fn first_intersection_with_rect(&self, rect: &RectangleF) -> Option<Vec2> {
        if rect.contains(self.start) {
            return Some(self.start);
        }
        self.intersections_with_rect(rect).into_iter().next()
    }

    /// Every outline crossing, ordered by distance from `start`.
    pub fn intersections_with_rect(&self, rect: &RectangleF) -> Vec<Vec2> {
        let mut hits: Vec<Vec2> = rect
            .edges()
            .iter()
            .filter_map(|edge| edge.intersection_point(self))
            .collect();
        hits.sort_by(|a, b| {
            self.start
                .distance_squared(*a)
                .total_cmp(&self.start.distance_squared(*b))
        });
        hits.dedup_by(|a, b| a.abs_diff_eq(*b, PARALLEL_EPSILON));
        hits
    }

    pub fn intersects_triangle(&self, tri: &Triangle) -> bool {
        tri.intersects_segment(self)
    }

    /// True if `point` lies on the segment (within a small tolerance).
    pub fn contains(&self, point: Vec2) -> bool {
        let d = self.end - self.start;
        let to_point = point - self.start;
        if d.perp_dot(to_point).abs() > PARALLEL_EPSILON * d.length().max(1.0) {
            return false;
        }
        let t = to_point.dot(d);
        t >= 0.0 && t <= d.length_squared()
    }
}

fn signed_tri_area(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (a.x - c.x) * (c.y - b.y) - (c.y - a.y) * (b.x - c.x)
}

fn collinear_overlap(a: &LineSegment, b: &LineSegment) -> Option<Vec2> {
    [b.start, b.end]
        .into_iter()
        .find(|p| a.contains(*p))
        .or_else(|| [a.start, a.end].into_iter().find(|p| b.contains(*p)))
}
