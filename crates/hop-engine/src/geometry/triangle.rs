use glam::Vec2;

use crate::geometry::rect::RectangleF;
use crate::geometry::segment::LineSegment;

/// A 2D triangle. Not resolved by the physics pipeline; used for
/// level-geometry queries only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub p1: Vec2,
    pub p2: Vec2,
    pub p3: Vec2,
}

impl Triangle {
    pub fn new(p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self { p1, p2, p3 }
    }

    pub fn points(&self) -> [Vec2; 3] {
        [self.p1, self.p2, self.p3]
    }

    /// Axis-aligned bounding box.
    pub fn bounds(&self) -> RectangleF {
        let min = self.p1.min(self.p2).min(self.p3);
        let max = self.p1.max(self.p2).max(self.p3);
        RectangleF::from_corners(min, max)
    }

    /// Centroid.
    pub fn origin(&self) -> Vec2 {
        (self.p1 + self.p2 + self.p3) / 3.0
    }

    /// Half-diagonal of the bounding box.
    pub fn extents(&self) -> f32 {
        self.bounds().extents()
    }

    pub fn edges(&self) -> [LineSegment; 3] {
        [
            LineSegment::new(self.p1, self.p2),
            LineSegment::new(self.p2, self.p3),
            LineSegment::new(self.p3, self.p1),
        ]
    }

    /// Point-in-triangle by edge-sign agreement. Works for either winding.
    pub fn contains(&self, point: Vec2) -> bool {
        let d1 = sign(point, self.p1, self.p2);
        let d2 = sign(point, self.p2, self.p3);
        let d3 = sign(point, self.p3, self.p1);

        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        !(has_neg && has_pos)
    }

    pub fn intersects_segment(&self, line: &LineSegment) -> bool {
        if self.contains(line.start) || self.contains(line.end) {
            return true;
        }
        self.edges()
            .iter()
            .any(|edge| edge.intersection_point(line).is_some())
    }

    /// Outline or interior overlap with the rectangle.
    pub fn intersects_rect(&self, rect: &RectangleF) -> bool {
        if !self.bounds().intersects(rect) {
            return false;
        }
        if self.points().iter().any(|p| rect.contains(*p)) {
            return true;
        }
        if rect.corners().iter().any(|c| self.contains(*c)) {
            return true;
        }
        self.edges().iter().any(|edge| edge.intersects_rect(rect))
    }

    pub fn intersects_triangle(&self, other: &Triangle) -> bool {
        if !self.bounds().intersects(&other.bounds()) {
            return false;
        }
        if other.points().iter().any(|p| self.contains(*p))
            || self.points().iter().any(|p| other.contains(*p))
        {
            return true;
        }
        self.edges().iter().any(|a| {
            other
                .edges()
                .iter()
                .any(|b| a.intersection_point(b).is_some())
        })
    }

    /// Outline crossings with `line`, plus the segment start if it begins inside.
    pub fn intersections_with_segment(&self, line: &LineSegment) -> Vec<Vec2> {
        let mut hits: Vec<Vec2> = self
            .edges()
            .iter()
            .filter_map(|edge| edge.intersection_point(line))
            .collect();
        if self.contains(line.start) {
            hits.push(line.start);
        }
        hits
    }
}

fn sign(p1: Vec2, p2: Vec2, p3: Vec2) -> f32 {
    (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
}
