use glam::Vec2;

use crate::geometry::RectangleF;
use crate::renderer::instance::LineVertex;
use crate::systems::debug::collider_outline;

/// Collects static level rectangles during the build phase.
///
/// Queries are only available on the [`StaticColliderSet`] returned by
/// [`finish`](Self::finish), so a half-built set can never be probed.
#[derive(Debug, Default)]
pub struct ColliderSetBuilder {
    colliders: Vec<RectangleF>,
}

impl ColliderSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a collider. Insertion order is the query order.
    pub fn add_collider(&mut self, rect: RectangleF) {
        debug_assert!(
            rect.width >= 0.0 && rect.height >= 0.0,
            "degenerate collider {rect:?}"
        );
        self.colliders.push(rect);
    }

    pub fn with_collider(mut self, rect: RectangleF) -> Self {
        self.add_collider(rect);
        self
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Freeze the set and build its outline line list.
    pub fn finish(self) -> StaticColliderSet {
        let outline = self
            .colliders
            .iter()
            .flat_map(collider_outline)
            .collect();
        log::debug!("collider set finished: {} colliders", self.colliders.len());
        StaticColliderSet {
            colliders: self.colliders,
            outline,
        }
    }
}

/// Immovable level geometry, read-only while the simulation runs.
///
/// Every query scans the colliders in insertion order and stops at the
/// first one whose bounds touch the probe. With overlapping colliders the
/// answer therefore depends on the order they were added.
#[derive(Debug, Clone)]
pub struct StaticColliderSet {
    colliders: Vec<RectangleF>,
    outline: Vec<LineVertex>,
}

impl StaticColliderSet {
    /// Penetration depth of `probe` into the first collider it touches,
    /// or zero if it touches none. A probe that only shares an edge with
    /// its first match also yields zero.
    pub fn get_intersect(&self, probe: &RectangleF) -> Vec2 {
        self.colliders
            .iter()
            .find(|collider| collider.intersects(probe))
            .map(|collider| probe.intersection_depth(collider))
            .unwrap_or(Vec2::ZERO)
    }

    /// [`get_intersect`](Self::get_intersect) with the probe placed at
    /// `probe + offset`, leaving the probe itself untouched.
    pub fn get_intersect_offset(&self, probe: &RectangleF, offset: Vec2) -> Vec2 {
        self.colliders
            .iter()
            .find(|collider| collider.intersects_offset(probe, offset))
            .map(|collider| probe.intersection_depth_offset(collider, -offset))
            .unwrap_or(Vec2::ZERO)
    }

    /// True if any collider touches `probe`, edges included.
    pub fn intersects(&self, probe: &RectangleF) -> bool {
        self.colliders.iter().any(|collider| collider.intersects(probe))
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.colliders.iter().any(|collider| collider.contains(point))
    }

    pub fn iter(&self) -> impl Iterator<Item = &RectangleF> {
        self.colliders.iter()
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Line-list outline of every collider (8 vertices each) for debug drawing.
    pub fn outline(&self) -> &[LineVertex] {
        &self.outline
    }
}
