use bitflags::bitflags;
use glam::Vec2;

use crate::core::collider::StaticColliderSet;
use crate::geometry::RectangleF;

bitflags! {
    /// Which vertical bands of a body are in contact with level geometry.
    /// The empty set means no contact.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BodyRegion: u8 {
        const LOWER = 1;
        const MIDDLE = 2;
        const TOP = 4;
    }
}

impl BodyRegion {
    pub const NONE: Self = Self::empty();
}

/// A probe rectangle tagged with the region it reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaggedRect<T> {
    pub rect: RectangleF,
    pub tag: T,
}

impl<T> TaggedRect<T> {
    pub fn new(rect: RectangleF, tag: T) -> Self {
        Self { rect, tag }
    }
}

/// Three stacked probes along one side of a body: lower, middle and top
/// thirds of its height. Probes are stored relative to the feet and placed
/// at query time, so the same totem serves a body wherever it is.
#[derive(Debug, Clone, PartialEq)]
pub struct BipedalCollisionTotem {
    probes: [TaggedRect<BodyRegion>; 3],
}

impl BipedalCollisionTotem {
    /// Default body height the bands are split from.
    pub const DEFAULT_HEIGHT: f32 = 48.0;

    /// `x_offset` is the right edge of the probe column relative to the
    /// feet; the column extends `width` to the left of it.
    pub fn new(x_offset: f32, width: f32, height: f32) -> Self {
        debug_assert!(width >= 0.0 && height >= 0.0, "negative totem size");
        let band = height / 3.0;
        let probe = |k: f32, tag| TaggedRect::new(RectangleF::new(x_offset - width, -band * k, width, band), tag);
        Self {
            probes: [
                probe(1.0, BodyRegion::LOWER),
                probe(2.0, BodyRegion::MIDDLE),
                probe(3.0, BodyRegion::TOP),
            ],
        }
    }

    /// Probes in feet-relative space, bottom to top.
    pub fn probes(&self) -> &[TaggedRect<BodyRegion>; 3] {
        &self.probes
    }

    /// Union of the bands that penetrate geometry with the feet at `position`.
    /// A band that only touches an edge does not count.
    pub fn check(&self, colliders: &StaticColliderSet, position: Vec2) -> BodyRegion {
        self.probes
            .iter()
            .filter(|probe| colliders.get_intersect_offset(&probe.rect, position) != Vec2::ZERO)
            .fold(BodyRegion::NONE, |contact, probe| contact | probe.tag)
    }

    /// Per-band penetration depth with the feet at `position`, bottom to top.
    pub fn intersect_stack(&self, colliders: &StaticColliderSet, position: Vec2) -> [Vec2; 3] {
        self.probes
            .map(|probe| colliders.get_intersect_offset(&probe.rect, position))
    }
}

impl Default for BipedalCollisionTotem {
    fn default() -> Self {
        Self::new(0.0, 1.0, Self::DEFAULT_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::collider::ColliderSetBuilder;

    fn totem() -> BipedalCollisionTotem {
        BipedalCollisionTotem::new(0.0, 10.0, 48.0)
    }

    #[test]
    fn bands_split_height_in_thirds() {
        let [lower, middle, top] = totem().probes;
        assert_eq!(lower.rect, RectangleF::new(-10.0, -16.0, 10.0, 16.0));
        assert_eq!(middle.rect, RectangleF::new(-10.0, -32.0, 10.0, 16.0));
        assert_eq!(top.rect, RectangleF::new(-10.0, -48.0, 10.0, 16.0));
        assert_eq!(lower.tag, BodyRegion::LOWER);
        assert_eq!(top.tag, BodyRegion::TOP);
    }

    #[test]
    fn no_geometry_is_no_contact() {
        let set = ColliderSetBuilder::new().finish();
        assert_eq!(totem().check(&set, Vec2::ZERO), BodyRegion::NONE);
        assert!(totem().check(&set, Vec2::ZERO).is_empty());
    }

    #[test]
    fn collider_covering_top_band_reports_top_only() {
        let position = Vec2::new(100.0, 200.0);
        let set = ColliderSetBuilder::new()
            .with_collider(RectangleF::new(position.x - 10.0, position.y - 48.0, 10.0, 16.0))
            .finish();
        assert_eq!(totem().check(&set, position), BodyRegion::TOP);
    }

    #[test]
    fn tall_wall_reports_every_band() {
        let set = ColliderSetBuilder::new()
            .with_collider(RectangleF::new(-5.0, -100.0, 50.0, 200.0))
            .finish();
        let contact = totem().check(&set, Vec2::ZERO);
        assert_eq!(contact, BodyRegion::all());

        let stack = totem().intersect_stack(&set, Vec2::ZERO);
        assert!(stack.iter().all(|depth| depth.x != 0.0));
    }

    #[test]
    fn low_step_reports_lower_only() {
        let set = ColliderSetBuilder::new()
            .with_collider(RectangleF::new(-8.0, -8.0, 20.0, 8.0))
            .finish();
        let stack = totem().intersect_stack(&set, Vec2::ZERO);
        assert_ne!(stack[0], Vec2::ZERO);
        assert_eq!(stack[1], Vec2::ZERO);
        assert_eq!(stack[2], Vec2::ZERO);
        assert_eq!(totem().check(&set, Vec2::ZERO), BodyRegion::LOWER);
    }
}
