use std::fmt;

use crate::api::controller::{Controller, PassiveController};
use crate::api::types::EntityId;
use crate::components::totem::{BipedalCollisionTotem, BodyRegion};
use crate::core::collider::StaticColliderSet;
use crate::core::physics::{BipedalBody, TickReport};
use crate::input::state::InputState;

/// Fat Entity: a bipedal body plus the policy that drives it.
/// Designed for small levels with a handful of actors.
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Whether this entity is active (inactive entities are not simulated or drawn).
    pub active: bool,
    pub body: BipedalBody,
    controller: Box<dyn Controller>,
    /// Optional band-wise contact sensor, re-evaluated after every tick.
    totem: Option<BipedalCollisionTotem>,
    contact: BodyRegion,
}

impl Entity {
    /// Create an entity driven by a [`PassiveController`].
    pub fn new(id: EntityId, body: BipedalBody) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            body,
            controller: Box::new(PassiveController),
            totem: None,
            contact: BodyRegion::NONE,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn with_controller(mut self, controller: impl Controller + 'static) -> Self {
        self.controller = Box::new(controller);
        self
    }

    pub fn with_totem(mut self, totem: BipedalCollisionTotem) -> Self {
        self.totem = Some(totem);
        self
    }

    pub fn set_controller(&mut self, controller: Box<dyn Controller>) {
        self.controller = controller;
    }

    pub fn totem(&self) -> Option<&BipedalCollisionTotem> {
        self.totem.as_ref()
    }

    /// Bands of the totem touching geometry after the last tick.
    /// Always empty without a totem.
    pub fn contact(&self) -> BodyRegion {
        self.contact
    }

    /// Run one tick of this entity against the level geometry.
    pub fn update(
        &mut self,
        speed_multiplier: f32,
        colliders: &StaticColliderSet,
        input: &InputState,
    ) -> TickReport {
        let report = self
            .body
            .update(speed_multiplier, colliders, self.controller.as_mut(), input);

        if report.landed() {
            log::trace!("entity {:?} landed at {:?}", self.id, self.body.position());
        } else if report.left_ground() {
            log::trace!("entity {:?} left ground at {:?}", self.id, self.body.position());
        }

        if let Some(totem) = &self.totem {
            self.contact = totem.check(colliders, self.body.position());
        }
        report
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.id)
            .field("tag", &self.tag)
            .field("active", &self.active)
            .field("body", &self.body)
            .field("totem", &self.totem)
            .field("contact", &self.contact)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::controller::PatrolController;
    use crate::core::collider::ColliderSetBuilder;
    use crate::geometry::RectangleF;
    use glam::Vec2;

    fn body_at(x: f32, y: f32) -> BipedalBody {
        let mut body = BipedalBody::new(Vec2::new(x, y), 10.0, 5.0, 48.0, 32.0);
        body.y_acc_ramp = 0.0;
        body.air_friction = 1.0;
        body
    }

    #[test]
    fn builder_sets_fields() {
        let e = Entity::new(EntityId(3), body_at(0.0, 0.0))
            .with_tag("hero")
            .with_totem(BipedalCollisionTotem::default());
        assert_eq!(e.id, EntityId(3));
        assert_eq!(e.tag, "hero");
        assert!(e.active);
        assert!(e.totem().is_some());
        assert_eq!(e.contact(), BodyRegion::NONE);
    }

    #[test]
    fn controller_drives_body() {
        let colliders = ColliderSetBuilder::new().finish();
        let mut e = Entity::new(EntityId(1), body_at(0.0, 0.0))
            .with_controller(PatrolController::new(-100.0, 100.0, 2.0));
        e.update(1.0, &colliders, &InputState::default());
        assert_eq!(e.body.position(), Vec2::new(2.0, 0.0));
    }

    #[test]
    fn totem_contact_updates_after_tick() {
        let colliders = ColliderSetBuilder::new()
            .with_collider(RectangleF::new(-30.0, -100.0, 10.0, 200.0))
            .finish();
        // Totem column sits just left of the body, reaching a wall the body does not touch.
        let mut e = Entity::new(EntityId(1), body_at(0.0, 0.0))
            .with_totem(BipedalCollisionTotem::new(-16.0, 10.0, 48.0));
        e.update(1.0, &colliders, &InputState::default());
        assert_eq!(e.contact(), BodyRegion::all());
    }
}
