use glam::Vec2;

use crate::api::config::GameConfig;
use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::core::collider::{ColliderSetBuilder, StaticColliderSet};
use crate::core::time::FrameClock;
use crate::error::CoreError;
use crate::geometry::RectangleF;
use crate::input::queue::{InputEvent, InputQueue};
use crate::input::state::InputState;
use crate::renderer::instance::{LineVertex, RenderBuffer};
use crate::systems::render::build_render_buffer;

enum Phase {
    Building(ColliderSetBuilder),
    Ready(StaticColliderSet),
}

/// A level: static geometry plus the entities moving through it.
///
/// Geometry is added during the build phase and frozen by
/// [`end_build`](Self::end_build); simulation is only possible afterwards.
/// Entities live in a flat Vec and may be spawned at any time.
pub struct Level {
    config: GameConfig,
    phase: Phase,
    entities: Vec<Entity>,
    next_id: u32,
    clock: FrameClock,
    input: InputState,
}

impl Level {
    pub fn new(config: GameConfig) -> Self {
        let clock = FrameClock::new(config.target_frame_rate).with_spike_multiplier(config.spike_multiplier);
        Self {
            config,
            phase: Phase::Building(ColliderSetBuilder::new()),
            entities: Vec::with_capacity(64),
            next_id: 1,
            clock,
            input: InputState::default(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // -- Build phase --

    /// Add a static block. Fails once the level has been built.
    pub fn add_block(&mut self, rect: RectangleF) -> Result<(), CoreError> {
        match &mut self.phase {
            Phase::Building(builder) => {
                builder.add_collider(rect);
                Ok(())
            }
            Phase::Ready(_) => Err(CoreError::LevelFrozen),
        }
    }

    /// Freeze the geometry. Fails if called twice.
    pub fn end_build(&mut self) -> Result<(), CoreError> {
        let builder = match &mut self.phase {
            Phase::Building(builder) => std::mem::take(builder),
            Phase::Ready(_) => return Err(CoreError::LevelFrozen),
        };
        let colliders = builder.finish();
        log::debug!(
            "level built: {} colliders, {} entities",
            colliders.len(),
            self.entities.len()
        );
        self.phase = Phase::Ready(colliders);
        Ok(())
    }

    pub fn is_built(&self) -> bool {
        matches!(self.phase, Phase::Ready(_))
    }

    pub fn colliders(&self) -> Result<&StaticColliderSet, CoreError> {
        match &self.phase {
            Phase::Ready(colliders) => Ok(colliders),
            Phase::Building(_) => Err(CoreError::LevelNotBuilt),
        }
    }

    /// Penetration of `probe` into the level, first match in insertion order.
    pub fn get_intersect(&self, probe: &RectangleF) -> Result<Vec2, CoreError> {
        Ok(self.colliders()?.get_intersect(probe))
    }

    /// Line-list outline of all level geometry.
    pub fn collider_outline(&self) -> Result<&[LineVertex], CoreError> {
        Ok(self.colliders()?.outline())
    }

    // -- Entities --

    /// Allocate a fresh entity id.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = entity.id;
        self.entities.push(entity);
        id
    }

    /// Remove an entity by ID. Returns the removed entity if found.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(idx))
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Find the first entity with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    pub fn find_by_tag_mut(&mut self, tag: &str) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.tag == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    // -- Simulation --

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Advance one frame of `frame_dt` seconds. Input events are folded
    /// into the frame's input state first, then every active entity is
    /// stepped once, in spawn order.
    pub fn update(
        &mut self,
        frame_dt: f32,
        events: impl IntoIterator<Item = InputEvent>,
    ) -> Result<(), CoreError> {
        let colliders = match &self.phase {
            Phase::Ready(colliders) => colliders,
            Phase::Building(_) => return Err(CoreError::LevelNotBuilt),
        };

        self.input.advance(events);
        let multiplier = self.clock.advance(frame_dt);

        for entity in self.entities.iter_mut().filter(|e| e.active) {
            entity.update(multiplier, colliders, &self.input);
        }
        Ok(())
    }

    /// [`update`](Self::update) draining a host-filled queue.
    pub fn update_from_queue(&mut self, frame_dt: f32, queue: &mut InputQueue) -> Result<(), CoreError> {
        self.update(frame_dt, queue.drain())
    }

    /// An empty render buffer sized for `GameConfig::max_instances`.
    pub fn render_buffer(&self) -> RenderBuffer {
        RenderBuffer::with_capacity(self.config.max_instances)
    }

    pub fn build_render_buffer(&self, buffer: &mut RenderBuffer) {
        build_render_buffer(self.entities.iter(), buffer);
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::ControlConfig;
    use crate::api::controller::PlayerController;
    use crate::core::physics::BipedalBody;
    use crate::input::state::Buttons;

    fn body_at(x: f32, y: f32) -> BipedalBody {
        BipedalBody::new(Vec2::new(x, y), 10.0, 5.0, 48.0, 32.0)
    }

    fn built_level() -> Level {
        let mut level = Level::default();
        level.add_block(RectangleF::new(0.0, 400.0, 800.0, 80.0)).unwrap();
        level.end_build().unwrap();
        level
    }

    #[test]
    fn update_before_build_fails() {
        let mut level = Level::default();
        let err = level.update(1.0 / 60.0, []).unwrap_err();
        assert!(matches!(err, CoreError::LevelNotBuilt));
        assert!(level.get_intersect(&RectangleF::default()).is_err());
    }

    #[test]
    fn blocks_are_rejected_after_build() {
        let mut level = built_level();
        assert!(level.is_built());
        let err = level.add_block(RectangleF::new(0.0, 0.0, 1.0, 1.0)).unwrap_err();
        assert!(matches!(err, CoreError::LevelFrozen));
        assert!(matches!(level.end_build(), Err(CoreError::LevelFrozen)));
        assert_eq!(level.colliders().unwrap().len(), 1);
    }

    #[test]
    fn spawn_get_and_despawn() {
        let mut level = built_level();
        let id = level.next_id();
        level.spawn(Entity::new(id, body_at(100.0, 100.0)).with_tag("hero"));
        let other = level.next_id();
        level.spawn(Entity::new(other, body_at(200.0, 100.0)));
        assert_ne!(id, other);

        assert_eq!(level.find_by_tag("hero").map(|e| e.id), Some(id));
        assert_eq!(level.get(other).unwrap().body.position().x, 200.0);

        assert!(level.despawn(id).is_some());
        assert!(level.get(id).is_none());
        assert_eq!(level.len(), 1);
    }

    #[test]
    fn entities_fall_onto_the_floor() {
        let mut level = built_level();
        let id = level.next_id();
        level.spawn(Entity::new(id, body_at(100.0, 300.0)));

        for _ in 0..600 {
            level.update(1.0 / 60.0, []).unwrap();
        }
        let body = &level.get(id).unwrap().body;
        assert!(body.is_on_ground());
        assert!((body.position().y - 400.0).abs() < 1e-3, "y = {}", body.position().y);
    }

    #[test]
    fn inactive_entities_are_frozen() {
        let mut level = built_level();
        let id = level.next_id();
        level.spawn(Entity::new(id, body_at(100.0, 300.0)).with_active(false));
        level.update(1.0 / 60.0, []).unwrap();
        assert_eq!(level.get(id).unwrap().body.position(), Vec2::new(100.0, 300.0));
    }

    #[test]
    fn queued_input_reaches_controllers() {
        let mut level = built_level();
        let id = level.next_id();
        level.spawn(
            Entity::new(id, body_at(100.0, 400.0)).with_controller(PlayerController::new(ControlConfig::default())),
        );

        let mut queue = InputQueue::new();
        queue.push(InputEvent::ButtonDown(Buttons::RIGHT));
        level.update_from_queue(1.0 / 60.0, &mut queue).unwrap();

        assert!(queue.is_empty());
        assert!(level.input().is_down(Buttons::RIGHT));
        assert!(level.get(id).unwrap().body.position().x > 100.0);
    }

    #[test]
    fn render_buffer_capacity_follows_config() {
        let level = Level::new(GameConfig {
            max_instances: 40,
            ..GameConfig::default()
        });
        let buffer = level.render_buffer();
        assert!(buffer.instances.capacity() >= 40);
        assert_eq!(buffer.instance_count(), 0);
    }

    #[test]
    fn render_buffer_has_one_instance_per_active_entity() {
        let mut level = built_level();
        let a = level.next_id();
        level.spawn(Entity::new(a, body_at(100.0, 400.0)));
        let b = level.next_id();
        level.spawn(Entity::new(b, body_at(200.0, 400.0)).with_active(false));

        let mut buffer = level.render_buffer();
        level.build_render_buffer(&mut buffer);
        assert_eq!(buffer.instance_count(), 1);
        assert_eq!(level.collider_outline().unwrap().len(), 8);
    }
}
