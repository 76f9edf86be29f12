//! Per-tick motion integration and collision resolution for bipedal bodies.
//!
//! A body's `position` is the center of its feet (bottom-center of the
//! bounding box) in a Y-down world. Each tick runs to completion:
//!
//! 1. apply gravity ramp, friction and acceleration, clamp speeds
//! 2. hand a snapshot to the controller and merge its requests
//! 3. scale the total request by the frame's speed multiplier
//! 4. probe the static colliders vertically and horizontally and cancel
//!    any penetration
//! 5. commit the corrected displacement
//!
//! The two axes are resolved once each with no iteration and no
//! substepping. Fast motion or a large frame delta can carry a body
//! through a collider thinner than one step.

use glam::Vec2;

use crate::api::config::BodyConfig;
use crate::api::controller::{Controller, EntityState};
use crate::core::collider::StaticColliderSet;
use crate::core::time::PREFERRED_FRAME_MS;
use crate::geometry::RectangleF;
use crate::input::state::InputState;

/// Height of the probe that detects standing contact under the feet.
pub const GROUND_PROBE_HEIGHT: f32 = 1.0;

/// The horizontal probe stops this far above the feet so the floor
/// underneath never registers as a wall.
pub const HORIZONTAL_PROBE_INSET: f32 = 0.5;

/// Bodies shorter than the inset get a zero-height wall check.
fn horizontal_probe_height(body_height: f32) -> f32 {
    (body_height - HORIZONTAL_PROBE_INSET).max(0.0)
}

/// Direction a body last moved horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// What happened during one [`BipedalBody::update`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickReport {
    /// Displacement committed this tick.
    pub displacement: Vec2,
    /// Correction applied on the vertical axis (zero if none).
    pub vertical_penetration: f32,
    /// Correction applied on the horizontal axis (zero if none).
    pub horizontal_penetration: f32,
    pub was_on_ground: bool,
    pub is_on_ground: bool,
}

impl TickReport {
    pub fn landed(&self) -> bool {
        !self.was_on_ground && self.is_on_ground
    }

    pub fn left_ground(&self) -> bool {
        self.was_on_ground && !self.is_on_ground
    }

    pub fn hit_wall(&self) -> bool {
        self.horizontal_penetration != 0.0
    }
}

/// Mutable simulation state of one bipedal entity.
///
/// Tunables are public so they can be adjusted after construction.
#[derive(Debug, Clone)]
pub struct BipedalBody {
    position: Vec2,
    prev_position: Vec2,

    pub x_speed: f32,
    pub y_speed: f32,
    pub x_acc: f32,
    pub y_acc: f32,

    pub max_x_speed: f32,
    pub max_y_speed: f32,
    pub y_acc_ramp: f32,
    pub max_y_acc: f32,
    pub grounded_friction: f32,
    pub air_friction: f32,

    width: f32,
    height: f32,
    on_ground: bool,
    facing: Facing,

    bounds: RectangleF,
    vertical_check: RectangleF,
    ground_check: RectangleF,
    horizontal_check: RectangleF,
}

impl BipedalBody {
    /// Create a body with its feet at `position`. Gravity and friction
    /// start at the [`BodyConfig`] defaults.
    pub fn new(position: Vec2, max_x_speed: f32, max_y_speed: f32, height: f32, width: f32) -> Self {
        let config = BodyConfig {
            max_x_speed,
            max_y_speed,
            height,
            width,
            ..BodyConfig::default()
        };
        Self::from_config(position, &config)
    }

    pub fn from_config(position: Vec2, config: &BodyConfig) -> Self {
        debug_assert!(config.width >= 0.0 && config.height >= 0.0, "negative body size");
        let left = position.x - config.width / 2.0;
        Self {
            position,
            prev_position: position,
            x_speed: 0.0,
            y_speed: 0.0,
            x_acc: 0.0,
            y_acc: 0.0,
            max_x_speed: config.max_x_speed,
            max_y_speed: config.max_y_speed,
            y_acc_ramp: config.y_acc_ramp,
            max_y_acc: config.max_y_acc,
            grounded_friction: config.grounded_friction,
            air_friction: config.air_friction,
            width: config.width,
            height: config.height,
            on_ground: false,
            facing: Facing::default(),
            bounds: RectangleF::new(left, position.y - config.height, config.width, config.height),
            vertical_check: RectangleF::new(left, position.y, config.width, GROUND_PROBE_HEIGHT),
            ground_check: RectangleF::new(left, position.y, config.width, GROUND_PROBE_HEIGHT),
            horizontal_check: RectangleF::new(
                left,
                position.y - config.height,
                config.width,
                horizontal_probe_height(config.height),
            ),
        }
    }

    // -- Accessors --

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Position before the most recent tick.
    pub fn prev_position(&self) -> Vec2 {
        self.prev_position
    }

    pub fn bounds(&self) -> RectangleF {
        self.bounds
    }

    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.x_speed, self.y_speed)
    }

    pub fn acceleration(&self) -> Vec2 {
        Vec2::new(self.x_acc, self.y_acc)
    }

    pub fn is_on_ground(&self) -> bool {
        self.on_ground
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Probes used during the last collision pass: vertical sweep, ground, horizontal sweep.
    pub fn probes(&self) -> [RectangleF; 3] {
        [self.vertical_check, self.ground_check, self.horizontal_check]
    }

    // -- Direct manipulation --

    /// Teleport the body. Previous position follows so no motion is implied.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.prev_position = position;
        self.bounds.set_position(self.top_left_at(position));
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.x_speed = velocity.x;
        self.y_speed = velocity.y;
    }

    pub fn set_acceleration(&mut self, acceleration: Vec2) {
        self.x_acc = acceleration.x;
        self.y_acc = acceleration.y;
    }

    // -- Simulation --

    /// Advance one tick covering `frame_dt` seconds of wall-clock time,
    /// scaled against the preferred 60 Hz frame.
    pub fn update_elapsed(
        &mut self,
        frame_dt: f32,
        colliders: &StaticColliderSet,
        controller: &mut dyn Controller,
        input: &InputState,
    ) -> TickReport {
        let speed_multiplier = frame_dt * 1000.0 / PREFERRED_FRAME_MS;
        self.update(speed_multiplier, colliders, controller, input)
    }

    /// Advance one tick. `speed_multiplier` is the frame length relative
    /// to the preferred frame (see [`FrameClock`](crate::core::time::FrameClock)).
    pub fn update(
        &mut self,
        speed_multiplier: f32,
        colliders: &StaticColliderSet,
        controller: &mut dyn Controller,
        input: &InputState,
    ) -> TickReport {
        self.prev_position = self.position;
        let was_on_ground = self.on_ground;

        let mut request = self.apply_physics(speed_multiplier);

        let requested = controller.apply(self.snapshot(request), input);
        debug_assert!(
            requested.requested_dx.is_finite()
                && requested.requested_dy.is_finite()
                && requested.vertical_acceleration.is_finite(),
            "controller returned non-finite motion: {requested:?}"
        );

        self.y_acc = requested.vertical_acceleration;
        request += Vec2::new(requested.requested_dx, requested.requested_dy);
        request *= speed_multiplier;

        let penetration = self.resolve_collisions(&mut request, colliders);

        self.position += request;
        self.bounds.set_position(self.top_left_at(self.position));
        if request.x > 0.0 {
            self.facing = Facing::Right;
        } else if request.x < 0.0 {
            self.facing = Facing::Left;
        }

        TickReport {
            displacement: request,
            vertical_penetration: penetration.y,
            horizontal_penetration: penetration.x,
            was_on_ground,
            is_on_ground: self.on_ground,
        }
    }

    /// Gravity ramp, friction, acceleration and clamping.
    /// Returns the displacement physics alone requests this tick.
    fn apply_physics(&mut self, speed_multiplier: f32) -> Vec2 {
        if !self.on_ground && self.y_acc < self.max_y_acc {
            self.y_acc += self.y_acc_ramp;
        }

        self.x_speed *= if self.on_ground {
            self.grounded_friction
        } else {
            self.air_friction
        };

        self.x_speed += self.x_acc * speed_multiplier;
        self.y_speed += self.y_acc * speed_multiplier;

        self.x_speed = self.x_speed.clamp(-self.max_x_speed, self.max_x_speed);
        self.y_speed = self.y_speed.clamp(-self.max_y_speed, self.max_y_speed);

        Vec2::new(self.x_speed, self.y_speed)
    }

    fn snapshot(&self, request: Vec2) -> EntityState {
        EntityState {
            is_on_ground: self.on_ground,
            position: self.position,
            requested_dx: request.x,
            requested_dy: request.y,
            vertical_acceleration: self.y_acc,
        }
    }

    /// Probe from the pre-commit position and cancel penetration.
    /// Vertical is resolved first and decides the grounded flag; horizontal
    /// is resolved independently from a probe that ignores `request.y`.
    fn resolve_collisions(&mut self, request: &mut Vec2, colliders: &StaticColliderSet) -> Vec2 {
        let left = self.position.x - self.width / 2.0;

        // Sweep of the feet over this tick's vertical motion.
        self.vertical_check = if request.y >= 0.0 {
            RectangleF::new(left, self.position.y, self.width, request.y)
        } else {
            RectangleF::new(left, self.position.y + request.y, self.width, -request.y)
        };
        self.ground_check = RectangleF::new(left, self.position.y, self.width, GROUND_PROBE_HEIGHT);
        self.horizontal_check = RectangleF::new(
            left + request.x,
            self.position.y - self.height,
            self.width,
            horizontal_probe_height(self.height),
        );

        let vertical = colliders.get_intersect(&self.vertical_check).y;
        let horizontal = colliders.get_intersect(&self.horizontal_check).x;

        if vertical != 0.0 {
            request.y += vertical;
            self.y_speed = 0.0;
            self.y_acc = 0.0;
            self.on_ground = true;
        } else if colliders.get_intersect(&self.ground_check) == Vec2::ZERO {
            self.on_ground = false;
        }

        if horizontal != 0.0 {
            request.x += horizontal;
            self.x_speed = 0.0;
            self.x_acc = 0.0;
        }

        Vec2::new(horizontal, vertical)
    }

    fn top_left_at(&self, feet: Vec2) -> Vec2 {
        Vec2::new(feet.x - self.width / 2.0, feet.y - self.height)
    }
}
