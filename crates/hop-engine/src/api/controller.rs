use glam::Vec2;

use crate::api::config::ControlConfig;
use crate::input::state::{Buttons, InputState};

/// Read-only view of a body handed to its controller once per tick.
///
/// The request fields start out holding what physics already wants to do
/// this tick; whatever the controller returns in them is added on top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityState {
    pub is_on_ground: bool,
    pub position: Vec2,
    /// Requested horizontal displacement for this tick.
    pub requested_dx: f32,
    /// Requested vertical displacement for this tick (positive is down).
    pub requested_dy: f32,
    /// Vertical acceleration to carry into the next tick. Negative values jump.
    pub vertical_acceleration: f32,
}

impl EntityState {
    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }
}

/// Per-entity motion policy. Turns a state snapshot and the frame's input
/// into motion requests; it never touches the body directly.
pub trait Controller {
    fn apply(&mut self, state: EntityState, input: &InputState) -> EntityState;
}

/// Requests nothing beyond what physics already wants.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassiveController;

impl Controller for PassiveController {
    fn apply(&mut self, state: EntityState, _input: &InputState) -> EntityState {
        state
    }
}

/// Keyboard/gamepad driven movement: left/right strafing, analog stick,
/// and a jump that fires on the press edge while grounded.
#[derive(Debug, Clone, Default)]
pub struct PlayerController {
    config: ControlConfig,
}

impl PlayerController {
    pub fn new(config: ControlConfig) -> Self {
        Self { config }
    }
}

impl Controller for PlayerController {
    fn apply(&mut self, mut state: EntityState, input: &InputState) -> EntityState {
        let accel = self.config.move_accel;

        if input.is_down(Buttons::RIGHT) {
            state.requested_dx += accel;
        }
        if input.is_down(Buttons::LEFT) {
            state.requested_dx -= accel;
        }
        state.requested_dx += input.stick_x * accel;

        if input.just_pressed(Buttons::JUMP) && state.is_on_ground {
            state.vertical_acceleration -= self.config.jump_speed;
        }

        state
    }
}

/// Simple AI: walks toward one end of `[min_x, max_x]`, turning around
/// once it reaches it.
#[derive(Debug, Clone)]
pub struct PatrolController {
    min_x: f32,
    max_x: f32,
    step: f32,
    heading_right: bool,
}

impl PatrolController {
    pub fn new(min_x: f32, max_x: f32, step: f32) -> Self {
        debug_assert!(min_x <= max_x, "patrol range is inverted");
        Self {
            min_x,
            max_x,
            step,
            heading_right: true,
        }
    }

    pub fn heading_right(&self) -> bool {
        self.heading_right
    }
}

impl Controller for PatrolController {
    fn apply(&mut self, mut state: EntityState, _input: &InputState) -> EntityState {
        if self.heading_right && state.x() >= self.max_x {
            self.heading_right = false;
        } else if !self.heading_right && state.x() <= self.min_x {
            self.heading_right = true;
        }

        if self.heading_right {
            state.requested_dx += self.step;
        } else {
            state.requested_dx -= self.step;
        }
        state
    }
}
