use serde::{Deserialize, Serialize};

use crate::core::time::PREFERRED_FRAME_RATE;
use crate::error::CoreError;

/// Level-wide settings, provided by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Frame rate per-tick constants are tuned for (default: 60).
    pub target_frame_rate: f32,
    /// Speed multiplier above which a frame is logged as a stall (default: 4.0).
    pub spike_multiplier: f32,
    /// Initial render buffer capacity (default: 512).
    pub max_instances: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_frame_rate: PREFERRED_FRAME_RATE,
            spike_multiplier: 4.0,
            max_instances: 512,
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let config: Self = serde_json::from_str(json)?;
        log::debug!("game config loaded: {:?}", config);
        Ok(config)
    }
}

/// Physics tunables and body size of a bipedal entity.
/// All per-tick quantities are expressed for one preferred-rate frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    /// Caps horizontal speed in both directions.
    pub max_x_speed: f32,
    /// Caps fall and ascent speed.
    pub max_y_speed: f32,
    pub width: f32,
    pub height: f32,
    /// Gravity added to vertical acceleration every airborne tick.
    pub y_acc_ramp: f32,
    /// Terminal vertical acceleration.
    pub max_y_acc: f32,
    /// Horizontal speed multiplier per grounded tick.
    pub grounded_friction: f32,
    /// Horizontal speed multiplier per airborne tick.
    pub air_friction: f32,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            max_x_speed: 10.0,
            max_y_speed: 5.0,
            width: 32.0,
            height: 48.0,
            y_acc_ramp: 0.01,
            max_y_acc: 2.5,
            grounded_friction: 0.5,
            air_friction: 0.9,
        }
    }
}

impl BodyConfig {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let config: Self = serde_json::from_str(json)?;
        log::debug!("body config loaded: {:?}", config);
        Ok(config)
    }
}

/// Tuning for [`PlayerController`](crate::api::controller::PlayerController).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    /// Horizontal request added per tick while a direction is held.
    pub move_accel: f32,
    /// Subtracted from vertical acceleration on a jump.
    pub jump_speed: f32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            move_accel: 5.0,
            jump_speed: 1.0,
        }
    }
}

impl ControlConfig {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}
