//! Frame-rate independent physics and collision core for a 2D platformer.
//!
//! Bipedal entities move through immovable axis-aligned level geometry.
//! Every per-tick constant is tuned for a 60 Hz frame and scaled by a
//! speed multiplier derived from the real frame time.

pub mod api;
pub mod components;
pub mod core;
pub mod error;
pub mod geometry;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::{BodyConfig, ControlConfig, GameConfig};
pub use api::controller::{Controller, EntityState, PassiveController, PatrolController, PlayerController};
pub use api::types::EntityId;
pub use components::entity::Entity;
pub use components::totem::{BipedalCollisionTotem, BodyRegion, TaggedRect};
pub use core::collider::{ColliderSetBuilder, StaticColliderSet};
pub use core::physics::{BipedalBody, Facing, TickReport};
pub use core::scene::Level;
pub use core::time::{FrameClock, PREFERRED_FRAME_MS, PREFERRED_FRAME_RATE};
pub use error::CoreError;
pub use geometry::{Collidable, LineSegment, RectangleF, Triangle};
pub use input::queue::{InputEvent, InputQueue};
pub use input::state::{Buttons, InputState};
pub use renderer::instance::{LineVertex, RenderBuffer, RenderInstance};
pub use systems::debug::{collider_outline, debug_draw_bodies};
pub use systems::render::build_render_buffer;
