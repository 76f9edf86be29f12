pub mod collider;
pub mod physics;
pub mod scene;
pub mod time;
