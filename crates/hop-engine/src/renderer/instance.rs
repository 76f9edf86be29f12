use bytemuck::{Pod, Zeroable};

/// Per-entity render data handed to the host renderer.
/// 8 floats = 32 bytes stride.
///
/// Both the current and previous feet positions are carried so the host
/// can interpolate between ticks and derive facing.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// Feet X in world space.
    pub x: f32,
    /// Feet Y in world space.
    pub y: f32,
    /// Feet X before the last tick.
    pub prev_x: f32,
    /// Feet Y before the last tick.
    pub prev_y: f32,
    pub width: f32,
    pub height: f32,
    /// 1.0 facing right, -1.0 facing left.
    pub facing: f32,
    /// 1.0 when standing on geometry, 0.0 in the air.
    pub on_ground: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Endpoint of a debug line. Consecutive pairs form one segment.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub x: f32,
    pub y: f32,
}

impl LineVertex {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Render buffer containing one instance per visible entity.
#[derive(Debug, Clone)]
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(512)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Instance data as raw bytes for upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
