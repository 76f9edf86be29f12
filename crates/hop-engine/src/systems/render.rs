use crate::components::entity::Entity;
use crate::core::physics::Facing;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the render buffer from a set of entities, one instance per active entity.
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.clear();

    for entity in entities {
        if !entity.active {
            continue;
        }
        let body = &entity.body;
        let pos = body.position();
        let prev = body.prev_position();

        buffer.push(RenderInstance {
            x: pos.x,
            y: pos.y,
            prev_x: prev.x,
            prev_y: prev.y,
            width: body.width(),
            height: body.height(),
            facing: match body.facing() {
                Facing::Right => 1.0,
                Facing::Left => -1.0,
            },
            on_ground: if body.is_on_ground() { 1.0 } else { 0.0 },
        });
    }
}
