//! Debug rendering: wireframe outlines for colliders, bodies and probes.
//!
//! Outlines are line lists (two vertices per edge) so the host can draw
//! them in a single call without index buffers.

use crate::components::entity::Entity;
use crate::geometry::RectangleF;
use crate::renderer::instance::LineVertex;

/// Outline of a rectangle as four edges, clockwise from the top-left corner.
pub fn collider_outline(rect: &RectangleF) -> [LineVertex; 8] {
    let [tl, tr, br, bl] = rect.corners().map(|c| LineVertex::new(c.x, c.y));
    [tl, tr, tr, br, br, bl, bl, tl]
}

/// Append the bounds of every active entity, and optionally its last
/// collision probes, to `lines`. Clears `lines` first.
pub fn debug_draw_bodies<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    include_probes: bool,
    lines: &mut Vec<LineVertex>,
) {
    lines.clear();
    for entity in entities.filter(|e| e.active) {
        lines.extend(collider_outline(&entity.body.bounds()));
        if include_probes {
            for probe in entity.body.probes() {
                lines.extend(collider_outline(&probe));
            }
        }
    }
}
