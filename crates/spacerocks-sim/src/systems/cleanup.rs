//! Cleanup system: removes projectiles that have left the playfield.

use hecs::{Entity, World};

use spacerocks_core::components::{Position, Projectile};
use spacerocks_core::types::Bounds;

/// Despawn projectiles outside the half-open playfield rectangle.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
/// Returns the number removed.
pub fn run(world: &mut World, bounds: &Bounds, despawn_buffer: &mut Vec<Entity>) -> usize {
    despawn_buffer.clear();

    for (entity, (pos, _projectile)) in world.query_mut::<(&Position, &Projectile)>() {
        if !bounds.contains(&pos.0) {
            despawn_buffer.push(entity);
        }
    }

    let removed = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    removed
}
