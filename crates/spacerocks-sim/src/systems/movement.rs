//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick: position += velocity.
//! Velocities are already per-tick, so there is no dt factor.

use hecs::World;

use spacerocks_core::components::{Motion, Position, Velocity};
use spacerocks_core::types::Bounds;

/// Move every entity with Position + Velocity + Motion.
/// Wrapping entities reappear on the opposite edge; free ones do not.
pub fn run(world: &mut World, bounds: &Bounds) {
    for (_entity, (pos, vel, motion)) in
        world.query_mut::<(&mut Position, &Velocity, &Motion)>()
    {
        let next = pos.0 + vel.0;
        pos.0 = match motion {
            Motion::Wrap => next.wrap(bounds),
            Motion::Free => next,
        };
    }
}
