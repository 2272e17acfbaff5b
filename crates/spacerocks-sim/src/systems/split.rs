//! Asteroid splitting.
//!
//! A struck asteroid above the smallest tier breaks into two children one
//! tier down, at the parent's position, each with its own random velocity.
//! The children are emitted as spawn intents; removing the parent is the
//! caller's job.

use spacerocks_core::constants::{ASTEROID_MAX_SPEED, ASTEROID_MIN_SPEED, SPLIT_CHILD_COUNT};
use spacerocks_core::enums::AsteroidSize;
use spacerocks_core::events::SpawnIntent;
use spacerocks_core::types::Vector2D;

use crate::random::{random_velocity, RandomSource};

/// Push the children of a split into `out`. Returns how many were pushed
/// (0 for the smallest tier).
pub fn split(
    position: Vector2D,
    size: AsteroidSize,
    rng: &mut dyn RandomSource,
    out: &mut Vec<SpawnIntent>,
) -> usize {
    let Some(child_size) = size.smaller() else {
        return 0;
    };

    for _ in 0..SPLIT_CHILD_COUNT {
        out.push(SpawnIntent::Asteroid {
            position,
            velocity: random_velocity(rng, ASTEROID_MIN_SPEED, ASTEROID_MAX_SPEED),
            size: child_size,
        });
    }

    log::debug!(
        "asteroid tier {} split at ({:.1}, {:.1})",
        size.tier(),
        position.x,
        position.y
    );
    SPLIT_CHILD_COUNT
}
