//! Asteroid field placement.
//!
//! Rejection sampling: draw uniform positions until one lies farther than
//! the minimum distance from the ship. Attempts are capped so a bad
//! configuration fails instead of spinning forever.

use spacerocks_core::constants::{ASTEROID_MAX_SPEED, ASTEROID_MIN_SPEED};
use spacerocks_core::enums::AsteroidSize;
use spacerocks_core::events::SpawnIntent;
use spacerocks_core::types::{Bounds, Vector2D};

use crate::error::SimError;
use crate::random::{random_position, random_velocity, RandomSource};

/// Parameters for one field placement.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub count: usize,
    pub min_distance: f64,
    pub max_attempts: u32,
}

/// Sample one position farther than `min_distance` from `avoid`.
pub fn sample_clear_position(
    rng: &mut dyn RandomSource,
    bounds: &Bounds,
    avoid: &Vector2D,
    min_distance: f64,
    max_attempts: u32,
) -> Result<Vector2D, SimError> {
    for _ in 0..max_attempts {
        let candidate = random_position(rng, bounds);
        if candidate.distance_to(avoid) > min_distance {
            return Ok(candidate);
        }
    }
    Err(SimError::SpawnExhausted {
        attempts: max_attempts,
        min_distance,
    })
}

/// Plan a full-size asteroid field around the ship.
///
/// Nothing is spawned here: the caller commits the returned intents only
/// when the whole field could be placed.
pub fn plan_asteroid_field(
    rng: &mut dyn RandomSource,
    bounds: &Bounds,
    ship_position: &Vector2D,
    spec: FieldSpec,
) -> Result<Vec<SpawnIntent>, SimError> {
    let mut field = Vec::new();
    for _ in 0..spec.count {
        let position = sample_clear_position(
            rng,
            bounds,
            ship_position,
            spec.min_distance,
            spec.max_attempts,
        )?;
        field.push(SpawnIntent::Asteroid {
            position,
            velocity: random_velocity(rng, ASTEROID_MIN_SPEED, ASTEROID_MAX_SPEED),
            size: AsteroidSize::Large,
        });
    }
    Ok(field)
}
