//! Simulation configuration and its validation.

use serde::{Deserialize, Serialize};

use spacerocks_core::constants::*;
use spacerocks_core::types::{Bounds, Vector2D};

use crate::error::SimError;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub width: f64,
    pub height: f64,
    /// Where the ship appears on start and reset.
    pub ship_start: Vector2D,
    pub asteroid_count: usize,
    /// Asteroids are never placed this close to the ship.
    pub min_asteroid_distance: f64,
    /// Rejection-sampling attempts per asteroid before giving up.
    pub max_spawn_attempts: u32,
    pub ship_radius: f64,
    pub shield_radius: f64,
    /// Radius of a full-size asteroid.
    pub asteroid_radius: f64,
    pub projectile_radius: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            ship_start: Vector2D::new(SHIP_START_X, SHIP_START_Y),
            asteroid_count: INITIAL_ASTEROID_COUNT,
            min_asteroid_distance: MIN_ASTEROID_DISTANCE,
            max_spawn_attempts: MAX_SPAWN_ATTEMPTS,
            ship_radius: SHIP_RADIUS,
            shield_radius: SHIELD_RADIUS,
            asteroid_radius: ASTEROID_LARGE_RADIUS,
            projectile_radius: PROJECTILE_RADIUS,
        }
    }
}

impl SimConfig {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    /// Reject configurations that would loop forever or produce nonsense.
    pub fn validate(&self) -> Result<(), SimError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;

        if !positive(self.width) || !positive(self.height) {
            return Err(SimError::InvalidBounds {
                width: self.width,
                height: self.height,
            });
        }

        let bounds = self.bounds();
        if !self.ship_start.x.is_finite()
            || !self.ship_start.y.is_finite()
            || !bounds.contains(&self.ship_start)
        {
            return Err(SimError::InvalidConfig(format!(
                "ship start ({}, {}) lies outside the {}x{} playfield",
                self.ship_start.x, self.ship_start.y, self.width, self.height
            )));
        }

        for (name, radius) in [
            ("ship_radius", self.ship_radius),
            ("shield_radius", self.shield_radius),
            ("asteroid_radius", self.asteroid_radius),
            ("projectile_radius", self.projectile_radius),
        ] {
            if !positive(radius) {
                return Err(SimError::InvalidConfig(format!(
                    "{name} must be finite and positive, got {radius}"
                )));
            }
        }

        if !self.min_asteroid_distance.is_finite() || self.min_asteroid_distance < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "min_asteroid_distance must be finite and non-negative, got {}",
                self.min_asteroid_distance
            )));
        }

        if self.asteroid_count > MAX_ASTEROID_COUNT {
            return Err(SimError::InvalidConfig(format!(
                "asteroid_count must be at most {MAX_ASTEROID_COUNT}, got {}",
                self.asteroid_count
            )));
        }

        if self.max_spawn_attempts == 0 {
            return Err(SimError::InvalidConfig(
                "max_spawn_attempts must be at least 1".into(),
            ));
        }

        // Sampling is half-open, so the corner itself is never drawn; require
        // strictly more room than the constraint.
        let max_reachable = bounds.farthest_corner_distance(&self.ship_start);
        if self.asteroid_count > 0 && self.min_asteroid_distance >= max_reachable {
            return Err(SimError::UnsatisfiableSpawn {
                min_distance: self.min_asteroid_distance,
                max_reachable,
            });
        }

        Ok(())
    }
}
