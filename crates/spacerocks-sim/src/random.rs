//! Injectable randomness.
//!
//! Every random draw in the simulation goes through [`RandomSource`], so a
//! test can swap in a scripted source and drive exact placements.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use spacerocks_core::types::{Bounds, Vector2D};

pub trait RandomSource: Send {
    /// Uniform draw in `[min, max)`. Returns `min` for an empty range.
    fn range(&mut self, min: f64, max: f64) -> f64;

    /// Uniform draw in `[min, max]`, both ends reachable.
    fn range_inclusive(&mut self, min: f64, max: f64) -> f64 {
        self.range(min, max)
    }

    /// Uniform heading in degrees, `[0, 360)`.
    fn angle(&mut self) -> f64 {
        self.range(0.0, 360.0)
    }
}

/// Default source: ChaCha8 seeded from the config.
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn range(&mut self, min: f64, max: f64) -> f64 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..max)
    }

    fn range_inclusive(&mut self, min: f64, max: f64) -> f64 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}

/// Uniform point inside the playfield.
pub fn random_position(rng: &mut dyn RandomSource, bounds: &Bounds) -> Vector2D {
    let x = rng.range(0.0, bounds.width);
    let y = rng.range(0.0, bounds.height);
    Vector2D::new(x, y)
}

/// Speed uniform in `[min_speed, max_speed]`, heading uniform.
pub fn random_velocity(rng: &mut dyn RandomSource, min_speed: f64, max_speed: f64) -> Vector2D {
    let speed = rng.range_inclusive(min_speed, max_speed);
    let angle = rng.angle();
    Vector2D::new(speed, 0.0).rotate(angle)
}
