//! Simulation constants and tuning parameters.
//!
//! Velocities are in pixels per tick, angles in degrees.

/// Nominal frame rate the simulation is tuned for (Hz).
pub const TICK_RATE: u32 = 60;

// --- Playfield ---

pub const DEFAULT_WIDTH: f64 = 800.0;
pub const DEFAULT_HEIGHT: f64 = 600.0;

/// Ship spawn point (center of the default playfield).
pub const SHIP_START_X: f64 = 400.0;
pub const SHIP_START_Y: f64 = 300.0;

// --- Ship ---

/// Velocity gained per tick of thrust. No top speed.
pub const SHIP_ACCELERATION: f64 = 0.2;

/// Turn rate per tick of rotation input (degrees).
pub const SHIP_MANEUVERABILITY: f64 = 3.0;

/// Per-tick damping factor applied by the brake.
pub const SHIP_BRAKE_FACTOR: f64 = 0.9;

/// Projectile muzzle speed added to the ship's own velocity.
pub const BULLET_SPEED: f64 = 3.0;

/// Ship body collision radius.
pub const SHIP_RADIUS: f64 = 20.0;

/// Collision radius while the shield is up.
pub const SHIELD_RADIUS: f64 = 30.0;

// --- Asteroids ---

/// Collision radius of a full-size (tier 3) asteroid. Smaller tiers scale it.
pub const ASTEROID_LARGE_RADIUS: f64 = 40.0;

pub const ASTEROID_MIN_SPEED: f64 = 1.0;
pub const ASTEROID_MAX_SPEED: f64 = 3.0;

/// Children produced by one split.
pub const SPLIT_CHILD_COUNT: usize = 2;

// --- Projectiles ---

pub const PROJECTILE_RADIUS: f64 = 3.0;

// --- Spawning ---

/// Asteroids placed at start and on every reset.
pub const INITIAL_ASTEROID_COUNT: usize = 8;

/// Largest field a configuration may ask for.
pub const MAX_ASTEROID_COUNT: usize = 1_000;

/// Minimum distance between a freshly placed asteroid and the ship.
pub const MIN_ASTEROID_DISTANCE: f64 = 250.0;

/// Rejection-sampling cap per asteroid.
pub const MAX_SPAWN_ATTEMPTS: u32 = 10_000;

// --- Messages ---

pub const MESSAGE_DEFEAT: &str = "Game Over";
pub const MESSAGE_VICTORY: &str = "You Win!";
