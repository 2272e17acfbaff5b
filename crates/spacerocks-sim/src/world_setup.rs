//! Entity spawn factories.
//!
//! Creates the ship, asteroids and projectiles with their component
//! bundles. Every factory stamps a fresh [`SpawnOrder`] so collision passes
//! can iterate in insertion order.

use hecs::World;

use spacerocks_core::components::*;
use spacerocks_core::enums::AsteroidSize;
use spacerocks_core::events::SpawnIntent;
use spacerocks_core::types::{Vector2D, UP};

use crate::config::SimConfig;

fn next_order(next_spawn_order: &mut u64) -> SpawnOrder {
    let order = SpawnOrder(*next_spawn_order);
    *next_spawn_order += 1;
    order
}

/// Spawn the player's ship at the configured start point, shield up,
/// facing up, at rest.
pub fn spawn_ship(world: &mut World, next_spawn_order: &mut u64, config: &SimConfig) -> hecs::Entity {
    world.spawn((
        Ship {
            direction: UP,
            shield: true,
            shield_radius: config.shield_radius,
        },
        Position(config.ship_start),
        Velocity(Vector2D::ZERO),
        Collider {
            radius: config.ship_radius,
        },
        Motion::Wrap,
        next_order(next_spawn_order),
    ))
}

/// Spawn an asteroid. Radius follows the size tier's visual scale.
pub fn spawn_asteroid(
    world: &mut World,
    next_spawn_order: &mut u64,
    config: &SimConfig,
    position: Vector2D,
    velocity: Vector2D,
    size: AsteroidSize,
) -> hecs::Entity {
    world.spawn((
        Asteroid { size },
        Position(position),
        Velocity(velocity),
        Collider {
            radius: config.asteroid_radius * size.scale(),
        },
        Motion::Wrap,
        next_order(next_spawn_order),
    ))
}

/// Spawn a projectile. Projectiles never wrap.
pub fn spawn_projectile(
    world: &mut World,
    next_spawn_order: &mut u64,
    config: &SimConfig,
    position: Vector2D,
    velocity: Vector2D,
) -> hecs::Entity {
    world.spawn((
        Projectile,
        Position(position),
        Velocity(velocity),
        Collider {
            radius: config.projectile_radius,
        },
        Motion::Free,
        next_order(next_spawn_order),
    ))
}

/// Materialize a queued spawn intent.
pub fn apply_intent(
    world: &mut World,
    next_spawn_order: &mut u64,
    config: &SimConfig,
    intent: SpawnIntent,
) -> hecs::Entity {
    match intent {
        SpawnIntent::Asteroid {
            position,
            velocity,
            size,
        } => spawn_asteroid(world, next_spawn_order, config, position, velocity, size),
        SpawnIntent::Projectile { position, velocity } => {
            spawn_projectile(world, next_spawn_order, config, position, velocity)
        }
    }
}
