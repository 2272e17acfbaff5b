//! Collision detection and resolution.
//!
//! Circle-vs-circle tests, resolved in insertion order. At most one
//! asteroid is resolved against the ship per tick, and each projectile
//! destroys at most one asteroid per tick.

use hecs::{Entity, World};

use spacerocks_core::components::*;
use spacerocks_core::enums::AsteroidSize;
use spacerocks_core::events::SpawnIntent;
use spacerocks_core::types::Vector2D;

use crate::random::RandomSource;
use crate::systems::split;

/// Strict overlap test: centers closer than the sum of radii.
pub fn collides(a: &Vector2D, radius_a: f64, b: &Vector2D, radius_b: f64) -> bool {
    a.distance_to(b) < radius_a + radius_b
}

/// Radius the ship collides with: the shield's while it is up.
pub fn ship_radius(ship: &Ship, collider: &Collider) -> f64 {
    if ship.shield {
        ship.shield_radius
    } else {
        collider.radius
    }
}

/// Collision-relevant view of an asteroid.
#[derive(Debug, Clone, Copy)]
pub struct AsteroidBody {
    pub entity: Entity,
    pub position: Vector2D,
    pub radius: f64,
    pub size: AsteroidSize,
}

/// All asteroids, sorted by spawn order.
pub fn ordered_asteroids(world: &World) -> Vec<AsteroidBody> {
    let mut bodies: Vec<(SpawnOrder, AsteroidBody)> = world
        .query::<(&Asteroid, &Position, &Collider, &SpawnOrder)>()
        .iter()
        .map(|(entity, (asteroid, pos, collider, order))| {
            (
                *order,
                AsteroidBody {
                    entity,
                    position: pos.0,
                    radius: collider.radius,
                    size: asteroid.size,
                },
            )
        })
        .collect();
    bodies.sort_by_key(|(order, _)| *order);
    bodies.into_iter().map(|(_, body)| body).collect()
}

/// Outcome of the ship touching an asteroid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipImpact {
    /// Shield absorbed the hit; the asteroid was broken up.
    ShieldLost,
    /// Unshielded hit; the ship entity has been despawned.
    Destroyed,
}

/// Resolve the first asteroid (in spawn order) touching the ship.
///
/// With the shield up the shield drops and the asteroid splits and is
/// removed. Without it the ship is despawned and the asteroid stays.
pub fn resolve_ship(
    world: &mut World,
    ship_entity: Entity,
    rng: &mut dyn RandomSource,
    spawn_queue: &mut Vec<SpawnIntent>,
) -> Option<ShipImpact> {
    let (ship_pos, radius, shielded) = {
        let (ship, pos, collider) = world
            .query_one_mut::<(&Ship, &Position, &Collider)>(ship_entity)
            .ok()?;
        (pos.0, ship_radius(ship, collider), ship.shield)
    };

    let hit = ordered_asteroids(world)
        .into_iter()
        .find(|a| collides(&ship_pos, radius, &a.position, a.radius))?;

    if shielded {
        if let Ok(ship) = world.query_one_mut::<&mut Ship>(ship_entity) {
            ship.shield = false;
        }
        split::split(hit.position, hit.size, rng, spawn_queue);
        let _ = world.despawn(hit.entity);
        log::debug!("shield absorbed a tier {} asteroid", hit.size.tier());
        Some(ShipImpact::ShieldLost)
    } else {
        let _ = world.despawn(ship_entity);
        log::debug!("ship destroyed by a tier {} asteroid", hit.size.tier());
        Some(ShipImpact::Destroyed)
    }
}

/// Resolve projectile-asteroid hits. Projectiles are the outer loop, both
/// in spawn order; a hit removes both bodies and splits the asteroid.
/// Returns the number of asteroids destroyed.
pub fn resolve_projectiles(
    world: &mut World,
    rng: &mut dyn RandomSource,
    spawn_queue: &mut Vec<SpawnIntent>,
    despawn_buffer: &mut Vec<Entity>,
) -> usize {
    despawn_buffer.clear();

    let mut projectiles: Vec<(SpawnOrder, Entity, Vector2D, f64)> = world
        .query::<(&Projectile, &Position, &Collider, &SpawnOrder)>()
        .iter()
        .map(|(entity, (_, pos, collider, order))| (*order, entity, pos.0, collider.radius))
        .collect();
    projectiles.sort_by_key(|(order, ..)| *order);

    // Positions are fixed for the rest of the tick, so removals only need
    // to be reflected in the candidate list.
    let mut asteroids = ordered_asteroids(world);
    let mut destroyed = 0;

    for (_, projectile, pos, radius) in projectiles {
        let hit = asteroids
            .iter()
            .position(|a| collides(&a.position, a.radius, &pos, radius));

        if let Some(index) = hit {
            let asteroid = asteroids.remove(index);
            despawn_buffer.push(asteroid.entity);
            despawn_buffer.push(projectile);
            split::split(asteroid.position, asteroid.size, rng, spawn_queue);
            destroyed += 1;
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    destroyed
}
