//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use spacerocks_core::components::*;
use spacerocks_core::enums::{GamePhase, ObjectKind};
use spacerocks_core::events::AudioEvent;
use spacerocks_core::state::{GameStateSnapshot, ObjectView};
use spacerocks_core::types::{Bounds, SimTime, UP};

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    bounds: &Bounds,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        message: phase.message().to_string(),
        terminal: phase.is_terminal(),
        bounds: *bounds,
        objects: build_objects(world),
        audio_events,
    }
}

/// Draw list: asteroids, then projectiles, then the ship on top.
/// Each group is in spawn order.
pub fn build_objects(world: &World) -> Vec<ObjectView> {
    let mut objects = build_asteroids(world);
    objects.extend(build_projectiles(world));
    objects.extend(build_ship(world));
    objects
}

fn build_asteroids(world: &World) -> Vec<ObjectView> {
    let mut asteroids: Vec<(SpawnOrder, ObjectView)> = world
        .query::<(&Asteroid, &Position, &Velocity, &Collider, &SpawnOrder)>()
        .iter()
        .map(|(_, (asteroid, pos, vel, collider, order))| {
            (
                *order,
                ObjectView {
                    kind: ObjectKind::Asteroid(asteroid.size),
                    position: pos.0,
                    velocity: vel.0,
                    radius: collider.radius,
                    scale: asteroid.size.scale(),
                    angle: None,
                    shield: false,
                },
            )
        })
        .collect();

    asteroids.sort_by_key(|(order, _)| *order);
    asteroids.into_iter().map(|(_, view)| view).collect()
}

fn build_projectiles(world: &World) -> Vec<ObjectView> {
    let mut projectiles: Vec<(SpawnOrder, ObjectView)> = world
        .query::<(&Projectile, &Position, &Velocity, &Collider, &SpawnOrder)>()
        .iter()
        .map(|(_, (_, pos, vel, collider, order))| {
            (
                *order,
                ObjectView {
                    kind: ObjectKind::Projectile,
                    position: pos.0,
                    velocity: vel.0,
                    radius: collider.radius,
                    scale: 1.0,
                    angle: None,
                    shield: false,
                },
            )
        })
        .collect();

    projectiles.sort_by_key(|(order, _)| *order);
    projectiles.into_iter().map(|(_, view)| view).collect()
}

fn build_ship(world: &World) -> Option<ObjectView> {
    world
        .query::<(&Ship, &Position, &Velocity, &Collider)>()
        .iter()
        .next()
        .map(|(_, (ship, pos, vel, collider))| ObjectView {
            kind: ObjectKind::Ship,
            position: pos.0,
            velocity: vel.0,
            radius: collider.radius,
            scale: 1.0,
            angle: Some(ship.direction.angle_to(&UP)),
            shield: ship.shield,
        })
}
