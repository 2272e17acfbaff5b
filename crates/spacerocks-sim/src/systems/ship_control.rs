//! Ship control: turning, thrust, braking and firing.

use hecs::{Entity, World};

use spacerocks_core::commands::PlayerCommand;
use spacerocks_core::components::{Position, Ship, Velocity};
use spacerocks_core::constants::*;
use spacerocks_core::enums::Rotation;
use spacerocks_core::events::SpawnIntent;

/// Turn one maneuver step. Rotation keeps `direction` a unit vector.
pub fn rotate(ship: &mut Ship, rotation: Rotation) {
    ship.direction = ship.direction.rotate(SHIP_MANEUVERABILITY * rotation.sign());
}

/// Thrust along the facing direction. There is no speed cap.
pub fn accelerate(ship: &Ship, velocity: &mut Velocity) {
    velocity.0 += ship.direction * SHIP_ACCELERATION;
}

/// Exponential damping; approaches zero without reaching it.
pub fn slow_down(velocity: &mut Velocity) {
    velocity.0 *= SHIP_BRAKE_FACTOR;
}

/// Projectile leaving the ship: muzzle velocity plus the ship's own.
pub fn shoot(ship: &Ship, position: &Position, velocity: &Velocity) -> SpawnIntent {
    SpawnIntent::Projectile {
        position: position.0,
        velocity: ship.direction * BULLET_SPEED + velocity.0,
    }
}

/// Apply a ship command to the ship entity.
///
/// Returns a spawn intent when the command fires a shot. Round-control
/// commands and a missing ship are no-ops.
pub fn apply(world: &mut World, ship_entity: Entity, command: PlayerCommand) -> Option<SpawnIntent> {
    let (ship, pos, vel) = world
        .query_one_mut::<(&mut Ship, &Position, &mut Velocity)>(ship_entity)
        .ok()?;

    match command {
        PlayerCommand::Rotate { direction } => {
            rotate(ship, direction);
            None
        }
        PlayerCommand::Accelerate => {
            accelerate(ship, vel);
            None
        }
        PlayerCommand::SlowDown => {
            slow_down(vel);
            None
        }
        PlayerCommand::Fire => Some(shoot(ship, pos, vel)),
        PlayerCommand::Reset => None,
    }
}
