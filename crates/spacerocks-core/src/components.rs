//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::AsteroidSize;
use crate::types::Vector2D;

/// Center of the entity in screen space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vector2D);

/// Displacement per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vector2D);

/// Circular collision body. Fixed at spawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider {
    pub radius: f64,
}

/// How an entity behaves at the playfield edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Motion {
    /// Reappears on the opposite edge.
    Wrap,
    /// Keeps going; the cleanup system removes it once off-field.
    Free,
}

/// Insertion sequence number. Collision passes iterate in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpawnOrder(pub u64);

/// The player's ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ship {
    /// Unit facing vector; thrust and shots go this way.
    pub direction: Vector2D,
    /// Up until the first asteroid impact.
    pub shield: bool,
    /// Collision radius used instead of the body radius while shielded.
    pub shield_radius: f64,
}

/// A rock. Size never changes after spawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Asteroid {
    pub size: AsteroidSize,
}

/// Marks an entity as a projectile fired by the ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;
