//! Events emitted by the simulation: sound cues for the frontend and
//! spawn intents consumed by the engine itself.

use serde::{Deserialize, Serialize};

use crate::enums::{AsteroidSize, SoundId};
use crate::types::Vector2D;

/// Audio events for the frontend sound system. Fire-and-forget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "sound")]
pub enum AudioEvent {
    Play(SoundId),
    Stop(SoundId),
}

/// Request to create an entity, applied by the engine after the pass
/// that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SpawnIntent {
    Asteroid {
        position: Vector2D,
        velocity: Vector2D,
        size: AsteroidSize,
    },
    Projectile {
        position: Vector2D,
        velocity: Vector2D,
    },
}
