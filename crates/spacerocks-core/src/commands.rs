//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::Rotation;

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Ship control (ignored while the ship is destroyed) ---
    /// Turn the ship one maneuver step.
    Rotate { direction: Rotation },
    /// Thrust along the facing direction.
    Accelerate,
    /// Damp the ship's velocity.
    SlowDown,
    /// Fire one projectile.
    Fire,

    // --- Round control ---
    /// Start a fresh round: new ship, new asteroid field.
    Reset,
}
