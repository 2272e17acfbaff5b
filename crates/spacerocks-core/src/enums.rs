//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::{MESSAGE_DEFEAT, MESSAGE_VICTORY};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ship present, asteroids remaining.
    #[default]
    Active,
    /// Every asteroid destroyed while the ship survived.
    Victory,
    /// Ship destroyed.
    Defeat,
}

impl GamePhase {
    /// Whether the round has ended (only a reset leaves this state).
    pub fn is_terminal(self) -> bool {
        !matches!(self, GamePhase::Active)
    }

    /// Banner text shown by the renderer. Empty while the round is running.
    pub fn message(self) -> &'static str {
        match self {
            GamePhase::Active => "",
            GamePhase::Victory => MESSAGE_VICTORY,
            GamePhase::Defeat => MESSAGE_DEFEAT,
        }
    }
}

/// Asteroid size tier. Splitting moves one tier down; `Small` does not split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AsteroidSize {
    Small,
    Medium,
    #[default]
    Large,
}

impl AsteroidSize {
    /// Numeric tier: 1, 2 or 3.
    pub fn tier(self) -> u8 {
        match self {
            AsteroidSize::Small => 1,
            AsteroidSize::Medium => 2,
            AsteroidSize::Large => 3,
        }
    }

    /// Inverse of [`tier`](Self::tier).
    pub fn from_tier(tier: u8) -> Option<Self> {
        match tier {
            1 => Some(AsteroidSize::Small),
            2 => Some(AsteroidSize::Medium),
            3 => Some(AsteroidSize::Large),
            _ => None,
        }
    }

    /// Visual scale relative to the full-size sprite.
    pub fn scale(self) -> f64 {
        match self {
            AsteroidSize::Small => 0.25,
            AsteroidSize::Medium => 0.5,
            AsteroidSize::Large => 1.0,
        }
    }

    /// Tier produced by splitting, or `None` at the floor.
    pub fn smaller(self) -> Option<Self> {
        match self {
            AsteroidSize::Small => None,
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Large => Some(AsteroidSize::Medium),
        }
    }
}

/// Rotation input direction (screen space).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    /// +1 for clockwise, -1 otherwise.
    pub fn sign(self) -> f64 {
        match self {
            Rotation::Clockwise => 1.0,
            Rotation::CounterClockwise => -1.0,
        }
    }
}

/// Sound cues the simulation can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundId {
    /// Laser shot, played on every fire.
    Fire,
    /// Background theme, started on (re)start and stopped on defeat.
    ThemeLoop,
}

/// Kind of a renderable object in the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    Asteroid(AsteroidSize),
    Projectile,
    Ship,
}
