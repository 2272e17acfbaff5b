//! Game state snapshot — the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{GamePhase, ObjectKind};
use crate::events::AudioEvent;
use crate::types::{Bounds, SimTime, Vector2D};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Banner text: empty, "Game Over" or "You Win!".
    pub message: String,
    /// True once the round has ended.
    pub terminal: bool,
    pub bounds: Bounds,
    /// Draw list: asteroids, then projectiles, then the ship last.
    pub objects: Vec<ObjectView>,
    pub audio_events: Vec<AudioEvent>,
}

impl GameStateSnapshot {
    /// The ship's view, if the ship is alive.
    pub fn ship(&self) -> Option<&ObjectView> {
        self.objects
            .iter()
            .rev()
            .find(|o| o.kind == ObjectKind::Ship)
    }

    pub fn asteroid_count(&self) -> usize {
        self.objects
            .iter()
            .filter(|o| matches!(o.kind, ObjectKind::Asteroid(_)))
            .count()
    }

    pub fn projectile_count(&self) -> usize {
        self.objects
            .iter()
            .filter(|o| o.kind == ObjectKind::Projectile)
            .count()
    }
}

/// One drawable entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectView {
    pub kind: ObjectKind,
    pub position: Vector2D,
    pub velocity: Vector2D,
    /// Collision/body radius.
    pub radius: f64,
    /// Sprite scale (asteroid tier scale, 1.0 for everything else).
    pub scale: f64,
    /// Sprite rotation in degrees relative to "up". Ship only.
    pub angle: Option<f64>,
    /// Whether to draw the shield overlay. Ship only.
    pub shield: bool,
}
