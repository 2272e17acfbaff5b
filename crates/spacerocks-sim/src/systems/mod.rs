//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions that take `&mut World` (or `&World` for read-only).
//! They do not own state — all state lives in components or the engine.

pub mod cleanup;
pub mod collision;
pub mod movement;
pub mod ship_control;
pub mod snapshot;
pub mod spawner;
pub mod split;
