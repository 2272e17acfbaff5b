//! Simulation engine for SPACE ROCKS.
//!
//! Owns the hecs ECS world, advances it one tick per frame,
//! and produces GameStateSnapshots for the renderer.

pub mod config;
pub mod engine;
pub mod error;
pub mod random;
pub mod systems;
pub mod world_setup;

pub use config::SimConfig;
pub use engine::SimulationEngine;
pub use error::SimError;
pub use random::{RandomSource, SeededRandom};
pub use spacerocks_core as core;
