//! SPACE ROCKS headless runner.
//!
//! Drives the simulation on a fixed-rate thread, feeds it input, and hands
//! each snapshot's audio cues and frame to pluggable sinks.

pub mod config;
pub mod control;
pub mod game_loop;
pub mod input;
pub mod services;
pub mod state;

pub use spacerocks_core as core;
