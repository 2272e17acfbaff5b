//! Core types and definitions for the SPACE ROCKS simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! vectors, components, commands, state snapshots, events, and constants.
//! It has no dependency on the ECS runtime or on any rendering/audio backend.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
