//! Groundhop: a small 2D platformer on top of `bevy_ecs`.
//!
//! This module exposes the game's ECS components, resources, systems, and
//! events, plus the [`game::GameContext`] that hosts drive, for use in
//! integration tests and by the binary.

pub mod canvas;
pub mod components;
pub mod events;
pub mod game;
pub mod geometry;
#[cfg(feature = "raylib")]
pub mod host;
pub mod resources;
pub mod systems;
