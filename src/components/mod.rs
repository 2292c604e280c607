//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world. The hero and the enemies are compositions of these
//! components rather than types of their own.
//!
//! Submodules overview:
//! - [`animation`] – frame-sequence playback state and a flag-driven controller
//! - [`boxcollider`] – axis-aligned rectangular collider
//! - [`ground`] – marker for static ground tiles
//! - [`group`] – tag naming the family of an entity
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`menu`] – clickable menu buttons and their actions
//! - [`patrol`] – back-and-forth movement between two bounds and the enemy marker
//! - [`persistent`] – marker for entities that survive level resets
//! - [`physicsbody`] – vertical velocity, gravity and grounded flag
//! - [`platformercontrols`] – walk/jump tuning and the hero marker
//! - [`signals`] – per-entity flags for cross-system communication
//! - [`sprite`] – 2D sprite rendering component

pub mod animation;
pub mod boxcollider;
pub mod ground;
pub mod group;
pub mod mapposition;
pub mod menu;
pub mod patrol;
pub mod persistent;
pub mod physicsbody;
pub mod platformercontrols;
pub mod signals;
pub mod sprite;
