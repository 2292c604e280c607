//! Event types and observers used by the game.
//!
//! This module groups the domain events exchanged across systems and the
//! corresponding observers that react to them. Events provide a decoupled
//! way for systems to communicate without tight coupling or direct
//! dependencies.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread
//! - [`gamestate`] – state transition notifications for the high-level game flow
//! - [`input`] – pointer presses forwarded by the host
//! - [`level`] – requests to rebuild the level
//! - [`menu`] – a menu button was chosen
pub mod audio;
pub mod gamestate;
pub mod input;
pub mod level;
pub mod menu;
