//! Game systems.
//!
//! This module groups all ECS systems and observers that advance the
//! simulation, react to menu input and describe what to draw.
//!
//! Submodules overview
//! - [`animation`] – advance animation cursors and select sequences via rules
//! - [`audio`] – bridge with the audio thread (forward/poll message queues)
//! - [`collision`] – hero versus enemy contact and the resulting reset
//! - [`gamestate`] – check for pending state transitions and trigger events
//! - [`hero`] – apply held input to the hero (walk and jump)
//! - [`level`] – despawn and rebuild the level on reset
//! - [`menu`] – button hit-testing and the actions behind them
//! - [`patrol`] – move enemies between their bounds
//! - [`physics`] – gravity and landing on ground tiles
//! - [`render`] – draw the menu or the level onto a canvas
pub mod animation;
pub mod audio;
pub mod collision;
pub mod gamestate;
pub mod hero;
pub mod level;
pub mod menu;
pub mod patrol;
pub mod physics;
pub mod render;
