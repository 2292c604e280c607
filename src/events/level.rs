//! Level reset request.
//!
//! Triggering [`LevelResetEvent`] makes
//! [`level_reset_observer`](crate::systems::level::level_reset_observer)
//! despawn every gameplay entity and build the level again from
//! [`LevelConfig`](crate::resources::levelconfig::LevelConfig).

use bevy_ecs::prelude::*;

/// Why the level is being rebuilt. Only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetCause {
    /// The player pressed Start in the menu.
    Start,
    /// The hero touched an enemy.
    HeroHit,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct LevelResetEvent {
    pub cause: ResetCause,
}
