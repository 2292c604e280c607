//! Keyboard-driven platformer movement.
//!
//! Systems in [`crate::systems::hero`] read the held
//! [`InputState`](crate::resources::input::InputState) and apply these values
//! to the entity every tick.

use bevy_ecs::prelude::Component;

/// Walk/jump tuning for an input-controlled entity.
///
/// `walk_speed` is the horizontal displacement per tick while a direction is
/// held; `jump_speed` is the upward velocity given on a jump.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct PlatformerControls {
    pub walk_speed: f32,
    pub jump_speed: f32,
}

impl PlatformerControls {
    pub fn new(walk_speed: f32, jump_speed: f32) -> Self {
        Self {
            walk_speed,
            jump_speed,
        }
    }
}

/// Marker for the player-controlled entity.
#[derive(Component, Clone, Copy, Debug)]
pub struct Hero;
