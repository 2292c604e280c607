//! Pointer input events.
//!
//! The host forwards every primary pointer press as a [`PointerPressEvent`]
//! in screen coordinates. Held keys are not events; they live in the
//! [`InputState`](crate::resources::input::InputState) resource.

use bevy_ecs::prelude::*;

/// A primary button press at `(x, y)` in screen pixels.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PointerPressEvent {
    pub x: f32,
    pub y: f32,
}
