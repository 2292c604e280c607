//! Screen size resource.
//!
//! Stores the visible area in pixels. The level reset reads the width to
//! know how many ground tiles cover the screen; the menu uses it to centre
//! the title.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
