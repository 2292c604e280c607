//! Per-tick input resource.
//!
//! The host samples its keyboard (or whatever device it has) before each
//! tick and stores the result in [`InputState`]. Gameplay systems only ever
//! read this resource, so the core never depends on a windowing backend.
use bevy_ecs::prelude::*;

/// Held state of the three gameplay actions.
///
/// All fields mean "held during this tick", not "pressed this tick": a jump
/// key kept down re-jumps every time the hero is grounded.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    /// Move left is held.
    pub left: bool,
    /// Move right is held.
    pub right: bool,
    /// Jump is held.
    pub jump: bool,
}

impl InputState {
    pub fn new(left: bool, right: bool, jump: bool) -> Self {
        Self { left, right, jump }
    }

    /// True when either horizontal key is held, even if they cancel.
    pub fn any_horizontal(&self) -> bool {
        self.left || self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_nothing_held() {
        let input = InputState::default();
        assert!(!input.left);
        assert!(!input.right);
        assert!(!input.jump);
        assert!(!input.any_horizontal());
    }

    #[test]
    fn test_both_keys_still_count_as_moving() {
        assert!(InputState::new(true, true, false).any_horizontal());
        assert!(InputState::new(true, false, false).any_horizontal());
        assert!(InputState::new(false, true, false).any_horizontal());
        assert!(!InputState::new(false, false, true).any_horizontal());
    }
}
