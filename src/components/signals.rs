// Signals for communication between systems acting on the same entity

use bevy_ecs::prelude::Component;
use rustc_hash::FxHashSet;

/// Per-entity flags written by movement systems and read by the animation
/// controller (e.g. the hero's `"moving"` flag).
#[derive(Debug, Clone, Default, Component)]
pub struct Signals {
    pub flags: FxHashSet<String>,
}

impl Signals {
    pub fn with_flag(mut self, key: impl Into<String>) -> Self {
        self.set_flag(key);
        self
    }
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }
    pub fn clear_flag(&mut self, key: &str) {
        self.flags.remove(key);
    }
    /// Set or clear `key` depending on `on`.
    pub fn put_flag(&mut self, key: &str, on: bool) {
        if on {
            self.flags.insert(key.to_string());
        } else {
            self.flags.remove(key);
        }
    }
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
}
