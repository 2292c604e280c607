//! Animation resource registry.
//!
//! This module provides a minimal store for animation definitions that can be
//! reused by multiple entities. Systems look up an animation by a string key
//! and drive playback based on the immutable parameters stored here.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

pub const HERO_IDLE: &str = "hero_idle";
pub const HERO_WALK: &str = "hero_walk";
pub const ENEMY_WALK: &str = "enemy_walk";

/// Immutable data describing a frame-sequence animation.
///
/// Frames are sprite keys resolved by the host (e.g. `"hero/walk_0"`). The
/// sequence is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationResource {
    frames: SmallVec<[String; 4]>,
    /// Cursor increment per tick, in frames.
    pub rate: f32,
}

impl AnimationResource {
    /// Build an animation from its frame keys and per-tick rate.
    ///
    /// Fails if `frames` is empty or `rate` is negative or not finite.
    pub fn new<I, S>(frames: I, rate: f32) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let frames: SmallVec<[String; 4]> = frames.into_iter().map(Into::into).collect();
        if frames.is_empty() {
            return Err("animation needs at least one frame".to_string());
        }
        if !rate.is_finite() || rate < 0.0 {
            return Err(format!("invalid animation rate {}", rate));
        }
        Ok(Self { frames, rate })
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Frame key at `index`, clamped to the last frame.
    pub fn frame(&self, index: usize) -> &str {
        let last = self.frames.len() - 1;
        &self.frames[index.min(last)]
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }
}

/// Central registry of reusable animation definitions keyed by string IDs.
#[derive(Resource, Debug, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationResource>,
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define (or replace) an animation.
    pub fn insert<I, S>(&mut self, key: impl Into<String>, frames: I, rate: f32) -> Result<(), String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = key.into();
        let animation =
            AnimationResource::new(frames, rate).map_err(|e| format!("animation '{}': {}", key, e))?;
        self.animations.insert(key, animation);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&AnimationResource> {
        self.animations.get(key)
    }

    /// The animations used by the hero and the enemies.
    pub fn platformer() -> Result<Self, String> {
        let mut store = Self::new();
        store.insert(HERO_IDLE, ["hero/idle_0", "hero/idle_1"], 0.06)?;
        store.insert(HERO_WALK, ["hero/walk_0", "hero/walk_1"], 0.2)?;
        store.insert(ENEMY_WALK, ["enemy/walk_0", "enemy/walk_1"], 0.15)?;
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_rejected() {
        let frames: [&str; 0] = [];
        assert!(AnimationResource::new(frames, 0.1).is_err());
    }

    #[test]
    fn test_negative_rate_rejected() {
        assert!(AnimationResource::new(["a"], -0.1).is_err());
        assert!(AnimationResource::new(["a"], f32::NAN).is_err());
    }

    #[test]
    fn test_frame_clamped() {
        let anim = AnimationResource::new(["a", "b"], 0.1).unwrap();
        assert_eq!(anim.frame(0), "a");
        assert_eq!(anim.frame(1), "b");
        assert_eq!(anim.frame(7), "b");
    }

    #[test]
    fn test_insert_reports_key_on_error() {
        let mut store = AnimationStore::new();
        let frames: Vec<String> = Vec::new();
        let err = store.insert("broken", frames, 0.1).unwrap_err();
        assert!(err.contains("broken"));
        assert!(store.get("broken").is_none());
    }

    #[test]
    fn test_platformer_animations() {
        let store = AnimationStore::platformer().unwrap();
        let idle = store.get("hero_idle").unwrap();
        assert_eq!(idle.frames(), ["hero/idle_0", "hero/idle_1"]);
        assert!((idle.rate - 0.06).abs() < 1e-6);
        assert!((store.get("hero_walk").unwrap().rate - 0.2).abs() < 1e-6);
        assert!((store.get("enemy_walk").unwrap().rate - 0.15).abs() < 1e-6);
    }
}
