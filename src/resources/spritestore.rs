//! Sprite size registry.
//!
//! The host decodes images; the core only needs their pixel sizes to build
//! bounding boxes and lay out the ground. The host fills a [`SpriteStore`]
//! after loading its textures. Headless runs use [`SpriteStore::placeholder`].

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

/// Every sprite key the game draws.
pub const SPRITE_KEYS: [&str; 7] = [
    "hero/idle_0",
    "hero/idle_1",
    "hero/walk_0",
    "hero/walk_1",
    "enemy/walk_0",
    "enemy/walk_1",
    "platform/ground",
];

/// Pixel sizes of sprites, keyed by frame identifier.
#[derive(Resource, Debug, Clone, Default)]
pub struct SpriteStore {
    sizes: FxHashMap<String, (f32, f32)>,
}

impl SpriteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, width: f32, height: f32) {
        self.sizes.insert(key.into(), (width, height));
    }

    pub fn with_size(mut self, key: impl Into<String>, width: f32, height: f32) -> Self {
        self.insert(key, width, height);
        self
    }

    /// `(width, height)` of a sprite.
    pub fn size(&self, key: &str) -> Option<(f32, f32)> {
        self.sizes.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Sizes for running without image files: 32x32 hero, 32x24 enemies and
    /// 40x40 ground tiles.
    pub fn placeholder() -> Self {
        let mut store = Self::new();
        for key in SPRITE_KEYS {
            let (w, h) = if key.starts_with("hero/") {
                (32.0, 32.0)
            } else if key.starts_with("enemy/") {
                (32.0, 24.0)
            } else {
                (40.0, 40.0)
            };
            store.insert(key, w, h);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_covers_every_key() {
        let store = SpriteStore::placeholder();
        assert_eq!(store.len(), SPRITE_KEYS.len());
        for key in SPRITE_KEYS {
            assert!(store.size(key).is_some(), "missing {key}");
        }
        assert_eq!(store.size("platform/ground"), Some((40.0, 40.0)));
    }

    #[test]
    fn test_with_size_overrides() {
        let store = SpriteStore::placeholder().with_size("platform/ground", 64.0, 16.0);
        assert_eq!(store.size("platform/ground"), Some((64.0, 16.0)));
        assert_eq!(store.size("unknown"), None);
    }
}
