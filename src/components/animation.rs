use bevy_ecs::prelude::Component;

use crate::resources::animationstore::AnimationResource;

/// Playback state of a frame-sequence animation.
///
/// `animation_key` selects an [`AnimationResource`] in the
/// [`AnimationStore`](crate::resources::animationstore::AnimationStore);
/// `cursor` is a fractional frame position in `[0, frame_count)`.
#[derive(Debug, Clone, Component, PartialEq)]
pub struct Animation {
    pub animation_key: String,
    pub cursor: f32,
}

impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            cursor: 0.0,
        }
    }

    /// Move the cursor forward by `delta` frames, wrapping to 0 once it
    /// reaches `frame_count`.
    pub fn advance_by(&mut self, delta: f32, frame_count: usize) {
        self.cursor += delta;
        if self.cursor >= frame_count as f32 {
            self.cursor = 0.0;
        }
    }

    /// Advance at the playback rate of `animation`.
    pub fn advance(&mut self, animation: &AnimationResource) {
        self.advance_by(animation.rate, animation.frame_count());
    }

    /// Integer frame index under the cursor, clamped to the sequence.
    pub fn frame_index(&self, frame_count: usize) -> usize {
        (self.cursor.max(0.0).floor() as usize).min(frame_count.saturating_sub(1))
    }

    /// Frame identifier under the cursor.
    pub fn current_frame<'a>(&self, animation: &'a AnimationResource) -> &'a str {
        animation.frame(self.frame_index(animation.frame_count()))
    }
}

// Animation Controller Component

/// Conditions over an entity's [`Signals`](super::signals::Signals) flags.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    HasFlag { key: String },
}

impl Condition {
    pub fn has_flag(key: impl Into<String>) -> Self {
        Condition::HasFlag { key: key.into() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimRule {
    pub when: Condition,
    pub set_key: String,
}

/// Picks which animation an entity plays. The first rule whose condition
/// holds wins; otherwise `fallback_key` is used.
#[derive(Debug, Clone, Component)]
pub struct AnimationController {
    pub rules: Vec<AnimRule>,
    pub fallback_key: String,
}

impl AnimationController {
    pub fn new(fallback_key: impl Into<String>) -> Self {
        Self {
            rules: Vec::new(),
            fallback_key: fallback_key.into(),
        }
    }
    pub fn with_rule(mut self, when: Condition, set_key: impl Into<String>) -> Self {
        self.rules.push(AnimRule {
            when,
            set_key: set_key.into(),
        });
        self
    }
}
