//! Animation systems.
//!
//! - [`animation`] advances every animation cursor by its per-tick rate and
//!   writes the current frame into the entity's [`Sprite`]. When the frame
//!   changes size the sprite and its [`BoxCollider`] follow it.
//! - [`animation_controller`] selects which animation should be active based
//!   on a set of rule conditions evaluated against entity [`Signals`].
//!
//! # Animation Flow
//!
//! 1. Animation data is defined in [`AnimationStore`]
//! 2. Entities have an [`Animation`] component pointing to a key
//! 3. The `animation_controller` system evaluates rules against signals to switch animations
//! 4. The `animation` system advances the cursor and updates [`Sprite::tex_key`],
//!    resizing the sprite and collider from the [`SpriteStore`]
//!
//! Switching animation keeps the cursor. If the new sequence is shorter, the
//! next advance wraps it back to zero.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::animation::{Animation, AnimationController, Condition};
use crate::components::boxcollider::BoxCollider;
use crate::components::signals::Signals;
use crate::components::sprite::Sprite;
use crate::resources::animationstore::AnimationStore;
use crate::resources::spritestore::SpriteStore;

/// Advance animation playback and update the sprite frame.
///
/// The box of the entity is the box of its current image: on a frame change
/// the sprite takes the new frame's size around the same pivot, and the
/// collider is rebuilt to match.
///
/// Entities whose animation key is not in the store are left untouched; the
/// level reset refuses to spawn them in the first place. A frame with no known
/// size keeps the previous size.
pub fn animation(
    mut query: Query<(&mut Animation, &mut Sprite, Option<&mut BoxCollider>)>,
    animation_store: Res<AnimationStore>,
    sprites: Res<SpriteStore>,
) {
    for (mut anim_comp, mut sprite, collider) in query.iter_mut() {
        let Some(animation) = animation_store.get(&anim_comp.animation_key) else {
            continue;
        };
        anim_comp.advance(animation);
        let frame = anim_comp.current_frame(animation);
        if sprite.tex_key == frame {
            continue;
        }
        sprite.tex_key = frame.to_string();

        let Some((w, h)) = sprites.size(frame) else {
            continue;
        };
        if (w, h) != (sprite.width, sprite.height) {
            sprite.resize(w, h);
            if let Some(mut collider) = collider {
                *collider = BoxCollider::new(w, h).with_offset(-sprite.origin.0, -sprite.origin.1);
            }
        }
    }
}

/// Pick the active animation of every controlled entity.
pub fn animation_controller(
    mut query: Query<(Entity, &AnimationController, &mut Animation, &Signals)>,
) {
    for (entity, controller, mut anim_comp, signals) in query.iter_mut() {
        let next_key = controller
            .rules
            .iter()
            .find(|rule| evaluate_condition(signals, &rule.when))
            .map(|rule| rule.set_key.clone())
            .unwrap_or_else(|| controller.fallback_key.clone());

        if anim_comp.animation_key != next_key {
            debug!(
                "{:?}: animation {} -> {}",
                entity, anim_comp.animation_key, next_key
            );
            anim_comp.animation_key = next_key;
        }
    }
}

/// Evaluate a controller condition against an entity's current signals.
fn evaluate_condition(signals: &Signals, condition: &Condition) -> bool {
    match condition {
        Condition::HasFlag { key } => signals.has_flag(key),
    }
}
