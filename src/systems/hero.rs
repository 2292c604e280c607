//! Player control systems.
//!
//! - [`hero_walk_system`] applies held left/right input to the hero's x and
//!   raises the `"moving"` signal used to pick the walk animation.
//! - [`hero_jump_system`] launches a grounded hero while jump is held. It must
//!   run after ground landing so `grounded` reflects this tick.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::mapposition::MapPosition;
use crate::components::physicsbody::PhysicsBody;
use crate::components::platformercontrols::{Hero, PlatformerControls};
use crate::components::signals::Signals;
use crate::events::audio::AudioCmd;
use crate::resources::input::InputState;

/// Signal flag set on the hero while a horizontal key is held.
pub const MOVING: &str = "moving";

pub fn hero_walk_system(
    input: Res<InputState>,
    mut query: Query<(&mut MapPosition, &PlatformerControls, &mut Signals), With<Hero>>,
) {
    for (mut pos, controls, mut signals) in query.iter_mut() {
        if input.left {
            pos.x -= controls.walk_speed;
        }
        if input.right {
            pos.x += controls.walk_speed;
        }
        signals.put_flag(MOVING, input.any_horizontal());
    }
}

pub fn hero_jump_system(
    input: Res<InputState>,
    mut query: Query<(&mut PhysicsBody, &PlatformerControls), With<Hero>>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    if !input.jump {
        return;
    }
    for (mut body, controls) in query.iter_mut() {
        if body.jump(controls.jump_speed) {
            debug!("hero jumps (vy={})", body.velocity_y);
            audio_cmd_writer.write(AudioCmd::PlayFx {
                id: "jump".to_string(),
            });
        }
    }
}
