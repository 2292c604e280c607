//! Hero versus enemy contact.
//!
//! The game has a single collision rule: if the hero's box overlaps any
//! enemy's box at the end of the tick, the "hit" sound plays and the level
//! is rebuilt. Only the first contact of a tick counts.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::patrol::Enemy;
use crate::components::platformercontrols::Hero;
use crate::events::audio::AudioCmd;
use crate::events::level::{LevelResetEvent, ResetCause};

pub fn hero_enemy_collision(
    mut commands: Commands,
    heroes: Query<(&MapPosition, &BoxCollider), With<Hero>>,
    enemies: Query<(Entity, &MapPosition, &BoxCollider), (With<Enemy>, Without<Hero>)>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    for (hero_pos, hero_box) in heroes.iter() {
        for (enemy, enemy_pos, enemy_box) in enemies.iter() {
            if hero_box.overlaps((hero_pos.x, hero_pos.y), enemy_box, (enemy_pos.x, enemy_pos.y)) {
                info!("hero hit by enemy {:?} at ({}, {})", enemy, enemy_pos.x, enemy_pos.y);
                audio_cmd_writer.write(AudioCmd::PlayFx {
                    id: "hit".to_string(),
                });
                commands.trigger(LevelResetEvent {
                    cause: ResetCause::HeroHit,
                });
                return;
            }
        }
    }
}
