//! Level construction.
//!
//! [`level_reset_observer`] reacts to
//! [`LevelResetEvent`](crate::events::level::LevelResetEvent): it despawns
//! every grouped, non-persistent entity and spawns a fresh hero, the enemies
//! listed in [`LevelConfig`] and a row of ground tiles spanning the screen.
//! Nothing is mutated in place; each reset builds new entities.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, error, info};

use crate::components::animation::{Animation, AnimationController, Condition};
use crate::components::boxcollider::BoxCollider;
use crate::components::ground::Ground;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::patrol::{Enemy, Patrol};
use crate::components::persistent::Persistent;
use crate::components::physicsbody::PhysicsBody;
use crate::components::platformercontrols::{Hero, PlatformerControls};
use crate::components::signals::Signals;
use crate::components::sprite::Sprite;
use crate::events::level::LevelResetEvent;
use crate::resources::animationstore::{AnimationStore, ENEMY_WALK, HERO_IDLE, HERO_WALK};
use crate::resources::levelconfig::LevelConfig;
use crate::resources::levelrng::LevelRng;
use crate::resources::screensize::ScreenSize;
use crate::resources::spritestore::SpriteStore;
use crate::resources::worldsignals::{HERO, LEVEL_RESETS, WorldSignals};
use crate::systems::hero::MOVING;
use crate::systems::physics::ground_tile_rects;

const HERO_FRAME: &str = "hero/idle_0";
const ENEMY_FRAME: &str = "enemy/walk_0";

/// Sprite sizes a reset needs, resolved before anything is despawned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelSizes {
    pub hero: (f32, f32),
    pub enemy: (f32, f32),
    pub tile: (f32, f32),
}

/// Check that every asset a reset refers to is known.
pub fn resolve_level_sizes(
    level: &LevelConfig,
    sprites: &SpriteStore,
    animations: &AnimationStore,
) -> Result<LevelSizes, String> {
    for key in [HERO_IDLE, HERO_WALK, ENEMY_WALK] {
        let animation = animations
            .get(key)
            .ok_or_else(|| format!("animation '{}' is not defined", key))?;
        for frame in animation.frames() {
            if sprites.size(frame).is_none() {
                return Err(format!("no size known for sprite '{}' of '{}'", frame, key));
            }
        }
    }
    let size_of = |key: &str| {
        sprites
            .size(key)
            .ok_or_else(|| format!("no size known for sprite '{}'", key))
    };
    let sizes = LevelSizes {
        hero: size_of(HERO_FRAME)?,
        enemy: size_of(ENEMY_FRAME)?,
        tile: size_of(&level.ground_tile)?,
    };
    if sizes.tile.0 <= 0.0 {
        return Err(format!(
            "ground tile '{}' has width {}",
            level.ground_tile, sizes.tile.0
        ));
    }
    Ok(sizes)
}

#[allow(clippy::too_many_arguments)]
pub fn level_reset_observer(
    trigger: On<LevelResetEvent>,
    mut commands: Commands,
    stale: Query<(Entity, &Group), Without<Persistent>>,
    level: Res<LevelConfig>,
    screen: Res<ScreenSize>,
    sprites: Res<SpriteStore>,
    animations: Res<AnimationStore>,
    mut rng: ResMut<LevelRng>,
    mut signals: ResMut<WorldSignals>,
) {
    let cause = trigger.event().cause;
    let sizes = match resolve_level_sizes(&level, &sprites, &animations) {
        Ok(sizes) => sizes,
        Err(e) => {
            error!("level reset ({:?}) skipped: {}", cause, e);
            return;
        }
    };

    let mut despawned = 0;
    for (entity, group) in stale.iter() {
        debug!("level reset: despawn {:?} ({})", entity, group.name());
        commands.entity(entity).despawn();
        despawned += 1;
    }
    debug!("level reset: despawned {} entities", despawned);

    let (hx, hy) = level.hero_spawn;
    let (hw, hh) = sizes.hero;
    let hero = commands
        .spawn((
            Hero,
            Group::new("hero"),
            MapPosition::new(hx, hy),
            PhysicsBody::new(level.gravity),
            PlatformerControls::new(level.hero_walk_speed, level.hero_jump_speed),
            BoxCollider::centered(hw, hh),
            Sprite::centered(HERO_FRAME, hw, hh),
            Animation::new(HERO_IDLE),
            AnimationController::new(HERO_IDLE).with_rule(Condition::has_flag(MOVING), HERO_WALK),
            Signals::default(),
        ))
        .id();

    let (ew, eh) = sizes.enemy;
    for spawn in level.enemies.iter() {
        let direction = rng.direction();
        commands.spawn((
            Enemy,
            Group::new("enemies"),
            MapPosition::new(spawn.x, level.ground_y),
            PhysicsBody::new(level.gravity),
            Patrol::new(spawn.left_limit, spawn.right_limit, level.enemy_speed, direction),
            BoxCollider::centered(ew, eh),
            Sprite::centered(ENEMY_FRAME, ew, eh),
            Animation::new(ENEMY_WALK),
        ));
    }

    let (tw, th) = sizes.tile;
    let tiles = ground_tile_rects(screen.w as f32, tw, th, level.ground_y);
    for tile in tiles.iter() {
        let (cx, cy) = tile.center();
        commands.spawn((
            Ground,
            Group::new("ground"),
            MapPosition::new(cx, cy),
            BoxCollider::centered(tw, th),
            Sprite::centered(level.ground_tile.clone(), tw, th),
        ));
    }

    signals.set_entity(HERO, hero);
    let count = signals.increment(LEVEL_RESETS);
    info!(
        "level reset #{} ({:?}): hero at ({}, {}), {} enemies, {} ground tiles",
        count,
        cause,
        hx,
        hy,
        level.enemies.len(),
        tiles.len()
    );
}
