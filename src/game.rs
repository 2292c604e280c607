//! The game context: one [`World`] plus the per-tick [`Schedule`].
//!
//! A host drives the game through [`GameContext`] only:
//!
//! ```ignore
//! let mut game = GameContext::new(config, level, sprites, silent_audio_thread)?;
//! while !game.should_quit() {
//!     game.set_input(sample_keys());
//!     for (x, y) in presses() {
//!         game.on_press(x, y);
//!     }
//!     game.update();
//!     game.draw(&mut canvas);
//! }
//! game.shutdown();
//! ```

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use bevy_ecs::system::RunSystemOnce;
use crossbeam_channel::{Receiver, Sender};
use log::info;

use crate::canvas::Canvas;
use crate::components::group::Group;
use crate::components::menu::Menu;
use crate::components::persistent::Persistent;
use crate::events::audio::{AudioCmd, AudioMessage};
use crate::events::gamestate::observe_gamestate_change_event;
use crate::events::input::PointerPressEvent;
use crate::resources::animationstore::AnimationStore;
use crate::resources::audio::{MusicState, setup_audio, shutdown_audio};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::levelconfig::LevelConfig;
use crate::resources::levelrng::LevelRng;
use crate::resources::screensize::ScreenSize;
use crate::resources::spritestore::SpriteStore;
use crate::resources::worldsignals::{QUIT_GAME, WorldSignals};
use crate::systems::animation::{animation, animation_controller};
use crate::systems::audio::{
    forward_audio_cmds, log_audio_messages, poll_audio_messages, update_bevy_audio_cmds,
    update_bevy_audio_messages,
};
use crate::systems::collision::hero_enemy_collision;
use crate::systems::gamestate::{check_pending_state, state_is_playing};
use crate::systems::hero::{hero_jump_system, hero_walk_system};
use crate::systems::level::level_reset_observer;
use crate::systems::menu::{menu_press_observer, menu_selection_observer};
use crate::systems::patrol::patrol_system;
use crate::systems::physics::{gravity_system, ground_landing_system};
use crate::systems::render::render_pass;

/// Sound effects loaded at startup.
pub const SOUND_EFFECTS: [&str; 2] = ["jump", "hit"];

pub struct GameContext {
    world: World,
    update: Schedule,
}

impl GameContext {
    /// Build the world, register observers, spawn the menu and start the
    /// background music. The game starts in [`GameStates::Menu`].
    pub fn new<F>(
        config: GameConfig,
        level: LevelConfig,
        sprites: SpriteStore,
        audio_thread: F,
    ) -> Result<Self, String>
    where
        F: FnOnce(Receiver<AudioCmd>, Sender<AudioMessage>) + Send + 'static,
    {
        level.validate()?;
        let animations = AnimationStore::platformer()?;

        let mut world = World::new();
        world.insert_resource(ScreenSize {
            w: config.window_width as i32,
            h: config.window_height as i32,
        });
        world.insert_resource(MusicState::new(config.music.clone()));
        world.insert_resource(WorldSignals::default());
        world.insert_resource(InputState::default());
        world.insert_resource(GameState::new());
        world.insert_resource(NextGameState::new());
        world.insert_resource(LevelRng::new());
        world.insert_resource(level);
        world.insert_resource(sprites);
        world.insert_resource(animations);
        world.insert_resource(config);

        setup_audio(&mut world, audio_thread);

        world.spawn((Observer::new(observe_gamestate_change_event), Persistent));
        world.spawn((Observer::new(menu_press_observer), Persistent));
        world.spawn((Observer::new(menu_selection_observer), Persistent));
        world.spawn((Observer::new(level_reset_observer), Persistent));
        world.flush();

        world
            .run_system_once(setup)
            .map_err(|e| format!("setup failed: {:?}", e))?;

        let mut update = Schedule::default();
        update.add_systems(check_pending_state);
        update.add_systems(
            (
                hero_walk_system,
                patrol_system,
                gravity_system,
                ground_landing_system,
                hero_jump_system,
                animation_controller,
                animation,
                hero_enemy_collision,
            )
                .chain()
                .run_if(state_is_playing)
                .after(check_pending_state),
        );
        update.add_systems(
            (
                forward_audio_cmds,
                update_bevy_audio_cmds,
                poll_audio_messages,
                log_audio_messages,
                update_bevy_audio_messages,
            )
                .chain()
                .after(hero_enemy_collision),
        );
        update
            .initialize(&mut world)
            .map_err(|e| format!("Failed to initialize schedule: {:?}", e))?;

        Ok(Self { world, update })
    }

    /// Replace the level randomness with a seeded generator.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.world.insert_resource(LevelRng::with_seed(seed));
        self
    }

    /// Run one tick of the simulation.
    pub fn update(&mut self) {
        self.update.run(&mut self.world);
        self.world.clear_trackers();
    }

    /// Describe the current frame on `canvas`.
    pub fn draw(&mut self, canvas: &mut impl Canvas) {
        render_pass(&mut self.world, canvas);
    }

    /// Forward a primary pointer press. Handled immediately.
    pub fn on_press(&mut self, x: f32, y: f32) {
        self.world.trigger(PointerPressEvent { x, y });
        self.world.flush();
    }

    /// Held input for the next tick.
    pub fn set_input(&mut self, input: InputState) {
        *self.world.resource_mut::<InputState>() = input;
    }

    pub fn state(&self) -> GameStates {
        *self.world.resource::<GameState>().get()
    }

    /// True once the Exit button was pressed.
    pub fn should_quit(&self) -> bool {
        self.world.resource::<WorldSignals>().has_flag(QUIT_GAME)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Stop the audio thread and wait for it.
    pub fn shutdown(mut self) {
        shutdown_audio(&mut self.world);
    }
}

/// Spawn the menu and queue the startup audio: load and loop the
/// background track, load the sound effects.
pub fn setup(
    mut commands: Commands,
    config: Res<GameConfig>,
    screen: Res<ScreenSize>,
    music: Res<MusicState>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    commands.spawn((Menu::main_menu(screen.w as f32), Group::new("menu"), Persistent));

    let music_path = config
        .assets_path
        .join("music")
        .join(format!("{}.ogg", music.track));
    audio_cmd_writer.write(AudioCmd::LoadMusic {
        id: music.track.clone(),
        path: music_path.to_string_lossy().into_owned(),
    });
    audio_cmd_writer.write(AudioCmd::VolumeMusic {
        id: music.track.clone(),
        vol: config.music_volume,
    });
    audio_cmd_writer.write(AudioCmd::PlayMusic {
        id: music.track.clone(),
        looped: true,
    });
    for fx in SOUND_EFFECTS {
        let fx_path = config.assets_path.join("sounds").join(format!("{}.wav", fx));
        audio_cmd_writer.write(AudioCmd::LoadFx {
            id: fx.to_string(),
            path: fx_path.to_string_lossy().into_owned(),
        });
    }
    info!(
        "setup done: menu spawned, music '{}' at volume {}",
        music.track, config.music_volume
    );
}
