//! Menu systems.
//!
//! This module provides the observers behind the clickable main menu:
//! - [`menu_press_observer`] – hit-tests pointer presses against the buttons
//! - [`menu_selection_observer`] – performs the action of the chosen button
//!
//! Presses are ignored outside [`GameStates::Menu`]. Buttons are tested in
//! list order and only the first hit fires.

use crate::components::menu::{Menu, MenuAction};
use crate::events::audio::AudioCmd;
use crate::events::gamestate::GameStateChangedEvent;
use crate::events::input::PointerPressEvent;
use crate::events::menu::MenuSelectionEvent;
use crate::resources::audio::MusicState;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::worldsignals::{QUIT_GAME, WorldSignals};
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

pub fn menu_press_observer(
    trigger: On<PointerPressEvent>,
    mut commands: Commands,
    state: Res<GameState>,
    menus: Query<&Menu>,
) {
    if *state.get() != GameStates::Menu {
        return;
    }
    let press = trigger.event();
    for menu in menus.iter() {
        if let Some(button) = menu.button_at(press.x, press.y) {
            debug!("menu press ({}, {}) hit '{}'", press.x, press.y, button.label);
            commands.trigger(MenuSelectionEvent {
                action: button.action,
            });
            return;
        }
    }
}

/// Perform the action of a selected menu button.
///
/// - `StartGame` requests [`GameStates::Playing`]; entering it resets the level.
/// - `ToggleMusic` flips [`MusicState::on`] and pauses or resumes the track.
/// - `Exit` raises the `quit_game` world signal for the host.
pub fn menu_selection_observer(
    trigger: On<MenuSelectionEvent>,
    mut commands: Commands,
    mut next_state: ResMut<NextGameState>,
    mut music: ResMut<MusicState>,
    mut world_signals: ResMut<WorldSignals>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    match trigger.event().action {
        MenuAction::StartGame => {
            info!("Start Game selected");
            next_state.set(GameStates::Playing);
            commands.trigger(GameStateChangedEvent {});
        }
        MenuAction::ToggleMusic => {
            let cmd = music.toggle();
            info!("music {}", if music.on { "on" } else { "off" });
            audio_cmd_writer.write(cmd);
        }
        MenuAction::Exit => {
            info!("Exit selected");
            world_signals.set_flag(QUIT_GAME);
        }
    }
}
