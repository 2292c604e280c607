//! Game state transition event and observer.
//!
//! Systems can request a change to the high-level [`GameStates`] by updating
//! [`NextGameState`]. Emitting a [`GameStateChangedEvent`] then triggers the
//! observer in this module, which applies the transition to [`GameState`]
//! and runs the enter/exit hooks of the states involved.
//!
//! This decouples the intent to change state from the mechanics of running
//! setup/teardown and avoids borrowing conflicts.
use crate::events::level::{LevelResetEvent, ResetCause};
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending game state transition should be
/// applied.
///
/// Emitting this event causes [`observe_gamestate_change_event`] to read
/// [`NextGameState`]. If it contains [`Pending`], the observer updates the
/// authoritative [`GameState`], runs exit/enter hooks, and clears the pending
/// value; if it is [`Unchanged`], nothing happens.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// Contract
/// - Reads the intention from [`NextGameState`].
/// - If pending, copies the new value into [`GameState`], then:
///   - calls state-specific exit hooks for the previous state
///   - calls state-specific enter hooks for the new state
///   - resets [`NextGameState`] to [`Unchanged`]
/// - If any required resource is missing, logs a diagnostic and returns.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
) {
    debug!("GameStateChangedEvent triggered");

    if let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    {
        match *next_game_state.get() {
            Pending(new_state) => {
                let old_state = *game_state.get();
                info!("Transitioning from {:?} to {:?}", old_state, new_state);
                game_state.set(new_state);
                next_game_state.reset();
                on_state_exit(&old_state);
                on_state_enter(&new_state, &mut commands);
            }
            Unchanged => {
                debug!("No state change pending.");
            }
        }
    } else {
        warn!(
            "One or more resources missing in observe_gamestate_change_event. next_state: {:?}, game_state: {:?}",
            next_game_state.is_some(),
            game_state.is_some()
        );
    }
}

fn on_state_enter(state: &GameStates, commands: &mut Commands) {
    match state {
        GameStates::Menu => debug!("Entered Menu state"),
        GameStates::Playing => {
            commands.trigger(LevelResetEvent {
                cause: ResetCause::Start,
            });
        }
    }
}

fn on_state_exit(state: &GameStates) {
    match state {
        GameStates::Menu => debug!("Exited Menu state"),
        GameStates::Playing => debug!("Exited Playing state"),
    }
}
