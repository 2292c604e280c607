//! ECS resources that bridge the main thread with the background audio thread.
//!
//! Use [`setup_audio`] once during initialization to spawn the audio thread
//! and insert the [`AudioBridge`] and message resources. Call
//! [`shutdown_audio`] during teardown to gracefully stop the thread and free
//! audio resources.
//!
//! The thread body is supplied by the caller: a windowed host passes one
//! that owns a real audio device, a headless run passes
//! [`silent_audio_thread`](crate::systems::audio::silent_audio_thread).

use crate::events::audio::{AudioCmd, AudioMessage};
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

/// Shared bridge between the ECS world and the audio thread.
///
/// This resource is created by [`setup_audio`]. Systems can send commands via
/// [`AudioBridge::tx_cmd`] and poll for events via [`AudioBridge::rx_msg`].
#[derive(Resource)]
pub struct AudioBridge {
    /// Sender for [`AudioCmd`] messages (ECS -> audio thread).
    pub tx_cmd: Sender<AudioCmd>,
    /// Receiver for [`AudioMessage`] messages (audio thread -> ECS).
    pub rx_msg: Receiver<AudioMessage>,
    /// Join handle for the background audio thread.
    pub handle: std::thread::JoinHandle<()>,
}

/// Background music track and whether it should currently be audible.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MusicState {
    /// Track id, as used in [`AudioCmd`] music commands.
    pub track: String,
    /// Toggled by the menu's music button.
    pub on: bool,
}

impl MusicState {
    pub fn new(track: impl Into<String>) -> Self {
        Self {
            track: track.into(),
            on: true,
        }
    }

    /// Flip the flag and return the command that applies the new value.
    pub fn toggle(&mut self) -> AudioCmd {
        self.on = !self.on;
        if self.on {
            AudioCmd::ResumeMusic {
                id: self.track.clone(),
            }
        } else {
            AudioCmd::PauseMusic {
                id: self.track.clone(),
            }
        }
    }
}

/// Spawn the audio thread and register bridge resources.
///
/// This function:
/// - Creates command/event channels.
/// - Spawns the background thread running `thread_body`.
/// - Inserts [`AudioBridge`] and initializes `Messages<AudioMessage>` and
///   `Messages<AudioCmd>` so that systems can send commands and poll for
///   events.
pub fn setup_audio<F>(world: &mut World, thread_body: F)
where
    F: FnOnce(Receiver<AudioCmd>, Sender<AudioMessage>) + Send + 'static,
{
    let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
    let (tx_msg, rx_msg) = unbounded::<AudioMessage>();

    let handle = std::thread::spawn(move || thread_body(rx_cmd, tx_msg));

    world.insert_resource(AudioBridge {
        tx_cmd,
        rx_msg,
        handle,
    });
    world.insert_resource(Messages::<AudioMessage>::default());
    world.insert_resource(Messages::<AudioCmd>::default());
}

/// Gracefully request shutdown of the audio thread and join it.
///
/// If the bridge resource exists, sends [`AudioCmd::Shutdown`], waits for the
/// thread to exit, and removes the resource from the world.
pub fn shutdown_audio(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<AudioBridge>() {
        let _ = bridge.tx_cmd.send(AudioCmd::Shutdown);
        let _ = bridge.handle.join();
    }
}
