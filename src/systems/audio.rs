//! Audio systems and the headless audio thread.
//!
//! The systems here bridge the ECS world with whichever audio thread
//! [`setup_audio`](crate::resources::audio::setup_audio) started:
//! - [`forward_audio_cmds`] pushes queued [`AudioCmd`] messages over the
//!   channel to the audio thread.
//! - [`poll_audio_messages`] non-blockingly drains the audio thread's replies
//!   into the ECS [`Messages<AudioMessage>`] queue.
//! - [`update_bevy_audio_cmds`] and [`update_bevy_audio_messages`] advance
//!   the double-buffered message queues once per tick.
//! - [`log_audio_messages`] reports what the audio thread did.
//!
//! [`silent_audio_thread`] is the thread body used when there is no audio
//! device. It keeps the same bookkeeping as a real backend and answers every
//! command, so the rest of the game cannot tell the difference.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender};
use log::{debug, info, warn};
use rustc_hash::FxHashSet;

/// Drain any pending events from the audio thread and enqueue them into the
/// ECS [`Messages<AudioMessage>`] mailbox.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_bevy_audio_messages(mut msgs: ResMut<Messages<AudioMessage>>) {
    msgs.update();
}

/// Forward ECS AudioCmd messages to the audio thread via the AudioBridge sender.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // ignore send error on shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for AudioCmd so same-frame readers can observe writes.
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Log replies from the audio thread. Load failures are content errors and
/// are reported as warnings.
pub fn log_audio_messages(mut reader: MessageReader<AudioMessage>) {
    for msg in reader.read() {
        match msg {
            AudioMessage::MusicLoadFailed { id, error } | AudioMessage::FxLoadFailed { id, error } => {
                warn!("audio '{}' failed to load: {}", id, error);
            }
            other => debug!("audio: {:?}", other),
        }
    }
}

/// Audio thread body for runs without an audio device.
///
/// Tracks which music and effects were "loaded" and which track is playing,
/// and answers like a device-backed thread would. Blocks on the command
/// channel until [`AudioCmd::Shutdown`] arrives or the sender is dropped.
pub fn silent_audio_thread(rx_cmd: Receiver<AudioCmd>, tx_evt: Sender<AudioMessage>) {
    info!(
        "silent audio thread starting (id={:?})",
        std::thread::current().id()
    );
    let mut musics: FxHashSet<String> = FxHashSet::default();
    let mut sounds: FxHashSet<String> = FxHashSet::default();

    for cmd in rx_cmd.iter() {
        debug!("[audio] {:?}", cmd);
        let reply = match cmd {
            AudioCmd::LoadMusic { id, .. } => {
                musics.insert(id.clone());
                Some(AudioMessage::MusicLoaded { id })
            }
            AudioCmd::PlayMusic { id, .. } | AudioCmd::ResumeMusic { id } => musics
                .contains(&id)
                .then_some(AudioMessage::MusicPlayStarted { id }),
            AudioCmd::PauseMusic { id } => musics
                .contains(&id)
                .then_some(AudioMessage::MusicPaused { id }),
            AudioCmd::StopMusic { id } => musics
                .contains(&id)
                .then_some(AudioMessage::MusicStopped { id }),
            AudioCmd::VolumeMusic { id, vol } => musics
                .contains(&id)
                .then_some(AudioMessage::MusicVolumeChanged { id, vol }),
            AudioCmd::LoadFx { id, .. } => {
                sounds.insert(id.clone());
                Some(AudioMessage::FxLoaded { id })
            }
            AudioCmd::PlayFx { id } => {
                if sounds.contains(&id) {
                    Some(AudioMessage::FxFinished { id })
                } else {
                    warn!("[audio] fx play failed id='{}' reason='not loaded'", id);
                    None
                }
            }
            AudioCmd::Shutdown => break,
        };
        if let Some(reply) = reply {
            let _ = tx_evt.send(reply);
        }
    }

    info!(
        "silent audio thread exiting (id={:?})",
        std::thread::current().id()
    );
}
