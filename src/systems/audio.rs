//! Audio system implementation backed by a dedicated thread and Raylib.
//!
//! Raylib audio calls must stay on a single thread, so a background thread
//! owns the audio device and all `Sound` handles and is driven over
//! lock-free channels:
//! - [`audio_thread`] runs on its own OS thread and processes
//!   [`AudioCmd`](crate::events::audio::AudioCmd) commands, emitting
//!   [`AudioMessage`](crate::events::audio::AudioMessage) responses.
//! - [`forward_audio_cmds`] pushes `AudioCmd` messages written by gameplay
//!   systems into the channel (fire-and-forget).
//! - [`poll_audio_messages`] non-blockingly drains the thread's responses
//!   into the ECS message queue each frame.
//! - [`log_audio_messages`] reports load failures; a cue that failed to load
//!   simply never plays.
//!
//! The thread must be created once via
//! [`crate::resources::audio::setup_audio`] and joined via
//! [`crate::resources::audio::shutdown_audio`].

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::Messages;
use bevy_ecs::prelude::{MessageReader, MessageWriter, Res, ResMut};
use crossbeam_channel::{Receiver, Sender};
use log::warn;
use raylib::core::audio::{RaylibAudio, Sound};
use rustc_hash::{FxHashMap, FxHashSet};

/// Forward ECS AudioCmd messages to the audio thread via the AudioBridge sender.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // Ignore send errors during shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for AudioCmd so same-frame readers can observe writes.
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Drain any pending messages from the audio thread into the ECS
/// [`Messages<AudioMessage>`] mailbox.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_bevy_audio_messages(mut msgs: ResMut<Messages<AudioMessage>>) {
    msgs.update();
}

/// Surface audio thread failures in the log.
pub fn log_audio_messages(mut reader: MessageReader<AudioMessage>) {
    for msg in reader.read() {
        if let AudioMessage::FxLoadFailed { id, error } = msg {
            warn!("sound '{}' failed to load: {}", id, error);
        }
    }
}

/// Entry point of the dedicated audio thread.
///
/// Responsibilities:
/// - Initialize the Raylib audio device once for the life of the thread.
/// - Own all `Sound` handles, preventing use from other threads.
/// - React to [`AudioCmd`] inputs to load/unload and play effects.
/// - Emit [`AudioMessage`] outputs for loads, failures, and finished cues.
///
/// Playback is fire-and-forget: `PlayFx` restarts the cue if it is already
/// playing, and no queuing discipline is applied beyond what Raylib does.
///
/// This function blocks until it receives [`AudioCmd::Shutdown`], at which
/// point it unloads resources and exits cleanly.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            panic!("Failed to initialize audio device: {}", e);
        }
    };

    eprintln!(
        "[audio] thread starting (id={:?})",
        std::thread::current().id()
    );

    let mut sounds: FxHashMap<String, Sound> = FxHashMap::default();
    let mut fx_playing: FxHashSet<String> = FxHashSet::default();

    'run: loop {
        // 1) Drain commands
        for cmd in rx_cmd.try_iter() {
            match cmd {
                AudioCmd::LoadFx { id, path } => match audio.new_sound(&path) {
                    Ok(sound) => {
                        eprintln!("[audio] fx loaded id='{}' path='{}'", id, path);
                        sounds.insert(id.clone(), sound);
                        let _ = tx_msg.send(AudioMessage::FxLoaded { id });
                    }
                    Err(e) => {
                        eprintln!(
                            "[audio] fx load failed id='{}' path='{}' error='{}'",
                            id, path, e
                        );
                        let _ = tx_msg.send(AudioMessage::FxLoadFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::PlayFx { id } => {
                    if let Some(sound) = sounds.get(&id) {
                        sound.play();
                        fx_playing.insert(id);
                    } else {
                        eprintln!("[audio] fx play failed id='{}' reason='not loaded'", id);
                    }
                }
                AudioCmd::UnloadAllFx => {
                    eprintln!("[audio] fx unload all");
                    sounds.clear();
                    fx_playing.clear();
                    let _ = tx_msg.send(AudioMessage::FxUnloadedAll);
                }
                AudioCmd::Shutdown => {
                    eprintln!("[audio] shutdown requested");
                    sounds.clear();
                    fx_playing.clear();
                    let _ = tx_msg.send(AudioMessage::FxUnloadedAll);
                    break 'run;
                }
            }
        }

        // 2) FX end detection: if an id is tracked as playing and Raylib
        //    reports it is no longer playing, emit FxFinished exactly once.
        let mut fx_ended: Vec<String> = Vec::new();
        for id in fx_playing.iter() {
            let still_playing = sounds
                .get(id)
                .map(|sound| sound.is_playing())
                .unwrap_or(false);
            if !still_playing {
                fx_ended.push(id.clone());
            }
        }
        for id in fx_ended.iter() {
            fx_playing.remove(id);
            let _ = tx_msg.send(AudioMessage::FxFinished { id: id.clone() });
        }

        std::thread::sleep(std::time::Duration::from_millis(10));
    } // 'run

    eprintln!(
        "[audio] thread exiting (id={:?})",
        std::thread::current().id()
    );

    // On exit, sounds drop before `audio`, satisfying lifetimes
}
