//! Sound playback for timer cues
//!
//! Cues are sent over a channel to a dedicated thread that owns the output
//! stream. Anything that cannot be played as a file falls back to a beep.

use anyhow::{Context, Result};
use rodio::source::{SineWave, Source};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, warn};

const BEEP_FREQUENCY_HZ: f32 = 880.0;
const BEEP_DURATION: Duration = Duration::from_millis(300);
const BEEP_VOLUME: f32 = 0.25;

/// A request to play a sound file, or the fallback beep when there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioCue {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Playback {
    File(PathBuf),
    Beep,
}

/// Decide what a cue plays: the file if it exists as a regular file,
/// otherwise the beep.
pub fn resolve(path: Option<&Path>) -> Playback {
    match path {
        Some(path) if !path.as_os_str().is_empty() && path.is_file() => {
            Playback::File(path.to_path_buf())
        }
        _ => Playback::Beep,
    }
}

/// Cheap, cloneable sender side of the audio service.
#[derive(Debug, Clone)]
pub struct AudioHandle {
    tx: mpsc::UnboundedSender<AudioCue>,
}

impl AudioHandle {
    pub fn play(&self, path: Option<PathBuf>) {
        if self.tx.send(AudioCue { path }).is_err() {
            warn!("Audio service is not running, cue dropped");
        }
    }
}

pub fn channel() -> (AudioHandle, mpsc::UnboundedReceiver<AudioCue>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (AudioHandle { tx }, rx)
}

pub struct AudioService {
    cue_rx: mpsc::UnboundedReceiver<AudioCue>,
}

impl AudioService {
    pub fn new(cue_rx: mpsc::UnboundedReceiver<AudioCue>) -> Self {
        Self { cue_rx }
    }

    /// Run the service on its own thread until every handle is dropped.
    pub fn spawn(self) -> Result<thread::JoinHandle<()>> {
        thread::Builder::new()
            .name("audio".to_string())
            .spawn(move || self.run())
            .context("Failed to spawn audio thread")
    }

    fn run(mut self) {
        // The stream must stay alive for detached sinks to keep playing.
        let output = match OutputStream::try_default() {
            Ok(output) => Some(output),
            Err(e) => {
                warn!("No audio output available, using terminal bell: {}", e);
                None
            }
        };
        let handle = output.as_ref().map(|(_stream, handle)| handle);

        while let Some(cue) = self.cue_rx.blocking_recv() {
            match resolve(cue.path.as_deref()) {
                Playback::File(path) => {
                    debug!("Playing {}", path.display());
                    let played = handle
                        .context("No audio output")
                        .and_then(|handle| play_file(handle, &path));
                    if let Err(e) = played {
                        warn!("Could not play {}: {:#}", path.display(), e);
                        beep(handle);
                    }
                }
                Playback::Beep => {
                    debug!("Playing fallback beep");
                    beep(handle);
                }
            }
        }

        debug!("Audio service stopped");
    }
}

fn play_file(handle: &OutputStreamHandle, path: &Path) -> Result<()> {
    let file = File::open(path).context("Failed to open sound file")?;
    let source = Decoder::new(BufReader::new(file)).context("Failed to decode sound file")?;
    let sink = Sink::try_new(handle).context("Failed to create audio sink")?;
    sink.append(source);
    sink.detach();
    Ok(())
}

fn beep(handle: Option<&OutputStreamHandle>) {
    let played = handle
        .context("No audio output")
        .and_then(|handle| {
            let sink = Sink::try_new(handle).context("Failed to create audio sink")?;
            sink.append(
                SineWave::new(BEEP_FREQUENCY_HZ)
                    .take_duration(BEEP_DURATION)
                    .amplify(BEEP_VOLUME),
            );
            sink.detach();
            Ok(())
        });

    if played.is_err() {
        let mut stderr = std::io::stderr();
        let _ = stderr.write_all(b"\x07");
        let _ = stderr.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_missing_path_beeps() {
        assert_eq!(resolve(None), Playback::Beep);
        assert_eq!(resolve(Some(Path::new(""))), Playback::Beep);
        assert_eq!(
            resolve(Some(Path::new("/definitely/not/here.wav"))),
            Playback::Beep
        );
    }

    #[test]
    fn test_resolve_directory_beeps() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(resolve(Some(dir.path())), Playback::Beep);
    }

    #[test]
    fn test_resolve_existing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(
            resolve(Some(file.path())),
            Playback::File(file.path().to_path_buf())
        );
    }

    #[test]
    fn test_handle_sends_cues_in_order() {
        let (audio, mut rx) = channel();
        audio.play(Some(PathBuf::from("zero.wav")));
        audio.play(None);

        assert_eq!(rx.try_recv().unwrap().path, Some(PathBuf::from("zero.wav")));
        assert_eq!(rx.try_recv().unwrap().path, None);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_play_after_service_gone_does_not_panic() {
        let (audio, rx) = channel();
        drop(rx);
        audio.play(None);
    }
}
