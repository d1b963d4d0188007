//! Sound notifier implementation using rodio.
//!
//! The notifier wraps a single audio file and the audio output stream.
//! Playback comes in two flavors: blocking (`play_wait`) and
//! non-blocking (`play`), the latter returning an explicit [`Playback`]
//! handle. Dropping the handle detaches the sink, so fire-and-forget
//! callers simply ignore the return value.

use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::{Path, PathBuf};

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use tracing::{debug, warn};

use super::embedded::get_embedded_sound;
use super::error::SoundError;

// ============================================================================
// Playback
// ============================================================================

/// Handle to an in-flight sound playback.
///
/// The caller may [`wait`](Playback::wait) for the sound to finish,
/// [`stop`](Playback::stop) it early, or drop the handle to let the
/// sound play out unmanaged.
pub struct Playback {
    sink: Option<Sink>,
}

impl Playback {
    fn started(sink: Sink) -> Self {
        Self { sink: Some(sink) }
    }

    /// A playback that produced no audio (disabled notifier).
    fn silent() -> Self {
        Self { sink: None }
    }

    /// Blocks until the sound has finished playing.
    pub fn wait(mut self) {
        if let Some(sink) = self.sink.take() {
            sink.sleep_until_end();
        }
    }

    /// Stops the sound immediately.
    pub fn stop(mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }

    /// Returns true if the sound has finished (or never started).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.sink.as_ref().map_or(true, Sink::empty)
    }
}

impl Drop for Playback {
    fn drop(&mut self) {
        // Unconsumed handle: let the sound play out in the background.
        if let Some(sink) = self.sink.take() {
            sink.detach();
        }
    }
}

impl std::fmt::Debug for Playback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Playback")
            .field("finished", &self.is_finished())
            .finish()
    }
}

// ============================================================================
// Notifier
// ============================================================================

/// Plays a fixed notification sound through the default audio output.
///
/// The output stream is opened once at construction and kept alive for
/// the lifetime of the notifier. A disabled notifier never touches the
/// audio hardware; every playback call silently succeeds.
pub struct Notifier {
    /// The audio output (stream must be kept alive for playback).
    /// None when playback is disabled.
    output: Option<(OutputStream, OutputStreamHandle)>,
    /// The audio file this notifier plays.
    sound_file: PathBuf,
}

impl Notifier {
    /// Creates a new notifier for the given sound file.
    ///
    /// # Arguments
    ///
    /// * `sound_file` - Path of the audio file to play.
    /// * `disabled` - If true, audio is never initialized and all
    ///   playback is silently skipped.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::DeviceNotAvailable` if no audio output
    /// device is available.
    pub fn new(sound_file: impl Into<PathBuf>, disabled: bool) -> Result<Self, SoundError> {
        let output = if disabled {
            debug!("Sound playback disabled, skipping audio initialization");
            None
        } else {
            let (stream, handle) = OutputStream::try_default()
                .map_err(|e| SoundError::DeviceNotAvailable(e.to_string()))?;
            debug!("Audio output stream initialized");
            Some((stream, handle))
        };

        Ok(Self {
            output,
            sound_file: sound_file.into(),
        })
    }

    /// Starts playback and returns immediately.
    ///
    /// If the configured file cannot be opened or decoded, the embedded
    /// fallback beep is played instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot be created or the embedded
    /// fallback fails to decode.
    pub fn play(&self) -> Result<Playback, SoundError> {
        let Some((_, stream_handle)) = &self.output else {
            debug!("Sound playback disabled, skipping");
            return Ok(Playback::silent());
        };

        let sink =
            Sink::try_new(stream_handle).map_err(|e| SoundError::StreamError(e.to_string()))?;

        self.append_sound(&sink)?;

        debug!("Sound playback started: {}", self.sound_file.display());
        Ok(Playback::started(sink))
    }

    /// Plays the sound and blocks until it has finished.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`play`](Notifier::play).
    pub fn play_wait(&self) -> Result<(), SoundError> {
        self.play()?.wait();
        Ok(())
    }

    /// Appends the configured sound to the sink, falling back to the
    /// embedded beep on file errors.
    fn append_sound(&self, sink: &Sink) -> Result<(), SoundError> {
        match Self::decode_file(&self.sound_file) {
            Ok(decoder) => {
                sink.append(decoder);
                Ok(())
            }
            Err(e) if e.should_fallback_to_embedded() => {
                warn!(
                    "Failed to play '{}': {}, falling back to embedded sound",
                    self.sound_file.display(),
                    e
                );
                let cursor = Cursor::new(get_embedded_sound());
                let decoder = Decoder::new(cursor)
                    .map_err(|e| SoundError::DecodeError(format!("embedded sound: {}", e)))?;
                sink.append(decoder);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn decode_file(path: &Path) -> Result<Decoder<BufReader<File>>, SoundError> {
        let file = File::open(path)
            .map_err(|e| SoundError::FileNotFound(format!("{}: {}", path.display(), e)))?;

        let reader = BufReader::new(file);
        Decoder::new(reader).map_err(|e| SoundError::DecodeError(e.to_string()))
    }

    /// Returns the path of the configured sound file.
    #[must_use]
    pub fn sound_file(&self) -> &Path {
        &self.sound_file
    }

    /// Returns true if sound playback is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.output.is_none()
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("sound_file", &self.sound_file)
            .field("disabled", &self.is_disabled())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Note: tests that need real audio hardware skip themselves when no
    // output device is available (e.g., CI containers). Disabled
    // notifiers never initialize audio and are always testable.

    #[test]
    fn test_disabled_notifier_never_initializes_audio() {
        let notifier = Notifier::new("/nonexistent/sound.wav", true).unwrap();
        assert!(notifier.is_disabled());
    }

    #[test]
    fn test_disabled_notifier_skips_playback() {
        let notifier = Notifier::new("/nonexistent/sound.wav", true).unwrap();

        let playback = notifier.play().unwrap();
        assert!(playback.is_finished());
    }

    #[test]
    fn test_disabled_notifier_play_wait_returns() {
        let notifier = Notifier::new("/nonexistent/sound.wav", true).unwrap();

        // Must not block or fail even though the file does not exist
        assert!(notifier.play_wait().is_ok());
    }

    #[test]
    fn test_sound_file_accessor() {
        let notifier = Notifier::new("/nonexistent/sound.wav", true).unwrap();
        assert_eq!(notifier.sound_file(), Path::new("/nonexistent/sound.wav"));
    }

    #[test]
    fn test_enabled_notifier_not_disabled() {
        let Ok(notifier) = Notifier::new("/nonexistent/sound.wav", false) else {
            return; // Skip test if no audio
        };
        assert!(!notifier.is_disabled());
    }

    #[test]
    fn test_play_nonexistent_file_falls_back_to_embedded() {
        let Ok(notifier) = Notifier::new("/nonexistent/path/to/sound.wav", false) else {
            return;
        };

        // File error degrades to the embedded beep instead of failing
        let playback = notifier.play();
        assert!(playback.is_ok());
        playback.unwrap().stop();
    }

    #[test]
    fn test_decode_file_missing() {
        let result = Notifier::decode_file(Path::new("/nonexistent/sound.wav"));
        assert!(matches!(result, Err(SoundError::FileNotFound(_))));
    }

    #[test]
    fn test_decode_file_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.wav");
        std::fs::write(&path, b"not audio data").unwrap();

        let result = Notifier::decode_file(&path);
        assert!(matches!(result, Err(SoundError::DecodeError(_))));
    }

    #[test]
    fn test_debug_impl() {
        let notifier = Notifier::new("/nonexistent/sound.wav", true).unwrap();

        let debug_str = format!("{:?}", notifier);
        assert!(debug_str.contains("Notifier"));
        assert!(debug_str.contains("disabled: true"));
    }
}
