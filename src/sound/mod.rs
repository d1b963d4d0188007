//! Sound system for pomobeep.
//!
//! This module provides audio notification capabilities, including:
//!
//! - Catalog of audio files discovered in the sounds directory
//! - Blocking and non-blocking playback of a notification sound
//! - Embedded fallback beep when a file cannot be decoded
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │   SoundCatalog   │ ← directory scan + title lookup
//! └────────┬─────────┘
//!          │ resolves one entry
//!          ▼
//! ┌──────────────────┐     ┌──────────────────┐
//! │     Notifier     │────▶│   Sound file     │
//! │  (rodio stream)  │     ├──────────────────┤
//! │                  │────▶│ Embedded beep    │
//! └──────────────────┘     │  (fallback)      │
//!                          └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use pomobeep::sound::{Notifier, SoundCatalog};
//!
//! let catalog = SoundCatalog::from_dir(Path::new("sounds")).expect("catalog");
//! let entry = catalog.lookup("nya");
//!
//! // Create a notifier (may fail if no audio device)
//! let notifier = Notifier::new(entry.path(), false).expect("audio init");
//!
//! // Fire-and-forget: dropping the handle detaches the sink
//! let _ = notifier.play().expect("playback failed");
//!
//! // Or block until the sound is done
//! notifier.play_wait().expect("playback failed");
//! ```

mod catalog;
mod embedded;
mod error;
mod notifier;

pub use catalog::{SoundCatalog, SoundEntry};
pub use embedded::{get_embedded_sound, get_embedded_sound_format, DEFAULT_SOUND_DATA};
pub use error::SoundError;
pub use notifier::{Notifier, Playback};

/// Trait for notification playback.
///
/// This abstracts the notifier so the timer loop can be exercised with
/// a mock implementation in tests.
pub trait Notify {
    /// Fires the notification sound without blocking.
    ///
    /// # Errors
    ///
    /// Returns an error if playback fails to start.
    fn notify(&self) -> Result<(), SoundError>;

    /// Plays the notification sound and blocks until it has finished.
    ///
    /// # Errors
    ///
    /// Returns an error if playback fails.
    fn notify_wait(&self) -> Result<(), SoundError>;
}

impl Notify for Notifier {
    fn notify(&self) -> Result<(), SoundError> {
        // Dropping the handle detaches the sink (fire-and-forget)
        self.play().map(drop)
    }

    fn notify_wait(&self) -> Result<(), SoundError> {
        self.play_wait()
    }
}

/// Mock notifier for testing.
#[derive(Debug, Default)]
pub struct MockNotifier {
    notify_calls: std::sync::Mutex<u32>,
    wait_calls: std::sync::Mutex<u32>,
    should_fail: std::sync::atomic::AtomicBool,
}

impl MockNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail
            .store(should_fail, std::sync::atomic::Ordering::SeqCst);
    }

    #[must_use]
    pub fn notify_count(&self) -> u32 {
        *self.notify_calls.lock().unwrap()
    }

    #[must_use]
    pub fn wait_count(&self) -> u32 {
        *self.wait_calls.lock().unwrap()
    }
}

impl Notify for MockNotifier {
    fn notify(&self) -> Result<(), SoundError> {
        if self.should_fail.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("Mock failure".to_string()));
        }
        *self.notify_calls.lock().unwrap() += 1;
        Ok(())
    }

    fn notify_wait(&self) -> Result<(), SoundError> {
        if self.should_fail.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("Mock failure".to_string()));
        }
        *self.wait_calls.lock().unwrap() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_notifier_counts_calls() {
        let mock = MockNotifier::new();
        assert_eq!(mock.notify_count(), 0);

        mock.notify().unwrap();
        mock.notify().unwrap();
        assert_eq!(mock.notify_count(), 2);
        assert_eq!(mock.wait_count(), 0);

        mock.notify_wait().unwrap();
        assert_eq!(mock.wait_count(), 1);
    }

    #[test]
    fn test_mock_notifier_failure_mode() {
        let mock = MockNotifier::new();
        mock.set_should_fail(true);

        assert!(mock.notify().is_err());
        assert!(mock.notify_wait().is_err());
        assert_eq!(mock.notify_count(), 0);

        mock.set_should_fail(false);
        assert!(mock.notify().is_ok());
    }

    #[test]
    fn test_embedded_sound_data() {
        let data = get_embedded_sound();
        assert!(!data.is_empty());
        // Verify WAV header
        assert_eq!(&data[0..4], b"RIFF");
    }
}
