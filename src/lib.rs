//! Pomobeep Library
//!
//! This library provides the core functionality for the pomobeep CLI.
//! It includes:
//! - Timer loop driving work/break sessions with per-second progress
//! - Sound catalog built from a directory of audio files
//! - Notifier for blocking and non-blocking sound playback
//! - CLI command parsing and display utilities

pub mod cli;
pub mod sound;
pub mod timer;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{SessionPlan, TimerPhase};

// Re-export CLI types
pub use cli::{Cli, Display, SoundChoice};

// Re-export sound types
pub use sound::{MockNotifier, Notifier, Notify, Playback, SoundCatalog, SoundEntry, SoundError};

// Re-export timer types
pub use timer::TimerLoop;
