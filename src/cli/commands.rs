//! Command-line definitions for pomobeep.
//!
//! Uses clap derive macro for argument parsing. The surface is a single
//! flat command: one sound option plus three positional integers, with
//! a handful of flags around them.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::types::SessionPlan;

// ============================================================================
// SoundChoice
// ============================================================================

/// Selectable notification sounds.
///
/// Each variant maps to a lookup title matched against the file paths
/// in the sound catalog.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SoundChoice {
    /// Cat meow chime
    #[default]
    Nya,
    /// Low rumble
    Boom,
    /// Plain beep
    Beep,
    /// "An ta baka" voice clip
    Antabaka,
    /// Emergency meeting sting
    Amongus,
}

impl SoundChoice {
    /// Returns the catalog lookup title for this choice.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            SoundChoice::Nya => "nya",
            SoundChoice::Boom => "boom",
            SoundChoice::Beep => "beep",
            SoundChoice::Antabaka => "antabaka",
            SoundChoice::Amongus => "amongus",
        }
    }
}

impl fmt::Display for SoundChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

// ============================================================================
// CLI Structure
// ============================================================================

/// Pomobeep - work/break interval timer with sound notifications
#[derive(Parser, Debug)]
#[command(
    name = "pomobeep",
    version,
    about = "作業と休憩を繰り返すインターバルタイマーCLI",
    long_about = "ターミナル上で動作するシンプルなインターバルタイマー。\n\
                  各作業・休憩インターバルの終わりに通知音を再生します。"
)]
pub struct Cli {
    /// Select the notification sound
    #[arg(short, long, value_enum, default_value_t = SoundChoice::Nya)]
    pub sound: SoundChoice,

    /// Work and break cycles amount
    #[arg(value_name = "SESSIONS_AMOUNT", default_value_t = 4)]
    pub sessions_amount: u32,

    /// One work session duration in minutes
    #[arg(value_name = "WORK_DURATION_MINUTES", default_value_t = 30)]
    pub work_duration_minutes: u32,

    /// One break session duration in minutes
    #[arg(value_name = "BREAK_DURATION_MINUTES", default_value_t = 5)]
    pub break_duration_minutes: u32,

    /// Directory containing the notification sound files
    #[arg(long, value_name = "DIR")]
    pub sounds_dir: Option<PathBuf>,

    /// Disable notification sounds
    #[arg(long)]
    pub no_sound: bool,

    /// Play the selected sound once and exit
    #[arg(long)]
    pub test_sound: bool,

    /// Ask for confirmation before starting the next session
    #[arg(short, long)]
    pub confirm: bool,

    /// Generate a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Returns the session plan described by the positional arguments.
    #[must_use]
    pub fn plan(&self) -> SessionPlan {
        SessionPlan::new(
            self.sessions_amount,
            self.work_duration_minutes,
            self.break_duration_minutes,
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
