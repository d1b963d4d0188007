//! Progress bar construction for countdown phases.
//!
//! One bar per phase, advanced one tick per second by the timer loop.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::types::TimerPhase;

/// Formats the `[session/total]` part of the bar prefix.
#[must_use]
pub fn session_counter(session: u32, total_sessions: u32) -> String {
    format!("[{}/{}]", session, total_sessions)
}

/// Builds the colored prefix shown in front of a phase bar.
#[must_use]
pub fn phase_prefix(phase: TimerPhase, session: u32, total_sessions: u32) -> String {
    let (color_code, icon) = phase_appearance(phase);

    format!(
        "{} {} {}",
        icon,
        phase.label(),
        session_counter(session, total_sessions)
    )
    .color(color_code)
    .to_string()
}

fn phase_appearance(phase: TimerPhase) -> (&'static str, &'static str) {
    match phase {
        TimerPhase::Working => ("red", "🍅"),
        TimerPhase::Breaking => ("green", "☕"),
    }
}

/// Creates a styled progress bar for one countdown phase.
///
/// The prefix carries the phase icon, its label and the session
/// counter; the bar itself counts elapsed seconds.
#[must_use]
pub fn phase_progress_bar(
    phase: TimerPhase,
    session: u32,
    total_sessions: u32,
    total_seconds: u64,
) -> ProgressBar {
    let (color_code, _) = phase_appearance(phase);

    let template = format!(
        "{{prefix}} [{{bar:40.{}}}] {{pos}}/{{len}}秒 ({{percent}}%)",
        color_code
    );

    let style = ProgressStyle::with_template(&template)
        .expect("progress template is static")
        .progress_chars("█░");

    let bar = ProgressBar::new(total_seconds);
    bar.set_style(style);
    bar.set_prefix(phase_prefix(phase, session, total_sessions));

    bar
}

// ============================================================================
// Tests
// ============================================================================
