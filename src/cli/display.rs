//! Display utilities for the pomobeep CLI.
//!
//! This module provides formatted output for:
//! - Terminal clearing at startup
//! - Run completion summary
//! - Error messages

use std::io::{self, Write};

use colored::Colorize;

use crate::types::SessionPlan;

/// ANSI sequence: clear the screen and move the cursor to the top left.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Clears the terminal screen.
    pub fn clear_screen() {
        print!("{}", CLEAR_SCREEN);
        let _ = io::stdout().flush();
    }

    /// Shows the message before a test-sound playback.
    pub fn show_test_sound(name: &str) {
        println!("♪ サウンドを再生します: {}", name.cyan());
    }

    /// Shows the summary after all sessions have completed.
    pub fn show_run_complete(plan: &SessionPlan) {
        println!("{} {}", "✓".green().bold(), "全セッションが完了しました".green());

        let (minutes, seconds) = Self::format_time(plan.total_seconds());
        println!(
            "  {}セッション / 合計 {}分{}秒",
            plan.sessions_amount, minutes, seconds
        );
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("エラー: {}", message);
    }

    /// Formats a second count as (minutes, seconds).
    fn format_time(total_seconds: u64) -> (u64, u64) {
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;
        (minutes, seconds)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Format Time Tests
    // ------------------------------------------------------------------------

    mod format_time_tests {
        use super::*;

        #[test]
        fn test_format_time_zero() {
            assert_eq!(Display::format_time(0), (0, 0));
        }

        #[test]
        fn test_format_time_seconds_only() {
            assert_eq!(Display::format_time(45), (0, 45));
        }

        #[test]
        fn test_format_time_one_minute() {
            assert_eq!(Display::format_time(60), (1, 0));
        }

        #[test]
        fn test_format_time_mixed() {
            assert_eq!(Display::format_time(90), (1, 30));
        }

        #[test]
        fn test_format_time_full_run() {
            // 4 sessions x 35 minutes
            assert_eq!(Display::format_time(4 * 35 * 60), (140, 0));
        }
    }

    // ------------------------------------------------------------------------
    // Display Output Tests
    // ------------------------------------------------------------------------

    mod display_tests {
        use super::*;

        #[test]
        fn test_clear_screen_constant() {
            assert!(CLEAR_SCREEN.starts_with('\x1b'));
            assert!(CLEAR_SCREEN.contains("[2J"));
        }

        #[test]
        fn test_show_run_complete() {
            // Verifies the function doesn't panic
            Display::show_run_complete(&SessionPlan::default());
        }

        #[test]
        fn test_show_test_sound() {
            Display::show_test_sound("nya");
        }

        #[test]
        fn test_show_error() {
            Display::show_error("Test error message");
        }
    }
}
