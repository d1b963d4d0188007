//! Pomobeep CLI - a work/break interval timer with sound notifications
//!
//! Alternates work and break intervals for a configured number of
//! sessions, rendering a per-second progress bar and playing a sound
//! cue at the end of each interval.

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use pomobeep::cli::{Cli, Display};
use pomobeep::sound::{Notifier, SoundCatalog};
use pomobeep::timer::TimerLoop;

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Executes the parsed command line.
async fn execute(cli: Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        generate_completions(shell);
        return Ok(());
    }

    Display::clear_screen();

    let sounds_dir = cli.sounds_dir.clone().unwrap_or_else(default_sounds_dir);
    let catalog = SoundCatalog::from_dir(&sounds_dir)?;

    let entry = catalog.lookup(cli.sound.title());
    tracing::debug!("Selected sound: {} ({})", entry.name(), entry.path().display());

    let notifier = Notifier::new(entry.path(), cli.no_sound)?;

    if cli.test_sound {
        Display::show_test_sound(entry.name());
        notifier.play_wait()?;
        return Ok(());
    }

    let plan = cli.plan();
    TimerLoop::new(plan, notifier)
        .with_confirmation(cli.confirm)
        .run()
        .await?;

    Display::show_run_complete(&plan);
    Ok(())
}

/// Resolves the default sounds directory.
///
/// Prefers `sounds/` next to the executable (installed layout), falling
/// back to `sounds/` under the current directory (checkout layout).
fn default_sounds_dir() -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let candidate = dir.join("sounds");
            if candidate.is_dir() {
                return candidate;
            }
        }
    }
    PathBuf::from("sounds")
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["pomobeep"]);
        assert_eq!(cli.sessions_amount, 4);
        assert_eq!(cli.work_duration_minutes, 30);
        assert_eq!(cli.break_duration_minutes, 5);
    }

    #[test]
    fn test_default_sounds_dir_is_relative_fallback() {
        // In a test binary there is no sounds/ next to the executable
        let dir = default_sounds_dir();
        assert_eq!(dir, PathBuf::from("sounds"));
    }

    #[test]
    fn test_cli_parse_with_positionals() {
        let cli = Cli::parse_from(["pomobeep", "2", "25", "5"]);
        assert_eq!(cli.plan().sessions_amount, 2);
        assert_eq!(cli.plan().work_minutes, 25);
        assert_eq!(cli.plan().break_minutes, 5);
    }
}
