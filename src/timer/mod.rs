//! Timer loop for pomobeep.
//!
//! This module drives the work/break cycle:
//! - Per-second countdown with tokio::time::interval
//! - Progress bar rendering per phase
//! - Non-blocking sound notification at the end of each phase
//! - Optional confirmation prompt between sessions
//!
//! Control flow is purely sequential: one session after another, one
//! phase after another, one tick per second. The only thing that may
//! outlive a phase is a detached notification sound.

mod progress;

pub use progress::{phase_prefix, phase_progress_bar, session_counter};

use anyhow::{Context, Result};
use dialoguer::Confirm;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, info};

use crate::sound::Notify;
use crate::types::{SessionPlan, TimerPhase};

// ============================================================================
// TimerLoop
// ============================================================================

/// Runs the configured number of work/break sessions.
pub struct TimerLoop<N: Notify> {
    /// Session counts and durations
    plan: SessionPlan,
    /// Notification playback at phase boundaries
    notifier: N,
    /// Whether to prompt before starting the next session
    confirm_between: bool,
}

impl<N: Notify> TimerLoop<N> {
    /// Creates a new timer loop over the given plan.
    pub fn new(plan: SessionPlan, notifier: N) -> Self {
        Self {
            plan,
            notifier,
            confirm_between: false,
        }
    }

    /// Enables or disables the between-session confirmation prompt.
    pub fn with_confirmation(mut self, confirm: bool) -> Self {
        self.confirm_between = confirm;
        self
    }

    /// Runs all sessions to completion.
    ///
    /// Each session counts down the work interval, fires a notification,
    /// counts down the break interval and fires a second notification.
    /// With confirmation enabled, the loop blocks on a prompt after each
    /// break except the last; declining ends the run early.
    ///
    /// # Errors
    ///
    /// Returns an error if notification playback cannot start or the
    /// confirmation prompt cannot be read.
    pub async fn run(&self) -> Result<()> {
        for session in 1..=self.plan.sessions_amount {
            self.run_phase(TimerPhase::Working, session).await;
            self.notifier
                .notify()
                .context("作業終了の通知音を再生できませんでした")?;

            self.run_phase(TimerPhase::Breaking, session).await;
            self.notifier
                .notify()
                .context("休憩終了の通知音を再生できませんでした")?;

            if self.confirm_between && session < self.plan.sessions_amount {
                if !self.confirm_next_session(session + 1)? {
                    info!("Run ended early by user after session {}", session);
                    return Ok(());
                }
            }
        }

        Ok(())
    }

    /// Counts down one phase, advancing the progress bar once per second.
    async fn run_phase(&self, phase: TimerPhase, session: u32) {
        let total_seconds = self.plan.phase_seconds(phase);
        debug!(
            "Phase {} of session {}/{}: {} second(s)",
            phase.as_str(),
            session,
            self.plan.sessions_amount,
            total_seconds
        );

        let bar = phase_progress_bar(phase, session, self.plan.sessions_amount, total_seconds);

        let mut ticker = interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick completes immediately; consume it so each of
        // the remaining ticks marks one elapsed second.
        ticker.tick().await;

        for _ in 0..total_seconds {
            ticker.tick().await;
            bar.inc(1);
        }

        bar.finish();
    }

    /// Blocks on a yes/no prompt before the next session.
    ///
    /// Returns false if the user declines.
    fn confirm_next_session(&self, next_session: u32) -> Result<bool> {
        Confirm::new()
            .with_prompt(format!(
                "セッション {} を開始しますか?",
                session_counter(next_session, self.plan.sessions_amount)
            ))
            .default(true)
            .interact()
            .context("確認プロンプトの読み取りに失敗しました")
    }

    /// Returns the plan this loop runs.
    pub fn plan(&self) -> &SessionPlan {
        &self.plan
    }

    /// Returns the notifier driven by this loop.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sound::MockNotifier;

    fn zero_duration_plan(sessions: u32) -> SessionPlan {
        SessionPlan::new(sessions, 0, 0)
    }

    #[test]
    fn test_with_confirmation_builder() {
        let timer = TimerLoop::new(SessionPlan::default(), MockNotifier::new());
        assert!(!timer.confirm_between);

        let timer = timer.with_confirmation(true);
        assert!(timer.confirm_between);
    }

    #[test]
    fn test_plan_accessor() {
        let plan = SessionPlan::new(2, 10, 3);
        let timer = TimerLoop::new(plan, MockNotifier::new());
        assert_eq!(*timer.plan(), plan);
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_zero_duration_session_fires_two_notifications() {
        let timer = TimerLoop::new(zero_duration_plan(1), MockNotifier::new());

        timer.run().await.unwrap();

        // Zero ticks per phase, but end-of-work and end-of-break still fire
        assert_eq!(timer.notifier.notify_count(), 2);
        assert_eq!(timer.notifier.wait_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_notification_count_scales_with_sessions() {
        let timer = TimerLoop::new(zero_duration_plan(3), MockNotifier::new());

        timer.run().await.unwrap();

        assert_eq!(timer.notifier.notify_count(), 6);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_sessions_fires_nothing() {
        let timer = TimerLoop::new(zero_duration_plan(0), MockNotifier::new());

        timer.run().await.unwrap();

        assert_eq!(timer.notifier.notify_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_elapsed_time_matches_plan() {
        // 2 sessions x (1 work minute + 1 break minute)
        let plan = SessionPlan::new(2, 1, 1);
        let timer = TimerLoop::new(plan, MockNotifier::new());

        let started = tokio::time::Instant::now();
        timer.run().await.unwrap();
        let elapsed = started.elapsed();

        assert_eq!(elapsed.as_secs(), plan.total_seconds());
        assert_eq!(timer.notifier.notify_count(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_asymmetric_durations() {
        // Work-only plan: break contributes no ticks but still notifies
        let plan = SessionPlan::new(1, 1, 0);
        let timer = TimerLoop::new(plan, MockNotifier::new());

        let started = tokio::time::Instant::now();
        timer.run().await.unwrap();

        assert_eq!(started.elapsed().as_secs(), 60);
        assert_eq!(timer.notifier.notify_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_notification_failure_aborts_run() {
        let notifier = MockNotifier::new();
        notifier.set_should_fail(true);
        let timer = TimerLoop::new(zero_duration_plan(2), notifier);

        let result = timer.run().await;

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("通知音を再生できませんでした"));
    }
}
