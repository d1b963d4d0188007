//! Core data types for pomobeep.
//!
//! This module defines the data structures used for:
//! - Phase identification (work vs. break)
//! - Session planning (counts and durations)

// ============================================================================
// TimerPhase
// ============================================================================

/// Represents the current phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// Counting down a work interval
    Working,
    /// Counting down a break interval
    Breaking,
}

impl TimerPhase {
    /// Returns the string representation of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerPhase::Working => "working",
            TimerPhase::Breaking => "breaking",
        }
    }

    /// Returns the user-facing label for the phase.
    pub fn label(&self) -> &'static str {
        match self {
            TimerPhase::Working => "作業中",
            TimerPhase::Breaking => "休憩中",
        }
    }

    /// Returns the phase that follows this one within a session.
    pub fn next(&self) -> TimerPhase {
        match self {
            TimerPhase::Working => TimerPhase::Breaking,
            TimerPhase::Breaking => TimerPhase::Working,
        }
    }
}

// ============================================================================
// SessionPlan
// ============================================================================

/// Plan for a full timer run: how many sessions, and how long each
/// work and break interval lasts.
///
/// Durations are minutes. Zero is permitted: a zero-length phase
/// performs no countdown ticks but its end-of-phase notification still
/// fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionPlan {
    /// Number of work/break cycles
    pub sessions_amount: u32,
    /// Work interval duration in minutes
    pub work_minutes: u32,
    /// Break interval duration in minutes
    pub break_minutes: u32,
}

impl Default for SessionPlan {
    fn default() -> Self {
        Self {
            sessions_amount: 4,
            work_minutes: 30,
            break_minutes: 5,
        }
    }
}

impl SessionPlan {
    /// Creates a new plan from explicit values.
    pub fn new(sessions_amount: u32, work_minutes: u32, break_minutes: u32) -> Self {
        Self {
            sessions_amount,
            work_minutes,
            break_minutes,
        }
    }

    /// Creates a new plan with the specified session count.
    pub fn with_sessions(mut self, sessions: u32) -> Self {
        self.sessions_amount = sessions;
        self
    }

    /// Creates a new plan with the specified work duration.
    pub fn with_work_minutes(mut self, minutes: u32) -> Self {
        self.work_minutes = minutes;
        self
    }

    /// Creates a new plan with the specified break duration.
    pub fn with_break_minutes(mut self, minutes: u32) -> Self {
        self.break_minutes = minutes;
        self
    }

    /// Returns the countdown length of the given phase in seconds.
    pub fn phase_seconds(&self, phase: TimerPhase) -> u64 {
        let minutes = match phase {
            TimerPhase::Working => self.work_minutes,
            TimerPhase::Breaking => self.break_minutes,
        };
        u64::from(minutes) * 60
    }

    /// Returns the total planned duration across all sessions in seconds.
    pub fn total_seconds(&self) -> u64 {
        u64::from(self.sessions_amount)
            * (self.phase_seconds(TimerPhase::Working) + self.phase_seconds(TimerPhase::Breaking))
    }
}

// ============================================================================
// Tests
// ============================================================================
