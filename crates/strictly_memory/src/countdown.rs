//! Countdown timer driven by explicit ticks.
//!
//! The countdown never reads a clock. Callers inject one [`Countdown::tick`]
//! per elapsed second, which keeps it testable without real delays.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickOutcome {
    /// The countdown is not running; nothing changed.
    Inactive,
    /// One second elapsed; this many remain.
    Running(u32),
    /// The countdown just reached zero and stopped.
    Expired,
}

/// A start/stop/tick countdown in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    initial: u32,
    remaining: u32,
    active: bool,
}

impl Countdown {
    /// Creates an inactive countdown starting at `initial` seconds.
    pub fn new(initial: u32) -> Self {
        Self {
            initial,
            remaining: initial,
            active: false,
        }
    }

    /// Starts the countdown.
    ///
    /// Returns `true` only when this call moved it from inactive to active.
    /// An expired countdown does not restart.
    #[instrument(skip(self), fields(remaining = self.remaining))]
    pub fn start(&mut self) -> bool {
        if self.active || self.remaining == 0 {
            return false;
        }
        self.active = true;
        debug!("Countdown started");
        true
    }

    /// Stops the countdown, keeping the remaining time.
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Advances the countdown by one second.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.active {
            return TickOutcome::Inactive;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.active = false;
            debug!("Countdown expired");
            TickOutcome::Expired
        } else {
            TickOutcome::Running(self.remaining)
        }
    }

    /// Restores the initial time and stops.
    pub fn reset(&mut self) {
        self.remaining = self.initial;
        self.active = false;
    }

    /// Seconds left.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Seconds the countdown started from.
    pub fn initial(&self) -> u32 {
        self.initial
    }

    /// Whether the countdown is running.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Remaining time as zero-padded `MM:SS`.
    pub fn display(&self) -> String {
        format_clock(self.remaining)
    }
}

/// Formats whole seconds as `MM:SS`.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
