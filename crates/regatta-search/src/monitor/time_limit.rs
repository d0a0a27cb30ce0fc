// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Time Limit Monitor
//!
//! A lightweight monitor that enforces a wall-clock time budget on a
//! worker's trial loop. It periodically checks elapsed time (using a
//! bitmask-based trial filter) and requests a halt once the configured
//! `Duration` has been exceeded.
//!
//! ## Motivation
//!
//! A Las Vegas solve has no worst-case bound; only luck decides when a
//! trial succeeds. Callers that need predictable time-bounded behavior cap
//! the runtime with this monitor, and the bitmask filter keeps the cost of
//! doing so off the trial hot path.
//!
//! ## Highlights
//!
//! - `TimeLimitMonitor` stores a `time_limit`, `start_time`, and `trials` counter.
//! - Bitmask-driven clock checks: `(trials & clock_check_mask) == 0` triggers a check.
//!   The default mask (`0xFF`) checks approximately every 256 trials; a
//!   trial is a whole shuffle-and-sweep over the board, so checks can be
//!   much denser than a per-step filter would allow.
//! - `on_trial()` uses `wrapping_add` to increment trials at minimal cost.
//! - `trial_command()` returns `Halt(TimeLimitExpired)` once elapsed time
//!   exceeds the limit at a check point; otherwise `Continue`.
//! - Constructors: `new(time_limit)` and `with_clock_check_mask(time_limit, mask)`.
//!
//! ## Usage
//!
//! ```rust
//! use regatta_search::monitor::time_limit::TimeLimitMonitor;
//! use regatta_search::monitor::trial_monitor::{TrialCommand, TrialMonitor};
//! use std::time::Duration;
//!
//! let mut mon = TimeLimitMonitor::new(Duration::from_secs(5));
//! // In the trial loop:
//! mon.on_trial(); // after every failed trial
//! match mon.trial_command() {
//!     TrialCommand::Continue => { /* keep trying */ }
//!     TrialCommand::Halt(reason) => { /* stop: reason */ }
//! }
//! ```

use crate::monitor::trial_monitor::{HaltReason, TrialCommand, TrialMonitor};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLimitMonitor {
    clock_check_mask: u64,
    trials: u64,
    time_limit: std::time::Duration,
    start_time: std::time::Instant,
}

impl TimeLimitMonitor {
    /// Default mask: Check every 256 trials (2^8).
    /// 256 - 1 = 255 = 0xFF
    const DEFAULT_TRIAL_CLOCK_CHECK_MASK: u64 = 0xFF;

    #[inline]
    pub fn new(time_limit: std::time::Duration) -> Self {
        Self {
            clock_check_mask: Self::DEFAULT_TRIAL_CLOCK_CHECK_MASK,
            trials: 0,
            time_limit,
            start_time: std::time::Instant::now(),
        }
    }

    #[inline]
    pub fn with_clock_check_mask(time_limit: std::time::Duration, clock_check_mask: u64) -> Self {
        Self {
            clock_check_mask,
            trials: 0,
            time_limit,
            start_time: std::time::Instant::now(),
        }
    }
}

impl TrialMonitor for TimeLimitMonitor {
    fn name(&self) -> &str {
        "TimeLimitMonitor"
    }

    fn on_enter_solve(&mut self) {
        self.start_time = std::time::Instant::now();
        self.trials = 0;
    }

    fn on_exit_solve(&mut self) {}

    #[inline(always)]
    fn on_trial(&mut self) {
        self.trials = self.trials.wrapping_add(1);
    }

    #[inline(always)]
    fn trial_command(&self) -> TrialCommand {
        if (self.trials & self.clock_check_mask) == 0
            && self.start_time.elapsed() >= self.time_limit
        {
            return TrialCommand::Halt(HaltReason::TimeLimitExpired(self.time_limit));
        }
        TrialCommand::Continue
    }
}
