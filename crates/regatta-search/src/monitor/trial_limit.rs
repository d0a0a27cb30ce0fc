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

//! # Trial Budget Monitor
//!
//! A trial monitor that tracks the number of failed trials across the whole
//! race using a shared `AtomicU64` counter, and optionally halts the solve
//! when a configured global budget is exhausted. Every worker carries its
//! own monitor instance, but all instances share one counter, so the
//! budget is global rather than per worker.
//!
//! ## Motivation
//!
//! A Las Vegas run on an unlucky seed can churn forever. Capping the total
//! number of trials gives callers a deterministic notion of "we tried hard
//! enough", independent of wall-clock speed, and one that benchmark runs
//! can compare across machines.
//!
//! ## Highlights
//!
//! - `TrialLimitMonitor<'a>` accepts a shared `&AtomicU64` and an optional
//!   `trial_limit`.
//! - Increments the counter on `on_trial`.
//! - `trial_command()` returns `Halt(TrialLimitExhausted)` once the shared
//!   counter meets or exceeds the budget; otherwise `Continue`.
//! - Convenience constructors: `new`, `with_limit`, and `without_limit`.
//!
//! ## Usage
//!
//! ```rust
//! use regatta_search::monitor::trial_limit::TrialLimitMonitor;
//! use regatta_search::monitor::trial_monitor::{TrialCommand, TrialMonitor};
//! use std::sync::atomic::AtomicU64;
//!
//! let failed_trials = AtomicU64::new(0);
//! let mut monitor = TrialLimitMonitor::with_limit(&failed_trials, 1_000_000);
//!
//! // After each failed trial:
//! monitor.on_trial();
//!
//! match monitor.trial_command() {
//!     TrialCommand::Continue => { /* keep trying */ }
//!     TrialCommand::Halt(reason) => { /* stop: reason */ }
//! }
//! ```

use crate::monitor::trial_monitor::{HaltReason, TrialCommand, TrialMonitor};
use std::sync::atomic::{AtomicU64, Ordering};

/// A monitor that halts the solve when a specified number of failed trials
/// has accumulated across all workers, or continues indefinitely if no
/// budget is set, just updating the trial count.
#[derive(Debug)]
pub struct TrialLimitMonitor<'a> {
    failed_trials: &'a AtomicU64,
    trial_limit: Option<u64>,
}

impl<'a> TrialLimitMonitor<'a> {
    /// Creates a new `TrialLimitMonitor`.
    #[inline]
    pub fn new(failed_trials: &'a AtomicU64, trial_limit: Option<u64>) -> Self {
        Self {
            failed_trials,
            trial_limit,
        }
    }

    /// Creates a new `TrialLimitMonitor` with a specified trial budget.
    #[inline]
    pub fn with_limit(failed_trials: &'a AtomicU64, limit: u64) -> Self {
        Self::new(failed_trials, Some(limit))
    }

    /// Creates a new `TrialLimitMonitor` without a trial budget.
    #[inline]
    pub fn without_limit(failed_trials: &'a AtomicU64) -> Self {
        Self::new(failed_trials, None)
    }
}

impl<'a> TrialMonitor for TrialLimitMonitor<'a> {
    fn name(&self) -> &str {
        "TrialLimitMonitor"
    }

    fn on_enter_solve(&mut self) {}

    fn on_exit_solve(&mut self) {}

    fn on_trial(&mut self) {
        self.failed_trials.fetch_add(1, Ordering::Relaxed);
    }

    fn trial_command(&self) -> TrialCommand {
        match self.trial_limit {
            Some(limit) if self.failed_trials.load(Ordering::Relaxed) >= limit => {
                TrialCommand::Halt(HaltReason::TrialLimitExhausted(limit))
            }
            _ => TrialCommand::Continue,
        }
    }
}
