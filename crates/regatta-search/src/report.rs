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

use crate::index::WorkerIndex;
use crate::monitor::trial_monitor::HaltReason;

/// How one worker's trial loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerOutcome {
    /// The worker published the winning board.
    Won,
    /// The worker stopped because another worker had already won.
    Yielded,
    /// A monitor halted the worker before any board was published.
    Halted(HaltReason),
}

impl std::fmt::Display for WorkerOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkerOutcome::Won => write!(f, "Won"),
            WorkerOutcome::Yielded => write!(f, "Yielded"),
            WorkerOutcome::Halted(reason) => write!(f, "Halted: {}", reason),
        }
    }
}

/// Summary of one worker's participation in the race.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerReport {
    worker: WorkerIndex,
    trials: u64,
    outcome: WorkerOutcome,
}

impl WorkerReport {
    /// Creates a new report for the given worker.
    #[inline]
    pub fn new(worker: WorkerIndex, trials: u64, outcome: WorkerOutcome) -> Self {
        Self {
            worker,
            trials,
            outcome,
        }
    }

    /// Returns the worker this report belongs to.
    #[inline]
    pub fn worker(&self) -> WorkerIndex {
        self.worker
    }

    /// Returns the number of trials the worker ran.
    #[inline]
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Returns how the worker's loop ended.
    #[inline]
    pub fn outcome(&self) -> WorkerOutcome {
        self.outcome
    }

    /// Returns `true` if this worker won the race.
    #[inline]
    pub fn is_winner(&self) -> bool {
        matches!(self.outcome, WorkerOutcome::Won)
    }

    /// Returns the halt reason if the worker was halted by a monitor.
    #[inline]
    pub fn halt_reason(&self) -> Option<HaltReason> {
        match self.outcome {
            WorkerOutcome::Halted(reason) => Some(reason),
            _ => None,
        }
    }
}

impl std::fmt::Display for WorkerReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Worker {}: {} after {} trials",
            self.worker.get(),
            self.outcome,
            self.trials
        )
    }
}
