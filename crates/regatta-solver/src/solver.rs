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

//! # Racing Solver
//!
//! A high-level orchestrator that races multiple workers over the same
//! N-queens instance, collects the first valid board through a shared
//! winner slot, and enforces global stopping criteria via pluggable
//! monitors (time limit, trial budget, external interrupt).
//!
//! ## Motivation
//!
//! One trial either succeeds or fails; which one happens is pure luck.
//! Racing independent trial streams multiplies the per-step success
//! probability without any coordination beyond "did someone win yet?",
//! which makes workers embarrassingly parallel and the orchestration thin.
//!
//! ## Highlights
//!
//! - Race execution:
//!   - Spawn one worker per configured slot using `std::thread::scope`.
//!   - Build a `CompositeMonitor` per worker from the shared trial budget,
//!     an optional time limit, and an optional interrupt flag.
//! - Shared state:
//!   - `SharedWinner` holds the first published board (atomic flag + once-initialized slot).
//!   - A global `AtomicU64` counts failed trials across all workers.
//! - Outcome construction:
//!   - Aggregates worker reports into `SolveStatistics`, validates the
//!     winner, and maps halt reasons to `SolveError` when no one won.
//! - Builder pattern:
//!   - `SolverBuilder` to configure workers, budgets, interrupt flag and
//!     base seed.
//!
//! ## Usage
//!
//! ```rust
//! use regatta_solver::solver::SolverBuilder;
//!
//! let mut solver = SolverBuilder::new()
//!     .with_workers(2)
//!     .with_base_seed(42)
//!     .build();
//!
//! let outcome = solver.solve(8).expect("8-queens has solutions");
//! assert_eq!(outcome.solution().size(), 8);
//! println!("{}", outcome.statistics());
//! ```

use crate::seed::{clock_entropy, worker_seed};
use crate::worker::run_worker;
use rand::{SeedableRng, rngs::StdRng};
use regatta_board::validate::is_valid;
use regatta_search::{
    error::SolveError,
    index::WorkerIndex,
    monitor::{
        composite::CompositeMonitor, interrupt::InterruptMonitor, time_limit::TimeLimitMonitor,
        trial_limit::TrialLimitMonitor,
    },
    outcome::SolveOutcome,
    race::SharedWinner,
    report::WorkerReport,
    stats::SolveStatisticsBuilder,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Solves the given board size with the given number of workers and
/// otherwise default settings.
///
/// Convenience wrapper around [`SolverBuilder`] for the common case.
#[inline]
pub fn solve(board_size: usize, workers: usize) -> Result<SolveOutcome, SolveError> {
    SolverBuilder::new()
        .with_workers(workers)
        .build()
        .solve(board_size)
}

pub struct Solver {
    workers: usize,
    trial_limit: Option<u64>,
    time_limit: Option<std::time::Duration>,
    /// External flag that halts the race when set from another thread.
    interrupt: Option<Arc<AtomicBool>>,
    base_seed: Option<u64>,
    /// Global count of failed trials across all workers of one solve.
    failed_trials: AtomicU64,
}

impl Solver {
    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    #[inline]
    pub fn trial_limit(&self) -> Option<u64> {
        self.trial_limit
    }

    #[inline]
    pub fn has_trial_limit(&self) -> bool {
        self.trial_limit.is_some()
    }

    #[inline]
    pub fn time_limit(&self) -> Option<std::time::Duration> {
        self.time_limit
    }

    #[inline]
    pub fn has_time_limit(&self) -> bool {
        self.time_limit.is_some()
    }

    #[inline]
    pub fn base_seed(&self) -> Option<u64> {
        self.base_seed
    }

    pub fn solve(&mut self, board_size: usize) -> Result<SolveOutcome, SolveError> {
        if board_size == 0 {
            return Err(SolveError::InvalidBoardSize);
        }
        if self.workers == 0 {
            return Err(SolveError::InvalidWorkerCount);
        }
        // Sizes 2 and 3 have no solution; failing eagerly beats burning
        // the whole trial budget on them.
        if board_size == 2 || board_size == 3 {
            return Err(SolveError::UnsolvableBoardSize(board_size));
        }

        let start_time = std::time::Instant::now();

        // 1. Reset state for this run
        self.failed_trials.store(0, Ordering::Relaxed);
        let base_seed = self.base_seed.unwrap_or_else(clock_entropy);

        log::debug!(
            "starting solve: board size {}, {} workers, base seed {:#x}",
            board_size,
            self.workers,
            base_seed
        );

        // 2. Run the race
        let race = SharedWinner::new();
        let reports = self.run_workers(board_size, base_seed, &race);

        // 3. Construct the outcome
        let mut trials_per_worker = vec![0u64; self.workers];
        for report in &reports {
            trials_per_worker[report.worker().get()] = report.trials();
        }
        let winning_worker = reports
            .iter()
            .find(|report| report.is_winner())
            .map(WorkerReport::worker);

        let statistics = SolveStatisticsBuilder::new()
            .trials_per_worker(trials_per_worker)
            .winning_worker(winning_worker)
            .solve_duration(start_time.elapsed())
            .build();

        match race.into_winner() {
            Some(board) => {
                if !is_valid(&board) {
                    log::warn!("published winner failed validation: {}", board);
                    return Err(SolveError::CorruptWinner);
                }
                log::debug!(
                    "solve finished after {} trials in {:?}",
                    statistics.total_trials(),
                    statistics.solve_duration
                );
                Ok(SolveOutcome::new(board, statistics))
            }
            None => Err(self.halt_error(&reports)),
        }
    }

    /// Internal helper to spawn the workers and collect their reports.
    fn run_workers(
        &self,
        board_size: usize,
        base_seed: u64,
        race: &SharedWinner,
    ) -> Vec<WorkerReport> {
        // Capture references for threads
        let trial_limit = self.trial_limit;
        let time_limit = self.time_limit;
        let interrupt = self.interrupt.as_deref();
        let failed_trials = &self.failed_trials;

        let mut reports = Vec::with_capacity(self.workers);

        std::thread::scope(|scope| {
            let mut handles = Vec::with_capacity(self.workers);

            for index in 0..self.workers {
                let worker = WorkerIndex::new(index);
                let handle = scope.spawn(move || {
                    // 1. Build the monitor stack
                    let mut monitor = CompositeMonitor::new();

                    // The trial budget is global, so every worker shares
                    // the same failure counter.
                    monitor.add_monitor(TrialLimitMonitor::new(failed_trials, trial_limit));

                    if let Some(limit) = time_limit {
                        monitor.add_monitor(TimeLimitMonitor::new(limit));
                    }
                    if let Some(stop_flag) = interrupt {
                        monitor.add_monitor(InterruptMonitor::new(stop_flag));
                    }

                    // 2. Run the trial loop
                    let mut rng = StdRng::seed_from_u64(worker_seed(base_seed, worker));
                    run_worker(worker, board_size, race, &mut rng, &mut monitor)
                });
                handles.push(handle);
            }

            for handle in handles {
                reports.push(handle.join().expect("solver worker thread panicked"));
            }
        });

        reports
    }

    /// Maps the reports of a winnerless race to the error the caller sees.
    ///
    /// A race without a winner means every worker was halted by a monitor;
    /// the first halt reason found becomes the error.
    fn halt_error(&self, reports: &[WorkerReport]) -> SolveError {
        let halt = reports.iter().find_map(WorkerReport::halt_reason);
        debug_assert!(
            halt.is_some(),
            "called `Solver::halt_error` with no halted worker despite a missing winner"
        );
        halt.map_or(SolveError::Interrupted, SolveError::from)
    }
}

pub struct SolverBuilder {
    workers: usize,
    trial_limit: Option<u64>,
    time_limit: Option<std::time::Duration>,
    interrupt: Option<Arc<AtomicBool>>,
    base_seed: Option<u64>,
}

impl Default for SolverBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl SolverBuilder {
    /// Creates a builder with one worker per available CPU and no limits.
    #[inline]
    pub fn new() -> Self {
        Self {
            workers: std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get),
            trial_limit: None,
            time_limit: None,
            interrupt: None,
            base_seed: None,
        }
    }

    /// Sets the number of racing workers.
    #[inline]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Sets the global budget of failed trials across all workers.
    #[inline]
    pub fn with_trial_limit(mut self, limit: u64) -> Self {
        self.trial_limit = Some(limit);
        self
    }

    /// Sets the wall-clock budget for the whole solve.
    #[inline]
    pub fn with_time_limit(mut self, limit: std::time::Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Sets an external interrupt flag checked by every worker.
    #[inline]
    pub fn with_interrupt(mut self, interrupt: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(interrupt);
        self
    }

    /// Sets the base seed; solves with the same seed and a single worker
    /// replay the same trial sequence.
    #[inline]
    pub fn with_base_seed(mut self, base_seed: u64) -> Self {
        self.base_seed = Some(base_seed);
        self
    }

    #[inline]
    pub fn build(self) -> Solver {
        Solver {
            workers: self.workers,
            trial_limit: self.trial_limit,
            time_limit: self.time_limit,
            interrupt: self.interrupt,
            base_seed: self.base_seed,
            failed_trials: AtomicU64::new(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SolverBuilder, solve};
    use regatta_board::validate::is_valid;
    use regatta_search::error::SolveError;
    use regatta_search::index::WorkerIndex;
    use std::sync::Arc;
    use std::sync::atomic::AtomicBool;
    use std::time::Duration;

    #[test]
    fn test_solver_finds_valid_board() {
        let mut solver = SolverBuilder::new()
            .with_workers(4)
            .with_base_seed(42)
            .build();

        let outcome = solver.solve(8).expect("8-queens has solutions");
        assert!(is_valid(outcome.solution()));
        assert_eq!(outcome.solution().size(), 8);

        let stats = outcome.statistics();
        assert_eq!(stats.used_workers(), 4);
        assert!(stats.total_trials() >= 1);
        assert!(stats.winning_worker.is_some());
    }

    #[test]
    fn test_zero_board_size_is_rejected() {
        let mut solver = SolverBuilder::new().with_workers(2).build();
        assert_eq!(solver.solve(0), Err(SolveError::InvalidBoardSize));
    }

    #[test]
    fn test_zero_workers_are_rejected() {
        let mut solver = SolverBuilder::new().with_workers(0).build();
        assert_eq!(solver.solve(8), Err(SolveError::InvalidWorkerCount));
    }

    #[test]
    fn test_unsolvable_sizes_are_rejected_eagerly() {
        let mut solver = SolverBuilder::new().with_workers(2).build();
        assert_eq!(solver.solve(2), Err(SolveError::UnsolvableBoardSize(2)));
        assert_eq!(solver.solve(3), Err(SolveError::UnsolvableBoardSize(3)));
    }

    #[test]
    fn test_single_queen_board() {
        let mut solver = SolverBuilder::new().with_workers(1).build();

        let outcome = solver.solve(1).expect("1-queens is trivially solvable");
        assert_eq!(outcome.solution().size(), 1);

        let stats = outcome.statistics();
        assert_eq!(stats.total_trials(), 1);
        assert_eq!(stats.winning_worker, Some(WorkerIndex::new(0)));
    }

    #[test]
    fn test_seeded_single_worker_solve_is_reproducible() {
        let run = || {
            let mut solver = SolverBuilder::new()
                .with_workers(1)
                .with_base_seed(1234)
                .build();
            solver.solve(10).expect("10-queens has solutions")
        };

        let first = run();
        let second = run();

        assert_eq!(first.solution(), second.solution());
        assert_eq!(
            first.statistics().total_trials(),
            second.statistics().total_trials()
        );
    }

    #[test]
    fn test_preset_interrupt_stops_the_solve() {
        let flag = Arc::new(AtomicBool::new(true));
        let mut solver = SolverBuilder::new()
            .with_workers(2)
            .with_interrupt(Arc::clone(&flag))
            .build();

        assert_eq!(solver.solve(20), Err(SolveError::Interrupted));
    }

    #[test]
    fn test_zero_trial_limit_exhausts_immediately() {
        let mut solver = SolverBuilder::new()
            .with_workers(2)
            .with_trial_limit(0)
            .build();

        assert_eq!(
            solver.solve(20),
            Err(SolveError::TrialLimitExhausted { limit: 0 })
        );
    }

    #[test]
    fn test_zero_time_limit_expires_immediately() {
        let mut solver = SolverBuilder::new()
            .with_workers(2)
            .with_time_limit(Duration::ZERO)
            .build();

        assert_eq!(
            solver.solve(20),
            Err(SolveError::TimeLimitExpired {
                limit: Duration::ZERO
            })
        );
    }

    #[test]
    fn test_worker_counts_scale() {
        for workers in [1, 2, 8, 32] {
            let mut solver = SolverBuilder::new().with_workers(workers).build();
            let outcome = solver.solve(8).expect("8-queens has solutions");
            assert_eq!(outcome.statistics().used_workers(), workers);
            assert!(is_valid(outcome.solution()));
        }
    }

    #[test]
    fn test_solver_is_reusable_across_solves() {
        let mut solver = SolverBuilder::new()
            .with_workers(2)
            .with_base_seed(7)
            .build();

        let first = solver.solve(8).expect("8-queens has solutions");
        let second = solver.solve(12).expect("12-queens has solutions");

        assert_eq!(first.solution().size(), 8);
        assert_eq!(second.solution().size(), 12);
    }

    #[test]
    fn test_convenience_solve() {
        let outcome = solve(8, 2).expect("8-queens has solutions");
        assert!(is_valid(outcome.solution()));
    }

    #[test]
    fn test_builder_configures_the_solver() {
        let flag = Arc::new(AtomicBool::new(false));
        let solver = SolverBuilder::new()
            .with_workers(3)
            .with_trial_limit(500)
            .with_time_limit(Duration::from_secs(5))
            .with_interrupt(flag)
            .with_base_seed(99)
            .build();

        assert_eq!(solver.workers(), 3);
        assert_eq!(solver.trial_limit(), Some(500));
        assert!(solver.has_trial_limit());
        assert_eq!(solver.time_limit(), Some(Duration::from_secs(5)));
        assert!(solver.has_time_limit());
        assert_eq!(solver.base_seed(), Some(99));
    }

    #[test]
    fn test_default_builder_uses_at_least_one_worker() {
        let solver = SolverBuilder::new().build();
        assert!(solver.workers() >= 1);
        assert!(!solver.has_trial_limit());
        assert!(!solver.has_time_limit());
    }
}
