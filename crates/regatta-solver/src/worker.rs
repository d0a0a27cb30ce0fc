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

//! The trial loop one worker runs.
//!
//! Each iteration shuffles the board and attempts one greedy repair. The
//! loop checks the race and the monitors only between trials, so a halt or
//! a foreign win can overrun by at most one trial. Board and tracker are
//! allocated once and reused for every trial.

use rand::Rng;
use regatta_board::board::Board;
use regatta_board::occupancy::DiagonalOccupancy;
use regatta_board::repair::repair;
use regatta_search::index::WorkerIndex;
use regatta_search::monitor::trial_monitor::{TrialCommand, TrialMonitor};
use regatta_search::race::SharedWinner;
use regatta_search::report::{WorkerOutcome, WorkerReport};

/// Runs trials until this worker wins, another worker wins, or a monitor
/// halts the loop.
///
/// The trial count starts at 1 and grows by one per failed repair, so a
/// worker that succeeds on its first shuffle reports one trial. A worker
/// stopped before its first shuffle also reports one trial; the count is
/// the number of the trial the loop was on, not a completed-work tally.
pub(crate) fn run_worker<R, M>(
    worker: WorkerIndex,
    board_size: usize,
    race: &SharedWinner,
    rng: &mut R,
    monitor: &mut M,
) -> WorkerReport
where
    R: Rng + ?Sized,
    M: TrialMonitor,
{
    monitor.on_enter_solve();

    let mut board = Board::identity(board_size);
    let mut occupancy = DiagonalOccupancy::new(board_size);
    let mut trials: u64 = 1;

    let outcome = loop {
        if race.has_winner() {
            break WorkerOutcome::Yielded;
        }
        if let TrialCommand::Halt(reason) = monitor.trial_command() {
            break WorkerOutcome::Halted(reason);
        }

        board.shuffle(rng);
        if repair(&mut board, &mut occupancy) {
            if race.try_publish(board) {
                break WorkerOutcome::Won;
            }
            // Some other worker published first during this trial.
            break WorkerOutcome::Yielded;
        }

        trials += 1;
        monitor.on_trial();
    };

    monitor.on_exit_solve();

    let report = WorkerReport::new(worker, trials, outcome);
    log::debug!("{}", report);
    report
}

#[cfg(test)]
mod tests {
    use super::run_worker;
    use rand::{SeedableRng, rngs::StdRng};
    use regatta_board::board::Board;
    use regatta_board::validate::is_valid;
    use regatta_search::index::WorkerIndex;
    use regatta_search::monitor::composite::CompositeMonitor;
    use regatta_search::monitor::interrupt::InterruptMonitor;
    use regatta_search::monitor::trial_limit::TrialLimitMonitor;
    use regatta_search::monitor::trial_monitor::HaltReason;
    use regatta_search::race::SharedWinner;
    use regatta_search::report::WorkerOutcome;
    use std::sync::atomic::{AtomicBool, AtomicU64};

    #[test]
    fn test_worker_finds_and_publishes_a_valid_board() {
        let race = SharedWinner::new();
        let mut rng = StdRng::seed_from_u64(42);
        let mut monitor = CompositeMonitor::new();

        let report = run_worker(WorkerIndex::new(0), 8, &race, &mut rng, &mut monitor);

        assert_eq!(report.outcome(), WorkerOutcome::Won);
        assert!(report.trials() >= 1);

        let winner = race.winner().expect("winner should be Some");
        assert_eq!(winner.size(), 8);
        assert!(is_valid(winner));
    }

    #[test]
    fn test_worker_yields_when_race_is_already_decided() {
        let race = SharedWinner::new();
        assert!(race.try_publish(Board::identity(1)));

        let mut rng = StdRng::seed_from_u64(42);
        let mut monitor = CompositeMonitor::new();
        let report = run_worker(WorkerIndex::new(1), 8, &race, &mut rng, &mut monitor);

        assert_eq!(report.outcome(), WorkerOutcome::Yielded);
        // The loop never reached its first shuffle.
        assert_eq!(report.trials(), 1);
    }

    #[test]
    fn test_worker_halts_on_preset_interrupt() {
        let race = SharedWinner::new();
        let flag = AtomicBool::new(true);
        let mut monitor = CompositeMonitor::new();
        monitor.add_monitor(InterruptMonitor::new(&flag));

        let mut rng = StdRng::seed_from_u64(42);
        let report = run_worker(WorkerIndex::new(0), 20, &race, &mut rng, &mut monitor);

        assert_eq!(
            report.outcome(),
            WorkerOutcome::Halted(HaltReason::Interrupted)
        );
        assert_eq!(report.trials(), 1);
        assert!(race.winner().is_none());
    }

    #[test]
    fn test_worker_halts_on_exhausted_trial_budget() {
        let race = SharedWinner::new();
        let failed_trials = AtomicU64::new(0);
        let mut monitor = CompositeMonitor::new();
        monitor.add_monitor(TrialLimitMonitor::with_limit(&failed_trials, 0));

        let mut rng = StdRng::seed_from_u64(42);
        let report = run_worker(WorkerIndex::new(0), 20, &race, &mut rng, &mut monitor);

        assert_eq!(
            report.outcome(),
            WorkerOutcome::Halted(HaltReason::TrialLimitExhausted(0))
        );
        assert!(race.winner().is_none());
    }

    #[test]
    fn test_report_carries_the_worker_index() {
        let race = SharedWinner::new();
        let mut rng = StdRng::seed_from_u64(7);
        let mut monitor = CompositeMonitor::new();

        let report = run_worker(WorkerIndex::new(5), 4, &race, &mut rng, &mut monitor);
        assert_eq!(report.worker(), WorkerIndex::new(5));
    }
}
