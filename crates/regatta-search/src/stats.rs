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

/// Statistics collected during one solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveStatistics {
    /// Number of trials each worker ran, indexed by worker.
    pub trials_per_worker: Vec<u64>,
    /// Worker that published the winning board, if any worker won.
    pub winning_worker: Option<WorkerIndex>,
    /// Total duration of the solve.
    pub solve_duration: std::time::Duration,
}

impl SolveStatistics {
    /// Returns the number of workers that took part in the solve.
    #[inline]
    pub fn used_workers(&self) -> usize {
        self.trials_per_worker.len()
    }

    /// Returns the total number of trials across all workers.
    #[inline]
    pub fn total_trials(&self) -> u64 {
        self.trials_per_worker.iter().sum()
    }

    /// Returns the number of trials the given worker ran.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `worker` is out of bounds.
    #[inline]
    pub fn trials_for_worker(&self, worker: WorkerIndex) -> u64 {
        debug_assert!(
            worker.get() < self.trials_per_worker.len(),
            "called `SolveStatistics::trials_for_worker` with worker index out of bounds: the len is {} but the index is {}",
            self.trials_per_worker.len(),
            worker.get()
        );

        self.trials_per_worker[worker.get()]
    }
}

impl std::fmt::Display for SolveStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solve Statistics:")?;
        writeln!(f, "  Workers Used: {}", self.used_workers())?;
        writeln!(f, "  Total Trials: {}", self.total_trials())?;
        match self.winning_worker {
            Some(worker) => writeln!(f, "  Winning Worker: {}", worker.get())?,
            None => writeln!(f, "  Winning Worker: none")?,
        }
        writeln!(
            f,
            "  Solve Duration (msec): {:.3}",
            self.solve_duration.as_secs_f64() * 1000.0
        )?;
        writeln!(f, "  Trials per Worker:")?;
        for (worker, trials) in self.trials_per_worker.iter().enumerate() {
            writeln!(f, "    Worker {}: {}", worker, trials)?;
        }
        Ok(())
    }
}

/// Builder for `SolveStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveStatisticsBuilder {
    trials_per_worker: Vec<u64>,
    winning_worker: Option<WorkerIndex>,
    solve_duration: std::time::Duration,
}

impl Default for SolveStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SolveStatisticsBuilder {
    /// Creates a new `SolveStatisticsBuilder` with default values.
    #[inline]
    pub fn new() -> Self {
        Self {
            trials_per_worker: Vec::new(),
            winning_worker: None,
            solve_duration: std::time::Duration::ZERO,
        }
    }

    /// Sets the per-worker trial counts.
    #[inline]
    pub fn trials_per_worker(mut self, trials_per_worker: Vec<u64>) -> Self {
        self.trials_per_worker = trials_per_worker;
        self
    }

    /// Sets the winning worker, if any.
    #[inline]
    pub fn winning_worker(mut self, winning_worker: Option<WorkerIndex>) -> Self {
        self.winning_worker = winning_worker;
        self
    }

    /// Sets the total solve duration.
    #[inline]
    pub fn solve_duration(mut self, solve_duration: std::time::Duration) -> Self {
        self.solve_duration = solve_duration;
        self
    }

    /// Builds the `SolveStatistics` instance.
    #[inline]
    pub fn build(self) -> SolveStatistics {
        SolveStatistics {
            trials_per_worker: self.trials_per_worker,
            winning_worker: self.winning_worker,
            solve_duration: self.solve_duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SolveStatistics;
    use super::SolveStatisticsBuilder;
    use crate::index::WorkerIndex;
    use std::time::Duration;

    #[test]
    fn builder_constructs_expected_struct() {
        let stats = SolveStatisticsBuilder::new()
            .trials_per_worker(vec![10, 9, 18])
            .winning_worker(Some(WorkerIndex::new(2)))
            .solve_duration(Duration::from_millis(1234))
            .build();

        assert_eq!(stats.trials_per_worker, vec![10, 9, 18]);
        assert_eq!(stats.winning_worker, Some(WorkerIndex::new(2)));
        assert_eq!(stats.solve_duration, Duration::from_millis(1234));
    }

    #[test]
    fn test_accessors_aggregate_per_worker_counts() {
        let stats = SolveStatisticsBuilder::new()
            .trials_per_worker(vec![10, 9, 18])
            .build();

        assert_eq!(stats.used_workers(), 3);
        assert_eq!(stats.total_trials(), 37);
        assert_eq!(stats.trials_for_worker(WorkerIndex::new(1)), 9);
    }

    #[test]
    fn test_display_formats_all_fields() {
        let stats = SolveStatistics {
            trials_per_worker: vec![10, 9],
            winning_worker: Some(WorkerIndex::new(1)),
            solve_duration: Duration::from_millis(1234),
        };

        let rendered = format!("{}", stats);

        // Header line
        assert!(rendered.contains("Solve Statistics:"), "missing header");

        // Fields
        assert!(rendered.contains("Workers Used: 2"), "missing used_workers");
        assert!(rendered.contains("Total Trials: 19"), "missing total_trials");
        assert!(
            rendered.contains("Winning Worker: 1"),
            "missing winning_worker"
        );
        assert!(rendered.contains("Worker 0: 10"), "missing per-worker line");
        assert!(rendered.contains("Worker 1: 9"), "missing per-worker line");

        // Duration line should be in milliseconds with three decimals
        assert!(
            rendered.contains("Solve Duration (msec): 1234.000"),
            "duration not formatted to 3 decimals"
        );
    }

    #[test]
    fn test_display_handles_missing_winner_and_zero_values() {
        let stats = SolveStatistics {
            trials_per_worker: Vec::new(),
            winning_worker: None,
            solve_duration: Duration::ZERO,
        };

        let rendered = format!("{}", stats);

        assert!(rendered.contains("Workers Used: 0"));
        assert!(rendered.contains("Total Trials: 0"));
        assert!(rendered.contains("Winning Worker: none"));
        assert!(rendered.contains("Solve Duration (msec): 0.000"));
    }
}
