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

use crate::stats::SolveStatistics;
use regatta_board::board::Board;

/// A successful solve: the winning board plus the statistics of the race
/// that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    solution: Board,
    statistics: SolveStatistics,
}

impl SolveOutcome {
    /// Creates a new outcome from a winning board and its statistics.
    #[inline]
    pub fn new(solution: Board, statistics: SolveStatistics) -> Self {
        Self {
            solution,
            statistics,
        }
    }

    /// Returns the winning board.
    #[inline]
    pub fn solution(&self) -> &Board {
        &self.solution
    }

    /// Returns the statistics of the race.
    #[inline]
    pub fn statistics(&self) -> &SolveStatistics {
        &self.statistics
    }

    /// Consumes the outcome and returns board and statistics separately.
    #[inline]
    pub fn into_parts(self) -> (Board, SolveStatistics) {
        (self.solution, self.statistics)
    }

    /// Consumes the outcome and returns only the winning board.
    #[inline]
    pub fn into_solution(self) -> Board {
        self.solution
    }
}

#[cfg(test)]
mod tests {
    use super::SolveOutcome;
    use crate::index::WorkerIndex;
    use crate::stats::SolveStatisticsBuilder;
    use regatta_board::board::Board;
    use regatta_board::index::ColIndex;

    fn sample_outcome() -> SolveOutcome {
        let board = Board::from_columns(vec![
            ColIndex::new(1),
            ColIndex::new(3),
            ColIndex::new(0),
            ColIndex::new(2),
        ]);
        let stats = SolveStatisticsBuilder::new()
            .trials_per_worker(vec![4, 7])
            .winning_worker(Some(WorkerIndex::new(1)))
            .build();
        SolveOutcome::new(board, stats)
    }

    #[test]
    fn test_accessors_expose_board_and_statistics() {
        let outcome = sample_outcome();

        assert_eq!(outcome.solution().size(), 4);
        assert_eq!(outcome.statistics().total_trials(), 11);
        assert_eq!(
            outcome.statistics().winning_worker,
            Some(WorkerIndex::new(1))
        );
    }

    #[test]
    fn test_into_parts_splits_the_outcome() {
        let (board, stats) = sample_outcome().into_parts();
        assert_eq!(board.size(), 4);
        assert_eq!(stats.used_workers(), 2);
    }

    #[test]
    fn test_into_solution_keeps_only_the_board() {
        let board = sample_outcome().into_solution();
        assert_eq!(board.size(), 4);
    }
}
