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

//! Error taxonomy for the racing layer.

use crate::monitor::trial_monitor::HaltReason;
use thiserror::Error;

/// Everything that can go wrong during a solve.
///
/// The limit variants mirror [`HaltReason`]: when every worker is halted by
/// its monitors without a winner, the first halt reason observed becomes
/// the error the caller sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The requested board size was zero.
    #[error("board size must be at least 1")]
    InvalidBoardSize,

    /// The requested worker count was zero.
    #[error("worker count must be at least 1")]
    InvalidWorkerCount,

    /// The board size has no solution, so no amount of trials can help.
    #[error("no solution exists for board size {0}")]
    UnsolvableBoardSize(usize),

    /// An external interrupt stopped the solve before a worker won.
    #[error("solve interrupted before a solution was found")]
    Interrupted,

    /// The wall-clock budget expired before a worker won.
    #[error("time limit of {limit:?} expired before a solution was found")]
    TimeLimitExpired { limit: std::time::Duration },

    /// The global trial budget ran out before a worker won.
    #[error("trial limit of {limit} exhausted before a solution was found")]
    TrialLimitExhausted { limit: u64 },

    /// The published winner failed validation. This indicates a defect in
    /// the repair sweep and should never happen.
    #[error("published winner failed validation")]
    CorruptWinner,
}

impl From<HaltReason> for SolveError {
    fn from(reason: HaltReason) -> Self {
        match reason {
            HaltReason::Interrupted => SolveError::Interrupted,
            HaltReason::TimeLimitExpired(limit) => SolveError::TimeLimitExpired { limit },
            HaltReason::TrialLimitExhausted(limit) => SolveError::TrialLimitExhausted { limit },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SolveError;
    use crate::monitor::trial_monitor::HaltReason;
    use std::time::Duration;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SolveError::InvalidBoardSize.to_string(),
            "board size must be at least 1"
        );
        assert_eq!(
            SolveError::UnsolvableBoardSize(3).to_string(),
            "no solution exists for board size 3"
        );
        assert_eq!(
            SolveError::TrialLimitExhausted { limit: 500 }.to_string(),
            "trial limit of 500 exhausted before a solution was found"
        );
        assert!(
            SolveError::TimeLimitExpired {
                limit: Duration::from_secs(5)
            }
            .to_string()
            .contains("time limit"),
        );
    }

    #[test]
    fn test_halt_reasons_map_to_errors() {
        assert_eq!(
            SolveError::from(HaltReason::Interrupted),
            SolveError::Interrupted
        );
        assert_eq!(
            SolveError::from(HaltReason::TimeLimitExpired(Duration::from_secs(1))),
            SolveError::TimeLimitExpired {
                limit: Duration::from_secs(1)
            }
        );
        assert_eq!(
            SolveError::from(HaltReason::TrialLimitExhausted(42)),
            SolveError::TrialLimitExhausted { limit: 42 }
        );
    }
}
