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

//! # Shared Winner (First Solution Holder)
//!
//! A concurrent container for the first valid board found by a race of
//! workers. Unlike a best-so-far incumbent there is nothing to compare:
//! every candidate that reaches this point is already valid, so the race
//! is decided purely by arrival order and the first publication is final.
//!
//! ## Motivation
//!
//! - One winner, decided atomically: publication and the "is there a
//!   winner yet?" check must never be separate steps, or two workers could
//!   both believe they won.
//! - Cheap polling: workers poll between trials on a hot path, so the
//!   check is a single relaxed atomic load with no locking.
//!
//! ## Highlights
//!
//! - `try_publish(Board) -> bool` claims the race in one atomic step and
//!   tells the caller whether it was the claimant.
//! - `has_winner() -> bool` is the advisory fast check for worker loops.
//! - `winner()` / `into_winner()` read the published board, borrowed or
//!   owned.
//!
//! ## Usage
//!
//! ```rust
//! use regatta_board::board::Board;
//! use regatta_search::race::SharedWinner;
//!
//! let race = SharedWinner::new();
//! let candidate = Board::identity(1);
//!
//! if race.try_publish(candidate) {
//!     // This caller won the race
//! }
//!
//! let seen = race.has_winner();   // fast atomic read
//! let board = race.winner();      // optional borrowed board
//! # assert!(seen);
//! # assert!(board.is_some());
//! ```

use regatta_board::board::Board;
use std::sync::{OnceLock, atomic::AtomicBool};

/// A concurrent holder for the first board published by the race.
///
/// This structure maintains:
/// - an `AtomicBool` flag for fast, lock-free "winner exists" polling, and
/// - a `OnceLock<Board>` for the actual board, which is the source of truth.
///
/// Concurrency and memory ordering:
/// - The flag is loaded/stored with `Ordering::Relaxed`. This is sufficient
///   because it only serves as a hint for workers deciding whether to start
///   another trial; acting on a stale `false` costs at most one wasted
///   trial. The board itself is synchronized by the `OnceLock` (its `set`
///   and `get` form a release/acquire pair), so readers that go through
///   `winner` always see a fully initialized board.
/// - `OnceLock::set` succeeds for exactly one caller no matter how many
///   race for it, which makes "check then publish" a single step rather
///   than two.
#[derive(Debug)]
pub struct SharedWinner {
    /// Advisory flag set after publication for cheap polling.
    published: AtomicBool,

    /// The winning board. Empty until the race is decided, immutable after.
    board: OnceLock<Board>,
}

impl Default for SharedWinner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SharedWinner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SharedWinner(published: {})", self.has_winner())
    }
}

impl SharedWinner {
    /// Creates a new shared winner with no board published.
    #[inline]
    pub fn new() -> Self {
        SharedWinner {
            published: AtomicBool::new(false),
            board: OnceLock::new(),
        }
    }

    /// Returns whether some worker has already published a board.
    ///
    /// This is the advisory fast path; it may briefly lag behind a
    /// publication on another thread.
    #[inline]
    pub fn has_winner(&self) -> bool {
        self.published.load(std::sync::atomic::Ordering::Relaxed)
    }

    /// Attempts to publish `board` as the winner of the race.
    /// Returns `true` if this call won, `false` if another board was
    /// already published.
    ///
    /// The losing candidate is dropped; once the race is decided the
    /// outcome never changes.
    #[inline]
    pub fn try_publish(&self, board: Board) -> bool {
        let won = self.board.set(board).is_ok();
        if won {
            self.published
                .store(true, std::sync::atomic::Ordering::Relaxed);
        }
        won
    }

    /// Returns the published board, if the race has been decided.
    #[inline]
    pub fn winner(&self) -> Option<&Board> {
        self.board.get()
    }

    /// Consumes the holder and returns the published board, if any.
    #[inline]
    pub fn into_winner(self) -> Option<Board> {
        self.board.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::SharedWinner;
    use regatta_board::board::Board;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_initial_state() {
        let race = SharedWinner::new();
        assert!(!race.has_winner());
        assert!(race.winner().is_none());
        assert!(race.into_winner().is_none());
    }

    #[test]
    fn test_first_publish_wins() {
        let race = SharedWinner::new();

        assert!(race.try_publish(Board::identity(4)));
        assert!(race.has_winner());

        let winner = race.winner().expect("winner should be Some");
        assert_eq!(winner.size(), 4);
    }

    #[test]
    fn test_second_publish_is_rejected() {
        let race = SharedWinner::new();

        assert!(race.try_publish(Board::identity(4)));
        assert!(!race.try_publish(Board::identity(8)));

        // The winner is still the first board.
        assert_eq!(race.winner().expect("winner should be Some").size(), 4);
    }

    #[test]
    fn test_into_winner_returns_published_board() {
        let race = SharedWinner::new();
        assert!(race.try_publish(Board::identity(6)));
        assert_eq!(race.into_winner().expect("winner should be Some").size(), 6);
    }

    #[test]
    fn test_concurrent_publishes_exactly_one_wins() {
        let race = Arc::new(SharedWinner::new());

        // Each thread publishes a board of a distinct size so the winner
        // identifies which thread won.
        let mut handles = Vec::new();
        for size in 1..=64usize {
            let race_cloned = Arc::clone(&race);
            handles.push(thread::spawn(move || {
                race_cloned.try_publish(Board::identity(size))
            }));
        }

        let results = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect::<Vec<_>>();

        let winners = results.iter().filter(|&&won| won).count();
        assert_eq!(winners, 1, "exactly one publish should succeed");

        // The stored board belongs to the one thread that won.
        let winning_size = results.iter().position(|&won| won).unwrap() + 1;
        assert!(race.has_winner());
        assert_eq!(
            race.winner().expect("winner should be Some").size(),
            winning_size
        );
    }
}
