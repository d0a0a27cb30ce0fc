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

//! # Diagonal Occupancy Tracking
//!
//! Constant-time conflict bookkeeping for the two diagonal directions of a
//! permutation board. Because the board stores a permutation, rows and
//! columns can never collide; the diagonals are the only thing left to
//! track, and each direction of an `N x N` board has exactly `2N - 1`
//! distinct lines.
//!
//! A queen at `(row, col)` sits on diagonal `row - col + N - 1` (offset so
//! the index is never negative) and on anti-diagonal `row + col`. Two bit
//! sets of length `2N - 1` therefore answer "is this square attacked?" with
//! two bit probes.
//!
//! The tracker is designed to be reused: `clear` resets both bit sets
//! without reallocating, and a cleared tracker is indistinguishable from a
//! freshly constructed one.

use crate::index::{ColIndex, RowIndex};
use fixedbitset::FixedBitSet;

/// Occupancy bits for the diagonals and anti-diagonals of one board.
///
/// The state is a pure function of the `occupy` calls since the last
/// `clear`: marking is idempotent and there is no way to unmark a single
/// line. Callers that walk a board row by row get the prefix view they
/// need for greedy repair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagonalOccupancy {
    /// Board size the indices below are computed against.
    size: usize,
    /// One bit per diagonal (`row - col` direction).
    diagonals: FixedBitSet,
    /// One bit per anti-diagonal (`row + col` direction).
    anti_diagonals: FixedBitSet,
}

impl DiagonalOccupancy {
    /// Creates an empty tracker for a board of the given size.
    pub fn new(size: usize) -> Self {
        let lines = Self::line_count_for(size);
        Self {
            size,
            diagonals: FixedBitSet::with_capacity(lines),
            anti_diagonals: FixedBitSet::with_capacity(lines),
        }
    }

    /// Returns the board size this tracker was built for.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of distinct lines per diagonal direction.
    #[inline]
    pub fn line_count(&self) -> usize {
        Self::line_count_for(self.size)
    }

    /// Number of distinct diagonals of one direction on a `size` board.
    #[inline]
    const fn line_count_for(size: usize) -> usize {
        // 2 * size - 1, kept total for size 0.
        size.saturating_mul(2).saturating_sub(1)
    }

    /// Marks both lines through `(row, col)` as occupied.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `row` or `col` is out of bounds.
    #[inline]
    pub fn occupy(&mut self, row: RowIndex, col: ColIndex) {
        debug_assert!(
            row.get() < self.size && col.get() < self.size,
            "called `DiagonalOccupancy::occupy` with square out of bounds: the board size is {} but the square is ({}, {})",
            self.size,
            row.get(),
            col.get()
        );

        self.diagonals.insert(self.diagonal_index(row, col));
        self.anti_diagonals.insert(self.anti_diagonal_index(row, col));
    }

    /// Checks whether a queen at `(row, col)` would share a diagonal or
    /// anti-diagonal with any previously occupied square.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `row` or `col` is out of bounds.
    #[inline]
    pub fn is_attacked(&self, row: RowIndex, col: ColIndex) -> bool {
        debug_assert!(
            row.get() < self.size && col.get() < self.size,
            "called `DiagonalOccupancy::is_attacked` with square out of bounds: the board size is {} but the square is ({}, {})",
            self.size,
            row.get(),
            col.get()
        );

        self.diagonals.contains(self.diagonal_index(row, col))
            || self.anti_diagonals.contains(self.anti_diagonal_index(row, col))
    }

    /// Clears all occupancy bits, keeping the allocations.
    #[inline]
    pub fn clear(&mut self) {
        self.diagonals.clear();
        self.anti_diagonals.clear();
    }

    /// Index of the diagonal through `(row, col)`.
    ///
    /// The raw difference `row - col` spans `-(size - 1) ..= size - 1`;
    /// adding `size - 1` shifts it into `0 .. 2 * size - 1`. Computed in
    /// addition-first order so the intermediate never underflows.
    #[inline]
    fn diagonal_index(&self, row: RowIndex, col: ColIndex) -> usize {
        row.get() + self.size - 1 - col.get()
    }

    /// Index of the anti-diagonal through `(row, col)`.
    #[inline]
    fn anti_diagonal_index(&self, row: RowIndex, col: ColIndex) -> usize {
        row.get() + col.get()
    }
}

impl std::fmt::Display for DiagonalOccupancy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DiagonalOccupancy(size: {}, occupied: {}/{})",
            self.size,
            self.diagonals.count_ones(..) + self.anti_diagonals.count_ones(..),
            2 * self.line_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ci(i: usize) -> ColIndex {
        ColIndex::new(i)
    }

    fn ri(i: usize) -> RowIndex {
        RowIndex::new(i)
    }

    #[test]
    fn test_line_count() {
        assert_eq!(DiagonalOccupancy::new(0).line_count(), 0);
        assert_eq!(DiagonalOccupancy::new(1).line_count(), 1);
        assert_eq!(DiagonalOccupancy::new(8).line_count(), 15);
    }

    #[test]
    fn test_fresh_tracker_has_no_attacks() {
        let occupancy = DiagonalOccupancy::new(4);
        for row in 0..4 {
            for col in 0..4 {
                assert!(!occupancy.is_attacked(ri(row), ci(col)));
            }
        }
    }

    #[test]
    fn test_shared_diagonal_is_attacked() {
        let mut occupancy = DiagonalOccupancy::new(4);
        occupancy.occupy(ri(0), ci(0));

        // (1, 1) shares the diagonal with (0, 0).
        assert!(occupancy.is_attacked(ri(1), ci(1)));
        // (1, 0) shares neither line with (0, 0).
        assert!(!occupancy.is_attacked(ri(1), ci(0)));
    }

    #[test]
    fn test_shared_anti_diagonal_is_attacked() {
        let mut occupancy = DiagonalOccupancy::new(4);
        occupancy.occupy(ri(0), ci(3));

        // (1, 2) shares the anti-diagonal with (0, 3).
        assert!(occupancy.is_attacked(ri(1), ci(2)));
        assert!(occupancy.is_attacked(ri(2), ci(1)));
        assert!(occupancy.is_attacked(ri(3), ci(0)));
        // (1, 3) sits one anti-diagonal further out.
        assert!(!occupancy.is_attacked(ri(1), ci(3)));
    }

    #[test]
    fn test_column_conflicts_are_not_tracked() {
        // Columns are the permutation invariant's job, not the tracker's.
        let mut occupancy = DiagonalOccupancy::new(4);
        occupancy.occupy(ri(0), ci(1));
        assert!(!occupancy.is_attacked(ri(2), ci(1)));
    }

    #[test]
    fn test_occupy_is_idempotent() {
        let mut occupancy = DiagonalOccupancy::new(4);
        occupancy.occupy(ri(0), ci(0));
        let snapshot = occupancy.clone();
        occupancy.occupy(ri(0), ci(0));
        assert_eq!(occupancy, snapshot);
    }

    #[test]
    fn test_clear_resets_to_fresh_state() {
        let mut occupancy = DiagonalOccupancy::new(4);
        occupancy.occupy(ri(0), ci(0));
        occupancy.occupy(ri(1), ci(3));
        occupancy.clear();

        assert_eq!(occupancy, DiagonalOccupancy::new(4));
        assert!(!occupancy.is_attacked(ri(1), ci(1)));
    }

    #[test]
    fn test_display_formatting() {
        let mut occupancy = DiagonalOccupancy::new(4);
        occupancy.occupy(ri(0), ci(0));
        assert_eq!(
            format!("{}", occupancy),
            "DiagonalOccupancy(size: 4, occupied: 2/14)"
        );
    }
}
