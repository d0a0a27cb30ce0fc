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

//! # Greedy Diagonal Repair
//!
//! One trial of the Las Vegas scheme: take a random permutation board and
//! try to fix its diagonal conflicts with a single greedy top-to-bottom
//! sweep, swapping row assignments but never moving a queen out of its
//! column class.
//!
//! The sweep walks the rows in order and keeps a [`DiagonalOccupancy`]
//! prefix of everything placed so far. When the current row's queen is
//! attacked, its column is swapped with the column of a later row until one
//! swap resolves the attack; if no later row can help, the trial is a dead
//! end and the caller reshuffles. The sweep never revisits a settled row,
//! which is what makes a trial cheap and failure-prone in equal measure.

use crate::board::Board;
use crate::index::RowIndex;
use crate::occupancy::DiagonalOccupancy;

/// Attempts to repair `board` into a conflict-free placement in one greedy
/// sweep.
///
/// Returns `true` if the sweep settled every row, in which case `board`
/// holds a valid placement and `occupancy` holds its full diagonal image.
/// Returns `false` if some row ran out of swap partners; `board` is then
/// still a permutation, but an arbitrary one, and the caller is expected to
/// shuffle and try again.
///
/// The tracker is cleared on entry, so a dirty `occupancy` from an earlier
/// trial can be passed straight back in.
///
/// # Panics
///
/// Panics if `occupancy` was built for a different board size.
pub fn repair(board: &mut Board, occupancy: &mut DiagonalOccupancy) -> bool {
    assert_eq!(
        board.size(),
        occupancy.size(),
        "called `repair` with mismatched sizes: the board size is {} but the tracker size is {}",
        board.size(),
        occupancy.size()
    );

    if board.is_empty() {
        return true;
    }

    let size = board.size();
    occupancy.clear();

    // Row 0 can never conflict with an empty prefix.
    occupancy.occupy(RowIndex::new(0), board.column_for_row(RowIndex::new(0)));

    for row in 1..size {
        let current = RowIndex::new(row);
        let mut next = row + 1;
        while occupancy.is_attacked(current, board.column_for_row(current)) {
            if next == size {
                return false;
            }
            board.swap_rows(current, RowIndex::new(next));
            next += 1;
        }
        occupancy.occupy(current, board.column_for_row(current));
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::ColIndex;
    use crate::validate::is_valid;
    use rand::{SeedableRng, rngs::StdRng};

    fn board_from(columns: &[usize]) -> Board {
        Board::from_columns(columns.iter().copied().map(ColIndex::new).collect())
    }

    #[test]
    fn test_repair_fixes_a_repairable_board() {
        // Row 1 of [1, 0, 3, 2] is attacked; swapping it with row 2
        // resolves the sweep and ends on [1, 3, 0, 2].
        let mut board = board_from(&[1, 0, 3, 2]);
        let mut occupancy = DiagonalOccupancy::new(4);

        assert!(repair(&mut board, &mut occupancy));
        assert_eq!(board, board_from(&[1, 3, 0, 2]));
        assert!(is_valid(&board));
    }

    #[test]
    fn test_repair_keeps_a_valid_board_unchanged() {
        let mut board = board_from(&[1, 3, 0, 2]);
        let mut occupancy = DiagonalOccupancy::new(4);

        assert!(repair(&mut board, &mut occupancy));
        assert_eq!(board, board_from(&[1, 3, 0, 2]));
    }

    #[test]
    fn test_repair_fails_when_no_swap_helps() {
        // Two queens on a 2x2 board always share a diagonal.
        let mut board = board_from(&[0, 1]);
        let mut occupancy = DiagonalOccupancy::new(2);
        assert!(!repair(&mut board, &mut occupancy));
    }

    #[test]
    fn test_repair_fails_on_three_queens() {
        // Size 3 has no solution at all, so every start must fail.
        for columns in [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]] {
            let mut board = board_from(&columns);
            let mut occupancy = DiagonalOccupancy::new(3);
            assert!(!repair(&mut board, &mut occupancy));
        }
    }

    #[test]
    fn test_repair_result_is_still_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut board = Board::identity(6);
        let mut occupancy = DiagonalOccupancy::new(6);

        for _ in 0..100 {
            board.shuffle(&mut rng);
            repair(&mut board, &mut occupancy);

            let mut seen = vec![false; board.size()];
            for col in board.columns() {
                assert!(!seen[col.get()]);
                seen[col.get()] = true;
            }
        }
    }

    #[test]
    fn test_successful_repair_always_yields_valid_board() {
        let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
        let mut board = Board::identity(8);
        let mut occupancy = DiagonalOccupancy::new(8);
        let mut successes = 0;

        for _ in 0..1000 {
            board.shuffle(&mut rng);
            if repair(&mut board, &mut occupancy) {
                assert!(is_valid(&board));
                successes += 1;
            }
        }

        // Roughly one in three trials succeeds at size 8; a thousand
        // shuffles without a single success would be astronomical.
        assert!(successes > 0);
    }

    #[test]
    fn test_repair_trivial_sizes() {
        let mut empty = Board::identity(0);
        assert!(repair(&mut empty, &mut DiagonalOccupancy::new(0)));

        let mut single = Board::identity(1);
        assert!(repair(&mut single, &mut DiagonalOccupancy::new(1)));
        assert_eq!(single.column_for_row(RowIndex::new(0)), ColIndex::new(0));
    }

    #[test]
    #[should_panic(expected = "mismatched sizes")]
    fn test_repair_panics_on_size_mismatch() {
        let mut board = Board::identity(4);
        let mut occupancy = DiagonalOccupancy::new(5);
        repair(&mut board, &mut occupancy);
    }
}
