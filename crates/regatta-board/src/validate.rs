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

//! Full-board validation, independent of the repair sweep's bookkeeping.

use crate::board::Board;
use crate::index::RowIndex;
use crate::occupancy::DiagonalOccupancy;

/// Checks whether `board` is a conflict-free placement.
///
/// The permutation invariant already rules out row and column attacks, so
/// only the diagonals are examined. The check builds its own
/// [`DiagonalOccupancy`] from scratch rather than trusting any tracker
/// state a trial may have left behind.
///
/// An empty board is trivially valid.
pub fn is_valid(board: &Board) -> bool {
    let mut occupancy = DiagonalOccupancy::new(board.size());

    for row in 0..board.size() {
        let current = RowIndex::new(row);
        let col = board.column_for_row(current);
        if occupancy.is_attacked(current, col) {
            return false;
        }
        occupancy.occupy(current, col);
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::ColIndex;
    use crate::occupancy::DiagonalOccupancy;
    use crate::repair::repair;
    use rand::{SeedableRng, rngs::StdRng};

    fn board_from(columns: &[usize]) -> Board {
        Board::from_columns(columns.iter().copied().map(ColIndex::new).collect())
    }

    /// Reference check that compares every pair of queens directly.
    fn is_valid_by_pairs(board: &Board) -> bool {
        let columns = board.columns();
        for first in 0..columns.len() {
            for second in (first + 1)..columns.len() {
                let row_distance = second - first;
                let col_distance = columns[first].get().abs_diff(columns[second].get());
                if row_distance == col_distance {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn test_valid_boards_are_accepted() {
        assert!(is_valid(&board_from(&[1, 3, 0, 2])));
        assert!(is_valid(&board_from(&[2, 0, 3, 1])));
        assert!(is_valid(&board_from(&[0, 2, 4, 1, 3])));
    }

    #[test]
    fn test_diagonal_conflicts_are_rejected() {
        // The identity permutation puts every queen on the main diagonal.
        assert!(!is_valid(&board_from(&[0, 1, 2, 3])));
        assert!(!is_valid(&board_from(&[1, 0, 3, 2])));
    }

    #[test]
    fn test_trivial_boards_are_valid() {
        assert!(is_valid(&Board::identity(0)));
        assert!(is_valid(&Board::identity(1)));
    }

    #[test]
    fn test_agrees_with_pairwise_check() {
        let mut rng = StdRng::seed_from_u64(123456);

        for size in 4..=16 {
            let mut board = Board::identity(size);
            for _ in 0..200 {
                board.shuffle(&mut rng);
                assert_eq!(
                    is_valid(&board),
                    is_valid_by_pairs(&board),
                    "checkers disagree on {}",
                    board
                );
            }
        }
    }

    #[test]
    fn test_every_repaired_board_validates() {
        let mut rng = StdRng::seed_from_u64(42);

        for size in 4..=16 {
            let mut board = Board::identity(size);
            let mut occupancy = DiagonalOccupancy::new(size);

            // Shuffle until one trial succeeds; sizes this small never
            // need anywhere near the attempt bound.
            let mut repaired = false;
            for _ in 0..10_000 {
                board.shuffle(&mut rng);
                if repair(&mut board, &mut occupancy) {
                    repaired = true;
                    break;
                }
            }

            assert!(repaired, "no trial succeeded for size {}", size);
            assert!(is_valid(&board));
        }
    }
}
