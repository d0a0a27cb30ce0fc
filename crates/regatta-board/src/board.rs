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

use crate::index::{ColIndex, RowIndex};
use rand::Rng;

/// A permutation board: one queen per row, `columns[row]` is its column.
///
/// Storing a permutation of `0..size` makes row and column conflicts
/// impossible by construction, so only the two diagonal directions ever
/// need checking. Constructors validate eagerly; `swap_rows` and `shuffle`
/// only permute, so the invariant holds for the lifetime of the value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// The column assigned to each row. Always a permutation of `0..size`.
    columns: Vec<ColIndex>,
}

impl Board {
    /// Constructs the identity board, placing the queen of row `r` in
    /// column `r`.
    ///
    /// The identity board is a valid permutation (though almost never a
    /// conflict-free placement) and is the usual starting point before
    /// [`shuffle`](Self::shuffle).
    pub fn identity(size: usize) -> Self {
        Self {
            columns: (0..size).map(ColIndex::new).collect(),
        }
    }

    /// Constructs a board from explicit column assignments.
    ///
    /// # Panics
    ///
    /// Panics if `columns` is not a permutation of `0..columns.len()`.
    pub fn from_columns(columns: Vec<ColIndex>) -> Self {
        let size = columns.len();
        let mut seen = vec![false; size];
        for (row, col) in columns.iter().enumerate() {
            assert!(
                col.get() < size,
                "called `Board::from_columns` with column index {} at row {} out of bounds for board size {}",
                col.get(),
                row,
                size
            );
            assert!(
                !seen[col.get()],
                "called `Board::from_columns` with duplicate column index {} at row {}",
                col.get(),
                row
            );
            seen[col.get()] = true;
        }

        Self { columns }
    }

    /// Returns the board size (number of rows, columns, and queens).
    #[inline]
    pub fn size(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the board has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the column of the queen in the given row.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `row` is out of bounds.
    #[inline]
    pub fn column_for_row(&self, row: RowIndex) -> ColIndex {
        let index = row.get();
        debug_assert!(
            index < self.size(),
            "called `Board::column_for_row` with row index out of bounds: the len is {} but the index is {}",
            self.size(),
            index
        );

        self.columns[index]
    }

    /// Returns a slice of column assignments for all rows.
    #[inline]
    pub fn columns(&self) -> &[ColIndex] {
        &self.columns
    }

    /// Swaps the queens of two rows. Permutation-preserving.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if either row is out of bounds.
    #[inline]
    pub fn swap_rows(&mut self, first: RowIndex, second: RowIndex) {
        debug_assert!(
            first.get() < self.size() && second.get() < self.size(),
            "called `Board::swap_rows` with row index out of bounds: the len is {} but the indices are {} and {}",
            self.size(),
            first.get(),
            second.get()
        );

        self.columns.swap(first.get(), second.get());
    }

    /// Shuffles the column assignments in place.
    ///
    /// Walks a shrinking prefix from the back: for each `limit` from `size`
    /// down to 2, draws a position uniformly from `0..limit` and swaps it
    /// with position `limit - 1`. Given a uniform source this yields every
    /// permutation with equal probability, and a fixed seed replays the
    /// exact same sequence of boards.
    pub fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        let mut limit = self.columns.len();
        while limit > 1 {
            let chosen = rng.random_range(0..limit);
            limit -= 1;
            self.columns.swap(limit, chosen);
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board[")?;
        for (row, col) in self.columns.iter().enumerate() {
            if row > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", col.get())?;
        }
        write!(f, "]")
    }
}
