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

//! # Strongly Typed Indices (Zero-Cost)
//!
//! Concrete `usize` newtypes that prevent mixing indices from different
//! domains (rows vs. columns vs. workers). The `typed_index!` macro stamps
//! out one transparent wrapper per domain, so each index space gets its own
//! type while compiling down to a plain `usize` (no runtime overhead).
//!
//! ## Motivation
//!
//! The diagonal arithmetic at the heart of this crate mixes row and column
//! numbers in two different formulas. Raw `usize` invites swapping the two
//! and producing boards that look valid but are not. Distinct index types
//! turn that class of bug into a compile error with minimal ceremony.
//!
//! ## Highlights
//!
//! - `typed_index!` generates the struct plus `new`, `get`, and `is_zero`.
//! - `Display`/`Debug` render as `TypeName(index)` for readable diagnostics.
//! - Conversions: `From<usize>` and `From<TheIndex> for usize`.
//! - Zero-cost: `#[repr(transparent)]` over `usize`.
//!
//! ## Usage
//!
//! ```rust
//! use regatta_board::typed_index;
//!
//! typed_index! {
//!     /// Numbers the lanes of a race course.
//!     pub struct LaneIndex;
//! }
//!
//! let lane = LaneIndex::new(3);
//! assert_eq!(lane.get(), 3);
//! assert_eq!(format!("{}", lane), "LaneIndex(3)");
//! ```

/// Declares a strongly typed `usize` index for one index space.
///
/// The generated type is a `#[repr(transparent)]` wrapper with `new`, `get`,
/// and `is_zero`, `Display`/`Debug` rendering as `TypeName(index)`, and
/// `From` conversions to and from `usize`.
#[macro_export]
macro_rules! typed_index {
    ($(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis struct $name(usize);

        impl $name {
            /// Creates a new index from a raw `usize`.
            #[inline(always)]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Returns the underlying `usize` index.
            #[inline(always)]
            pub const fn get(&self) -> usize {
                self.0
            }

            /// Checks if the index is zero.
            #[inline(always)]
            pub const fn is_zero(&self) -> bool {
                self.0 == 0
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl ::std::convert::From<usize> for $name {
            fn from(index: usize) -> Self {
                Self::new(index)
            }
        }

        impl ::std::convert::From<$name> for usize {
            fn from(index: $name) -> Self {
                index.get()
            }
        }
    };
}

typed_index! {
    /// Identifies a row of the board. Row `r` holds exactly one queen.
    pub struct RowIndex;
}

typed_index! {
    /// Identifies a column of the board.
    pub struct ColIndex;
}
