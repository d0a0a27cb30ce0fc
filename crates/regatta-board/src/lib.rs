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

//! # Regatta Board
//!
//! Board representation and single-trial machinery for the N-queens
//! problem. Everything in this crate is sequential and allocation-shy; the
//! racing of many trials against each other lives in the layers above.
//!
//! ## Modules
//!
//! - [`index`]: Strongly typed row and column indices.
//! - [`board`]: The permutation board and its shuffle.
//! - [`occupancy`]: Constant-time diagonal conflict tracking.
//! - [`repair`]: The greedy sweep that turns one shuffle into one trial.
//! - [`validate`]: Trust-nothing validation of a finished board.
//!
//! ## Design Philosophy
//!
//! A board is a permutation of columns over rows, which bakes the row and
//! column constraints into the representation itself. A trial is then
//! nothing more than shuffle plus repair, and both are written to reuse
//! their buffers so a worker can run millions of trials without touching
//! the allocator.

pub mod board;
pub mod index;
pub mod occupancy;
pub mod repair;
pub mod validate;
