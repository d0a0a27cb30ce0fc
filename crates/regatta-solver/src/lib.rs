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

//! # Regatta Solver
//!
//! High-level orchestration for the racing N-queens solver. This crate
//! spawns independent trial workers over the same instance, manages the
//! shared winner slot, and enforces termination via pluggable monitors.
//!
//! ## Modules
//!
//! - `solver`: Race orchestrator with a builder, per-worker monitor stacks,
//!   shared winner, a global trial counter, and unified outcome construction.
//!
//! ## Motivation
//!
//! A single Las Vegas trial stream succeeds after an unpredictable number
//! of attempts. Racing several independently seeded streams improves
//! time-to-solution and short-circuits as soon as any stream finds a
//! valid board.
//!
//! See `solver` for detailed APIs and examples.

pub mod solver;

mod seed;
mod worker;

pub use solver::solve;
