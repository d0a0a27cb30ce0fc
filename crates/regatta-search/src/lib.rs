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

//! # Regatta Search
//!
//! **The Racing Layer of the Regatta N-Queens Solver.**
//!
//! This crate defines everything the concurrent race needs besides the
//! trials themselves: the shared winner slot, the monitors that stop
//! workers, and the report and statistics types the solver assembles after
//! the race.
//!
//! ## Architecture
//!
//! * **`race`**: The `SharedWinner` slot where the first valid board is published, atomically and exactly once.
//! * **`monitor`**: Pluggable stopping policies (`TrialMonitor`), composed per worker from interrupt flags, time budgets and trial budgets.
//! * **`index`**: Strongly-typed `WorkerIndex` so per-worker data cannot be mixed up with board coordinates.
//! * **`report`** / **`stats`**: Per-worker reports and the aggregated `SolveStatistics` of one race.
//! * **`outcome`** / **`error`**: The two halves of a solve's `Result`.
//!
//! ## Design Philosophy
//!
//! 1.  **Exactly one winner**: Publication goes through a `OnceLock`, so "check then publish" is a single atomic step no interleaving can split.
//! 2.  **Stopping is external**: A Las Vegas trial loop has no natural end, so every stopping policy is a monitor that the loop polls between trials.
//! 3.  **Workers stay dumb**: Workers return plain reports; interpretation (which error, which statistics) happens once, after the race.

pub mod error;
pub mod index;
pub mod monitor;
pub mod outcome;
pub mod race;
pub mod report;
pub mod stats;
