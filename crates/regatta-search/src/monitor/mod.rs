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

//! # Trial Monitors
//!
//! Pluggable observers and controllers for the trial loop of each worker.
//! Monitors enforce budgets (time, trials), relay external interrupts, and
//! issue halt commands that stop a worker between trials.
//!
//! ## Submodules
//!
//! - `trial_monitor`: Core trait (`TrialMonitor`), `TrialCommand` and
//!   `HaltReason`, defining lifecycle hooks and control flow.
//! - `composite`: Aggregate multiple monitors into a single composite.
//! - `interrupt`: Atomically-driven interrupt monitor for cross-thread stops.
//! - `trial_limit`: Failed-trial budget monitor with global count via `AtomicU64`.
//! - `time_limit`: Wall-clock time budget monitor with trial-filtered checks.
//!
//! ## Motivation
//!
//! A Las Vegas run terminates only when luck strikes, so every stopping
//! policy beyond "a worker won" is external to the trial loop. Monitors
//! keep those orthogonal concerns (budgets, cancellation) out of the hot
//! path of the workers themselves.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod composite;
pub mod interrupt;
pub mod time_limit;
pub mod trial_limit;
pub mod trial_monitor;
