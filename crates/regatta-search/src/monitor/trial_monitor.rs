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

use std::time::Duration;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HaltReason {
    Interrupted,
    TimeLimitExpired(Duration),
    TrialLimitExhausted(u64),
}

impl std::fmt::Display for HaltReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HaltReason::Interrupted => write!(f, "Interrupt signal received"),
            HaltReason::TimeLimitExpired(limit) => {
                write!(f, "Time limit of {:?} reached", limit)
            }
            HaltReason::TrialLimitExhausted(limit) => {
                write!(f, "Trial limit of {} exhausted", limit)
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TrialCommand {
    #[default]
    Continue,
    Halt(HaltReason),
}

impl std::fmt::Display for TrialCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrialCommand::Continue => write!(f, "Continue"),
            TrialCommand::Halt(reason) => write!(f, "Halt: {}", reason),
        }
    }
}

pub trait TrialMonitor {
    fn name(&self) -> &str;
    fn on_enter_solve(&mut self);
    fn on_exit_solve(&mut self);
    fn on_trial(&mut self);
    fn trial_command(&self) -> TrialCommand;
}

impl std::fmt::Debug for dyn TrialMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TrialMonitor({})", self.name())
    }
}

impl std::fmt::Display for dyn TrialMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TrialMonitor({})", self.name())
    }
}
