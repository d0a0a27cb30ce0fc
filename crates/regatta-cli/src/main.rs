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

//! # Regatta CLI
//!
//! Command-line front end for the racing N-queens solver. Board size and
//! worker count come from positional arguments or an interactive prompt;
//! budgets, seeding, board rendering and CSV logging are opt-in flags.

use anyhow::Context;
use clap::Parser;
use regatta_board::board::Board;
use regatta_board::index::RowIndex;
use regatta_search::outcome::SolveOutcome;
use regatta_solver::solver::SolverBuilder;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "regatta")]
#[command(about = "Concurrent Las Vegas N-queens solver")]
#[command(version)]
struct Args {
    /// Number of queens (prompted for when omitted)
    queens: Option<usize>,

    /// Number of racing worker threads (prompted for when omitted)
    workers: Option<usize>,

    /// Wall-clock budget for the solve in milliseconds
    #[arg(long, value_name = "MS")]
    time_limit_ms: Option<u64>,

    /// Budget of failed trials summed across all workers
    #[arg(long, value_name = "N")]
    trial_limit: Option<u64>,

    /// Base seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Append a result record to this CSV file
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Print the solved board as an ASCII grid
    #[arg(long)]
    show_board: bool,
}

// --- Console Dialog ---

/// Prints the prompt without a newline and parses one line of input.
fn prompt_usize(prompt: &str) -> anyhow::Result<usize> {
    print!("{}", prompt);
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    line.trim()
        .parse()
        .with_context(|| format!("expected a number, got {:?}", line.trim()))
}

// --- Reporting ---

/// Trials per millisecond and milliseconds per trial, zero when the
/// denominator would make the ratio meaningless.
fn ratios(trials: u64, elapsed_ms: f64) -> (f64, f64) {
    let trials_per_ms = if elapsed_ms > 0.0 {
        trials as f64 / elapsed_ms
    } else {
        0.0
    };
    let ms_per_trial = if trials > 0 {
        elapsed_ms / trials as f64
    } else {
        0.0
    };
    (trials_per_ms, ms_per_trial)
}

fn print_report(outcome: &SolveOutcome) {
    let stats = outcome.statistics();
    let elapsed_ms = stats.solve_duration.as_secs_f64() * 1000.0;
    let total = stats.total_trials();
    let (trials_per_ms, ms_per_trial) = ratios(total, elapsed_ms);

    println!("Valid solution found in {:.0} msec.", elapsed_ms);
    println!("Trial solutions checked:");
    for (worker, trials) in stats.trials_per_worker.iter().enumerate() {
        println!("Thread {}:  {}", worker, trials);
    }
    println!(
        "   Total:  {};  ratios:  {:.3}  {:.3}",
        total, trials_per_ms, ms_per_trial
    );
}

/// Renders the board as a grid of `Q` and `.` cells, one row per line.
fn render_board(board: &Board) -> String {
    let size = board.size();
    let mut grid = String::new();
    for row in 0..size {
        let queen_col = board.column_for_row(RowIndex::new(row)).get();
        let cells: Vec<&str> = (0..size)
            .map(|col| if col == queen_col { "Q" } else { "." })
            .collect();
        grid.push_str(&cells.join(" "));
        grid.push('\n');
    }
    grid
}

// --- CSV Logging ---

/// One record: queens, workers, trials, elapsed msec, trials per msec,
/// msec per trial.
fn csv_record(queens: usize, workers: usize, trials: u64, elapsed_ms: f64) -> String {
    let (trials_per_ms, ms_per_trial) = ratios(trials, elapsed_ms);
    format!(
        "{},{},{},{:.0},{:.3},{:.3}",
        queens, workers, trials, elapsed_ms, trials_per_ms, ms_per_trial
    )
}

fn append_csv(path: &Path, record: &str) -> anyhow::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open {} for appending", path.display()))?;
    writeln!(file, "{}", record).with_context(|| format!("failed to write to {}", path.display()))
}

// --- Main Function ---

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));
    let args = Args::parse();

    let queens = match args.queens {
        Some(queens) => {
            println!("Number of queens:   {}", queens);
            queens
        }
        None => prompt_usize("Number of queens:   ")?,
    };
    let workers = match args.workers {
        Some(workers) => {
            println!("Number of threads:  {}", workers);
            workers
        }
        None => prompt_usize("Number of threads:  ")?,
    };
    println!();

    let interrupt = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&interrupt);
    ctrlc::set_handler(move || {
        handler_flag.store(true, Ordering::Relaxed);
    })
    .context("failed to install the Ctrl-C handler")?;

    let mut builder = SolverBuilder::new()
        .with_workers(workers)
        .with_interrupt(interrupt);
    if let Some(ms) = args.time_limit_ms {
        builder = builder.with_time_limit(Duration::from_millis(ms));
    }
    if let Some(limit) = args.trial_limit {
        builder = builder.with_trial_limit(limit);
    }
    if let Some(seed) = args.seed {
        builder = builder.with_base_seed(seed);
    }

    let mut solver = builder.build();
    let outcome = solver.solve(queens)?;

    print_report(&outcome);

    if args.show_board {
        println!();
        print!("{}", render_board(outcome.solution()));
    }

    if let Some(path) = args.csv {
        let stats = outcome.statistics();
        let elapsed_ms = stats.solve_duration.as_secs_f64() * 1000.0;
        let record = csv_record(queens, workers, stats.total_trials(), elapsed_ms);
        append_csv(&path, &record)?;
    }

    Ok(())
}
