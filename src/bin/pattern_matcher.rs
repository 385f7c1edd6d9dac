//! Pattern Matcher: tests libvirt format names against a fixed pattern
//!
//! Run without arguments, the program compiles the `libvirt-...-format`
//! pattern and writes four lines to standard output, one per built-in
//! candidate, each of the form `<candidate> matched: <true|false>`.
//!
//! A pattern that fails to compile is fatal: nothing is written to stdout and
//! the process exits with a non-zero status after printing the error.
//!
//! ## Usage
//! ```sh
//! cargo run --bin pattern-matcher
//! cargo run --bin pattern-matcher -- libvirt-1-format libvirt-x
//! ```

use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use go_demos::pattern::{render_report, PatternMatcher, DEFAULT_CANDIDATES, DEFAULT_PATTERN};
use log::info;
use std::io::{self, Write};

/// Command-line arguments for the pattern matcher.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Regular expression searched for in each candidate.
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pattern: String,

    /// Candidate strings; the built-in four are used when none are given.
    candidates: Vec<String>,
}

fn main() -> AnyhowResult<()> {
    env_logger::init();

    let args = Args::parse();
    let matcher = PatternMatcher::new(&args.pattern)?;
    info!("Using pattern {}", matcher.as_str());

    let matches = if args.candidates.is_empty() {
        matcher.evaluate(&DEFAULT_CANDIDATES)
    } else {
        matcher.evaluate(args.candidates.as_slice())
    };
    info!("Evaluated {} candidate(s)", matches.len());

    let report = render_report(&matches);
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(report.as_bytes())
        .context("Failed to write results to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;

    Ok(())
}
