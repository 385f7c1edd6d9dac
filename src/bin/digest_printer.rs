//! Digest Printer: prints the MD5 digest of "hello, world"
//!
//! Run without arguments, the program writes exactly one line to standard
//! output, the 32-character lowercase hex MD5 digest of `"hello, world"`.
//!
//! ## Usage
//! ```sh
//! cargo run --bin digest-printer
//! cargo run --bin digest-printer -- --text "some other text" --algorithm sha256
//! ```
//! Logs go to stderr and are controlled by `RUST_LOG` (e.g. `RUST_LOG=debug`).

use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use go_demos::digest::{render_digest_line, Algorithm, DEFAULT_TEXT};
use log::info;
use std::io::{self, Write};

/// Command-line arguments for the digest printer.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text whose UTF-8 bytes are hashed.
    #[arg(long, default_value = DEFAULT_TEXT)]
    text: String,

    /// Digest algorithm.
    #[arg(long, value_enum, default_value_t = Algorithm::Md5)]
    algorithm: Algorithm,
}

fn main() -> AnyhowResult<()> {
    env_logger::init();

    let args = Args::parse();
    info!("Computing {} digest of {:?}", args.algorithm, args.text);

    let line = render_digest_line(args.algorithm, &args.text);
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(line.as_bytes())
        .context("Failed to write digest to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;

    info!("Digest written");
    Ok(())
}
