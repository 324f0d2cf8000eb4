//! Power-set listing for small integer sequences.
//!
//! [`generate::all_subsets`] enumerates subsets in a fixed order (each element
//! is first left out, then taken). [`render`] turns them into the
//! `All subsets:` listing, and [`input`] validates values from the command line.
//! [`list_subsets`] chains generation and rendering into any writer. The
//! `subsets` binary goes through [`run`].

pub mod generate;
pub mod input;
pub mod render;

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::generate::all_subsets;
use crate::input::{DEFAULT_VALUES, InputError, parse_values};
use crate::render::write_subsets;

/// Print every subset of an integer sequence.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Integers to enumerate (separate arguments or comma separated).
    /// Defaults to 1 2 3.
    #[arg(value_name = "VALUES", allow_negative_numbers = true, conflicts_with = "empty")]
    values: Vec<String>,

    /// Enumerate the subsets of the empty sequence
    #[arg(long = "empty", action = ArgAction::SetTrue)]
    empty: bool,

    /// Log more detail to stderr (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

/// Failure of a single run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Generate every subset of `values` and write the listing to `out`.
///
/// Returns the number of subsets written.
pub fn list_subsets<W: Write>(values: &[i64], out: &mut W) -> io::Result<usize> {
    debug!(n = values.len(), "generating subsets");
    let subsets = all_subsets(values);
    debug!(count = subsets.len(), "generation finished");
    write_subsets(out, &subsets)?;
    Ok(subsets.len())
}

/// Log level used when `RUST_LOG` is unset.
fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));
    // A subscriber may already be installed when run() is called more than once.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .try_init();
}

/// Resolve the input sequence from `cli` and write its listing to `out`.
///
/// A reader that hangs up early (broken pipe) ends the listing without error.
fn execute<W: Write>(cli: &Cli, out: &mut W) -> Result<usize, RunError> {
    let values = if cli.empty {
        Vec::new()
    } else if cli.values.is_empty() {
        DEFAULT_VALUES.to_vec()
    } else {
        parse_values(&cli.values)?
    };
    info!(?values, "input sequence");

    match list_subsets(&values, out) {
        Ok(count) => Ok(count),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("output closed early");
            Ok(0)
        }
        Err(e) => Err(e.into()),
    }
}

/// Run the subsets CLI.
///
/// Parses arguments, enumerates the power set of the requested sequence and
/// prints it to stdout. Input and output errors are reported on stderr and
/// produce exit code 1; usage errors are handled by clap.
///
/// Example:
///
/// ```no_run
/// let code = subsets_lib::run(); // called from src/main.rs
/// ```
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match execute(&cli, &mut out) {
        Ok(count) => {
            debug!(count, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
