//! Command-line arguments for the demo binaries.
//!
//! Argument errors exit with status 1 (clap's default is 2); `--help` and
//! `--version` still exit 0. `--version` is long-only because `-V` means
//! `--very-verbose`.

use clap::{Args, Parser};
use rat_trig::MAX_FIB_INDEX;
use std::path::PathBuf;
use tracing::Level;

/// Exit status for malformed or missing arguments.
pub const ARG_ERROR_EXIT_CODE: i32 = 1;

/// Shared `-v` / `-V` flags.
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verbosity {
    /// Set loglevel to INFO
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Set loglevel to DEBUG
    #[arg(short = 'V', long = "very-verbose")]
    pub very_verbose: bool,
}

impl Verbosity {
    pub fn level(&self) -> Level {
        if self.very_verbose {
            Level::DEBUG
        } else if self.verbose {
            Level::INFO
        } else {
            Level::ERROR
        }
    }
}

/// Print the n-th Fibonacci number.
#[derive(Parser, Debug)]
#[command(
    name = "fibonacci",
    author,
    version,
    disable_version_flag = true,
    about = "Just a Fibonacci demonstration"
)]
pub struct FibArgs {
    /// Print version
    #[arg(long, action = clap::ArgAction::Version)]
    version: Option<bool>,

    /// n-th Fibonacci number (1..=93)
    #[arg(value_parser = clap::value_parser!(u64).range(1..=MAX_FIB_INDEX))]
    pub n: u64,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

/// Print sample invocations of every rational-trig formula.
#[derive(Parser, Debug)]
#[command(
    name = "basic-usage",
    version,
    disable_version_flag = true,
    about = "Rational trigonometry examples"
)]
pub struct ShowcaseArgs {
    /// Print version
    #[arg(long, action = clap::ArgAction::Version)]
    version: Option<bool>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Also write the JSON report (plus a provenance sidecar) to this path
    #[arg(long)]
    pub out: Option<PathBuf>,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

/// Exit status clap errors map to: 0 for help output, 1 for real errors.
pub fn exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        ARG_ERROR_EXIT_CODE
    } else {
        0
    }
}

/// Parse process arguments, exiting with [`exit_code`] on failure.
pub fn parse_or_exit<P: Parser>() -> P {
    match P::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            std::process::exit(exit_code(&err));
        }
    }
}
