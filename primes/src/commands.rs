use crate::cli::{Command, IoArgs, LimitArgs};
use crate::output_format::OutputFormat;
use crate::report;
use crate::source::read_all;
use anyhow::{Context, Result};
use primes_lib::input::{parse_limit, parse_ranges};
use primes_lib::names::{parse_names, score_names};
use primes_lib::{enumerate, enumerate_range, Mode, PrimeSequence};
use std::io::{Read, Write};

/// What a finished run produced, for the completion message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summary {
    Primes(usize),
    Names(usize),
}

impl Summary {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Summary::Primes(found) => format!("Process completed. Added {found} prime numbers"),
            Summary::Names(scored) => format!("Process completed. Scored {scored} names"),
        }
    }
}

/// Run a subcommand, reading from `input` and writing the rendered result
/// to `output`. The input is only read when the command needs it.
///
/// # Errors
///
/// Returns an error if the input is invalid or unreadable, or if writing
/// the output fails.
pub fn execute(command: &Command, input: impl Read, output: &mut impl Write) -> Result<Summary> {
    match command {
        Command::Count(args) => run_limit(Mode::Count, args, input, output),
        Command::Bound(args) => run_limit(Mode::Bound, args, input, output),
        Command::Range(io) => run_range(io, input, output),
        Command::Names { io, list } => run_names(io, *list, input, output),
    }
}

/// Counting or bounded enumeration; `--limit` wins over the input
///
/// # Errors
///
/// Returns an error if the limit is missing or invalid, or if I/O fails.
pub fn run_limit(
    mode: Mode,
    args: &LimitArgs,
    input: impl Read,
    output: &mut impl Write,
) -> Result<Summary> {
    let limit = match args.limit {
        Some(limit) => limit,
        None => parse_limit(&read_all(input)?).context("Failed to read limit")?,
    };
    tracing::info!(%mode, limit, format = args.io.format.as_str(), "enumerating primes");

    let primes = enumerate(mode, limit)?;
    tracing::info!(found = primes.len(), "enumeration finished");

    emit(output, &report::primes_output(args.io.format, mode, limit, &primes))?;
    Ok(Summary::Primes(primes.len()))
}

/// Ranged enumeration for every case in the input
///
/// # Errors
///
/// Returns an error if the case list is malformed, or if I/O fails.
pub fn run_range(args: &IoArgs, input: impl Read, output: &mut impl Write) -> Result<Summary> {
    let ranges = parse_ranges(&read_all(input)?).context("Failed to read range cases")?;
    tracing::info!(cases = ranges.len(), format = args.format.as_str(), "enumerating ranges");

    let results = ranges
        .iter()
        .map(|&(low, high)| enumerate_range(low, high))
        .collect::<primes_lib::Result<Vec<PrimeSequence>>>()?;

    emit(output, &report::ranges_output(args.format, &ranges, &results))?;
    Ok(Summary::Primes(results.iter().map(PrimeSequence::len).sum()))
}

/// Euler 22 name scores
///
/// # Errors
///
/// Returns an error if a name contains a non-letter, or if I/O fails.
pub fn run_names(
    args: &IoArgs,
    list: bool,
    input: impl Read,
    output: &mut impl Write,
) -> Result<Summary> {
    let names = parse_names(&read_all(input)?);
    tracing::info!(names = names.len(), format = args.format.as_str(), "scoring names");

    let scores = score_names(&names)?;
    emit(output, &report::names_output(args.format, &scores, list))?;
    Ok(Summary::Names(scores.len()))
}

fn emit(output: &mut impl Write, rendered: &str) -> Result<()> {
    output
        .write_all(rendered.as_bytes())
        .context("Failed to write output")
}
