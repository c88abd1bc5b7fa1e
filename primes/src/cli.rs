use crate::output_format::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "primes")]
#[command(about = "Trial-division prime enumeration and Euler name scores", long_about = None)]
pub struct Cli {
    /// Log progress to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Produce the first N primes
    Count(LimitArgs),
    /// Produce every prime up to and including N
    Bound(LimitArgs),
    /// Produce the primes of each `low high` case read from the input
    Range(IoArgs),
    /// Score a comma separated list of quoted names
    Names {
        #[command(flatten)]
        io: IoArgs,

        /// Print every name's score, not just the total
        #[arg(long)]
        list: bool,
    },
}

impl Command {
    /// Input/output options shared by every subcommand
    #[must_use]
    pub fn io(&self) -> &IoArgs {
        match self {
            Command::Count(args) | Command::Bound(args) => &args.io,
            Command::Range(io) | Command::Names { io, .. } => io,
        }
    }
}

#[derive(Args, Debug)]
pub struct LimitArgs {
    /// Limit given directly on the command line
    #[arg(short, long, conflicts_with = "input")]
    pub limit: Option<u64>,

    #[command(flatten)]
    pub io: IoArgs,
}

#[derive(Args, Debug)]
pub struct IoArgs {
    /// Input file path (stdin if omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_count_with_limit() {
        let cli = Cli::try_parse_from(["primes", "count", "--limit", "5"]).unwrap();
        match cli.command {
            Command::Count(args) => {
                assert_eq!(args.limit, Some(5));
                assert!(args.io.input.is_none());
                assert_eq!(args.io.format, OutputFormat::Text);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_limit_conflicts_with_input() {
        let err = Cli::try_parse_from(["primes", "count", "--limit", "5", "--input", "f.in"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = Cli::try_parse_from(["primes", "bound", "-l", "9", "--format", "dot"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_names_io_accessor() {
        let cli = Cli::try_parse_from([
            "primes", "names", "--input", "names.txt", "--list", "-f", "json",
        ])
        .unwrap();
        assert_eq!(cli.command.io().input, Some(PathBuf::from("names.txt")));
        assert_eq!(cli.command.io().format, OutputFormat::Json);
        assert!(matches!(cli.command, Command::Names { list: true, .. }));
    }
}
