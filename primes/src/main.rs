use anyhow::{Context, Result};
use clap::Parser;
use primes::cli::Cli;
use primes::{commands, logging, source};
use std::io::Write;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let io = cli.command.io();
    let input = source::open_input(io.input.as_deref())?;
    let mut output = source::open_output(io.output.as_deref())?;

    let summary = commands::execute(&cli.command, input, &mut output)?;

    // Files get the bare list, the console gets a final newline
    if io.output.is_none() {
        writeln!(output).context("Failed to write output")?;
    }
    output.flush().context("Failed to write output")?;

    eprintln!("{}", summary.message());
    Ok(())
}
