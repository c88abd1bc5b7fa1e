use anyhow::{Context, Result};
use primes_lib::format::create_file;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// Open the input source: `path` if given, otherwise stdin
///
/// # Errors
///
/// Returns an error if the input file cannot be opened.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "opening input file");
            let file = std::fs::File::open(path)
                .with_context(|| format!("Failed to read input file {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => {
            tracing::debug!("reading input from stdin");
            Ok(Box::new(std::io::stdin()))
        }
    }
}

/// Open the output sink: a fresh file at `path` if given, otherwise stdout
///
/// # Errors
///
/// Returns an error if the output file cannot be created.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = create_file(path)
                .with_context(|| format!("Failed to write output file {}", path.display()))?;
            tracing::info!(path = %path.display(), "writing output file");
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}

/// Read everything left in `input`
///
/// # Errors
///
/// Returns an error if reading fails or the input is not UTF-8.
pub fn read_all(mut input: impl Read) -> Result<String> {
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .context("Failed to read input")?;
    Ok(text)
}
