use crate::error::Result;
use crate::sequence::PrimeSequence;
use std::fmt::Write as _;
use std::fs::File;
use std::path::Path;

/// Separator placed between consecutive primes
pub const LIST_SEPARATOR: &str = ", ";

/// Render primes as a comma-space separated list without a trailing delimiter
#[must_use]
pub fn to_list(primes: &PrimeSequence) -> String {
    let mut output = String::new();
    for (index, prime) in primes.iter().enumerate() {
        if index > 0 {
            output.push_str(LIST_SEPARATOR);
        }
        let _ = write!(output, "{prime}");
    }
    output
}

/// Render several sequences, one list per line
#[must_use]
pub fn to_lines<'a>(sequences: impl IntoIterator<Item = &'a PrimeSequence>) -> String {
    sequences
        .into_iter()
        .map(to_list)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create (or truncate) the flat output file a run writes into
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be created.
pub fn create_file(path: &Path) -> Result<File> {
    Ok(File::create(path)?)
}
