use crate::output_format::OutputFormat;
use primes_lib::format::{to_lines, to_list};
use primes_lib::names::NameScore;
use primes_lib::{Mode, PrimeSequence};
use std::fmt::Write as _;

/// Render the result of a counting or bounded run
#[must_use]
pub fn primes_output(
    format: OutputFormat,
    mode: Mode,
    limit: u64,
    primes: &PrimeSequence,
) -> String {
    match format {
        OutputFormat::Text => to_list(primes),
        OutputFormat::Json => serde_json::json!({
            "mode": mode,
            "limit": limit,
            "count": primes.len(),
            "primes": primes,
        })
        .to_string(),
    }
}

/// Render one prime list per range case
#[must_use]
pub fn ranges_output(
    format: OutputFormat,
    ranges: &[(u64, u64)],
    results: &[PrimeSequence],
) -> String {
    match format {
        OutputFormat::Text => to_lines(results),
        OutputFormat::Json => {
            let cases = ranges
                .iter()
                .zip(results)
                .map(|(&(low, high), primes)| {
                    serde_json::json!({
                        "low": low,
                        "high": high,
                        "count": primes.len(),
                        "primes": primes,
                    })
                })
                .collect::<Vec<_>>();
            serde_json::json!({ "cases": cases }).to_string()
        }
    }
}

/// Render name scores; `list` includes every name, not just the total
#[must_use]
pub fn names_output(format: OutputFormat, scores: &[NameScore], list: bool) -> String {
    let total: u64 = scores.iter().map(|s| s.score).sum();
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            if list {
                for s in scores {
                    let _ = writeln!(
                        output,
                        "{}\t{}\t{}\t{}",
                        s.position, s.name, s.value, s.score
                    );
                }
            }
            let _ = write!(output, "{total}");
            output
        }
        OutputFormat::Json => {
            let mut value = serde_json::json!({
                "names": scores.len(),
                "total_score": total,
            });
            if list {
                value["scores"] = serde_json::json!(scores);
            }
            value.to_string()
        }
    }
}
