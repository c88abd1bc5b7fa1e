use crate::error::{Error, Result};

/// Read the limit from the first whitespace-separated token of `text`
///
/// # Errors
///
/// Returns `Error::InvalidInput` if the token is missing, not an integer,
/// or not positive.
pub fn parse_limit(text: &str) -> Result<u64> {
    let token = text
        .split_whitespace()
        .next()
        .ok_or_else(|| Error::invalid("missing limit"))?;
    parse_positive(token, "limit")
}

/// Parse a list of range cases: a case count followed by that many
/// `low high` pairs
///
/// # Errors
///
/// Returns `Error::InvalidInput` if a token is missing or malformed, or if a
/// pair has `low > high`.
pub fn parse_ranges(text: &str) -> Result<Vec<(u64, u64)>> {
    let mut tokens = text.split_whitespace();

    let count_token = tokens
        .next()
        .ok_or_else(|| Error::invalid("missing case count"))?;
    let count = parse_unsigned(count_token, "case count")?;

    let mut ranges = Vec::new();
    for case in 1..=count {
        let mut bound = |what: &str| -> Result<u64> {
            let token = tokens
                .next()
                .ok_or_else(|| Error::invalid(format!("case {case}: missing {what}")))?;
            parse_unsigned(token, what)
        };
        let low = bound("lower bound")?;
        let high = bound("upper bound")?;
        if high == 0 {
            return Err(Error::invalid(format!(
                "case {case}: upper bound must be at least 1"
            )));
        }
        if low > high {
            return Err(Error::invalid(format!(
                "case {case}: lower bound {low} exceeds upper bound {high}"
            )));
        }
        ranges.push((low, high));
    }
    Ok(ranges)
}

fn parse_positive(token: &str, what: &str) -> Result<u64> {
    let value: i128 = token
        .parse()
        .map_err(|_| Error::invalid(format!("{what} '{token}' is not an integer")))?;
    if value <= 0 {
        return Err(Error::invalid(format!("{what} must be positive, got {value}")));
    }
    u64::try_from(value).map_err(|_| Error::invalid(format!("{what} {value} is too large")))
}

fn parse_unsigned(token: &str, what: &str) -> Result<u64> {
    token
        .parse()
        .map_err(|_| Error::invalid(format!("{what} '{token}' is not a non-negative integer")))
}
