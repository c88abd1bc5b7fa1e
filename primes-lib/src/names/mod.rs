use crate::error::{Error, Result};
use crate::tokenize::split;
use serde::Serialize;

/// Score of a single name after sorting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameScore {
    pub name: String,
    /// 1-based position in the sorted list
    pub position: usize,
    /// Sum of letter positions in the alphabet
    pub value: u64,
    pub score: u64,
}

impl NameScore {
    #[must_use]
    pub fn new(name: String, position: usize, value: u64) -> Self {
        let score = value * position as u64;
        NameScore {
            name,
            position,
            value,
            score,
        }
    }
}

/// Parse a comma separated list of quoted names, e.g. `"MARY","PATRICIA"`
///
/// Names are trimmed, unquoted and uppercased. Empty entries are skipped.
#[must_use]
pub fn parse_names(text: &str) -> Vec<String> {
    split(text, ",")
        .map(|token| token.trim().trim_matches('"').trim().to_uppercase())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Alphabetical value of a name: A=1 .. Z=26, case-insensitive
///
/// # Errors
///
/// Returns `Error::InvalidInput` if the name contains a non-letter.
pub fn name_value(name: &str) -> Result<u64> {
    name.chars().try_fold(0u64, |total, ch| {
        if ch.is_ascii_alphabetic() {
            let offset = ch.to_ascii_uppercase() as u8 - b'A';
            Ok(total + u64::from(offset) + 1)
        } else {
            Err(Error::invalid(format!(
                "name '{name}' contains non-letter character '{ch}'"
            )))
        }
    })
}

/// Sort names and compute each one's score
///
/// # Errors
///
/// Returns `Error::InvalidInput` if any name contains a non-letter.
pub fn score_names(names: &[String]) -> Result<Vec<NameScore>> {
    let mut sorted = names.to_vec();
    sorted.sort();

    sorted
        .into_iter()
        .enumerate()
        .map(|(index, name)| {
            let value = name_value(&name)?;
            Ok(NameScore::new(name, index + 1, value))
        })
        .collect()
}

/// Sum of all name scores
///
/// # Errors
///
/// Returns `Error::InvalidInput` if any name contains a non-letter.
pub fn total_score(names: &[String]) -> Result<u64> {
    Ok(score_names(names)?.iter().map(|s| s.score).sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_names_quoted() {
        let parsed = parse_names("\"MARY\",\"PATRICIA\",\"LINDA\"");
        assert_eq!(parsed, names(&["MARY", "PATRICIA", "LINDA"]));
    }

    #[test]
    fn test_parse_names_whitespace_and_case() {
        let parsed = parse_names(" \"mary\" ,\n\"Ann\",,\"\"\n");
        assert_eq!(parsed, names(&["MARY", "ANN"]));
    }

    #[test]
    fn test_parse_names_empty() {
        assert!(parse_names("").is_empty());
    }

    #[test]
    fn test_name_value_colin() {
        assert_eq!(name_value("COLIN").unwrap(), 53);
        assert_eq!(name_value("colin").unwrap(), 53);
    }

    #[test]
    fn test_name_value_rejects_non_letters() {
        assert!(name_value("O'NEIL").unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_name_score_colin_at_938() {
        let score = NameScore::new("COLIN".to_string(), 938, 53);
        assert_eq!(score.score, 49714);
    }

    #[test]
    fn test_score_names_sorts_first() {
        let scores = score_names(&names(&["MARY", "BOB", "ANN"])).unwrap();
        let order: Vec<_> = scores.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(order, vec!["ANN", "BOB", "MARY"]);
        assert_eq!(scores[0].score, 29);
        assert_eq!(scores[1].score, 38);
        assert_eq!(scores[2].score, 171);
    }

    #[test]
    fn test_total_score() {
        assert_eq!(total_score(&names(&["MARY", "BOB", "ANN"])).unwrap(), 238);
        assert_eq!(total_score(&[]).unwrap(), 0);
    }
}
