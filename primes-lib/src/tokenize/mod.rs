use std::iter::FusedIterator;

/// Lazy iterator over the non-empty tokens of a text
///
/// Each call to [`split`] owns its own cursor, so independent tokenizers
/// never share parser state. Cloning a `Tokens` restarts from the clone's
/// current position without disturbing the original.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    remainder: Option<&'a str>,
    delimiter: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            let rest = self.remainder?;

            let (token, next) = if self.delimiter.is_empty() {
                (rest, None)
            } else {
                match rest.find(self.delimiter) {
                    Some(at) => (&rest[..at], Some(&rest[at + self.delimiter.len()..])),
                    None => (rest, None),
                }
            };
            self.remainder = next;

            // Adjacent, leading and trailing delimiters produce no token
            if !token.is_empty() {
                return Some(token);
            }
        }
    }
}

impl FusedIterator for Tokens<'_> {}

/// Split `text` on every occurrence of `delimiter`
///
/// Empty tokens are skipped. An empty delimiter yields the whole text as a
/// single token.
#[must_use]
pub fn split<'a>(text: &'a str, delimiter: &'a str) -> Tokens<'a> {
    Tokens {
        remainder: Some(text),
        delimiter,
    }
}
