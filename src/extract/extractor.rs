use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use super::line_filter::TRANSLATE_FILTER_PATTERN;

static INVOCATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TRANSLATE_FILTER_PATTERN).unwrap());

/// Why a candidate invocation yielded no literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bail {
    /// The token before the pipe is not a quote: the filter argument is a
    /// variable or expression rather than a string literal.
    NotALiteral,
    /// The pipe sits at the very start of the line, nothing precedes it.
    LineStart,
    /// No unescaped opening quote exists before the start of the line.
    UnmatchedQuote,
}

/// Outcome of one filter invocation found on a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// The quoted literal preceding the invocation, delimiters included.
    Extracted(&'a str),
    /// The invocation was skipped; `pipe` is the byte offset of its pipe.
    Bailed { pipe: usize, reason: Bail },
}

/// Scans one line for translate-filter invocations, left to right, and
/// resolves the quoted string argument of each. Invocations never overlap;
/// a bail-out affects only its own invocation, later ones on the same line
/// are still scanned.
pub fn scan_line(line: &str) -> Vec<Outcome<'_>> {
    INVOCATION_REGEX
        .find_iter(line)
        .map(|m| match quoted_argument(line, m.start()) {
            Ok(range) => Outcome::Extracted(&line[range]),
            Err(reason) => Outcome::Bailed {
                pipe: m.start(),
                reason,
            },
        })
        .collect()
}

/// Convenience over [`scan_line`] keeping only the extracted literals.
pub fn extract_line(line: &str) -> Vec<&str> {
    scan_line(line)
        .into_iter()
        .filter_map(|outcome| match outcome {
            Outcome::Extracted(literal) => Some(literal),
            Outcome::Bailed { .. } => None,
        })
        .collect()
}

/// Resolves the quoted string argument ending directly before the pipe at
/// `pipe`. Walks backward from the closing quote looking for the same quote
/// character; a candidate immediately preceded by a backslash is escaped
/// content, not a boundary, and the walk continues past it.
fn quoted_argument(line: &str, pipe: usize) -> Result<Range<usize>, Bail> {
    let bytes = line.as_bytes();
    if pipe == 0 {
        return Err(Bail::LineStart);
    }

    let closing = pipe - 1;
    let quote = bytes[closing];
    if quote != b'"' && quote != b'\'' {
        return Err(Bail::NotALiteral);
    }

    let mut idx = closing;
    loop {
        match line[..idx].rfind(quote as char) {
            Some(found) if found > 0 && bytes[found - 1] == b'\\' => idx = found,
            Some(found) => return Ok(found..pipe),
            None => return Err(Bail::UnmatchedQuote),
        }
    }
}
