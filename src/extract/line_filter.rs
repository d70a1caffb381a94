use std::sync::LazyLock;

use regex::Regex;

/// Canonical shape of a translate-filter invocation: a pipe, then `t` or
/// `translate`, then a word boundary. The boundary excludes longer filter
/// names (`|trim`, `|title`, `|translated`) while still matching `|t` at
/// the very end of a line.
pub(crate) const TRANSLATE_FILTER_PATTERN: &str = r"\|(?:translate|t)\b";

static TRANSLATE_FILTER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TRANSLATE_FILTER_PATTERN).unwrap());

/// Cheap pre-filter: does this line plausibly contain a translate-filter
/// invocation? False positives are acceptable (the extractor rejects them
/// later); false negatives are not.
pub fn is_candidate(line: &str) -> bool {
    TRANSLATE_FILTER_REGEX.is_match(line)
}
