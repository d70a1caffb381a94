//! Merging per-file extraction results into the final string table:
//! quote normalization, deduplication, and ordering.

use std::collections::HashSet;

/// The deduplicated, sorted sequence of normalized literals for one run.
pub struct StringTable {
    /// Entries in output order, each wrapped in double quotes.
    pub entries: Vec<String>,
    /// Non-empty literals seen before deduplication.
    pub total: usize,
}

impl StringTable {
    pub fn unique(&self) -> usize {
        self.entries.len()
    }
}

/// Builds the string table from raw extracted literals in file-discovery
/// order: empty literals are dropped, the rest are normalized, deduplicated
/// by exact equality, and sorted case-insensitively ignoring the leading
/// quote character. Deterministic for a fixed input multiset.
pub fn aggregate(strings: impl IntoIterator<Item = String>) -> StringTable {
    let mut total = 0;
    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for raw in strings {
        if content(&raw).is_empty() {
            continue;
        }
        total += 1;
        let normalized = normalize(&raw);
        if seen.insert(normalized.clone()) {
            entries.push(normalized);
        }
    }

    // Entries always start with an ASCII double quote, so the byte slice
    // from index 1 is the comparison key.
    entries.sort_by_cached_key(|entry| entry[1..].to_lowercase());

    StringTable { entries, total }
}

/// Strips one layer of matching surrounding quotes and re-wraps the content
/// in double quotes, escaping inner double quotes that are not already
/// escaped. Idempotent: normalizing a normalized literal is the identity.
pub fn normalize(raw: &str) -> String {
    let inner = content(raw);
    let mut out = String::with_capacity(inner.len() + 2);
    out.push('"');
    let mut escaped = false;
    for c in inner.chars() {
        if c == '"' && !escaped {
            out.push('\\');
        }
        escaped = c == '\\' && !escaped;
        out.push(c);
    }
    out.push('"');
    out
}

/// The literal's content without its delimiting quotes. Input that is not
/// wrapped in a matching quote pair is returned unchanged.
fn content(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    if raw.len() >= 2
        && (bytes[0] == b'"' || bytes[0] == b'\'')
        && bytes[raw.len() - 1] == bytes[0]
    {
        &raw[1..raw.len() - 1]
    } else {
        raw
    }
}
