//! Pseudo-translation: character-reversed literals used to visually verify
//! that every user-facing string flows through the translation layer.

use std::sync::LazyLock;

use regex::Regex;

// Naive reversal leaves bracket pairs facing outward; these restore logical
// orientation. Square-bracket pairs come back as parentheses.
static FLIPPED_BRACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\}([^{]+)\{").unwrap());
static FLIPPED_BRACKETS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\]([^\[]+)\[").unwrap());
static FLIPPED_PARENS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\)([^(]+)\(").unwrap());

/// Reverses a normalized literal character by character, then repairs the
/// artifacts reversal introduces: an escape whose backslash ended up on the
/// wrong side of its quote, and orientation-flipped bracket pairs. Best
/// effort for visual QA, not a correctness-critical transform.
pub fn reverse_literal(literal: &str) -> String {
    let reversed: String = literal.chars().rev().collect();
    let reversed = reversed.replacen("'\\", "\\'", 1);
    let reversed = reversed.replacen("\"\\", "\\\"", 1);
    let reversed = FLIPPED_BRACES.replace_all(&reversed, "{${1}}");
    let reversed = FLIPPED_BRACKETS.replace_all(&reversed, "(${1})");
    let reversed = FLIPPED_PARENS.replace_all(&reversed, "(${1})");
    reversed.into_owned()
}
