//! Locating translate-filter invocations in template lines and extracting
//! their quoted string arguments.
//!
//! Two pattern definitions share one canonical rule (a pipe followed by `t`
//! or `translate`, terminated by a word boundary): the cheap per-line
//! pre-filter in `line_filter`, and the invocation locator driving the
//! backward scan in `extractor`.

mod extractor;
mod line_filter;

pub use extractor::{Bail, Outcome, extract_line, scan_line};
pub use line_filter::is_candidate;
