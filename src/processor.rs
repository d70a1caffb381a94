//! Per-file extraction: applies the line pre-filter and the string
//! extractor to every line of a loaded template.

use colored::Colorize;

use crate::extract::{self, Outcome};

/// Extraction result for a single template file.
pub struct FileStrings {
    pub path: String,
    pub strings: Vec<String>,
}

/// Runs the line filter and string extractor over every line of `source`.
///
/// Lines are split on `\r?\n`. Extracted literals keep their original
/// delimiters; their order follows line order, then match order within a
/// line. Per-invocation bail-outs are traced in debug mode and never abort
/// the file.
pub fn process_template(source: &str, path: &str, debug: bool) -> FileStrings {
    let mut strings = Vec::new();

    for (idx, line) in source.lines().enumerate() {
        if !extract::is_candidate(line) {
            continue;
        }
        if debug {
            eprintln!("{} L{idx}: {line}", "debug:".dimmed());
        }
        for outcome in extract::scan_line(line) {
            match outcome {
                Outcome::Extracted(literal) => {
                    if debug {
                        eprintln!("{}   extracted {literal}", "debug:".dimmed());
                    }
                    strings.push(literal.to_owned());
                }
                Outcome::Bailed { pipe, reason } => {
                    if debug {
                        eprintln!(
                            "{}   bailing out at column {pipe}: {reason:?}",
                            "debug:".dimmed()
                        );
                    }
                }
            }
        }
    }

    FileStrings {
        path: path.to_owned(),
        strings,
    }
}
