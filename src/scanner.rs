//! Template discovery: resolves the input path to the set of Twig files
//! for one run.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use colored::Colorize;
use walkdir::WalkDir;

/// Result of scanning for templates.
#[derive(Debug)]
pub struct ScanResult {
    pub templates: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Resolves `input` to the list of templates to process.
///
/// A file path is taken as-is; a directory is walked recursively collecting
/// `*.twig` files, sorted so discovery order is deterministic. Unreadable
/// directory entries are skipped with a warning and counted. A path that
/// does not exist is fatal.
pub fn discover_templates(input: &Path) -> Result<ScanResult> {
    if !input.exists() {
        bail!("File or directory not found: {}", input.display());
    }

    if input.is_file() {
        return Ok(ScanResult {
            templates: vec![input.to_path_buf()],
            skipped_count: 0,
        });
    }

    let mut templates = Vec::new();
    let mut skipped_count = 0;
    for entry in WalkDir::new(input) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() && is_template(path) {
            templates.push(path.to_path_buf());
        }
    }
    templates.sort();

    Ok(ScanResult {
        templates,
        skipped_count,
    })
}

fn is_template(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("twig"))
}
