//! Rendering the string table as a PHP lookup-array source file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::aggregate::StringTable;
use crate::reverse::reverse_literal;

/// Renders the table as a PHP `return [...]` array, one entry per line.
/// Normal mode maps every literal to itself; reversed mode maps it to its
/// pseudo-translation.
pub fn render_table(table: &StringTable, reversed: bool) -> String {
    let entries: Vec<String> = table
        .entries
        .iter()
        .map(|literal| {
            let value = if reversed {
                reverse_literal(literal)
            } else {
                literal.clone()
            };
            format!("\t{literal} => {value},")
        })
        .collect();

    format!("<?php\n\nreturn [\n{}\n];\n", entries.join("\n"))
}

/// Writes the rendered table to `path`, overwriting any existing file.
pub fn write_table(path: &Path, table: &StringTable, reversed: bool) -> Result<()> {
    fs::write(path, render_table(table, reversed))
        .with_context(|| format!("Failed to write output file: {}", path.display()))
}
