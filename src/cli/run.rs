//! One extraction run: discover templates, extract per file in parallel,
//! aggregate, write the output table(s).

use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;
use rayon::prelude::*;

use super::args::Arguments;
use crate::{
    aggregate,
    processor::{self, FileStrings},
    scanner, writer,
};

pub fn run(args: &Arguments) -> Result<()> {
    let scan = scanner::discover_templates(&args.path)?;
    if scan.skipped_count > 0 {
        eprintln!(
            "{} skipped {} unreadable paths",
            "warning:".bold().yellow(),
            scan.skipped_count
        );
    }

    // Each file is read and processed independently; the merge below is the
    // only sequential step.
    let per_file: Vec<FileStrings> = scan
        .templates
        .par_iter()
        .map(|path| -> Result<FileStrings> {
            let source = fs::read_to_string(path)
                .with_context(|| format!("Failed to read template: {}", path.display()))?;
            Ok(processor::process_template(
                &source,
                &path.display().to_string(),
                args.debug,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    for file in &per_file {
        println!(
            "processing {}: found {} strings",
            file.path,
            file.strings.len()
        );
    }

    let table = aggregate::aggregate(per_file.into_iter().flat_map(|file| file.strings));
    println!(
        "{} {} strings found, {} unique",
        "TOTAL".bold(),
        table.total,
        table.unique()
    );

    writer::write_table(&args.output, &table, false)?;
    if let Some(reversed_path) = &args.with_reversed_output {
        writer::write_table(reversed_path, &table, true)?;
    }

    if args.debug {
        for entry in &table.entries {
            eprintln!("{} {entry}", "debug:".dimmed());
        }
    }

    Ok(())
}
