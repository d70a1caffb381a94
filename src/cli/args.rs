//! CLI argument definitions using clap's derive API.

use std::path::PathBuf;

use clap::Parser;

/// Extract strings for static message translation from Craft Twig templates.
#[derive(Debug, Parser)]
#[command(name = "twigex", author, version, about, long_about = None)]
pub struct Arguments {
    /// Template file, or template directory scanned recursively for *.twig
    pub path: PathBuf,

    /// Output file name for the translation table
    #[arg(short, long, default_value = "./site.php")]
    pub output: PathBuf,

    /// Output file name for the reversed pseudo-translation table
    #[arg(short = 'r', long)]
    pub with_reversed_output: Option<PathBuf>,

    /// Print debug messages tracing every candidate line and match decision
    #[arg(short, long)]
    pub debug: bool,
}
