//! Twigex - translatable-string extractor for Craft Twig templates
//!
//! Twigex scans Twig templates for string literals passed through the
//! translate filter (`|t` / `|translate`) and writes them as entries of a
//! generated PHP translation table. An optional second output maps every
//! entry to its character-reversed pseudo-translation for visual QA.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, run loop, exit codes)
//! - `scanner`: Template discovery (file or recursive directory scan)
//! - `extract`: Line pre-filter and the string extraction core
//! - `processor`: Per-file line-by-line extraction
//! - `aggregate`: Normalization, deduplication, and ordering of results
//! - `reverse`: Character-reversed pseudo-translation
//! - `writer`: PHP lookup-table rendering and output

pub mod aggregate;
pub mod cli;
pub mod extract;
pub mod processor;
pub mod reverse;
pub mod scanner;
pub mod writer;
