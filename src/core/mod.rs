//! Scanning engine.
//!
//! A scan runs in two steps:
//!
//! 1. **Load** (`source`, `parsers`): resolve the input into parsed Go files.
//! 2. **Extract** (`collect`, `extract`): per file, collect `$` command
//!    directives from comments and asset directories from `HandleDir` calls.
//!
//! Per-file results are merged in load order.

pub mod collect;
pub mod data;
pub mod error;
pub mod extract;
pub mod parsers;
pub mod source;
pub mod utils;


use tracing::debug;

pub use data::{AssetDir, ScanResult, SourceCommand};
pub use error::{ScanError, SyntaxError};
pub use extract::FileAnalyzer;
pub use source::{ScanOptions, Source};

/// Scan a file, a directory, or inline Go source with default options.
pub fn scan<'a>(source: impl Into<Source<'a>>) -> Result<ScanResult, ScanError> {
    scan_with(source, &ScanOptions::default())
}

/// Scan with explicit options. No partial result is returned on error.
pub fn scan_with<'a>(
    source: impl Into<Source<'a>>,
    options: &ScanOptions,
) -> Result<ScanResult, ScanError> {
    let files = source::load(&source.into(), options)?;

    let mut result = ScanResult::default();
    for parsed in &files {
        result.merge(FileAnalyzer::new(parsed).analyze());
    }

    debug!(
        files = files.len(),
        asset_dirs = result.asset_dirs.len(),
        commands = result.commands.len(),
        "scan finished"
    );
    Ok(result)
}
