//! gosift - find build directives and asset directories in Go sources
//!
//! gosift scans Go files for two things a build pipeline needs before it can
//! bundle a web application:
//!
//! - `$` command directives in comments (`// $ npm run build`), each paired
//!   with the directory of the file it was found in
//! - directories served through `HandleDir(...)` calls, flagged when they are
//!   served from a generated asset bundle (`iris.DirOptions{Asset: Asset}`)
//!
//! ```no_run
//! let result = gosift::scan("./cmd/web")?;
//! for command in &result.commands {
//!     println!("({}) {}", command.dir, command.command_line());
//! }
//! # Ok::<(), gosift::ScanError>(())
//! ```
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Scanning engine (load, then extract per file)

pub mod cli;
pub mod config;
pub mod core;

pub use crate::core::{
    AssetDir, FileAnalyzer, ScanError, ScanOptions, ScanResult, Source, SourceCommand,
    SyntaxError, scan, scan_with,
};
