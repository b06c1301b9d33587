//! File-level extraction over parsed Go syntax trees.
//!
//! - `declarations`: top-level `var`/`const` literal initializers
//! - `call_pattern`: `HandleDir` calls and their asset directories
//! - `file_analyzer`: both passes plus comment directives for one file

pub mod call_pattern;
pub mod declarations;
pub mod file_analyzer;

pub use call_pattern::{CallPatternExtractor, DirArgument, HandleDirCall};
pub use declarations::DeclaredLiterals;
pub use file_analyzer::FileAnalyzer;
