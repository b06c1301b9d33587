//! Utility functions and helpers for the scanning core.
//!
//! ## Module Structure
//!
//! - `glob_matcher`: File-name matching against configured glob patterns
//! - `paths`: Go-style lexical path helpers (`filepath.Dir`, `filepath.Clean`)
//! - `unquote`: Go literal unquoting (`strconv.Unquote`)

pub mod glob_matcher;
pub mod paths;
pub mod unquote;

pub use glob_matcher::FileNameMatcher;
pub use paths::dir_of;
pub use unquote::{UnquoteError, unquote};
