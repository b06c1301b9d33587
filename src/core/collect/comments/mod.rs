//! Comment collection - `$` command directives.
//!
//! Comments are grouped the way the Go parser groups them, rendered to plain
//! text, and every group whose text starts with `$` is parsed into commands.
//!
//! ## Module Structure
//!
//! - `collector`: Main CommentCollector implementation
//! - `directive`: `$` directive parsing
//! - `group`: Comment grouping and text rendering

pub mod collector;
pub mod directive;
mod group;

pub use group::CommentGroup;
