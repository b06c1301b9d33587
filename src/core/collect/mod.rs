//! Collection - comment directives.
//!
//! The first of the two per-file passes: every comment group of a parsed file
//! is inspected for `$` command directives.

pub mod comments;

pub use comments::collector::CommentCollector;
pub use comments::directive::Directive;
