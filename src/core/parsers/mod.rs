//! Source parsers.
//!
//! - `go`: Go files, parsed with tree-sitter and validated like the Go toolchain

pub mod go;
