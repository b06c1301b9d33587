//! Error taxonomy for a scan.
//!
//! Every failure is returned to the caller of [`crate::scan`] immediately; a
//! failed scan never carries a partial [`crate::core::ScanResult`].

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The descriptor is neither source text, a byte buffer, nor a path to a
    /// regular file or directory.
    #[error("unsupported input <{0}>: not a regular file or directory")]
    UnsupportedInput(String),

    /// A referenced file or directory could not be read.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Source text could not be parsed into a syntax tree.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// The Go grammar could not be loaded into the parser.
    #[error("failed to load the Go grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),
}

impl ScanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, ScanError::Syntax(_))
    }
}

/// A parse failure located in the source.
///
/// `line` and `column` are 1-based; the column counts bytes, like the Go
/// toolchain does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// File the error was found in (empty for in-memory sources).
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub message: String,
    /// The full source line the error points into, without its line break.
    pub source_line: String,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.file.is_empty() {
            write!(f, "{}:{}: {}", self.line, self.column, self.message)
        } else {
            write!(
                f,
                "{}:{}:{}: {}",
                self.file, self.line, self.column, self.message
            )
        }
    }
}

impl std::error::Error for SyntaxError {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn syntax_error(file: &str) -> SyntaxError {
        SyntaxError {
            file: file.to_string(),
            line: 3,
            column: 7,
            message: "expected declaration, found x".to_string(),
            source_line: "x := 1".to_string(),
        }
    }

    #[test]
    fn test_syntax_error_display_with_file() {
        let err = ScanError::from(syntax_error("app/main.go"));
        assert_eq!(
            err.to_string(),
            "app/main.go:3:7: expected declaration, found x"
        );
        assert!(err.is_syntax());
    }

    #[test]
    fn test_syntax_error_display_without_file() {
        assert_eq!(
            syntax_error("").to_string(),
            "3:7: expected declaration, found x"
        );
    }

    #[test]
    fn test_io_error_display_includes_path() {
        let err = ScanError::io(
            "missing.go",
            io::Error::new(io::ErrorKind::NotFound, "no such file or directory"),
        );
        assert_eq!(err.to_string(), "missing.go: no such file or directory");
        assert!(!err.is_syntax());
    }
}
