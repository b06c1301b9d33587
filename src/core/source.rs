//! Resolves an input descriptor into parsed Go files.
//!
//! A [`Source::Text`] is tried as a path first and falls back to being Go
//! source itself; [`Source::Bytes`] is always source. Directories are scanned
//! one level deep, in file-name order.

use std::{
    borrow::Cow,
    fs, io,
    path::Path,
    sync::LazyLock,
};

use glob::PatternError;
use tracing::debug;
use walkdir::WalkDir;

use crate::core::error::ScanError;
use crate::core::parsers::go::{ParsedGo, parse_go_bytes};
use crate::core::utils::FileNameMatcher;

/// Base name of the generated asset bundle, which is never scanned by default.
pub const GENERATED_BUNDLE_FILE: &str = "bindata.go";

static DEFAULT_SKIP_FILES: LazyLock<FileNameMatcher> =
    LazyLock::new(|| FileNameMatcher::new(&[GENERATED_BUNDLE_FILE]).unwrap());

/// What to scan: a path or inline source, or a raw byte buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source<'a> {
    /// Path to a `.go` file or a directory, otherwise Go source text.
    Text(Cow<'a, str>),
    /// Go source bytes.
    Bytes(Cow<'a, [u8]>),
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(text: &'a str) -> Self {
        Source::Text(Cow::Borrowed(text))
    }
}

impl From<String> for Source<'_> {
    fn from(text: String) -> Self {
        Source::Text(Cow::Owned(text))
    }
}

impl<'a> From<&'a [u8]> for Source<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Source::Bytes(Cow::Borrowed(bytes))
    }
}

impl From<Vec<u8>> for Source<'_> {
    fn from(bytes: Vec<u8>) -> Self {
        Source::Bytes(Cow::Owned(bytes))
    }
}

/// Options for a scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Base names of directory entries that are never read.
    pub skip_files: FileNameMatcher,
}

impl ScanOptions {
    pub fn with_skip_files<S: AsRef<str>>(patterns: &[S]) -> Result<Self, PatternError> {
        Ok(Self {
            skip_files: FileNameMatcher::new(patterns)?,
        })
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            skip_files: DEFAULT_SKIP_FILES.clone(),
        }
    }
}

/// Parse every file the source stands for. Fails on the first unreadable or
/// unparsable file.
pub fn load(source: &Source<'_>, options: &ScanOptions) -> Result<Vec<ParsedGo>, ScanError> {
    match source {
        Source::Bytes(bytes) => Ok(vec![parse_go_bytes(bytes, "")?]),
        Source::Text(text) => load_text(text, options),
    }
}

fn load_text(text: &str, options: &ScanOptions) -> Result<Vec<ParsedGo>, ScanError> {
    let metadata = match fs::metadata(text) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
            return Err(ScanError::io(text, err));
        }
        // Not a path: the text is the source.
        Err(_) => return Ok(vec![parse_go_bytes(text.as_bytes(), "")?]),
    };

    if metadata.is_dir() {
        load_dir(Path::new(text), options)
    } else if metadata.is_file() {
        Ok(vec![load_file(Path::new(text))?])
    } else {
        Err(ScanError::UnsupportedInput(text.to_string()))
    }
}

fn load_file(path: &Path) -> Result<ParsedGo, ScanError> {
    let bytes = fs::read(path).map_err(|err| ScanError::io(path, err))?;
    let parsed = parse_go_bytes(&bytes, &path.to_string_lossy())?;
    debug!(file = %path.display(), "parsed file");
    Ok(parsed)
}

fn load_dir(dir: &Path, options: &ScanOptions) -> Result<Vec<ParsedGo>, ScanError> {
    let mut files = Vec::new();
    let mut skipped = 0;

    let entries = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();
    for entry in entries {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(dir).to_path_buf();
            ScanError::io(path, io::Error::from(err))
        })?;
        if entry.file_type().is_dir() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if !file_name.ends_with(".go") {
            continue;
        }
        if options.skip_files.matches(&file_name) {
            debug!(file = %entry.path().display(), "skipping generated file");
            skipped += 1;
            continue;
        }

        files.push(load_file(entry.path())?);
    }

    debug!(
        dir = %dir.display(),
        files = files.len(),
        skipped,
        "loaded directory"
    );
    Ok(files)
}
