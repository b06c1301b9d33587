use glob::{Pattern, PatternError};

/// Matches file base names against a list of glob patterns.
///
/// Patterns without wildcards only match the identical name, so the default
/// `bindata.go` entry never matches `my_bindata.go`.
#[derive(Debug, Clone, Default)]
pub struct FileNameMatcher {
    patterns: Vec<Pattern>,
}

impl FileNameMatcher {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, PatternError> {
        let patterns = patterns
            .iter()
            .map(|p| Pattern::new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(file_name))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
