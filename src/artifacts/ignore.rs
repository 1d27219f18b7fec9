//! Ignore-pattern matching
//!
//! The repository root carries an ignore file with one pattern per line
//! (default single entry excluding the control directory itself). A pattern
//! matches a candidate path if any of three ordered predicates holds:
//!
//! 1. the pattern is a literal substring of the path
//! 2. the pattern equals the path's basename exactly
//! 3. the basename ends with the pattern after stripping a single trailing
//!    `*` wildcard
//!
//! Predicates are evaluated in that order and short-circuit on the first
//! match. Only `stage` consults this list.

use std::path::Path;

/// One ignore pattern, matched by an ordered sequence of predicates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnorePattern(String);

impl IgnorePattern {
    pub fn new(pattern: String) -> Self {
        IgnorePattern(pattern)
    }

    /// Check whether this pattern matches the candidate path
    pub fn matches(&self, path: &Path) -> bool {
        let matchers: [fn(&Self, &Path) -> bool; 3] = [
            Self::is_substring_of_path,
            Self::equals_basename,
            Self::is_basename_suffix,
        ];

        matchers.iter().any(|matcher| matcher(self, path))
    }

    fn is_substring_of_path(&self, path: &Path) -> bool {
        path.to_string_lossy().contains(&self.0)
    }

    fn equals_basename(&self, path: &Path) -> bool {
        Self::basename(path) == self.0
    }

    fn is_basename_suffix(&self, path: &Path) -> bool {
        let suffix = self.0.strip_suffix('*').unwrap_or(&self.0);
        Self::basename(path).ends_with(suffix)
    }

    fn basename(path: &Path) -> String {
        path.file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

impl AsRef<str> for IgnorePattern {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ordered list of ignore patterns, parsed from the ignore file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreList {
    patterns: Vec<IgnorePattern>,
}

impl IgnoreList {
    /// Parse an ignore file's content, one pattern per line
    ///
    /// Blank lines are skipped; pattern order is preserved.
    pub fn parse(content: &str) -> Self {
        let patterns = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| IgnorePattern::new(line.to_string()))
            .collect();

        IgnoreList { patterns }
    }

    /// Find the first pattern matching the candidate path, if any
    pub fn first_match(&self, path: &Path) -> Option<&IgnorePattern> {
        self.patterns.iter().find(|pattern| pattern.matches(path))
    }
}
