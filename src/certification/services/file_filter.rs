use crate::shared::Result;
use glob::{MatchOptions, Pattern};
use std::sync::atomic::{AtomicBool, Ordering};

/// Maximum number of exclude patterns to prevent DoS attacks
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern to prevent DoS attacks
const MAX_PATTERN_LENGTH: usize = 255;

/// `*` may cross `/`, so `raw/*.csv` also covers nested folders
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// FileFilter - Excludes dataset files by wildcard pattern
///
/// Patterns are glob patterns matched against the dataset-relative path
/// (`/` separated). A pattern without `/` is also tried against the file
/// name alone, so `*.tmp` and `cache.db` work at any depth. `*` matches zero
/// or more characters, including `/`; `?` and `[...]` match one character.
/// Matching is case-sensitive.
#[derive(Debug, Default)]
pub struct FileFilter {
    patterns: Vec<ExcludePattern>,
}

impl FileFilter {
    /// Creates a new FileFilter from raw pattern strings
    ///
    /// # Errors
    /// - Too many patterns (> MAX_EXCLUDE_PATTERNS)
    /// - Invalid pattern format (length, characters)
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            anyhow::bail!(
                "Too many exclusion patterns: {} (maximum: {})",
                patterns.len(),
                MAX_EXCLUDE_PATTERNS
            );
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Returns true if the relative path should be left out of the dataset
    pub fn is_excluded(&self, relative_path: &str) -> bool {
        let file_name = relative_path.rsplit('/').next().unwrap_or(relative_path);
        // no short-circuit: every matching pattern gets marked
        self.patterns
            .iter()
            .fold(false, |excluded, p| p.matches(relative_path, file_name) || excluded)
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Patterns that have not excluded any file so far
    ///
    /// Call after scanning to warn about patterns that had no effect.
    pub fn get_unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.load(Ordering::Relaxed))
            .map(|p| p.original.clone())
            .collect()
    }
}

#[derive(Debug)]
struct ExcludePattern {
    original: String,
    matcher: Pattern,
    path_only: bool,
    matched: AtomicBool,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;

        let matcher = Pattern::new(&pattern).map_err(|e| {
            anyhow::anyhow!("Invalid exclusion pattern '{}': {}", pattern, e.msg)
        })?;
        let path_only = pattern.contains('/');

        Ok(Self {
            original: pattern,
            matcher,
            path_only,
            matched: AtomicBool::new(false),
        })
    }

    fn matches(&self, relative_path: &str, file_name: &str) -> bool {
        let is_match = self.matcher.matches_with(relative_path, MATCH_OPTIONS)
            || (!self.path_only && self.matcher.matches_with(file_name, MATCH_OPTIONS));
        if is_match {
            self.matched.store(true, Ordering::Relaxed);
        }
        is_match
    }
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        anyhow::bail!("Exclusion pattern cannot be empty");
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "Exclusion pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    for ch in pattern.chars() {
        if !is_valid_pattern_char(ch) {
            anyhow::bail!(
                "Exclusion pattern contains invalid character '{}' in pattern '{}'. \
                 Only alphanumeric, hyphens, underscores, dots, slashes, spaces and the glob characters * ? [ ] ! are allowed.",
                ch,
                pattern
            );
        }
    }

    if pattern.chars().all(|c| c == '*') {
        anyhow::bail!(
            "Exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        );
    }

    if pattern.starts_with('/') || pattern.split('/').any(|segment| segment == "..") {
        anyhow::bail!(
            "Exclusion pattern must be relative to the dataset folder: '{}'",
            pattern
        );
    }

    Ok(())
}

fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | ' ' | '*' | '?' | '[' | ']' | '!')
}
