//! Glob-style filename matching and directory-name exclusion.
//!
//! File patterns use `*` (any run of characters, including empty) and `?`
//! (exactly one character); everything else is literal. A pattern matches
//! the *entire* filename, case-insensitively. Directory exclusion is a
//! different, deliberately simpler rule: a case-sensitive substring test
//! against the directory's base name. The asymmetry is long-standing
//! documented behavior of this tool.

use regex::{Regex, RegexBuilder};

/// A compiled set of glob patterns for filename matching.
///
/// Compilation never fails: glob input has no invalid forms. Characters
/// that would be regex metacharacters are matched literally.
///
/// # Example
///
/// ```
/// use prunecopy::PatternSet;
///
/// let set = PatternSet::compile(["*.cpp", "*.hpp"]);
/// assert!(set.matches("main.cpp"));
/// assert!(set.matches("MAIN.CPP"));
/// assert!(!set.matches("main.rs"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Regex>,
}

impl PatternSet {
    /// Compile glob patterns into an anchored, case-insensitive set.
    ///
    /// An empty input yields an empty set; how an empty set is interpreted
    /// (admit-all for includes, exclude-nothing for excludes) is the
    /// caller's decision.
    pub fn compile<I, S>(globs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns = Vec::new();
        for glob in globs {
            let translated = glob_to_regex(glob.as_ref());
            // The translation emits only escaped literals, ".*" and ".",
            // so the compiled form is always a valid expression.
            if let Ok(regex) = RegexBuilder::new(&translated)
                .case_insensitive(true)
                .build()
            {
                patterns.push(regex);
            }
        }
        Self { patterns }
    }

    /// True iff `name` matches at least one pattern in the set.
    ///
    /// Vacuously false for an empty set.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(name))
    }

    /// True iff no patterns were compiled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Number of compiled patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }
}

/// Translate one glob into an anchored regular expression.
///
/// `*` → `.*`, `?` → `.`, regex metacharacters are escaped, everything
/// else passes through unchanged. The result is wrapped in `^(?:...)$` so
/// the pattern must cover the whole filename.
fn glob_to_regex(glob: &str) -> String {
    let mut regex = String::with_capacity(glob.len() + 8);
    regex.push_str("^(?:");
    for ch in glob.chars() {
        match ch {
            '*' => regex.push_str(".*"),
            '?' => regex.push('.'),
            '\\' | '.' | '+' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$' => {
                regex.push('\\');
                regex.push(ch);
            }
            other => regex.push(other),
        }
    }
    regex.push_str(")$");
    regex
}

/// True iff `dir_name` contains any of `exclude_substrings` as a literal,
/// case-sensitive substring.
///
/// Matches only against the directory's base name, never the full path.
#[must_use]
pub fn is_excluded_dir(dir_name: &str, exclude_substrings: &[String]) -> bool {
    exclude_substrings
        .iter()
        .any(|needle| dir_name.contains(needle.as_str()))
}
