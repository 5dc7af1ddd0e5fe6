//! Glob-to-matcher compilation for include/exclude filtering.
//!
//! Patterns match fully qualified type names: `.` is literal, `?` matches
//! exactly one character, `*` and `**` both match any run of characters.
//! The whole name must match, not a substring.

use crate::error::Error;
use regex::Regex;

/// A compiled include/exclude pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    glob: String,
    regex: Regex,
}

impl Pattern {
    /// Compile a glob into an anchored matcher.
    pub fn compile(glob: &str) -> Result<Pattern, Error> {
        let regex = Regex::new(&translate(glob)).map_err(|source| Error::InvalidPattern {
            pattern: glob.to_string(),
            source,
        })?;
        Ok(Pattern {
            glob: glob.to_string(),
            regex,
        })
    }

    /// The glob this pattern was compiled from.
    pub fn as_str(&self) -> &str {
        &self.glob
    }

    pub fn matches(&self, qualified_name: &str) -> bool {
        self.regex.is_match(qualified_name)
    }
}

/// Translate one glob into an anchored regex. `*` runs collapse into a
/// single `.*`, `?` becomes `.`, everything else matches literally.
fn translate(glob: &str) -> String {
    let mut out = String::with_capacity(glob.len() + 2);
    out.push('^');
    let mut chars = glob.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' => {
                while chars.peek() == Some(&'*') {
                    chars.next();
                }
                out.push_str(".*");
            }
            '?' => out.push('.'),
            c => out.push_str(&regex::escape(&c.to_string())),
        }
    }
    out.push('$');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(glob: &str, name: &str) -> bool {
        Pattern::compile(glob).unwrap().matches(name)
    }

    #[test]
    fn literal_dot_is_not_a_wildcard() {
        assert!(matches("com.foo.Bar", "com.foo.Bar"));
        assert!(!matches("com.foo.Bar", "comxfooxBar"));
    }

    #[test]
    fn star_crosses_segments() {
        assert!(matches("com.foo.*", "com.foo.Bar"));
        assert!(matches("com.foo.*", "com.foo.bar.Baz"));
        assert!(!matches("com.foo.*", "com.bar.Baz"));
    }

    #[test]
    fn double_star_behaves_like_star() {
        assert!(matches("com.**", "com.foo.bar.Baz"));
        assert!(matches("**", "anything.at.All"));
    }

    #[test]
    fn consecutive_stars_collapse() {
        assert!(matches("com.***.Bar", "com.foo.Bar"));
        assert!(matches("com.****", "com.X"));
    }

    #[test]
    fn question_mark_matches_exactly_one_character() {
        assert!(matches("com.foo.Ba?", "com.foo.Bar"));
        assert!(matches("com.foo.Ba?", "com.foo.Baz"));
        assert!(!matches("com.foo.Ba?", "com.foo.Ba"));
        assert!(!matches("com.foo.Ba?", "com.foo.Bart"));
    }

    #[test]
    fn full_match_not_substring() {
        assert!(!matches("foo", "com.foo.Bar"));
        assert!(!matches("com.foo", "com.foo.Bar"));
    }

    #[test]
    fn empty_glob_matches_only_empty_name() {
        assert!(matches("", ""));
        assert!(!matches("", "com.foo.Bar"));
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        assert!(matches("com.foo.Bar$Inner", "com.foo.Bar$Inner"));
        assert!(matches("a+b", "a+b"));
        assert!(!matches("a+b", "aab"));
    }

    #[test]
    fn keeps_source_glob() {
        let pattern = Pattern::compile("com.foo.*").unwrap();
        assert_eq!(pattern.as_str(), "com.foo.*");
    }
}
