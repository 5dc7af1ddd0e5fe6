//! Include/exclude selection of types by fully qualified name.

use crate::error::Error;
use crate::options::Options;
use crate::pattern::Pattern;
use crate::report::{Reporter, Severity};

/// Compiled selection rules for one run.
#[derive(Debug)]
pub struct TypeFilter {
    includes: Option<Vec<Pattern>>,
    excludes: Option<Vec<Pattern>>,
}

impl TypeFilter {
    /// Compile the configured include/exclude globs.
    pub fn new(options: &Options) -> Result<TypeFilter, Error> {
        Ok(TypeFilter {
            includes: compile_all(options.includes.as_deref())?,
            excludes: compile_all(options.excludes.as_deref())?,
        })
    }

    /// Whether a type is selected for emission.
    ///
    /// Without includes every type passes the include test; without
    /// excludes nothing is excluded. Pattern hits are reported as notes
    /// and never affect anything beyond the selection itself. Exclude
    /// patterns are not consulted for types that already failed the
    /// include test.
    pub fn select(&self, qualified_name: &str, reporter: &mut dyn Reporter) -> bool {
        let included = match &self.includes {
            None => true,
            Some(patterns) => patterns.iter().any(|pattern| {
                let matched = pattern.matches(qualified_name);
                if matched {
                    reporter.print(
                        Severity::Note,
                        &format!(
                            "Including class: '{}' (pattern '{}')",
                            qualified_name,
                            pattern.as_str()
                        ),
                    );
                }
                matched
            }),
        };
        if !included {
            return false;
        }
        let excluded = match &self.excludes {
            None => false,
            Some(patterns) => patterns.iter().any(|pattern| {
                let matched = pattern.matches(qualified_name);
                if matched {
                    reporter.print(
                        Severity::Note,
                        &format!(
                            "Excluding class: '{}' (pattern '{}')",
                            qualified_name,
                            pattern.as_str()
                        ),
                    );
                }
                matched
            }),
        };
        !excluded
    }
}

fn compile_all(globs: Option<&[String]>) -> Result<Option<Vec<Pattern>>, Error> {
    globs
        .map(|globs| globs.iter().map(|glob| Pattern::compile(glob)).collect())
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MemoryReporter;

    fn filter(includes: Option<&[&str]>, excludes: Option<&[&str]>) -> TypeFilter {
        let options = Options {
            includes: includes.map(|globs| globs.iter().map(|g| g.to_string()).collect()),
            excludes: excludes.map(|globs| globs.iter().map(|g| g.to_string()).collect()),
            ..Options::default()
        };
        TypeFilter::new(&options).unwrap()
    }

    #[test]
    fn no_patterns_selects_everything() {
        let filter = filter(None, None);
        let mut reporter = MemoryReporter::default();
        assert!(filter.select("com.foo.Bar", &mut reporter));
        assert!(filter.select("anything.Else", &mut reporter));
        assert!(reporter.messages.is_empty());
    }

    #[test]
    fn include_and_exclude_combine() {
        let filter = filter(Some(&["com.foo.*"]), Some(&["com.foo.Secret"]));
        let mut reporter = MemoryReporter::default();
        assert!(filter.select("com.foo.Bar", &mut reporter));
        assert!(!filter.select("com.foo.Secret", &mut reporter));
        assert!(!filter.select("com.bar.Baz", &mut reporter));
    }

    #[test]
    fn include_miss_needs_no_exclude_check() {
        let filter = filter(Some(&["com.foo.*"]), Some(&["**"]));
        let mut reporter = MemoryReporter::default();
        assert!(!filter.select("com.bar.Baz", &mut reporter));
        // no exclude note for a type that failed the include test
        assert!(reporter.messages.is_empty());
    }

    #[test]
    fn pattern_hits_are_reported_as_notes() {
        let filter = filter(Some(&["com.foo.*"]), Some(&["com.foo.Secret"]));
        let mut reporter = MemoryReporter::default();
        filter.select("com.foo.Secret", &mut reporter);

        let notes = reporter.with_severity(Severity::Note);
        assert_eq!(notes.len(), 2);
        assert!(notes[0].contains("Including class: 'com.foo.Secret'"));
        assert!(notes[1].contains("Excluding class: 'com.foo.Secret'"));
        assert!(notes[1].contains("com.foo.Secret"));
    }

    #[test]
    fn first_matching_include_wins() {
        let filter = filter(Some(&["com.*", "**"]), None);
        let mut reporter = MemoryReporter::default();
        assert!(filter.select("com.foo.Bar", &mut reporter));
        // any() stops at the first hit, so exactly one note
        assert_eq!(reporter.with_severity(Severity::Note).len(), 1);
    }

    #[test]
    fn excludes_alone() {
        let filter = filter(None, Some(&["com.internal.**"]));
        let mut reporter = MemoryReporter::default();
        assert!(filter.select("com.foo.Bar", &mut reporter));
        assert!(!filter.select("com.internal.Gauge", &mut reporter));
    }
}
