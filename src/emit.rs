//! Property key construction and comment cleanup.

use regex::Regex;
use std::sync::LazyLock;

const SEPARATOR: char = '.';

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// One emitted `key=value` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyLine {
    pub key: String,
    pub value: String,
}

/// Derive the key segment for a class or member: lower-case only the first
/// character, keep the rest (`MyClass` → `myClass`).
pub fn property_key(simple_name: &str) -> String {
    let mut chars = simple_name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Append the key separator to a non-empty prefix that does not already
/// end with one. Idempotent.
pub fn normalize_prefix(prefix: &str) -> String {
    if prefix.is_empty() || prefix.ends_with(SEPARATOR) {
        prefix.to_string()
    } else {
        format!("{}{}", prefix, SEPARATOR)
    }
}

/// Collapse a raw doc comment into a single properties-safe line: newlines
/// become spaces and whitespace runs shrink to one space.
///
/// With `strip_angle_commas` set, a comma immediately before `<` or after
/// `>` is dropped as well — some hosts render generic type references with
/// stray commas around the brackets.
pub fn clean_comment(comment: &str, strip_angle_commas: bool) -> String {
    let cleaned = RE_WHITESPACE.replace_all(comment, " ").into_owned();
    if strip_angle_commas {
        cleaned.replace(",<", "<").replace(">,", ">")
    } else {
        cleaned
    }
}
