//! The dispatcher and the four text operations.
//!
//! Every function here is pure: same input, same output, no I/O.

use crate::error::TransformError;
use crate::operation::Operation;

/// Parse `operation` and apply it to `text`.
///
/// Fails with `TransformError::UnknownOperation` carrying the verbatim
/// operation name when it is not one of the recognized wire names.
pub fn transform(text: &str, operation: &str) -> Result<String, TransformError> {
    let op: Operation = operation.parse()?;
    Ok(op.apply(text))
}

impl Operation {
    /// Apply this operation to `text`.
    pub fn apply(self, text: &str) -> String {
        match self {
            Operation::Slugify => slugify(text),
            Operation::Reverse => reverse(text),
            Operation::Uppercase => uppercase(text),
            Operation::WordCount => word_count(text),
        }
    }
}

/// Render `text` as a lowercase, hyphen-separated, URL-safe slug.
///
/// Characters outside `a-z`, `0-9`, whitespace and `-` are dropped before
/// whitespace becomes hyphens, so `"Hello World!"` and `"Hello ! World"`
/// both end up as `"hello-world"`.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    for c in lowered.trim().chars() {
        let c = if c.is_whitespace() {
            '-'
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            c
        } else {
            continue;
        };
        if c == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(c);
    }
    // Runs are collapsed above, so at most one hyphen sits at either edge.
    let slug = slug.strip_prefix('-').unwrap_or(&slug);
    let slug = slug.strip_suffix('-').unwrap_or(slug);
    slug.to_string()
}

/// Reverse `text` one `char` at a time.
///
/// Grapheme clusters are not kept together: a combining mark ends up in
/// front of the letter it used to follow.
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

/// Locale-independent Unicode uppercase mapping.
pub fn uppercase(text: &str) -> String {
    text.to_uppercase()
}

/// Count whitespace-separated words, formatted as `"1 word"` or `"<n> words"`.
pub fn word_count(text: &str) -> String {
    match text.split_whitespace().count() {
        1 => "1 word".to_string(),
        n => format!("{n} words"),
    }
}
