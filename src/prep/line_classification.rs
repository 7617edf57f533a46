//! Line Classification
//!
//! Each source line is either a paragraph break or a sentence. A line whose
//! first character is the comment marker is a paragraph break and its content is
//! dropped; every other line, including an empty one, is a sentence made of its
//! whitespace-delimited tokens.

use crate::text::tokenize;

/// The two kinds of source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A comment line, rewritten as the paragraph marker.
    Paragraph,
    /// Any other line; may hold zero tokens.
    Sentence(Vec<&'a str>),
}

/// Classify `line` against `comment_marker`.
pub fn classify_line<'a>(line: &'a str, comment_marker: &str) -> LineKind<'a> {
    if !comment_marker.is_empty() && line.starts_with(comment_marker) {
        LineKind::Paragraph
    } else {
        LineKind::Sentence(tokenize(line).collect())
    }
}
