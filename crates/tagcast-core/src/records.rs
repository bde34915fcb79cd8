//! Utilities for records output format

use crate::catalog::TagSet;

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Render a tag set as a sorted comma list, or `-` when empty
pub fn tags_field(tags: &TagSet) -> String {
    if tags.is_empty() {
        "-".to_string()
    } else {
        crate::catalog::sorted(tags).join(",")
    }
}
