//! Identifier and literal normalization for the target convention.

use crate::lexical::{split_outside_quotes, word_exists_outside_quotes};

/// Rewrite a snake_case identifier as camelCase. Underscores inside
/// quoted literals do not count; text without a quote-external
/// underscore comes back unchanged. Idempotent.
pub fn normalize_identifier(text: &str) -> String {
    if !word_exists_outside_quotes("_", text) {
        return text.to_string();
    }

    let mut segments = split_outside_quotes("_", text).into_iter();
    let mut normalized = segments.next().unwrap_or_default();
    for segment in segments {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            normalized.extend(first.to_uppercase());
            normalized.push_str(chars.as_str());
        }
    }
    normalized
}

/// Lower `True`/`False` to the pseudocode spelling; anything else is
/// returned unchanged.
pub fn normalize_boolean_literal(text: &str) -> String {
    match text {
        "True" => "true".to_string(),
        "False" => "false".to_string(),
        _ => text.to_string(),
    }
}
