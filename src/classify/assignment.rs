use crate::identifier::{normalize_boolean_literal, normalize_identifier};

/// Rewrite `identifier = expression` as `identifier <- expression`.
///
/// The target must be a single word; the value is identifier-normalized
/// and boolean-lowered but otherwise carried over verbatim. No
/// arithmetic or call evaluation happens here.
pub fn classify_assignment(line: &str) -> Option<String> {
    let (target, value) = line.split_once(" = ")?;
    if target.is_empty() || !target.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }

    let value = normalize_boolean_literal(&normalize_identifier(value.trim()));
    Some(format!("{} <- {}", normalize_identifier(target), value))
}
