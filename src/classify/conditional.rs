/// Extract the condition text from a conditional header of the exact
/// shape `if <conditions>:`. `elif` is not a recognized header.
pub fn header_condition(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("if ")?;
    let condition = rest.strip_suffix(':')?.trim();
    if condition.is_empty() {
        None
    } else {
        Some(condition)
    }
}

/// Whether the line opens a conditional block. Recognition only; the
/// block body is consumed by the converter.
pub fn is_conditional_header(line: &str) -> bool {
    header_condition(line).is_some()
}
