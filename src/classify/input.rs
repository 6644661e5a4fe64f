use crate::identifier::normalize_identifier;

/// Strip `name(...)` wrapping from `text`, returning the argument text.
/// The bracket must immediately follow the name and close at line end.
fn strip_call<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(name)?;
    let rest = rest.strip_prefix('(')?;
    rest.strip_suffix(')')
}

/// Drop one pair of matching surrounding quotes from a literal prompt.
fn strip_quotes(text: &str) -> &str {
    let trimmed = text.trim();
    for quote in ['"', '\''] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            return &trimmed[1..trimmed.len() - 1];
        }
    }
    trimmed
}

/// Rewrite `target = input(...)`, optionally wrapped in a single
/// `int(...)` or `str(...)` conversion, into the pseudocode sequence:
/// an `OUTPUT` line for the prompt (if any), an explicit conversion
/// line, then `INPUT target`.
pub fn classify_input(line: &str) -> Option<Vec<String>> {
    let (target, value) = line.split_once(" = ")?;
    let target = target.trim();
    if target.is_empty() || !target.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }

    let value = value.trim();
    let (conversion, call) = if let Some(inner) = strip_call(value, "int") {
        (Some("STR_TO_NUM"), inner)
    } else if let Some(inner) = strip_call(value, "str") {
        (Some("NUM_TO_STR"), inner)
    } else {
        (None, value)
    };

    let prompt = strip_call(call, "input")?;
    let variable = normalize_identifier(target);

    let mut fragments = Vec::new();
    if !prompt.is_empty() {
        fragments.push(format!("OUTPUT {}", strip_quotes(prompt)));
    }
    if let Some(name) = conversion {
        fragments.push(format!("{variable} <- {name}({variable})"));
    }
    fragments.push(format!("INPUT {variable}"));
    Some(fragments)
}
