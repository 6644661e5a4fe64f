use crate::identifier::normalize_identifier;
use crate::lexical::{split_outside_quotes, word_exists_outside_quotes};

/// Rewrite a `print(...)` call as an `OUTPUT` statement.
///
/// Only a bare call matches: anything between `print` and the opening
/// bracket disqualifies the line. `+`-joined arguments are split
/// quote-aware, each identifier-normalized, and rejoined with commas.
pub fn classify_output(line: &str) -> Option<String> {
    let rest = line.strip_prefix("print")?;
    let rest = rest.strip_prefix('(')?;
    let args = rest.strip_suffix(')')?;

    let text = if word_exists_outside_quotes("+", args) {
        split_outside_quotes("+", args)
            .iter()
            .map(|piece| normalize_identifier(piece))
            .collect::<Vec<_>>()
            .join(", ")
    } else {
        normalize_identifier(args.trim())
    };

    Some(format!("OUTPUT {text}"))
}
