//! Rewrites boolean conditions into pseudocode operators.

use crate::identifier::{normalize_boolean_literal, normalize_identifier};
use crate::lexical::{find_outside_quotes, split_outside_quotes, word_exists_outside_quotes};

/// Relational rewrites, tried in order. `is not` must come before `is`.
const RELATIONAL_REWRITES: [(&str, &str); 4] = [
    ("!=", "<>"),
    ("==", "="),
    ("is not", "<>"),
    ("is", "="),
];

fn normalize_operand(text: &str) -> String {
    normalize_boolean_literal(&normalize_identifier(text.trim()))
}

/// Rewrite a single comparison into pseudocode form.
///
/// The first matching relational operator splits the condition into two
/// operands, each identifier-normalized and boolean-lowered. A leading
/// `not` becomes an uppercase `NOT` prefix. Anything else is normalized
/// and passed through.
pub fn transform_condition(condition: &str) -> String {
    for (token, op) in RELATIONAL_REWRITES {
        if word_exists_outside_quotes(token, condition) {
            let operands = split_outside_quotes(token, condition);
            if operands.len() >= 2 {
                return format!(
                    "{} {} {}",
                    normalize_operand(&operands[0]),
                    op,
                    normalize_operand(&operands[1])
                );
            }
        }
    }

    let trimmed = condition.trim();
    if trimmed.len() > 4 && trimmed.is_char_boundary(4) && trimmed[..4].eq_ignore_ascii_case("not ") {
        return format!("NOT {}", normalize_operand(&trimmed[4..]));
    }

    normalize_operand(condition)
}

/// Rewrite a full boolean expression, splitting on quote-external
/// `and`/`or` and transforming each operand in turn.
///
/// Connectives are re-emitted with their source spelling, in source
/// order, as a flat chain. No precedence between `and` and `or` is
/// applied.
pub fn transform_all_conditions(condition: &str) -> String {
    let mut connectives: Vec<(usize, usize)> = Vec::new();
    for token in ["and", "or"] {
        for pos in find_outside_quotes(token, condition) {
            connectives.push((pos, token.len()));
        }
    }
    connectives.sort_unstable();

    let mut rewritten = String::new();
    let mut start = 0;
    for (pos, len) in connectives {
        rewritten.push_str(&transform_condition(&condition[start..pos]));
        rewritten.push(' ');
        rewritten.push_str(&condition[pos..pos + len]);
        rewritten.push(' ');
        start = pos + len;
    }
    rewritten.push_str(&transform_condition(&condition[start..]));
    rewritten
}
