//! Quote-aware search and split over a single source line.
//!
//! A delimiter or keyword inside a quoted literal must never act as a
//! match or a split point, so every search walks the line with a small
//! state machine tracking whether the cursor sits inside a single- or
//! double-quoted string. Unbalanced quotes are undefined behavior.

/// True if `token` matches as a whole word rather than a literal symbol.
/// Word tokens (letters and spaces only, e.g. `and`, `is not`) match
/// case-insensitively and only at word boundaries.
fn is_word_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_alphabetic() || c == ' ')
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn matches_at(token: &str, line: &str, at: usize, word: bool) -> bool {
    let end = at + token.len();
    let Some(slice) = line.get(at..end) else {
        return false;
    };
    if word {
        if !slice.eq_ignore_ascii_case(token) {
            return false;
        }
        let before = line[..at].chars().next_back();
        let after = line[end..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    } else {
        slice == token
    }
}

/// Byte offsets of every quote-external occurrence of `token` in `line`,
/// left to right, non-overlapping.
pub fn find_outside_quotes(token: &str, line: &str) -> Vec<usize> {
    let mut hits = Vec::new();
    if token.is_empty() {
        return hits;
    }
    let word = is_word_token(token);
    let mut in_single = false;
    let mut in_double = false;
    let mut i = 0;

    while i < line.len() {
        let ch = match line[i..].chars().next() {
            Some(c) => c,
            None => break,
        };

        if in_single {
            if ch == '\'' {
                in_single = false;
            }
            i += ch.len_utf8();
            continue;
        }
        if in_double {
            if ch == '"' {
                in_double = false;
            }
            i += ch.len_utf8();
            continue;
        }

        match ch {
            '\'' => {
                in_single = true;
                i += 1;
            }
            '"' => {
                in_double = true;
                i += 1;
            }
            _ if matches_at(token, line, i, word) => {
                hits.push(i);
                i += token.len();
            }
            _ => {
                i += ch.len_utf8();
            }
        }
    }

    hits
}

/// Whether `token` occurs in `line` outside any quoted literal.
pub fn word_exists_outside_quotes(token: &str, line: &str) -> bool {
    !find_outside_quotes(token, line).is_empty()
}

/// Split `line` on every quote-external occurrence of `token`, dropping
/// the token and trimming each piece. With no occurrence the whole
/// trimmed line comes back as a single piece.
pub fn split_outside_quotes(token: &str, line: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for pos in find_outside_quotes(token, line) {
        pieces.push(line[start..pos].trim().to_string());
        start = pos + token.len();
    }
    pieces.push(line[start..].trim().to_string());
    pieces
}
