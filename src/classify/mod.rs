//! Statement classifiers: one recognizer per supported statement kind.
//!
//! Each classifier both detects applicability and produces the rewritten
//! pseudocode fragment(s). A line matches at most one classifier; the
//! priority order is fixed: input-assignment, output, plain assignment,
//! conditional header.

mod assignment;
mod conditional;
mod input;
mod output;

pub use assignment::classify_assignment;
pub use conditional::{header_condition, is_conditional_header};
pub use input::classify_input;
pub use output::classify_output;

/// A classified line, rewritten where the statement kind carries its own
/// text. Conditional headers are recognized only; their block is the
/// converter's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// OUTPUT-prompt / conversion / INPUT lines, already ordered.
    Input(Vec<String>),
    Output(String),
    Assignment(String),
    ConditionalHeader,
}

/// Run the classifiers in priority order over one trimmed line.
pub fn classify(line: &str) -> Option<Statement> {
    if let Some(fragments) = classify_input(line) {
        return Some(Statement::Input(fragments));
    }
    if let Some(text) = classify_output(line) {
        return Some(Statement::Output(text));
    }
    if let Some(text) = classify_assignment(line) {
        return Some(Statement::Assignment(text));
    }
    if is_conditional_header(line) {
        return Some(Statement::ConditionalHeader);
    }
    None
}
