//! The block converter: recursive descent over indentation-delimited
//! blocks.
//!
//! Lines are consumed front-to-back from a queue, classified one at a
//! time, and conditional headers pull their whole block off the queue
//! for recursive conversion. Every invocation owns its queue and output
//! accumulator; sub-blocks get freshly built sub-queues, so recursion
//! depth equals the nesting depth of conditionals in the source.

mod types;

pub use types::{Conversion, ConvertOptions, ConvertedLine, Diagnostic, SourceLine, Strictness};

use std::collections::VecDeque;

use crate::classify::{classify, header_condition, Statement};
use crate::condition::transform_all_conditions;
use crate::error::{ConvertError, Result};

/// Indent step between nesting levels in the emitted pseudocode.
const INDENT_STEP: usize = 4;

/// Convert source lines with default (lenient) options, discarding
/// diagnostics. This is the plain collaborator interface; callers who
/// want the skipped-line report use [`convert_lines`].
pub fn convert(lines: &[&str]) -> Result<Vec<ConvertedLine>> {
    Ok(convert_lines(lines, &ConvertOptions::default())?.lines)
}

/// Convert source lines into pseudocode lines plus diagnostics.
pub fn convert_lines(lines: &[&str], opts: &ConvertOptions) -> Result<Conversion> {
    let mut queue: VecDeque<SourceLine> = lines
        .iter()
        .enumerate()
        .map(|(i, raw)| SourceLine::parse(raw, i + 1))
        .collect();

    let mut diagnostics = Vec::new();
    let lines = convert_block(&mut queue, opts, &mut diagnostics)?;
    Ok(Conversion { lines, diagnostics })
}

/// Convert one nesting level, draining the queue.
fn convert_block(
    queue: &mut VecDeque<SourceLine>,
    opts: &ConvertOptions,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Vec<ConvertedLine>> {
    let mut converted = Vec::new();

    while let Some(line) = queue.pop_front() {
        // Blank lines and comments are not constructs; skip them in
        // both modes without a diagnostic.
        if line.content.is_empty() || line.content.starts_with('#') {
            continue;
        }

        match classify(&line.content) {
            Some(Statement::Input(fragments)) => {
                for content in fragments {
                    converted.push(ConvertedLine {
                        content,
                        indent: line.indent,
                    });
                }
            }
            Some(Statement::Output(content)) | Some(Statement::Assignment(content)) => {
                converted.push(ConvertedLine {
                    content,
                    indent: line.indent,
                });
            }
            Some(Statement::ConditionalHeader) => {
                convert_conditional(&line, queue, opts, diagnostics, &mut converted)?;
            }
            None => match opts.strictness {
                Strictness::Strict => {
                    return Err(ConvertError::UnrecognizedLine {
                        line: line.number,
                        text: line.content,
                    });
                }
                Strictness::Lenient => {
                    log::debug!("line {}: unrecognized construct: {}", line.number, line.content);
                    diagnostics.push(Diagnostic {
                        line: line.number,
                        text: line.content,
                    });
                }
            },
        }
    }

    Ok(converted)
}

/// Extract a conditional's block from the queue and synthesize the
/// IF/THEN/ELSE/ENDIF structure, recursing into each body.
fn convert_conditional(
    header: &SourceLine,
    queue: &mut VecDeque<SourceLine>,
    opts: &ConvertOptions,
    diagnostics: &mut Vec<Diagnostic>,
    out: &mut Vec<ConvertedLine>,
) -> Result<()> {
    let reference = header.indent;

    // A line belongs to the block while it sits deeper than the header,
    // or is the literal `else:` at exactly the header's indent.
    let mut block: Vec<SourceLine> = Vec::new();
    while let Some(front) = queue.front() {
        let inside = front.indent > reference
            || (front.content == "else:" && front.indent == reference);
        if !inside {
            break;
        }
        if let Some(line) = queue.pop_front() {
            block.push(line);
        }
    }

    let else_at = block
        .iter()
        .position(|l| l.indent == reference && l.content == "else:");
    let (then_body, else_body) = match else_at {
        Some(i) => {
            let else_line = block[i].number;
            let bodies = block.split_off(i + 1);
            block.truncate(i);
            (block, Some((else_line, bodies)))
        }
        None => (block, None),
    };

    if then_body.is_empty() {
        return Err(ConvertError::MalformedConditional {
            line: header.number,
        });
    }

    let condition = header_condition(&header.content).ok_or(ConvertError::MalformedConditional {
        line: header.number,
    })?;

    out.push(ConvertedLine {
        content: format!("IF {}", transform_all_conditions(condition)),
        indent: reference,
    });
    out.push(ConvertedLine {
        content: "THEN".to_string(),
        indent: reference + INDENT_STEP,
    });
    convert_body(then_body, reference, opts, diagnostics, out)?;

    if let Some((else_line, else_body)) = else_body {
        if else_body.is_empty() {
            return Err(ConvertError::MalformedConditional { line: else_line });
        }
        out.push(ConvertedLine {
            content: "ELSE".to_string(),
            indent: reference + INDENT_STEP,
        });
        convert_body(else_body, reference, opts, diagnostics, out)?;
    }

    out.push(ConvertedLine {
        content: "ENDIF".to_string(),
        indent: reference,
    });
    Ok(())
}

/// Re-base a block body on its header, convert it through a fresh
/// queue, then shift the result back under the block.
fn convert_body(
    body: Vec<SourceLine>,
    reference: usize,
    opts: &ConvertOptions,
    diagnostics: &mut Vec<Diagnostic>,
    out: &mut Vec<ConvertedLine>,
) -> Result<()> {
    let mut sub: VecDeque<SourceLine> = body
        .into_iter()
        .map(|line| SourceLine {
            indent: line.indent.saturating_sub(reference),
            ..line
        })
        .collect();

    for mut line in convert_block(&mut sub, opts, diagnostics)? {
        line.indent += reference + INDENT_STEP;
        out.push(line);
    }
    Ok(())
}
