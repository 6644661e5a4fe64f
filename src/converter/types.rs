use serde::{Deserialize, Serialize};

/// One raw source line: trimmed content, leading-space count, and
/// 1-based position in the original file.
#[derive(Debug, Clone)]
pub struct SourceLine {
    pub content: String,
    pub indent: usize,
    pub number: usize,
}

impl SourceLine {
    pub fn parse(raw: &str, number: usize) -> Self {
        let indent = raw.chars().take_while(|&c| c == ' ').count();
        Self {
            content: raw.trim().to_string(),
            indent,
            number,
        }
    }
}

/// One converted pseudocode line. Rendered as `indent` space characters
/// followed by `content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertedLine {
    pub content: String,
    pub indent: usize,
}

/// A source line skipped in lenient mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 1-based line number in the source.
    pub line: usize,
    pub text: String,
}

/// Policy for lines no classifier recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Abort the conversion on the first unrecognized line.
    Strict,
    /// Skip the line, record a diagnostic, keep converting.
    #[default]
    Lenient,
}

#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub strictness: Strictness,
}

/// A finished conversion: pseudocode lines in source order plus any
/// lines that were skipped along the way.
#[derive(Debug)]
pub struct Conversion {
    pub lines: Vec<ConvertedLine>,
    pub diagnostics: Vec<Diagnostic>,
}
