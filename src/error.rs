use thiserror::Error;

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors surfaced by the conversion core.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("line {line}: unrecognized construct: {text}")]
    UnrecognizedLine { line: usize, text: String },

    #[error("malformed conditional at line {line}")]
    MalformedConditional { line: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
