pub mod classify;
pub mod condition;
pub mod converter;
pub mod error;
pub mod identifier;
pub mod lexical;

pub use converter::{
    convert, convert_lines, Conversion, ConvertOptions, ConvertedLine, Diagnostic, Strictness,
};
pub use error::{ConvertError, Result};
