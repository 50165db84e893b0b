//! Parse error types.

use fluentlint_ast::SourceLocation;
use thiserror::Error;

/// Parse error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorCode {
    MissingEndTag,
    InvalidEndTag,
    EofInTag,
    EofInExpression,
}

impl ErrorCode {
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingEndTag => "element is missing its end tag",
            Self::InvalidEndTag => "end tag has no matching open tag",
            Self::EofInTag => "unexpected end of input inside a tag",
            Self::EofInExpression => "unexpected end of input inside an expression",
        }
    }
}

/// A recoverable parse error with its source location
#[derive(Debug, Clone, Error)]
#[error("{}", code.message())]
pub struct ParseError {
    pub code: ErrorCode,
    pub loc: Option<SourceLocation>,
}

impl ParseError {
    pub fn new(code: ErrorCode, loc: Option<SourceLocation>) -> Self {
        Self { code, loc }
    }
}
