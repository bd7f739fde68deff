//! Tree-builder error types.

use amalgam_diagnostic::{Diagnostic, ErrorCode};
use amalgam_ir::Span;
use std::fmt;

/// A tree-builder failure.
///
/// Aborts building the current statement's tree; the caller decides
/// whether to continue with the next statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
}

impl ParseError {
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
        }
    }

    /// `MalformedExpression`: the sweep could not consume the stack
    /// cleanly, or a group never closed.
    pub fn malformed(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorCode::E1001, message, span)
    }

    /// `UnknownOperator`: operator text with no registered handler.
    pub fn unknown_operator(text: &str, span: Span) -> Self {
        Self::new(ErrorCode::E1002, format!("unknown operator `{text}`"), span)
    }

    /// Convert into a renderable diagnostic.
    pub fn into_diagnostic(self) -> Diagnostic {
        Diagnostic::error(self.code, self.message).with_span(self.span)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ParseError {}
