//! Analyzer error types.

use amalgam_diagnostic::{Diagnostic, ErrorCode};
use amalgam_ir::Span;
use std::fmt;

/// What went wrong while checking one expression.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TypeErrorKind {
    /// A literal's numeric prefix failed to parse in its base.
    InvalidLiteral { text: String },
    /// Left side of `:=` is not an identifier.
    InvalidAssignmentTarget,
    /// A binding's right-hand side, or a referenced variable, has no
    /// inferable type.
    UnresolvedType { detail: String },
    /// Binary operand types disagree.
    TypeMismatch { left: String, right: String },
}

/// An analyzer violation, accumulated per method.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TypeError {
    pub kind: TypeErrorKind,
    pub span: Span,
}

impl TypeError {
    pub fn new(kind: TypeErrorKind, span: Span) -> Self {
        TypeError { kind, span }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            TypeErrorKind::InvalidLiteral { .. } => ErrorCode::E2001,
            TypeErrorKind::InvalidAssignmentTarget => ErrorCode::E2002,
            TypeErrorKind::UnresolvedType { .. } => ErrorCode::E2003,
            TypeErrorKind::TypeMismatch { .. } => ErrorCode::E2004,
        }
    }

    /// Convert into a renderable diagnostic.
    pub fn into_diagnostic(self) -> Diagnostic {
        let span = self.span;
        Diagnostic::error(self.code(), self.to_string()).with_span(span)
    }
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TypeErrorKind::InvalidLiteral { text } => {
                write!(f, "invalid integer literal `{text}`")
            }
            TypeErrorKind::InvalidAssignmentTarget => {
                write!(f, "left side of `:=` must be an identifier")
            }
            TypeErrorKind::UnresolvedType { detail } => {
                write!(f, "unresolved type: {detail}")
            }
            TypeErrorKind::TypeMismatch { left, right } => {
                write!(f, "operand types disagree: `{left}` vs `{right}`")
            }
        }
    }
}

impl std::error::Error for TypeError {}
