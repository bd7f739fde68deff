//! Lowering and preparation error types.
//!
//! These abort the current template. There is no partial-template
//! recovery; the caller discards the template and moves on.

use amalgam_diagnostic::{Diagnostic, ErrorCode};
use std::fmt;

/// What went wrong while building or preparing a template.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum MachineError {
    /// A consumer names a register with no registered producer.
    UnknownRegister { register: String },
    /// Two operations claim the same target register.
    DuplicateProducer { register: String },
    /// A consumer's producer exists but has not been prepared yet, so
    /// emission order was wrong.
    UnpreparedDependency { register: String },
    /// The backend rejected an emission.
    Backend { message: String },
}

impl MachineError {
    pub fn code(&self) -> ErrorCode {
        match self {
            MachineError::UnknownRegister { .. } => ErrorCode::E3001,
            MachineError::DuplicateProducer { .. } => ErrorCode::E3002,
            MachineError::UnpreparedDependency { .. } => ErrorCode::E3003,
            MachineError::Backend { .. } => ErrorCode::E3004,
        }
    }

    /// Convert into a renderable diagnostic. Lowering errors carry no
    /// source span; registers are a post-tree artifact.
    pub fn into_diagnostic(self) -> Diagnostic {
        Diagnostic::error(self.code(), self.to_string())
    }
}

impl fmt::Display for MachineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MachineError::UnknownRegister { register } => {
                write!(f, "no producer registered for `{register}`")
            }
            MachineError::DuplicateProducer { register } => {
                write!(f, "register `{register}` already has a producer")
            }
            MachineError::UnpreparedDependency { register } => {
                write!(f, "producer of `{register}` has not been prepared yet")
            }
            MachineError::Backend { message } => {
                write!(f, "backend error: {message}")
            }
        }
    }
}

impl std::error::Error for MachineError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn codes_and_messages() {
        let err = MachineError::UnknownRegister {
            register: "r1".to_owned(),
        };
        assert_eq!(err.code(), ErrorCode::E3001);
        assert_eq!(err.to_string(), "no producer registered for `r1`");

        let err = MachineError::DuplicateProducer {
            register: "x".to_owned(),
        };
        assert_eq!(err.code(), ErrorCode::E3002);

        let err = MachineError::UnpreparedDependency {
            register: "%0".to_owned(),
        };
        assert_eq!(err.code(), ErrorCode::E3003);

        let err = MachineError::Backend {
            message: "division by zero".to_owned(),
        };
        assert_eq!(err.code(), ErrorCode::E3004);
        assert_eq!(err.to_string(), "backend error: division by zero");
    }

    #[test]
    fn diagnostic_has_no_span() {
        let diag = MachineError::UnknownRegister {
            register: "r1".to_owned(),
        }
        .into_diagnostic();
        assert!(diag.span.is_none());
    }
}
