//! Error codes for all compiler diagnostics.

use std::fmt;

/// Error codes, phase-coded by first digit:
/// - E0xxx: lexer errors
/// - E1xxx: tree-builder errors
/// - E2xxx: type errors
/// - E3xxx: operation-graph / lowering errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer errors (E0xxx)
    /// Character outside every token class
    E0001,

    // Tree-builder errors (E1xxx)
    /// Malformed expression (sweep could not consume the stack cleanly)
    E1001,
    /// Operator text with no registered handler
    E1002,

    // Type errors (E2xxx)
    /// Integer literal's numeric prefix fails to parse in its base
    E2001,
    /// Left side of `:=` is not an identifier
    E2002,
    /// Operand or binding type could not be inferred
    E2003,
    /// Binary operand types disagree
    E2004,

    // Operation-graph errors (E3xxx)
    /// Load references a register with no registered producer
    E3001,
    /// Second producer registered for the same register
    E3002,
    /// Dependency queried before its producer was prepared
    E3003,
    /// Backend failure during preparation
    E3004,
}

impl ErrorCode {
    /// Short description, for `--explain`-style output.
    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "invalid character",
            ErrorCode::E1001 => "malformed expression",
            ErrorCode::E1002 => "unknown operator",
            ErrorCode::E2001 => "invalid integer literal",
            ErrorCode::E2002 => "invalid assignment target",
            ErrorCode::E2003 => "unresolved type",
            ErrorCode::E2004 => "type mismatch",
            ErrorCode::E3001 => "unknown register",
            ErrorCode::E3002 => "duplicate register producer",
            ErrorCode::E3003 => "unprepared dependency",
            ErrorCode::E3004 => "backend failure",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Failure to parse an error code string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownErrorCode(pub String);

impl fmt::Display for UnknownErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown error code `{}`", self.0)
    }
}

impl std::error::Error for UnknownErrorCode {}

impl std::str::FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "E0001" => Ok(ErrorCode::E0001),
            "E1001" => Ok(ErrorCode::E1001),
            "E1002" => Ok(ErrorCode::E1002),
            "E2001" => Ok(ErrorCode::E2001),
            "E2002" => Ok(ErrorCode::E2002),
            "E2003" => Ok(ErrorCode::E2003),
            "E2004" => Ok(ErrorCode::E2004),
            "E3001" => Ok(ErrorCode::E3001),
            "E3002" => Ok(ErrorCode::E3002),
            "E3003" => Ok(ErrorCode::E3003),
            "E3004" => Ok(ErrorCode::E3004),
            _ => Err(UnknownErrorCode(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_display() {
        for code in [
            ErrorCode::E0001,
            ErrorCode::E1001,
            ErrorCode::E1002,
            ErrorCode::E2001,
            ErrorCode::E2002,
            ErrorCode::E2003,
            ErrorCode::E2004,
            ErrorCode::E3001,
            ErrorCode::E3002,
            ErrorCode::E3003,
            ErrorCode::E3004,
        ] {
            assert_eq!(code.to_string().parse::<ErrorCode>(), Ok(code));
            assert!(!code.description().is_empty());
        }
    }

    #[test]
    fn unknown_code_strings_are_rejected() {
        assert!("E9999".parse::<ErrorCode>().is_err());
        assert!("".parse::<ErrorCode>().is_err());
    }
}
