//! Operations: the units a template hands to a backend.

use std::fmt;

use amalgam_ir::BinOp;
use amalgam_types::IntWidth;

/// Index of an operation within its template.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct OpId(u32);

impl OpId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        OpId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for OpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "op{}", self.0)
    }
}

/// What one operation does.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum OpKind {
    /// A typed integer constant. Depends on nothing.
    Constant {
        signed: bool,
        width: IntWidth,
        value: u64,
    },
    /// Copy the value produced for `source` into this operation's
    /// target register. The producer of `source` must appear earlier
    /// in the template and be prepared first.
    Load { source: String },
    /// Combine two earlier registers with an arithmetic or bitwise
    /// operator. Same ordering obligation as `Load`.
    Binary {
        op: BinOp,
        lhs: String,
        rhs: String,
    },
}

/// One operation: an optional target register plus its kind. Only
/// operations with a target are entered in the template's register
/// map.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Operation {
    target: Option<String>,
    kind: OpKind,
}

impl Operation {
    /// A constant producing `target`.
    pub fn constant(target: impl Into<String>, signed: bool, width: IntWidth, value: u64) -> Self {
        Operation {
            target: Some(target.into()),
            kind: OpKind::Constant {
                signed,
                width,
                value,
            },
        }
    }

    /// A load of `source` into `target`.
    pub fn load(target: impl Into<String>, source: impl Into<String>) -> Self {
        Operation {
            target: Some(target.into()),
            kind: OpKind::Load {
                source: source.into(),
            },
        }
    }

    /// A binary combination of `lhs` and `rhs` into `target`.
    pub fn binary(
        target: impl Into<String>,
        op: BinOp,
        lhs: impl Into<String>,
        rhs: impl Into<String>,
    ) -> Self {
        Operation {
            target: Some(target.into()),
            kind: OpKind::Binary {
                op,
                lhs: lhs.into(),
                rhs: rhs.into(),
            },
        }
    }

    /// Whether this operation produces a named register.
    #[inline]
    pub fn has_output(&self) -> bool {
        self.target.is_some()
    }

    /// Target register name, if the operation produces one.
    #[inline]
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    #[inline]
    pub fn kind(&self) -> &OpKind {
        &self.kind
    }
}
