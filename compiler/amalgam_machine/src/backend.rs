//! The backend seam and a reference interpreter.
//!
//! Prepared templates talk to a `Backend`, which turns operations into
//! backend values. `EvalBackend` is the in-tree implementation: it
//! evaluates directly to `i64`, which is enough for the REPL and for
//! end-to-end tests. A code-generating backend would produce IR value
//! handles instead.

use amalgam_ir::BinOp;
use amalgam_types::IntWidth;

use crate::error::MachineError;

/// What a template needs from its target.
pub trait Backend {
    type Value: Clone;

    /// Materialize an integer constant.
    fn emit_constant(
        &mut self,
        signed: bool,
        width: IntWidth,
        value: u64,
    ) -> Result<Self::Value, MachineError>;

    /// Copy an already-produced value into the named register. The
    /// reference interpreter ignores the name; a code-generating
    /// backend would use it to label the emitted value.
    fn emit_load(&mut self, source: &Self::Value, target: &str) -> Result<Self::Value, MachineError>;

    /// Combine two already-produced values.
    fn emit_binary(
        &mut self,
        op: BinOp,
        lhs: &Self::Value,
        rhs: &Self::Value,
    ) -> Result<Self::Value, MachineError>;
}

/// Direct evaluation to `i64`.
#[derive(Debug, Default)]
pub struct EvalBackend {
    emitted: usize,
}

impl EvalBackend {
    pub fn new() -> Self {
        EvalBackend::default()
    }

    /// How many emissions this backend has performed. Preparing a
    /// template twice must not grow this.
    #[inline]
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    fn backend_error(message: impl Into<String>) -> MachineError {
        MachineError::Backend {
            message: message.into(),
        }
    }
}

impl Backend for EvalBackend {
    type Value = i64;

    fn emit_constant(
        &mut self,
        _signed: bool,
        _width: IntWidth,
        value: u64,
    ) -> Result<i64, MachineError> {
        self.emitted += 1;
        // Literals have no sign marker, so the raw value is already
        // the intended magnitude regardless of the annotated width.
        Ok(value as i64)
    }

    fn emit_load(&mut self, source: &i64, _target: &str) -> Result<i64, MachineError> {
        self.emitted += 1;
        Ok(*source)
    }

    fn emit_binary(&mut self, op: BinOp, lhs: &i64, rhs: &i64) -> Result<i64, MachineError> {
        self.emitted += 1;
        let (lhs, rhs) = (*lhs, *rhs);
        let value = match op {
            BinOp::Add => lhs.wrapping_add(rhs),
            BinOp::Sub => lhs.wrapping_sub(rhs),
            BinOp::Mul => lhs.wrapping_mul(rhs),
            BinOp::Div => {
                if rhs == 0 {
                    return Err(Self::backend_error("division by zero"));
                }
                lhs.wrapping_div(rhs)
            }
            BinOp::Rem => {
                if rhs == 0 {
                    return Err(Self::backend_error("remainder by zero"));
                }
                lhs.wrapping_rem(rhs)
            }
            BinOp::BitAnd => lhs & rhs,
            BinOp::BitOr => lhs | rhs,
            BinOp::BitXor => lhs ^ rhs,
            // Shift counts wrap at the value width.
            BinOp::Shl => lhs.wrapping_shl(rhs as u32),
            BinOp::Shr => lhs.wrapping_shr(rhs as u32),
            BinOp::Assign => {
                // Lowering rewrites `:=` into a load; it never reaches
                // the backend.
                return Err(Self::backend_error("`:=` is not a backend operation"));
            }
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests;
