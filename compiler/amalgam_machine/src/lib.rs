//! Operation graph and lowering for Amalgam.
//!
//! The lowering driver turns one checked method into a `Template`, an
//! ordered operation sequence with a single-assignment register index.
//! Preparing a template walks that sequence in emission order and asks
//! a `Backend` for a value per operation; `EvalBackend` is the in-tree
//! interpreter behind the REPL.
//!
//! # Pipeline Position
//!
//! ```text
//! Source → Lex → Build Trees → Analyze → **Lower** → Backend
//! ```

mod backend;
mod error;
mod lower;
mod op;
mod template;

pub use backend::{Backend, EvalBackend};
pub use error::MachineError;
pub use lower::lower_method;
pub use op::{OpId, OpKind, Operation};
pub use template::{Machine, Prepared, Template};
