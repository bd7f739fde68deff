//! Type inference and validation for Amalgam.
//!
//! The analyzer walks each method's expression trees bottom-up,
//! inferring integer types from literal text, enforcing lvalue rules
//! for `:=`, and recording variable bindings in the method's scope
//! table. Type descriptors are immutable values interned in a
//! `TypePool` and shared by `TypeIdx` handle.

mod analyze;
mod error;
pub mod literal;
mod pool;

pub use analyze::check_module;
pub use error::{TypeError, TypeErrorKind};
pub use literal::{parse_int_literal, split_literal, LiteralError, ParsedLiteral};
pub use pool::{IntWidth, TypeData, TypePool};
