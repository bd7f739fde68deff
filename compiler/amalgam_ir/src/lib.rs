//! Core IR types for the Amalgam compiler.
//!
//! Everything the pipeline stages share lives here: source spans, the
//! string interner, the classified token model, the flat expression
//! arena, and the module/method containers. Child references are `u32`
//! indices rather than boxes so trees can be stored contiguously and
//! mutated in place by the analyzer.

mod ast;
mod interner;
mod module;
mod span;
mod token;
mod type_idx;

pub use ast::{AstArena, BinOp, Node, NodeId, NodeKind, dump_tree};
pub use interner::{Name, StringInterner};
pub use module::{Method, Module, DEFAULT_METHOD};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
pub use type_idx::TypeIdx;
