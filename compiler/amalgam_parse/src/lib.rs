//! Expression tree builder for Amalgam.
//!
//! Consumes one statement's classified tokens and produces at most one
//! binary expression tree in the module arena. There is no precedence
//! table: a single left-to-right stack rotation fixes the association
//! (every operator right-nests, so `1*2+3` builds `*(1, +(2,3))`).
//! That shape is the language's defined behavior, not an accident; the
//! golden-tree tests pin it down.

mod builder;
mod error;

pub use builder::parse_statement;
pub use error::ParseError;
