//! Line scanner for Amalgam.
//!
//! Turns one statement line into classified tokens with spans: integer
//! literals (a leading digit with any alphanumeric suffix riding
//! along), identifiers, operators (a maximal run of operator
//! punctuation, so `:=` and `<<` arrive as single tokens), and group
//! parens. The tree builder never sees raw text, only `(kind, span)`.

mod scanner;

pub use scanner::{lex_line, LexError};
