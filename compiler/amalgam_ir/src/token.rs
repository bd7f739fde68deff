//! Classified tokens handed from the lexer to the tree builder.
//!
//! Tokens carry a kind tag and a source span only; their text is sliced
//! from the source line on demand. One `TokenList` covers one statement,
//! terminated by `Eol` or `Eof`.

use crate::Span;
use std::fmt;

/// Token classification.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Integer literal, including any trailing base/sign specifier
    /// (`10`, `ff_h`-style text is split later by the type layer).
    Int,
    /// Identifier: `[A-Za-z_][A-Za-z0-9_]*`.
    Ident,
    /// Operator: a maximal run of operator punctuation (`+`, `:=`, `<<`).
    Op,
    /// Group start: `(`.
    OpenParen,
    /// Group end: `)`.
    CloseParen,
    /// End of statement.
    Eol,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// True for the kinds that terminate a statement.
    #[inline]
    pub fn is_terminator(self) -> bool {
        matches!(self, TokenKind::Eol | TokenKind::Eof)
    }
}

/// A classified token with its source span.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Slice this token's text out of the source line.
    #[inline]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Ordered token sequence for one statement.
#[derive(Clone, Default, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token.
    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Token at `index`, if in bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Tokens as a plain slice.
    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests;
