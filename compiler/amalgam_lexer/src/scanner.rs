//! Byte cursor and token classification.

use amalgam_diagnostic::{Diagnostic, ErrorCode};
use amalgam_ir::{Span, Token, TokenKind, TokenList};
use std::fmt;

/// Characters that may appear in an operator run.
const OPERATOR_CHARS: &[u8] = b"+-*/&|^=<>:;[]{},.?\\~!@#$%";

/// Lexer failure: a character outside every token class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub ch: char,
    pub span: Span,
}

impl LexError {
    /// Convert into a renderable diagnostic.
    pub fn into_diagnostic(self) -> Diagnostic {
        Diagnostic::error(
            ErrorCode::E0001,
            format!("invalid character `{}`", self.ch),
        )
        .with_span(self.span)
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid character `{}` at byte {}", self.ch, self.span.start)
    }
}

impl std::error::Error for LexError {}

/// Scan one statement line into a token list.
///
/// The list always ends with a terminator: `Eol` if a newline was hit,
/// `Eof` at end of input. Whitespace separates tokens and is dropped.
pub fn lex_line(source: &str) -> Result<TokenList, LexError> {
    let mut cursor = Cursor::new(source);
    let mut tokens = TokenList::new();

    loop {
        cursor.skip_spaces();
        let start = cursor.pos;
        let Some(ch) = cursor.peek() else {
            tokens.push(Token::new(TokenKind::Eof, Span::new(start, start)));
            return Ok(tokens);
        };

        let kind = match ch {
            '\n' => {
                cursor.bump(ch);
                tokens.push(Token::new(TokenKind::Eol, Span::new(start, cursor.pos)));
                return Ok(tokens);
            }
            '(' => {
                cursor.bump(ch);
                TokenKind::OpenParen
            }
            ')' => {
                cursor.bump(ch);
                TokenKind::CloseParen
            }
            '0'..='9' => {
                // Digits first, then any alphanumeric run: base and
                // sign specifiers stay inside the literal token.
                cursor.bump_while(|c| c.is_ascii_digit());
                cursor.bump_while(|c| c.is_ascii_alphanumeric());
                TokenKind::Int
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                cursor.bump_while(|c| c.is_ascii_alphanumeric() || c == '_');
                TokenKind::Ident
            }
            c if c.is_ascii() && OPERATOR_CHARS.contains(&(c as u8)) => {
                cursor.bump_while(|c| c.is_ascii() && OPERATOR_CHARS.contains(&(c as u8)));
                TokenKind::Op
            }
            other => {
                cursor.bump(other);
                return Err(LexError {
                    ch: other,
                    span: Span::new(start, cursor.pos),
                });
            }
        };

        tokens.push(Token::new(kind, Span::new(start, cursor.pos)));
    }
}

/// Peek/bump cursor over the source bytes.
struct Cursor<'a> {
    source: &'a str,
    pos: u32,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos as usize..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self, ch: char) {
        self.pos += ch.len_utf8() as u32;
    }

    fn bump_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.bump(ch);
        }
    }

    fn skip_spaces(&mut self) {
        self.bump_while(|c| c == ' ' || c == '\t' || c == '\r');
    }
}

#[cfg(test)]
mod tests;
