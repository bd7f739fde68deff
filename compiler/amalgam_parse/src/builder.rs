//! Stack-rotation tree construction.
//!
//! The builder keeps an append-only work stack while scanning tokens
//! left to right. Atoms push; an operator arriving on top of an atom
//! rotates under it, so the previous atom becomes the operator's
//! eventual left child while later atoms sink to the right. At end of
//! input the flat stack is swept front-to-back: each operator entry
//! recursively consumes the next two entries as its children.

use amalgam_diagnostic::ErrorCode;
use amalgam_ir::{
    AstArena, BinOp, Node, NodeId, NodeKind, Span, StringInterner, Token, TokenKind, TokenList,
};
use tracing::trace;

use crate::ParseError;

/// Work-stack entry: a finished atom or an operator awaiting children.
#[derive(Copy, Clone, Debug)]
enum Entry {
    Atom(NodeId),
    PendingOp { op: BinOp, span: Span },
}

/// Build one statement's expression tree from its token sequence.
///
/// Returns `Ok(None)` when the statement holds no tokens (blank line).
/// On success the tree's nodes live in `arena` and the root id is
/// returned for the caller to attach to its method.
pub fn parse_statement(
    source: &str,
    tokens: &TokenList,
    interner: &mut StringInterner,
    arena: &mut AstArena,
) -> Result<Option<NodeId>, ParseError> {
    let mut builder = TreeBuilder {
        source,
        tokens: tokens.as_slice(),
        pos: 0,
        interner,
        arena,
    };
    let stack = builder.collect(false)?;
    builder.sweep(&stack)
}

struct TreeBuilder<'a> {
    source: &'a str,
    tokens: &'a [Token],
    pos: usize,
    interner: &'a mut StringInterner,
    arena: &'a mut AstArena,
}

impl TreeBuilder<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Span to blame when the input ends unexpectedly.
    fn here(&self) -> Span {
        self.peek()
            .or_else(|| self.tokens.last())
            .map_or(Span::DUMMY, |t| t.span)
    }

    /// Scan tokens into a flat work stack, applying the rotation.
    ///
    /// When `in_group` is set, scanning stops at (and consumes) the
    /// matching `)`; otherwise it stops at the statement terminator.
    fn collect(&mut self, in_group: bool) -> Result<Vec<Entry>, ParseError> {
        let mut stack: Vec<Entry> = Vec::new();

        loop {
            let Some(&token) = self.peek() else {
                if in_group {
                    return Err(ParseError::malformed("unclosed group", self.here()));
                }
                break;
            };

            match token.kind {
                TokenKind::Eol | TokenKind::Eof => {
                    if in_group {
                        return Err(ParseError::malformed("unclosed group", token.span));
                    }
                    self.pos += 1;
                    break;
                }
                TokenKind::Int => {
                    self.pos += 1;
                    let name = self.interner.intern(token.text(self.source));
                    let id = self.arena.alloc(Node::new(NodeKind::Int(name), token.span));
                    stack.push(Entry::Atom(id));
                }
                TokenKind::Ident => {
                    self.pos += 1;
                    let name = self.interner.intern(token.text(self.source));
                    let id = self
                        .arena
                        .alloc(Node::new(NodeKind::Ident(name), token.span));
                    stack.push(Entry::Atom(id));
                }
                TokenKind::Op => {
                    self.pos += 1;
                    let text = token.text(self.source);
                    let Some(op) = BinOp::from_symbol(text) else {
                        return Err(ParseError::unknown_operator(text, token.span));
                    };
                    trace!(op = %op, "push operator");
                    let entry = Entry::PendingOp {
                        op,
                        span: token.span,
                    };
                    // The rotation: an atom on top swaps places with the
                    // incoming operator so it can become the left child.
                    match stack.last().copied() {
                        Some(atom @ Entry::Atom(_)) => {
                            stack.pop();
                            stack.push(entry);
                            stack.push(atom);
                        }
                        _ => stack.push(entry),
                    }
                }
                TokenKind::OpenParen => {
                    self.pos += 1;
                    let inner_stack = self.collect(true)?;
                    let close_span = self.tokens[self.pos - 1].span;
                    let inner = self.sweep(&inner_stack)?.ok_or_else(|| {
                        ParseError::malformed("empty group", token.span.merge(close_span))
                    })?;
                    let id = self.arena.alloc(Node::new(
                        NodeKind::Group(inner),
                        token.span.merge(close_span),
                    ));
                    stack.push(Entry::Atom(id));
                }
                TokenKind::CloseParen => {
                    if !in_group {
                        return Err(ParseError::malformed("unmatched `)`", token.span));
                    }
                    self.pos += 1;
                    break;
                }
            }
        }

        Ok(stack)
    }

    /// Sweep the flat stack into a single tree.
    ///
    /// The stack must be exactly a prefix-order encoding of the tree;
    /// leftover or missing entries are a `MalformedExpression`, never
    /// an out-of-range read.
    fn sweep(&mut self, entries: &[Entry]) -> Result<Option<NodeId>, ParseError> {
        if entries.is_empty() {
            return Ok(None);
        }
        trace!(depth = entries.len(), "sweep parse stack");

        let mut idx = 0usize;
        let root = self.consume(entries, &mut idx)?;
        if idx != entries.len() {
            let span = match entries[idx] {
                Entry::Atom(id) => self.arena.node(id).span,
                Entry::PendingOp { span, .. } => span,
            };
            return Err(ParseError::malformed(
                "expression does not reduce to a single tree",
                span,
            ));
        }
        Ok(Some(root))
    }

    /// Consume the next stack entry; an operator recursively consumes
    /// the following two entries as its left and right children.
    fn consume(&mut self, entries: &[Entry], idx: &mut usize) -> Result<NodeId, ParseError> {
        let Some(&entry) = entries.get(*idx) else {
            return Err(ParseError::new(
                ErrorCode::E1001,
                "operator is missing an operand",
                self.here(),
            ));
        };
        *idx += 1;

        match entry {
            Entry::Atom(id) => Ok(id),
            Entry::PendingOp { op, span } => {
                let left = self.consume(entries, idx)?;
                let right = self.consume(entries, idx)?;
                let node_span = span
                    .merge(self.arena.node(left).span)
                    .merge(self.arena.node(right).span);
                Ok(self
                    .arena
                    .alloc(Node::new(NodeKind::Binary { op, left, right }, node_span)))
            }
        }
    }
}

#[cfg(test)]
mod tests;
