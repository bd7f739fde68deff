//! Flat expression tree storage.
//!
//! Nodes live in an `AstArena` and reference children by `NodeId`
//! index, never by box or pointer. Child counts are fixed by kind:
//! leaves have none, a group has one, a binary operator exactly two.
//! The analyzer mutates `Node::ty` in place; everything else about a
//! node is immutable once allocated.

use crate::{Name, Span, StringInterner, TypeIdx};
use std::fmt;

/// Index of a node in its owning `AstArena`.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Binary operators with a registered handler.
///
/// Operator text outside this set is an `UnknownOperator` parse error.
/// Note there is no precedence here: the tree builder's stack rotation
/// fixes the association on its own.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    /// Variable binding: `name := expr`.
    Assign,
}

impl BinOp {
    /// Resolve operator text to its handler, if one is registered.
    pub fn from_symbol(text: &str) -> Option<Self> {
        Some(match text {
            "+" => BinOp::Add,
            "-" => BinOp::Sub,
            "*" => BinOp::Mul,
            "/" => BinOp::Div,
            "%" => BinOp::Rem,
            "&" => BinOp::BitAnd,
            "|" => BinOp::BitOr,
            "^" => BinOp::BitXor,
            "<<" => BinOp::Shl,
            ">>" => BinOp::Shr,
            ":=" => BinOp::Assign,
            _ => return None,
        })
    }

    /// The operator's source text.
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Rem => "%",
            BinOp::BitAnd => "&",
            BinOp::BitOr => "|",
            BinOp::BitXor => "^",
            BinOp::Shl => "<<",
            BinOp::Shr => ">>",
            BinOp::Assign => ":=",
        }
    }

    #[inline]
    pub fn is_assign(self) -> bool {
        matches!(self, BinOp::Assign)
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Node variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    /// Integer literal; raw text (digits plus any specifier) interned.
    Int(Name),
    /// Identifier reference or binding target.
    Ident(Name),
    /// Binary operation.
    Binary {
        op: BinOp,
        left: NodeId,
        right: NodeId,
    },
    /// Parenthesized sub-expression, already reduced to one tree.
    Group(NodeId),
}

/// One expression tree element.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
    /// Inferred type; `None` until the analyzer has run. Once set it is
    /// only ever replaced wholesale, never mutated through.
    pub ty: Option<TypeIdx>,
}

impl Node {
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Node {
            kind,
            span,
            ty: None,
        }
    }
}

/// Contiguous storage for all nodes of one module.
///
/// Trees never share children between distinct parents; each tree's
/// nodes are owned by this arena and freed with it in bulk.
#[derive(Clone, Default, Debug)]
pub struct AstArena {
    nodes: Vec<Node>,
}

impl AstArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node, returning its id.
    #[inline]
    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = u32::try_from(self.nodes.len())
            .unwrap_or_else(|_| panic!("arena overflow: more than u32::MAX nodes"));
        self.nodes.push(node);
        NodeId::new(id)
    }

    /// Get a node by id.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Get a mutable node by id.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Render a tree as an s-expression: `1*2+3` becomes `(* 1 (+ 2 3))`.
///
/// Used by the CLI's `parse` command and by golden-tree tests that pin
/// the builder's association down to the exact shape.
pub fn dump_tree(arena: &AstArena, root: NodeId, interner: &StringInterner) -> String {
    let mut out = String::new();
    write_node(arena, root, interner, &mut out);
    out
}

fn write_node(arena: &AstArena, id: NodeId, interner: &StringInterner, out: &mut String) {
    match arena.node(id).kind {
        NodeKind::Int(name) | NodeKind::Ident(name) => out.push_str(interner.resolve(name)),
        NodeKind::Binary { op, left, right } => {
            out.push('(');
            out.push_str(op.symbol());
            out.push(' ');
            write_node(arena, left, interner, out);
            out.push(' ');
            write_node(arena, right, interner, out);
            out.push(')');
        }
        NodeKind::Group(inner) => {
            out.push_str("(group ");
            write_node(arena, inner, interner, out);
            out.push(')');
        }
    }
}
