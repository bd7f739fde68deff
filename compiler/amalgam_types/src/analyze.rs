//! The analyzer: bottom-up type inference and assignment validation.
//!
//! Runs once per module after tree building. Violations are
//! accumulated per method and checking continues with the next
//! statement, so one pass reports everything; the method failed if any
//! violation was recorded. Inference is cached on the node, so
//! re-running the analyzer never changes an existing annotation.

use amalgam_ir::{AstArena, Method, Module, Name, NodeId, NodeKind, StringInterner, TypeIdx};
use tracing::{debug, trace};

use crate::error::{TypeError, TypeErrorKind};
use crate::literal::parse_int_literal;
use crate::pool::TypePool;

/// Check every method of a module, annotating nodes in place and
/// populating the method scope tables. Returns all violations; an
/// empty vector means the module checked clean.
pub fn check_module(
    module: &mut Module,
    interner: &StringInterner,
    pool: &mut TypePool,
) -> Vec<TypeError> {
    let mut errors = Vec::new();
    let (arena, methods) = module.arena_and_methods_mut();
    for method in methods {
        debug!(method = interner.resolve(method.name()), "check method");
        let mut analyzer = Analyzer {
            arena,
            method,
            interner,
            pool,
            errors: &mut errors,
            journal: Vec::new(),
        };
        analyzer.check();
    }
    errors
}

struct Analyzer<'a> {
    arena: &'a mut AstArena,
    method: &'a mut Method,
    interner: &'a StringInterner,
    pool: &'a mut TypePool,
    errors: &'a mut Vec<TypeError>,
    /// Scope writes made while checking the current statement, with the
    /// value each one overwrote. Replayed in reverse when the statement
    /// records a violation.
    journal: Vec<(Name, Option<TypeIdx>)>,
}

impl Analyzer<'_> {
    fn check(&mut self) {
        // Statements are checked in order so bindings from earlier
        // assignments are visible to later references. A statement that
        // records a violation has its scope writes rolled back, so a
        // nested assignment inside a rejected statement never leaks a
        // binding to the statements after it.
        for root in self.method.roots().to_vec() {
            let clean_mark = self.errors.len();
            self.journal.clear();
            self.infer(root);
            if self.errors.len() > clean_mark {
                self.roll_back_bindings();
            }
        }
    }

    fn roll_back_bindings(&mut self) {
        while let Some((name, previous)) = self.journal.pop() {
            match previous {
                Some(ty) => self.method.bind_variable(name, ty),
                None => {
                    self.method.unbind_variable(name);
                }
            }
        }
    }

    fn report(&mut self, kind: TypeErrorKind, span: amalgam_ir::Span) {
        self.errors.push(TypeError::new(kind, span));
    }

    /// Infer one node's type, annotating it on success.
    ///
    /// An already-annotated node returns its cached type untouched.
    /// `None` means the type could not be resolved; the violation (if
    /// any) has already been recorded, and parents stay silent to
    /// avoid cascading follow-on errors.
    fn infer(&mut self, id: NodeId) -> Option<TypeIdx> {
        let node = *self.arena.node(id);
        if let Some(ty) = node.ty {
            return Some(ty);
        }

        let ty = match node.kind {
            NodeKind::Int(name) => {
                let text = self.interner.resolve(name);
                match parse_int_literal(text) {
                    Ok(lit) => {
                        trace!(text, signed = lit.signed, width = lit.width.bits(), "literal");
                        Some(self.pool.integer(lit.signed, lit.width))
                    }
                    Err(_) => {
                        self.report(
                            TypeErrorKind::InvalidLiteral {
                                text: text.to_owned(),
                            },
                            node.span,
                        );
                        None
                    }
                }
            }
            NodeKind::Ident(name) => {
                let ty = self.method.variable_type(name);
                if ty.is_none() {
                    // Reference before definition.
                    self.report(
                        TypeErrorKind::UnresolvedType {
                            detail: format!(
                                "variable `{}` is not defined",
                                self.interner.resolve(name)
                            ),
                        },
                        node.span,
                    );
                }
                ty
            }
            NodeKind::Group(inner) => self.infer(inner),
            NodeKind::Binary { op, left, right } if op.is_assign() => {
                self.check_assignment(left, right)
            }
            NodeKind::Binary { left, right, .. } => {
                let lt = self.infer(left);
                let rt = self.infer(right);
                match (lt, rt) {
                    (Some(lt), Some(rt)) if lt == rt => Some(lt),
                    (Some(lt), Some(rt)) => {
                        self.report(
                            TypeErrorKind::TypeMismatch {
                                left: self.pool.get(lt).to_string(),
                                right: self.pool.get(rt).to_string(),
                            },
                            node.span,
                        );
                        None
                    }
                    // An unresolved operand already reported itself.
                    _ => None,
                }
            }
        };

        if let Some(ty) = ty {
            self.arena.node_mut(id).ty = Some(ty);
        }
        ty
    }

    /// Validate `left := right`: the target must be an lvalue (a bare
    /// identifier), the right-hand type must resolve, and on success
    /// the binding lands in the method scope table.
    fn check_assignment(&mut self, left: NodeId, right: NodeId) -> Option<TypeIdx> {
        let left_node = *self.arena.node(left);
        let NodeKind::Ident(name) = left_node.kind else {
            self.report(TypeErrorKind::InvalidAssignmentTarget, left_node.span);
            return None;
        };

        let Some(rt) = self.infer(right) else {
            let right_span = self.arena.node(right).span;
            self.report(
                TypeErrorKind::UnresolvedType {
                    detail: format!(
                        "cannot infer a type for the value bound to `{}`",
                        self.interner.resolve(name)
                    ),
                },
                right_span,
            );
            return None;
        };

        self.arena.node_mut(left).ty = Some(rt);
        // Rebinding overwrites; there is no shadowing check.
        self.journal.push((name, self.method.variable_type(name)));
        self.method.bind_variable(name, rt);
        Some(rt)
    }
}

#[cfg(test)]
mod tests;
