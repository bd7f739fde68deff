//! The lowering driver: analyzed expression trees to templates.
//!
//! Lowering is a post-order walk, so every operation's dependencies
//! are already in the template (and will be prepared) before the
//! operation that consumes them. Temporaries are named `%0, %1, …`;
//! a leading `%` can never be lexed as part of an identifier, so
//! temporaries and variable registers live in one namespace without
//! collisions.
//!
//! Variables map to registers named after them. The register index is
//! single-assignment, so rebinding a variable opens a fresh versioned
//! register (`x`, `x.1`, `x.2`, …) and later references read the
//! newest one. A reference to a variable that was never assigned loads
//! from the bare variable name, which has no producer; preparation
//! then fails with `UnknownRegister`.

use amalgam_ir::{Method, Module, Name, NodeId, NodeKind, StringInterner};
use amalgam_types::parse_int_literal;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::MachineError;
use crate::op::Operation;
use crate::template::Template;

/// Lower one checked method into a template.
///
/// The method must have been analyzed cleanly first: every literal
/// parseable, every assignment target an identifier. Lowering an
/// unchecked tree surfaces those holes as backend errors.
pub fn lower_method(
    module: &Module,
    method: &Method,
    interner: &StringInterner,
) -> Result<Template, MachineError> {
    debug!(method = interner.resolve(method.name()), "lower method");
    let mut driver = LoweringDriver {
        module,
        interner,
        template: Template::new(interner.resolve(method.name())),
        next_temp: 0,
        registers: FxHashMap::default(),
        versions: FxHashMap::default(),
    };
    for &root in method.roots() {
        driver.lower_expr(root)?;
    }
    Ok(driver.template)
}

struct LoweringDriver<'a> {
    module: &'a Module,
    interner: &'a StringInterner,
    template: Template,
    next_temp: u32,
    /// Variable name to its current register.
    registers: FxHashMap<Name, String>,
    /// How many times each variable has been rebound.
    versions: FxHashMap<Name, u32>,
}

impl LoweringDriver<'_> {
    fn temp(&mut self) -> String {
        let name = format!("%{}", self.next_temp);
        self.next_temp += 1;
        name
    }

    fn unchecked(detail: impl Into<String>) -> MachineError {
        MachineError::Backend {
            message: detail.into(),
        }
    }

    /// Lower one subtree, returning the register holding its value.
    fn lower_expr(&mut self, id: NodeId) -> Result<String, MachineError> {
        let node = self.module.arena.node(id);
        match node.kind {
            NodeKind::Int(name) => {
                let text = self.interner.resolve(name);
                let lit = parse_int_literal(text).map_err(|_| {
                    Self::unchecked(format!("literal `{text}` was not validated before lowering"))
                })?;
                let target = self.temp();
                self.template.add_operation(Operation::constant(
                    target.clone(),
                    lit.signed,
                    lit.width,
                    lit.value,
                ))?;
                Ok(target)
            }
            NodeKind::Ident(name) => {
                let source = match self.registers.get(&name) {
                    Some(register) => register.clone(),
                    // Never assigned: load from the bare name and let
                    // preparation report the missing producer.
                    None => self.interner.resolve(name).to_owned(),
                };
                let target = self.temp();
                self.template
                    .add_operation(Operation::load(target.clone(), source))?;
                Ok(target)
            }
            NodeKind::Group(inner) => self.lower_expr(inner),
            NodeKind::Binary { op, left, right } if op.is_assign() => {
                self.lower_assignment(left, right)
            }
            NodeKind::Binary { op, left, right } => {
                let lhs = self.lower_expr(left)?;
                let rhs = self.lower_expr(right)?;
                let target = self.temp();
                self.template
                    .add_operation(Operation::binary(target.clone(), op, lhs, rhs))?;
                Ok(target)
            }
        }
    }

    fn lower_assignment(&mut self, left: NodeId, right: NodeId) -> Result<String, MachineError> {
        let NodeKind::Ident(name) = self.module.arena.node(left).kind else {
            return Err(Self::unchecked(
                "assignment target was not validated before lowering",
            ));
        };
        let source = self.lower_expr(right)?;

        // Fresh versioned register on rebind.
        let register = if self.registers.contains_key(&name) {
            let version = self.versions.entry(name).or_insert(0);
            *version += 1;
            format!("{}.{}", self.interner.resolve(name), version)
        } else {
            self.interner.resolve(name).to_owned()
        };
        self.template
            .add_operation(Operation::load(register.clone(), source))?;
        self.registers.insert(name, register.clone());
        Ok(register)
    }
}
