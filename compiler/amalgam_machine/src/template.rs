//! Templates: ordered operation sequences with a register index.
//!
//! A template corresponds to one compiled unit (one method). The
//! register map is a single-assignment index: each virtual register
//! name has exactly one producer, and a second producer for the same
//! name is rejected at `add_operation` time rather than silently
//! overwriting the first.
//!
//! Preparation walks the sequence in emission order. Consumers never
//! trigger recursive preparation of their dependencies; the lowering
//! driver is responsible for emitting producers before consumers, and
//! an out-of-order sequence fails with `UnpreparedDependency`.

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::backend::Backend;
use crate::error::MachineError;
use crate::op::{OpId, OpKind, Operation};

/// One named, ordered collection of operations.
#[derive(Debug)]
pub struct Template {
    name: String,
    ops: Vec<Operation>,
    /// Register name to its producing operation.
    producers: FxHashMap<String, OpId>,
}

fn op_id(index: usize) -> OpId {
    let raw = u32::try_from(index)
        .unwrap_or_else(|_| panic!("template overflow: more than u32::MAX operations"));
    OpId::new(raw)
}

impl Template {
    pub fn new(name: impl Into<String>) -> Self {
        Template {
            name: name.into(),
            ops: Vec::new(),
            producers: FxHashMap::default(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append an operation. If it produces an output, register it as
    /// the producer of its target register; a register may only ever
    /// have one producer.
    pub fn add_operation(&mut self, op: Operation) -> Result<OpId, MachineError> {
        if let Some(target) = op.target() {
            if self.producers.contains_key(target) {
                return Err(MachineError::DuplicateProducer {
                    register: target.to_owned(),
                });
            }
        }
        let id = op_id(self.ops.len());
        if let Some(target) = op.target() {
            self.producers.insert(target.to_owned(), id);
        }
        self.ops.push(op);
        Ok(id)
    }

    /// Look up the producer of `register`.
    pub fn find_operation_by_output(&self, register: &str) -> Result<OpId, MachineError> {
        self.producers
            .get(register)
            .copied()
            .ok_or_else(|| MachineError::UnknownRegister {
                register: register.to_owned(),
            })
    }

    #[inline]
    pub fn operation(&self, id: OpId) -> &Operation {
        &self.ops[id.index()]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Operations in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (OpId, &Operation)> {
        self.ops
            .iter()
            .enumerate()
            .map(|(i, op)| (op_id(i), op))
    }

    /// Prepare every operation in emission order against `backend`.
    pub fn prepare<B: Backend>(&self, backend: &mut B) -> Result<Prepared<B::Value>, MachineError> {
        let mut prepared = Prepared::new(self.ops.len());
        for i in 0..self.ops.len() {
            self.prepare_operation(op_id(i), backend, &mut prepared)?;
        }
        Ok(prepared)
    }

    /// Prepare one operation. Preparing an already-prepared operation
    /// is a no-op; the cached value stands.
    pub fn prepare_operation<B: Backend>(
        &self,
        id: OpId,
        backend: &mut B,
        prepared: &mut Prepared<B::Value>,
    ) -> Result<(), MachineError> {
        if prepared.is_prepared(id) {
            return Ok(());
        }
        let op = self.operation(id);
        trace!(template = self.name.as_str(), ?id, target = op.target(), "prepare");
        let value = match op.kind() {
            OpKind::Constant {
                signed,
                width,
                value,
            } => backend.emit_constant(*signed, *width, *value)?,
            OpKind::Load { source } => {
                let source_value = self.dependency_value(source, prepared)?;
                backend.emit_load(&source_value, op.target().unwrap_or_default())?
            }
            OpKind::Binary { op, lhs, rhs } => {
                let lhs_value = self.dependency_value(lhs, prepared)?;
                let rhs_value = self.dependency_value(rhs, prepared)?;
                backend.emit_binary(*op, &lhs_value, &rhs_value)?
            }
        };
        prepared.set(id, value);
        Ok(())
    }

    /// The already-prepared value of `register`'s producer.
    fn dependency_value<V: Clone>(
        &self,
        register: &str,
        prepared: &Prepared<V>,
    ) -> Result<V, MachineError> {
        let producer = self.find_operation_by_output(register)?;
        prepared
            .value(producer)
            .cloned()
            .ok_or_else(|| MachineError::UnpreparedDependency {
                register: register.to_owned(),
            })
    }
}

/// Backend values produced by preparing a template, indexed by
/// operation. Kept outside the template so the template itself stays
/// immutable during preparation and can be prepared against more than
/// one backend.
#[derive(Debug)]
pub struct Prepared<V> {
    values: Vec<Option<V>>,
}

impl<V> Prepared<V> {
    fn new(len: usize) -> Self {
        let mut values = Vec::with_capacity(len);
        values.resize_with(len, || None);
        Prepared { values }
    }

    fn set(&mut self, id: OpId, value: V) {
        self.values[id.index()] = Some(value);
    }

    #[inline]
    pub fn is_prepared(&self, id: OpId) -> bool {
        self.values.get(id.index()).is_some_and(Option::is_some)
    }

    /// Value produced for `id`, if it has been prepared.
    pub fn value(&self, id: OpId) -> Option<&V> {
        self.values.get(id.index()).and_then(Option::as_ref)
    }

    /// Value of the last prepared operation. This is the result of a
    /// statement's template, since lowering emits the root last.
    pub fn last_value(&self) -> Option<&V> {
        self.values.iter().rev().flatten().next()
    }
}

/// All templates of one compilation, keyed by name.
#[derive(Debug, Default)]
pub struct Machine {
    templates: FxHashMap<String, Template>,
}

impl Machine {
    pub fn new() -> Self {
        Machine::default()
    }

    /// Insert a template, replacing any previous one with the name.
    pub fn insert(&mut self, template: Template) {
        self.templates.insert(template.name().to_owned(), template);
    }

    pub fn template(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    pub fn templates(&self) -> impl Iterator<Item = &Template> {
        self.templates.values()
    }
}
