//! Module and method containers.
//!
//! A module owns one `AstArena` plus its methods. Every module has a
//! `__default__` method holding all statements at module scope; with
//! function declarations out of the language there is never another
//! one, but the map keeps that layering open.

use crate::{AstArena, Name, NodeId, StringInterner, TypeIdx};
use rustc_hash::FxHashMap;

/// Name of the implicit module-scope method.
pub const DEFAULT_METHOD: &str = "__default__";

/// One compiled method: its statement trees plus its scope table.
#[derive(Debug)]
pub struct Method {
    name: Name,
    /// Expression-tree roots, in statement order.
    roots: Vec<NodeId>,
    /// Scope/binding table: variable name to inferred type. Written
    /// only by the analyzer on a validated assignment; a statement
    /// that fails analysis has its writes rolled back.
    bindings: FxHashMap<Name, TypeIdx>,
}

impl Method {
    pub fn new(name: Name) -> Self {
        Method {
            name,
            roots: Vec::new(),
            bindings: FxHashMap::default(),
        }
    }

    #[inline]
    pub fn name(&self) -> Name {
        self.name
    }

    /// Add a completely built expression tree to this method.
    pub fn add_expression_tree(&mut self, root: NodeId) {
        self.roots.push(root);
    }

    /// Statement roots, in order.
    #[inline]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Drop the most recently added statement tree. The REPL retracts
    /// a statement whose analysis failed so later passes do not keep
    /// re-reporting it. The tree's nodes stay behind in the arena.
    pub fn retract_last_tree(&mut self) -> Option<NodeId> {
        self.roots.pop()
    }

    /// Record a variable binding, overwriting any prior one. There is
    /// no shadowing or redeclaration check.
    pub fn bind_variable(&mut self, name: Name, ty: TypeIdx) {
        self.bindings.insert(name, ty);
    }

    /// Remove a variable binding. Returns the type it was bound to,
    /// if any. Used to roll back scope writes from a statement that
    /// failed analysis.
    pub fn unbind_variable(&mut self, name: Name) -> Option<TypeIdx> {
        self.bindings.remove(&name)
    }

    /// Look up a variable's inferred type.
    #[inline]
    pub fn variable_type(&self, name: Name) -> Option<TypeIdx> {
        self.bindings.get(&name).copied()
    }

    /// Whether the scope table contains `name`.
    #[inline]
    pub fn has_variable(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
    }
}

/// One module under compilation.
#[derive(Debug)]
pub struct Module {
    name: String,
    /// All expression nodes of this module.
    pub arena: AstArena,
    methods: FxHashMap<Name, Method>,
    default_method: Name,
}

impl Module {
    /// Create a module with its `__default__` method in place.
    pub fn new(name: impl Into<String>, interner: &mut StringInterner) -> Self {
        let default_method = interner.intern(DEFAULT_METHOD);
        let mut methods = FxHashMap::default();
        methods.insert(default_method, Method::new(default_method));
        Module {
            name: name.into(),
            arena: AstArena::new(),
            methods,
            default_method,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name handle of the `__default__` method.
    #[inline]
    pub fn default_method(&self) -> Name {
        self.default_method
    }

    /// The `__default__` method itself.
    pub fn default_method_ref(&self) -> &Method {
        match self.methods.get(&self.default_method) {
            Some(method) => method,
            None => unreachable!("the default method is created in Module::new"),
        }
    }

    /// Mutable handle to the `__default__` method.
    pub fn default_method_mut(&mut self) -> &mut Method {
        match self.methods.get_mut(&self.default_method) {
            Some(method) => method,
            None => unreachable!("the default method is created in Module::new"),
        }
    }

    /// Whether the module has the named method.
    pub fn has_method(&self, name: Name) -> bool {
        self.methods.contains_key(&name)
    }

    /// Handle to the named method.
    pub fn method(&self, name: Name) -> Option<&Method> {
        self.methods.get(&name)
    }

    /// Mutable handle to the named method.
    pub fn method_mut(&mut self, name: Name) -> Option<&mut Method> {
        self.methods.get_mut(&name)
    }

    /// The arena and all methods, split-borrowed for the analyzer.
    pub fn arena_and_methods_mut(
        &mut self,
    ) -> (&mut AstArena, impl Iterator<Item = &mut Method>) {
        (&mut self.arena, self.methods.values_mut())
    }

    /// Iterate methods in unspecified order.
    pub fn methods(&self) -> impl Iterator<Item = &Method> {
        self.methods.values()
    }
}
