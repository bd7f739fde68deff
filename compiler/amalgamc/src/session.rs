//! Caller-owned compilation sessions.
//!
//! A `Session` scopes one module compilation: it owns the interner,
//! the type pool, and the module under construction, and walks each
//! statement through the whole pipeline. There is no process-global
//! compiler state; two sessions never share anything.

use amalgam_diagnostic::Diagnostic;
use amalgam_ir::{dump_tree, Module, NodeId, StringInterner};
use amalgam_lexer::lex_line;
use amalgam_machine::{lower_method, EvalBackend, Template};
use amalgam_parse::parse_statement;
use amalgam_types::{check_module, TypePool};
use tracing::debug;

/// One module compilation, start to finish.
pub struct Session {
    pub interner: StringInterner,
    pub pool: TypePool,
    pub module: Module,
}

impl Session {
    pub fn new(module_name: &str) -> Self {
        let mut interner = StringInterner::new();
        let module = Module::new(module_name, &mut interner);
        Session {
            interner,
            pool: TypePool::new(),
            module,
        }
    }

    /// Lex and build one statement line, attaching its tree to the
    /// default method. `Ok(None)` means the line was blank.
    pub fn add_statement(&mut self, line: &str) -> Result<Option<NodeId>, Diagnostic> {
        debug!(line, "add statement");
        let tokens = lex_line(line).map_err(|e| e.into_diagnostic())?;
        let root = parse_statement(line, &tokens, &mut self.interner, &mut self.module.arena)
            .map_err(|e| e.into_diagnostic())?;
        if let Some(root) = root {
            self.module.default_method_mut().add_expression_tree(root);
        }
        Ok(root)
    }

    /// Analyze the whole module. Annotations are cached, so statements
    /// that already checked clean cost nothing and report nothing.
    pub fn check(&mut self) -> Vec<Diagnostic> {
        check_module(&mut self.module, &self.interner, &mut self.pool)
            .into_iter()
            .map(|e| e.into_diagnostic())
            .collect()
    }

    /// Drop the most recent statement. Used after a failed check so
    /// the broken tree is not re-reported on the next statement.
    pub fn retract_last_statement(&mut self) {
        debug!("retract last statement");
        self.module.default_method_mut().retract_last_tree();
    }

    /// Lower the default method into a template.
    pub fn lower_default(&self) -> Result<Template, Diagnostic> {
        lower_method(
            &self.module,
            self.module.default_method_ref(),
            &self.interner,
        )
        .map_err(|e| e.into_diagnostic())
    }

    /// Prepare `template` against the reference interpreter and return
    /// the last statement's value, if the template produced one.
    pub fn evaluate(&self, template: &Template) -> Result<Option<i64>, Diagnostic> {
        let mut backend = EvalBackend::new();
        let prepared = template
            .prepare(&mut backend)
            .map_err(|e| e.into_diagnostic())?;
        Ok(prepared.last_value().copied())
    }

    /// S-expression dump of one statement tree.
    pub fn dump(&self, root: NodeId) -> String {
        dump_tree(&self.module.arena, root, &self.interner)
    }
}
