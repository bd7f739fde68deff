use super::*;
use crate::pool::IntWidth;
use amalgam_lexer::lex_line;
use amalgam_parse::parse_statement;
use pretty_assertions::assert_eq;

struct Checked {
    module: Module,
    interner: StringInterner,
    pool: TypePool,
    errors: Vec<TypeError>,
}

fn check(lines: &[&str]) -> Checked {
    let mut interner = StringInterner::new();
    let mut module = Module::new("test_module", &mut interner);
    for line in lines {
        let tokens = match lex_line(line) {
            Ok(t) => t,
            Err(e) => panic!("lex failed: {e}"),
        };
        let root = match parse_statement(line, &tokens, &mut interner, &mut module.arena) {
            Ok(r) => r,
            Err(e) => panic!("parse failed for {line:?}: {e}"),
        };
        if let Some(root) = root {
            let default = module.default_method();
            if let Some(method) = module.method_mut(default) {
                method.add_expression_tree(root);
            }
        }
    }
    let mut pool = TypePool::new();
    let errors = check_module(&mut module, &interner, &mut pool);
    Checked {
        module,
        interner,
        pool,
        errors,
    }
}

fn root(checked: &Checked, index: usize) -> NodeId {
    let default = checked.module.default_method();
    match checked.module.method(default) {
        Some(method) => method.roots()[index],
        None => panic!("default method missing"),
    }
}

fn error_codes(checked: &Checked) -> Vec<amalgam_diagnostic::ErrorCode> {
    checked.errors.iter().map(TypeError::code).collect()
}

#[test]
fn literal_gets_signed_8_bit() {
    let mut checked = check(&["10"]);
    assert_eq!(checked.errors, vec![]);
    let expected = checked.pool.integer(true, IntWidth::W8);
    let id = root(&checked, 0);
    assert_eq!(checked.module.arena.node(id).ty, Some(expected));
}

#[test]
fn boundary_literals_follow_width_table() {
    // Hex literals need a leading digit to lex as literals at all.
    let mut checked = check(&["255", "256", "0FFUh"]);
    assert_eq!(checked.errors, vec![]);
    let i8 = checked.pool.integer(true, IntWidth::W8);
    let i16 = checked.pool.integer(true, IntWidth::W16);
    let u8 = checked.pool.integer(false, IntWidth::W8);
    let arena = &checked.module.arena;
    assert_eq!(arena.node(root(&checked, 0)).ty, Some(i8));
    assert_eq!(arena.node(root(&checked, 1)).ty, Some(i16));
    assert_eq!(arena.node(root(&checked, 2)).ty, Some(u8));
}

#[test]
fn matching_operand_types_propagate() {
    let mut checked = check(&["10+5"]);
    assert_eq!(checked.errors, vec![]);
    let i8 = checked.pool.integer(true, IntWidth::W8);
    assert_eq!(checked.module.arena.node(root(&checked, 0)).ty, Some(i8));
}

#[test]
fn mismatched_operand_types_are_reported() {
    let checked = check(&["256+5"]);
    assert_eq!(
        error_codes(&checked),
        vec![amalgam_diagnostic::ErrorCode::E2004]
    );
    // The operator's own type stays unresolved.
    assert_eq!(checked.module.arena.node(root(&checked, 0)).ty, None);
}

#[test]
fn signedness_mismatch_is_a_mismatch() {
    let checked = check(&["10 + 0FFUh"]);
    assert_eq!(
        error_codes(&checked),
        vec![amalgam_diagnostic::ErrorCode::E2004]
    );
}

#[test]
fn assignment_binds_variable_and_annotates_target() {
    let mut checked = check(&["an_ident := 5"]);
    assert_eq!(checked.errors, vec![]);
    let i8 = checked.pool.integer(true, IntWidth::W8);

    let name = match checked.interner.get("an_ident") {
        Some(n) => n,
        None => panic!("identifier never interned"),
    };
    let default = checked.module.default_method();
    let Some(method) = checked.module.method(default) else {
        panic!("default method missing");
    };
    assert!(method.has_variable(name));
    assert_eq!(method.variable_type(name), Some(i8));

    let assign = root(&checked, 0);
    let NodeKind::Binary { left, .. } = checked.module.arena.node(assign).kind else {
        panic!("expected assignment node");
    };
    assert_eq!(checked.module.arena.node(left).ty, Some(i8));
    assert_eq!(checked.module.arena.node(assign).ty, Some(i8));
}

#[test]
fn bound_variable_resolves_in_later_statements() {
    let checked = check(&["x := 5", "x + 1"]);
    assert_eq!(checked.errors, vec![]);
}

#[test]
fn rebinding_overwrites_the_scope_entry() {
    let mut checked = check(&["x := 5", "x := 256"]);
    assert_eq!(checked.errors, vec![]);
    let i16 = checked.pool.integer(true, IntWidth::W16);
    let name = match checked.interner.get("x") {
        Some(n) => n,
        None => panic!("x never interned"),
    };
    let default = checked.module.default_method();
    let ty = checked
        .module
        .method(default)
        .and_then(|m| m.variable_type(name));
    assert_eq!(ty, Some(i16));
}

#[test]
fn failed_statement_rolls_back_nested_bindings() {
    let checked = check(&["(y := 5) + 12b"]);
    assert_eq!(
        error_codes(&checked),
        vec![amalgam_diagnostic::ErrorCode::E2001]
    );
    let name = match checked.interner.get("y") {
        Some(n) => n,
        None => panic!("y never interned"),
    };
    let default = checked.module.default_method();
    let bound = checked
        .module
        .method(default)
        .is_some_and(|m| m.has_variable(name));
    assert!(!bound, "rejected statement must not leave `y` in scope");
}

#[test]
fn rollback_restores_the_overwritten_binding() {
    let mut checked = check(&["x := 5", "(x := 300) + 12b"]);
    assert_eq!(
        error_codes(&checked),
        vec![amalgam_diagnostic::ErrorCode::E2001]
    );
    let i8 = checked.pool.integer(true, IntWidth::W8);
    let name = match checked.interner.get("x") {
        Some(n) => n,
        None => panic!("x never interned"),
    };
    let default = checked.module.default_method();
    let ty = checked
        .module
        .method(default)
        .and_then(|m| m.variable_type(name));
    assert_eq!(ty, Some(i8));
}

#[test]
fn non_identifier_assignment_target_is_rejected() {
    let checked = check(&["1 := 2"]);
    assert_eq!(
        error_codes(&checked),
        vec![amalgam_diagnostic::ErrorCode::E2002]
    );
}

#[test]
fn reference_before_definition_is_reported() {
    let checked = check(&["an_ident"]);
    assert_eq!(
        error_codes(&checked),
        vec![amalgam_diagnostic::ErrorCode::E2003]
    );
}

#[test]
fn invalid_literal_is_reported() {
    let checked = check(&["12b"]);
    assert_eq!(
        error_codes(&checked),
        vec![amalgam_diagnostic::ErrorCode::E2001]
    );
}

#[test]
fn errors_accumulate_across_statements() {
    let checked = check(&["12b", "1 := 2", "256+5"]);
    assert_eq!(
        error_codes(&checked),
        vec![
            amalgam_diagnostic::ErrorCode::E2001,
            amalgam_diagnostic::ErrorCode::E2002,
            amalgam_diagnostic::ErrorCode::E2004,
        ]
    );
}

#[test]
fn rechecking_is_idempotent() {
    let mut checked = check(&["x := 5", "x + 1", "(2*3)"]);
    assert_eq!(checked.errors, vec![]);

    let before: Vec<_> = (0..checked.module.arena.len())
        .map(|i| checked.module.arena.node(NodeId::new(i as u32)).ty)
        .collect();

    let errors = check_module(&mut checked.module, &checked.interner, &mut checked.pool);
    assert_eq!(errors, vec![]);

    let after: Vec<_> = (0..checked.module.arena.len())
        .map(|i| checked.module.arena.node(NodeId::new(i as u32)).ty)
        .collect();
    assert_eq!(before, after);
}
