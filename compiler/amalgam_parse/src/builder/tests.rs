use super::*;
use amalgam_ir::dump_tree;
use amalgam_lexer::lex_line;
use pretty_assertions::assert_eq;

struct Parsed {
    arena: AstArena,
    interner: StringInterner,
    root: Option<NodeId>,
}

fn parse(source: &str) -> Result<Parsed, ParseError> {
    let tokens = match lex_line(source) {
        Ok(t) => t,
        Err(e) => panic!("lex failed: {e}"),
    };
    let mut interner = StringInterner::new();
    let mut arena = AstArena::new();
    let root = parse_statement(source, &tokens, &mut interner, &mut arena)?;
    Ok(Parsed {
        arena,
        interner,
        root,
    })
}

fn dump(source: &str) -> String {
    match parse(source) {
        Ok(Parsed {
            arena,
            interner,
            root: Some(root),
        }) => dump_tree(&arena, root, &interner),
        Ok(_) => panic!("no tree built for {source:?}"),
        Err(e) => panic!("parse failed for {source:?}: {e}"),
    }
}

fn fails_with(source: &str) -> ParseError {
    match parse(source) {
        Err(e) => e,
        Ok(_) => panic!("expected parse failure for {source:?}"),
    }
}

#[test]
fn empty_statement_builds_nothing() {
    let Ok(parsed) = parse("") else {
        panic!("empty line must not fail");
    };
    assert_eq!(parsed.root, None);
}

#[test]
fn single_literal_is_a_one_node_tree() {
    let Ok(parsed) = parse("10") else {
        panic!("parse failed");
    };
    let Some(root) = parsed.root else {
        panic!("no tree");
    };
    assert_eq!(parsed.arena.len(), 1);
    let name = match parsed.arena.node(root).kind {
        NodeKind::Int(name) => name,
        other => panic!("expected literal, got {other:?}"),
    };
    assert_eq!(parsed.interner.resolve(name), "10");
}

#[test]
fn single_identifier() {
    assert_eq!(dump("an_ident"), "an_ident");
}

#[test]
fn simple_binary() {
    assert_eq!(dump("10+5"), "(+ 10 5)");
}

#[test]
fn association_is_right_nesting_not_precedence() {
    // The rotation makes every operator right-nest: the `*` ends up
    // outermost, contrary to conventional precedence.
    assert_eq!(dump("1*2+3"), "(* 1 (+ 2 3))");
    assert_eq!(dump("1+2*3"), "(+ 1 (* 2 3))");
}

#[test]
fn all_operator_chain_golden_tree() {
    assert_eq!(
        dump("1+2*3/4&5|6^7%8<<9>>10"),
        "(+ 1 (* 2 (/ 3 (& 4 (| 5 (^ 6 (% 7 (<< 8 (>> 9 10)))))))))"
    );
}

#[test]
fn groups_reduce_to_atoms() {
    assert_eq!(dump("5+(6*10)"), "(+ 5 (group (* 6 10)))");
    assert_eq!(dump("(5)"), "(group 5)");
    assert_eq!(dump("((5))"), "(group (group 5))");
}

#[test]
fn group_resets_the_rotation() {
    // `(1+2)*3` : the group is one atom, so `*` rotates under it.
    assert_eq!(dump("(1+2)*3"), "(* (group (+ 1 2)) 3)");
}

#[test]
fn assignment_parses_as_binary() {
    assert_eq!(dump("an_ident := 5"), "(:= an_ident 5)");
}

#[test]
fn trailing_operator_is_malformed() {
    let err = fails_with("1+");
    assert_eq!(err.code, ErrorCode::E1001);
}

#[test]
fn leading_operator_is_malformed() {
    assert_eq!(fails_with("+1").code, ErrorCode::E1001);
    // Literals carry no sign of their own.
    assert_eq!(fails_with("-5").code, ErrorCode::E1001);
    assert_eq!(fails_with("*").code, ErrorCode::E1001);
}

#[test]
fn atom_run_without_operator_is_malformed() {
    let err = fails_with("1 2");
    assert_eq!(err.code, ErrorCode::E1001);
    assert_eq!(err.message, "expression does not reduce to a single tree");
}

#[test]
fn unclosed_group_is_malformed() {
    assert_eq!(fails_with("5+(6*10").code, ErrorCode::E1001);
    assert_eq!(fails_with("(").code, ErrorCode::E1001);
}

#[test]
fn unmatched_close_paren_is_malformed() {
    assert_eq!(fails_with("5)").code, ErrorCode::E1001);
}

#[test]
fn empty_group_is_malformed() {
    assert_eq!(fails_with("()").code, ErrorCode::E1001);
}

#[test]
fn unknown_operator_is_rejected() {
    let err = fails_with("1 @ 2");
    assert_eq!(err.code, ErrorCode::E1002);
    assert_eq!(err.message, "unknown operator `@`");
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    const OPS: &[&str] = &["+", "-", "*", "/", "%", "&", "|", "^", "<<", ">>"];

    fn chain(atoms: &[u32], ops: &[usize]) -> String {
        let mut s = String::new();
        for (i, atom) in atoms.iter().enumerate() {
            if i > 0 {
                s.push_str(OPS[ops[i - 1] % OPS.len()]);
            }
            s.push_str(&atom.to_string());
        }
        s
    }

    proptest! {
        /// Any alternating atom/operator chain builds exactly one tree
        /// with one binary node per operator.
        #[test]
        fn alternating_chains_always_build(
            atoms in proptest::collection::vec(0u32..1000, 1..20),
            ops in proptest::collection::vec(0usize..100, 19),
        ) {
            let source = chain(&atoms, &ops);
            let parsed = parse(&source);
            prop_assert!(parsed.is_ok());
            let Ok(parsed) = parsed else { unreachable!() };
            prop_assert!(parsed.root.is_some());
            // One node per atom plus one per operator.
            prop_assert_eq!(parsed.arena.len(), atoms.len() * 2 - 1);
        }

        /// A chain with a trailing operator never builds a tree.
        #[test]
        fn trailing_operator_always_fails(
            atoms in proptest::collection::vec(0u32..1000, 1..10),
            ops in proptest::collection::vec(0usize..100, 9),
            last in 0usize..100,
        ) {
            let mut source = chain(&atoms, &ops);
            source.push_str(OPS[last % OPS.len()]);
            prop_assert!(parse(&source).is_err());
        }
    }
}
