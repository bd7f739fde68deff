use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    match lex_line(source) {
        Ok(tokens) => tokens.iter().map(|t| t.kind).collect(),
        Err(e) => panic!("lex failed: {e}"),
    }
}

fn texts(source: &str) -> Vec<String> {
    match lex_line(source) {
        Ok(tokens) => tokens.iter().map(|t| t.text(source).to_owned()).collect(),
        Err(e) => panic!("lex failed: {e}"),
    }
}

#[test]
fn empty_line_is_just_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(kinds("   "), vec![TokenKind::Eof]);
}

#[test]
fn simple_expression() {
    assert_eq!(
        kinds("10+5"),
        vec![TokenKind::Int, TokenKind::Op, TokenKind::Int, TokenKind::Eof]
    );
    assert_eq!(texts("10+5"), vec!["10", "+", "5", ""]);
}

#[test]
fn parenthetical_expression() {
    assert_eq!(
        kinds("5+(6*10)"),
        vec![
            TokenKind::Int,
            TokenKind::Op,
            TokenKind::OpenParen,
            TokenKind::Int,
            TokenKind::Op,
            TokenKind::Int,
            TokenKind::CloseParen,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn assignment_operator_is_one_token() {
    assert_eq!(
        kinds("an_ident := 5"),
        vec![TokenKind::Ident, TokenKind::Op, TokenKind::Int, TokenKind::Eof]
    );
    assert_eq!(texts("an_ident := 5")[1], ":=");
}

#[test]
fn shifts_are_single_operator_runs() {
    assert_eq!(texts("1<<9")[1], "<<");
    assert_eq!(texts("9>>10")[1], ">>");
}

#[test]
fn literal_specifier_rides_along() {
    assert_eq!(kinds("10Uh"), vec![TokenKind::Int, TokenKind::Eof]);
    assert_eq!(texts("10Uh")[0], "10Uh");
    // Hex digit letters stay inside the literal token too.
    assert_eq!(texts("10b")[0], "10b");
}

#[test]
fn newline_terminates_with_eol() {
    assert_eq!(
        kinds("1+2\n"),
        vec![TokenKind::Int, TokenKind::Op, TokenKind::Int, TokenKind::Eol]
    );
}

#[test]
fn spans_cover_token_text() {
    let source = " 10 + 5";
    let Ok(tokens) = lex_line(source) else {
        panic!("lex failed");
    };
    let Some(first) = tokens.get(0) else {
        panic!("no tokens");
    };
    assert_eq!(first.span, Span::new(1, 3));
}

#[test]
fn invalid_character_is_reported_with_span() {
    let err = match lex_line("1 \u{203d} 2") {
        Err(e) => e,
        Ok(_) => panic!("expected lex error"),
    };
    assert_eq!(err.ch, '\u{203d}');
    assert_eq!(err.span.start, 2);
}
