use super::*;
use pretty_assertions::assert_eq;

#[test]
fn token_text_slices_source() {
    let source = "10+5";
    let token = Token::new(TokenKind::Int, Span::new(0, 2));
    assert_eq!(token.text(source), "10");
}

#[test]
fn terminator_kinds() {
    assert!(TokenKind::Eol.is_terminator());
    assert!(TokenKind::Eof.is_terminator());
    assert!(!TokenKind::Op.is_terminator());
}

#[test]
fn token_list_push_and_get() {
    let mut list = TokenList::new();
    assert!(list.is_empty());
    list.push(Token::new(TokenKind::Int, Span::new(0, 1)));
    list.push(Token::new(TokenKind::Eof, Span::new(1, 1)));
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(0).map(|t| t.kind), Some(TokenKind::Int));
    assert_eq!(list.get(2), None);
}
