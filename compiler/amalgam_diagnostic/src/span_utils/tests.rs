use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;

#[test]
fn line_col_on_single_line() {
    let source = "10+5";
    assert_eq!(line_col(source, 0), (1, 1));
    assert_eq!(line_col(source, 3), (1, 4));
}

#[test]
fn line_col_across_newlines() {
    let source = "a := 1\nb := 2";
    assert_eq!(line_col(source, 7), (2, 1));
    assert_eq!(line_col(source, 12), (2, 6));
}

#[test]
fn line_col_clamps_past_end() {
    assert_eq!(line_col("ab", 99), (1, 3));
}

#[test]
fn render_with_and_without_span() {
    let source = "1 @ 2";
    let with_span = Diagnostic::error(ErrorCode::E1002, "unknown operator `@`")
        .with_span(amalgam_ir::Span::new(2, 3));
    assert_eq!(
        render(source, &with_span),
        "1:3: error[E1002]: unknown operator `@`"
    );

    let no_span = Diagnostic::error(ErrorCode::E3001, "unknown register `r1`");
    assert_eq!(render(source, &no_span), "error[E3001]: unknown register `r1`");
}
