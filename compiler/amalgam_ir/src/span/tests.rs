use super::*;
use pretty_assertions::assert_eq;

#[test]
fn span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert!(span.contains(15));
    assert!(!span.contains(20));
}

#[test]
fn span_merge() {
    let a = Span::new(10, 20);
    let b = Span::new(15, 30);
    let merged = a.merge(b);
    assert_eq!(merged.start, 10);
    assert_eq!(merged.end, 30);
}

#[test]
fn span_text_slices_source() {
    let source = "an_ident := 5";
    let span = Span::new(0, 8);
    assert_eq!(span.text(source), "an_ident");
}

#[test]
fn span_try_from_range() {
    let Ok(span) = Span::try_from_range(50..100) else {
        panic!("expected Ok for valid range");
    };
    assert_eq!(span.start, 50);
    assert_eq!(span.end, 100);
}

#[test]
fn span_try_from_range_too_large() {
    let big = u32::MAX as usize + 1;
    assert_eq!(
        Span::try_from_range(big..big + 1),
        Err(SpanError::StartTooLarge(big))
    );
}
