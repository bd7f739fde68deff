//! Span-to-location conversion and plain-text rendering.

use amalgam_ir::Span;

use crate::Diagnostic;

/// 1-based line and column for a byte offset into `source`.
///
/// Offsets past the end clamp to the final position.
pub fn line_col(source: &str, offset: u32) -> (u32, u32) {
    let mut line = 1u32;
    let mut col = 1u32;
    for (idx, ch) in source.char_indices() {
        if idx as u64 >= u64::from(offset) {
            break;
        }
        if ch == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    (line, col)
}

/// Render a diagnostic against its source as `line:col: message`.
///
/// Diagnostics without a span render as just the message.
pub fn render(source: &str, diagnostic: &Diagnostic) -> String {
    match diagnostic.span {
        Some(Span { start, .. }) => {
            let (line, col) = line_col(source, start);
            format!("{line}:{col}: {diagnostic}")
        }
        None => diagnostic.to_string(),
    }
}

#[cfg(test)]
mod tests;
