//! Integer-literal splitting, base selection, and width inference.
//!
//! A literal is a numeric prefix plus an optional alphabetic specifier
//! selecting base and signedness: none is base-10 signed, `h`/`b`/`o`
//! are hex/binary/octal signed, and the `U`-prefixed forms (`Uh`, `Ub`,
//! `Uo`) are their unsigned counterparts. Any other specifier is
//! accepted but not interpreted (reserved for extension) and the
//! prefix reads as base-10 signed.

use crate::pool::IntWidth;
use std::fmt;

/// Recognized specifiers with their base and signedness, longest first
/// so `Uh` wins over `h` when matching from the end of the literal.
const SPECIFIERS: &[(&str, u32, bool)] = &[
    ("Uh", 16, false),
    ("Ub", 2, false),
    ("Uo", 8, false),
    ("h", 16, true),
    ("b", 2, true),
    ("o", 8, true),
];

/// A literal's numeric value plus its inferred integer type.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ParsedLiteral {
    /// Value bits; for signed literals this is the `i64` bit pattern.
    pub value: u64,
    pub signed: bool,
    pub width: IntWidth,
}

/// Failure to read a literal's numeric prefix in its base.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct LiteralError {
    pub text: String,
    pub base: u32,
}

impl fmt::Display for LiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid integer literal `{}` (base {})",
            self.text, self.base
        )
    }
}

impl std::error::Error for LiteralError {}

/// Split literal text into its numeric prefix and specifier.
///
/// Known specifiers are matched as suffixes, so base-16 digit letters
/// can appear in the prefix (`FFUh` splits as `FF` + `Uh`). Otherwise
/// the split is at the first non-decimal-digit character.
pub fn split_literal(text: &str) -> (&str, &str) {
    for &(spec, _, _) in SPECIFIERS {
        if text.len() > spec.len() && text.ends_with(spec) {
            return text.split_at(text.len() - spec.len());
        }
    }
    let sep = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text.split_at(sep)
}

/// Base and signedness selected by a specifier.
fn base_for_specifier(spec: &str) -> (u32, bool) {
    for &(known, base, signed) in SPECIFIERS {
        if spec == known {
            return (base, signed);
        }
    }
    // Unknown specifiers are accepted but not interpreted.
    (10, true)
}

/// Smallest containing width for a highest-set-bit position.
///
/// Boundary behavior is fixed by example: 255 (msb 7) is 8-bit,
/// 256 (msb 8) is 16-bit.
pub(crate) fn width_for_msb(msb: u32) -> IntWidth {
    match msb {
        0..=7 => IntWidth::W8,
        8..=15 => IntWidth::W16,
        16..=31 => IntWidth::W32,
        _ => IntWidth::W64,
    }
}

/// Parse literal text into its value and inferred integer type.
pub fn parse_int_literal(text: &str) -> Result<ParsedLiteral, LiteralError> {
    let (prefix, spec) = split_literal(text);
    let (base, signed) = base_for_specifier(spec);

    let err = || LiteralError {
        text: text.to_owned(),
        base,
    };

    let value = if signed {
        match i64::from_str_radix(prefix, base) {
            // Keep the i64 bit pattern; msb inspection below only ever
            // sees non-negative literals (there is no unary minus).
            Ok(v) => v as u64,
            Err(_) => return Err(err()),
        }
    } else {
        match u64::from_str_radix(prefix, base) {
            Ok(v) => v,
            Err(_) => return Err(err()),
        }
    };

    let msb = if value == 0 {
        0
    } else {
        63 - value.leading_zeros()
    };

    Ok(ParsedLiteral {
        value,
        signed,
        width: width_for_msb(msb),
    })
}
