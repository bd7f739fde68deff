use super::*;
use pretty_assertions::assert_eq;

#[test]
fn interning_is_idempotent() {
    let mut pool = TypePool::new();
    let a = pool.integer(true, IntWidth::W8);
    let b = pool.integer(true, IntWidth::W8);
    assert_eq!(a, b);
    assert_eq!(pool.len(), 1);
}

#[test]
fn distinct_descriptors_get_distinct_handles() {
    let mut pool = TypePool::new();
    let i8 = pool.integer(true, IntWidth::W8);
    let u8 = pool.integer(false, IntWidth::W8);
    let i16 = pool.integer(true, IntWidth::W16);
    assert_ne!(i8, u8);
    assert_ne!(i8, i16);
    assert_eq!(pool.len(), 3);
}

#[test]
fn display_names() {
    let mut pool = TypePool::new();
    let idx = pool.integer(false, IntWidth::W16);
    assert_eq!(pool.get(idx).to_string(), "u16");
    let idx = pool.integer(true, IntWidth::W64);
    assert_eq!(pool.get(idx).to_string(), "i64");
}

#[test]
fn width_bits() {
    assert_eq!(IntWidth::W8.bits(), 8);
    assert_eq!(IntWidth::W64.bits(), 64);
}
