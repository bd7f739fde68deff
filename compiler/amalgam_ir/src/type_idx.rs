//! Opaque type-annotation handle.
//!
//! Declared here so `Node` can carry an inferred type without the IR
//! crate depending on the type pool; `amalgam_types` owns the pool that
//! gives these indices meaning. Type equality is O(1) index comparison.

use std::fmt;

/// A 32-bit index into the type pool.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct TypeIdx(u32);

impl TypeIdx {
    /// Create a handle from a raw pool index.
    #[inline]
    pub const fn new(index: u32) -> Self {
        TypeIdx(index)
    }

    /// Raw pool index.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for TypeIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeIdx({})", self.0)
    }
}
