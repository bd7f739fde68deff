//! Interned type descriptors.
//!
//! A `TypeData` value is immutable once constructed; the pool stores
//! each distinct descriptor once and hands out `TypeIdx` handles, so
//! type equality is O(1) index comparison and nodes inferred to the
//! same type share one descriptor.

use amalgam_ir::TypeIdx;
use rustc_hash::FxHashMap;
use std::fmt;

/// Integer bit widths the inference maps literals onto.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
}

impl IntWidth {
    /// Width in bits.
    pub const fn bits(self) -> u8 {
        match self {
            IntWidth::W8 => 8,
            IntWidth::W16 => 16,
            IntWidth::W32 => 32,
            IntWidth::W64 => 64,
        }
    }
}

/// Type descriptor variants.
///
/// Only `Integer` is interpreted by the core; the remaining classes
/// are declared for the language's future surface and never inferred.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeData {
    Integer { signed: bool, width: IntWidth },
    Float,
    Str,
    Struct,
    Tuple,
    Dict,
    Method,
    Interface,
    Generic,
}

impl fmt::Display for TypeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeData::Integer { signed, width } => {
                let prefix = if *signed { 'i' } else { 'u' };
                write!(f, "{prefix}{}", width.bits())
            }
            TypeData::Float => write!(f, "float"),
            TypeData::Str => write!(f, "str"),
            TypeData::Struct => write!(f, "struct"),
            TypeData::Tuple => write!(f, "tuple"),
            TypeData::Dict => write!(f, "dict"),
            TypeData::Method => write!(f, "method"),
            TypeData::Interface => write!(f, "interface"),
            TypeData::Generic => write!(f, "generic"),
        }
    }
}

/// Unified pool of interned type descriptors.
#[derive(Default, Debug)]
pub struct TypePool {
    types: Vec<TypeData>,
    map: FxHashMap<TypeData, u32>,
}

impl TypePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a descriptor, returning its handle.
    pub fn intern(&mut self, data: TypeData) -> TypeIdx {
        if let Some(&idx) = self.map.get(&data) {
            return TypeIdx::new(idx);
        }
        let idx = u32::try_from(self.types.len())
            .unwrap_or_else(|_| panic!("type pool overflow: more than u32::MAX types"));
        self.map.insert(data.clone(), idx);
        self.types.push(data);
        TypeIdx::new(idx)
    }

    /// Convenience for the one interpreted class.
    pub fn integer(&mut self, signed: bool, width: IntWidth) -> TypeIdx {
        self.intern(TypeData::Integer { signed, width })
    }

    /// Resolve a handle back to its descriptor.
    ///
    /// # Panics
    /// Panics if `idx` was produced by a different pool.
    #[inline]
    pub fn get(&self, idx: TypeIdx) -> &TypeData {
        &self.types[idx.index() as usize]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests;
