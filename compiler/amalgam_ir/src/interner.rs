//! String interner for identifiers, literal text, and register names.
//!
//! The compilation pipeline is single-threaded and each `Session` owns
//! its interner exclusively, so a plain unsynchronized pool is enough.
//! Interning gives O(1) equality via `Name` handles.

use rustc_hash::FxHashMap;
use std::fmt;

/// Interned string handle.
///
/// Equality and hashing are O(1) index comparisons; the text lives in
/// the owning `StringInterner`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// The empty string, pre-interned at index 0.
    pub const EMPTY: Name = Name(0);

    /// Raw index of this name.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

/// Interned string pool.
///
/// Strings are stored once; interning the same text twice returns the
/// same `Name`.
pub struct StringInterner {
    map: FxHashMap<String, u32>,
    strings: Vec<String>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned.
    pub fn new() -> Self {
        let mut interner = StringInterner {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        };
        interner.map.insert(String::new(), 0);
        interner.strings.push(String::new());
        interner
    }

    /// Intern a string, returning its handle.
    pub fn intern(&mut self, text: &str) -> Name {
        if let Some(&idx) = self.map.get(text) {
            return Name(idx);
        }
        let idx = u32::try_from(self.strings.len())
            .unwrap_or_else(|_| panic!("interner overflow: more than u32::MAX strings"));
        self.map.insert(text.to_owned(), idx);
        self.strings.push(text.to_owned());
        Name(idx)
    }

    /// Look up a previously interned string without inserting.
    pub fn get(&self, text: &str) -> Option<Name> {
        self.map.get(text).copied().map(Name)
    }

    /// Resolve a handle back to its text.
    ///
    /// # Panics
    /// Panics if `name` was produced by a different interner.
    #[inline]
    pub fn resolve(&self, name: Name) -> &str {
        &self.strings[name.0 as usize]
    }

    /// Number of interned strings (including the empty string).
    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// True if only the empty string is interned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strings.len() == 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
