//! String interning for identifier lexemes.
//!
//! A [`Symbol`] is a compact, `Copy`, hashable handle to a string stored in
//! a global interner. Local variable names are interned on first reference
//! so the parser's symbol table can key on a 4-byte integer instead of
//! cloning the lexeme bytes on every lookup, while still comparing names by
//! their bytes (interning is byte-exact: `"x"` always maps to the same
//! `Symbol`, regardless of where it appears in the source).

use ahash::AHasher;
use dashmap::DashMap;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::LazyLock;

/// An interned identifier.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u32);

impl Symbol {
    /// Intern `text`, returning the symbol for it. Repeated calls with
    /// byte-identical text return the same symbol.
    pub fn intern(text: &str) -> Self {
        STRING_TABLE.intern(text)
    }

    /// The original string this symbol was interned from.
    pub fn as_str(&self) -> &'static str {
        STRING_TABLE.resolve(*self)
    }
}

impl std::fmt::Debug for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({:?})", self.as_str())
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

static STRING_TABLE: LazyLock<StringTable> = LazyLock::new(StringTable::new);

/// Thread-safe string table backed by `DashMap` for lock-free concurrent
/// interning, hashed with `ahash` for speed over cryptographic strength.
struct StringTable {
    by_hash: DashMap<u64, (&'static str, u32)>,
    by_index: DashMap<u32, &'static str>,
    next_index: AtomicU32,
}

impl StringTable {
    fn new() -> Self {
        Self {
            by_hash: DashMap::with_capacity(256),
            by_index: DashMap::with_capacity(256),
            next_index: AtomicU32::new(0),
        }
    }

    fn hash_of(text: &str) -> u64 {
        let mut hasher = AHasher::default();
        text.hash(&mut hasher);
        hasher.finish()
    }

    fn intern(&self, text: &str) -> Symbol {
        let hash = Self::hash_of(text);
        if let Some(entry) = self.by_hash.get(&hash) {
            if entry.0 == text {
                return Symbol(entry.1);
            }
        }

        // Leaked on purpose: the table lives for the whole process and
        // interned strings are never removed, so a `'static` reference is
        // cheaper than reference counting every lookup.
        let leaked: &'static str = Box::leak(text.to_owned().into_boxed_str());
        let index = self.next_index.fetch_add(1, Ordering::Relaxed);
        self.by_hash.insert(hash, (leaked, index));
        self.by_index.insert(index, leaked);
        Symbol(index)
    }

    fn resolve(&self, symbol: Symbol) -> &'static str {
        *self
            .by_index
            .get(&symbol.0)
            .expect("Symbol always originates from StringTable::intern")
    }
}
