//! Reference-counted string interning.
//!
//! Every string that crosses the parser (keywords, family names, URIs,
//! counter names) is interned once and referred to by handle from then on.
//! Handle equality is string equality, so keyword matching is a single
//! integer compare. Reference counts are atomic: distinct stylesheets may be
//! parsed on distinct threads against one shared interner.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::error::{Error, Result};

/// Handle to an interned string.
///
/// Two handles compare equal if and only if they name the same string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StringHandle(u32);

impl StringHandle {
    /// A handle that never resolves and never compares equal to a real one.
    pub(crate) const INVALID: StringHandle = StringHandle(u32::MAX);

    pub(crate) const fn to_bits(self) -> u32 {
        self.0
    }

    pub(crate) const fn from_bits(bits: u32) -> StringHandle {
        StringHandle(bits)
    }
}

struct Entry {
    text: Arc<str>,
    refs: AtomicUsize,
}

#[derive(Default)]
struct Inner {
    entries: Vec<Entry>,
    index: HashMap<Arc<str>, StringHandle>,
}

/// The string interner.
#[derive(Default)]
pub struct Interner {
    inner: RwLock<Inner>,
}

impl Interner {
    pub fn new() -> Interner {
        Interner::default()
    }

    /// Intern `s`, returning a handle that owns one reference.
    pub fn intern(&self, s: &str) -> Result<StringHandle> {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());

        if let Some(&handle) = inner.index.get(s) {
            inner.entries[handle.0 as usize]
                .refs
                .fetch_add(1, Ordering::Relaxed);
            return Ok(handle);
        }

        inner
            .entries
            .try_reserve(1)
            .map_err(|_| Error::NoMemory)?;
        inner.index.try_reserve(1).map_err(|_| Error::NoMemory)?;

        let text: Arc<str> = Arc::from(s);
        let handle = StringHandle(inner.entries.len() as u32);
        inner.entries.push(Entry {
            text: Arc::clone(&text),
            refs: AtomicUsize::new(1),
        });
        inner.index.insert(text, handle);

        Ok(handle)
    }

    /// Take an additional reference on `handle`.
    pub fn add_ref(&self, handle: StringHandle) {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        if let Some(entry) = inner.entries.get(handle.0 as usize) {
            entry.refs.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Release one reference on `handle`.
    pub fn release(&self, handle: StringHandle) {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        if let Some(entry) = inner.entries.get(handle.0 as usize) {
            let prev = entry.refs.fetch_sub(1, Ordering::Relaxed);
            debug_assert!(prev > 0, "release of a dead string reference");
        }
    }

    /// The text behind `handle`.
    pub fn resolve(&self, handle: StringHandle) -> Arc<str> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        match inner.entries.get(handle.0 as usize) {
            Some(entry) => Arc::clone(&entry.text),
            None => Arc::from(""),
        }
    }

    /// Current reference count of `handle`.
    pub fn ref_count(&self, handle: StringHandle) -> usize {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        match inner.entries.get(handle.0 as usize) {
            Some(entry) => entry.refs.load(Ordering::Relaxed),
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_canonical() {
        let interner = Interner::new();
        let a = interner.intern("serif").unwrap();
        let b = interner.intern("serif").unwrap();
        let c = interner.intern("sans-serif").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(interner.ref_count(a), 2);
    }

    #[test]
    fn references_balance() {
        let interner = Interner::new();
        let h = interner.intern("cursive").unwrap();
        interner.add_ref(h);
        assert_eq!(interner.ref_count(h), 2);
        interner.release(h);
        interner.release(h);
        assert_eq!(interner.ref_count(h), 0);
    }

    #[test]
    fn resolve_round_trips() {
        let interner = Interner::new();
        let h = interner.intern("Bar Baz").unwrap();
        assert_eq!(&*interner.resolve(h), "Bar Baz");
    }
}
