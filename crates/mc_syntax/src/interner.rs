//! Symbol interning.
//!
//! The [`Interner`] maps each distinct string to exactly one [`Symbol`]. Later phases compare identifiers by
//! handle identity rather than by content.
//!
//! ## Notes
//! - A `Symbol` keeps its string alive (it shares the interner's allocation), so symbols stay printable after
//!   the interner itself is dropped.
//! - Symbols from different interners never compare equal, even for the same text. A compilation uses one
//!   interner for its whole lifetime.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Canonical, identity-comparable handle for an interned string.
#[derive(Clone)]
pub struct Symbol(Rc<str>);

impl Symbol {
    /// The interned text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Rc::as_ptr(&self.0), state);
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?})", self.as_str())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The string table for one compilation.
#[derive(Debug, Default)]
pub struct Interner {
    strings: HashSet<Rc<str>>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the unique symbol for `text`, allocating it on first use.
    pub fn intern(&mut self, text: &str) -> Symbol {
        if let Some(existing) = self.strings.get(text) {
            return Symbol(Rc::clone(existing));
        }
        let stored: Rc<str> = Rc::from(text);
        self.strings.insert(Rc::clone(&stored));
        Symbol(stored)
    }

    /// Return the symbol for `text` only if it was already interned.
    pub fn get(&self, text: &str) -> Option<Symbol> {
        self.strings.get(text).map(|s| Symbol(Rc::clone(s)))
    }

    /// Number of distinct strings interned so far.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
