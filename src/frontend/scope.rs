//! Scope chain for name resolution
//!
//! Scopes form a strict LIFO stack that mirrors syntactic nesting: global, then a function's parameter scope
//! or body block, then nested blocks. A scope only resolves names; it does not own AST nodes, so popping a
//! scope never invalidates expressions built while it was active.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::rc::Rc;

use mc_syntax::Symbol;

use crate::frontend::ast::Declaration;

/// Where a scope sits in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    Global,
    Parameter,
    Block,
}

/// One symbol table: each symbol maps to at most one declaration.
#[derive(Debug)]
pub struct Scope {
    kind: ScopeKind,
    symbols: HashMap<Symbol, Rc<Declaration>>,
}

impl Scope {
    pub fn new(kind: ScopeKind) -> Self {
        Self {
            kind,
            symbols: HashMap::new(),
        }
    }

    pub fn kind(&self) -> ScopeKind {
        self.kind
    }

    pub fn lookup(&self, name: &Symbol) -> Option<&Rc<Declaration>> {
        self.symbols.get(name)
    }

    /// Add `name` to this scope.
    ///
    /// ## Errors
    /// Returns the existing declaration if `name` is already declared in this scope.
    pub fn declare(&mut self, name: Symbol, decl: Rc<Declaration>) -> Result<(), Rc<Declaration>> {
        match self.symbols.entry(name) {
            Entry::Occupied(existing) => Err(Rc::clone(existing.get())),
            Entry::Vacant(slot) => {
                slot.insert(decl);
                Ok(())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Stack of open scopes, innermost last.
#[derive(Debug, Default)]
pub struct ScopeChain {
    scopes: Vec<Scope>,
}

impl ScopeChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new innermost scope.
    pub fn enter(&mut self, kind: ScopeKind) {
        tracing::trace!(?kind, depth = self.scopes.len() + 1, "enter scope");
        self.scopes.push(Scope::new(kind));
    }

    /// Close the innermost scope and return it.
    pub fn leave(&mut self) -> Option<Scope> {
        let scope = self.scopes.pop();
        if let Some(scope) = &scope {
            tracing::trace!(kind = ?scope.kind, symbols = scope.len(), "leave scope");
        }
        scope
    }

    pub fn current(&self) -> Option<&Scope> {
        self.scopes.last()
    }

    /// Kind of the scope enclosing the innermost one.
    pub fn parent_kind(&self) -> Option<ScopeKind> {
        self.scopes.iter().rev().nth(1).map(Scope::kind)
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Declare `name` in the innermost scope.
    ///
    /// ## Errors
    /// Returns the existing declaration on a same-scope redeclaration.
    ///
    /// ## Panics
    /// - If no scope is open (a caller bug: every parse entry point opens the global scope first).
    pub fn declare(&mut self, name: Symbol, decl: Rc<Declaration>) -> Result<(), Rc<Declaration>> {
        self.scopes
            .last_mut()
            .expect("INVARIANT: declaration outside of any scope")
            .declare(name, decl)
    }

    /// Resolve `name` from the innermost scope outwards.
    pub fn lookup(&self, name: &Symbol) -> Option<&Rc<Declaration>> {
        self.scopes.iter().rev().find_map(|scope| scope.lookup(name))
    }
}
