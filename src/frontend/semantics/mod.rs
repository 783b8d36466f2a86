//! Semantic analyzer for MC.
//!
//! The parser calls one `on_*` operation per recognized production; each validates its already-built operands,
//! inserts the conversions the language requires, and returns a typed node. Analysis is single-pass and
//! definition-order sensitive: a name is only visible after its declaration has been processed.
//!
//! ## Notes
//!
//! - **Scopes**: the analyzer owns the [`ScopeChain`]. Entering a block whose parent is the global scope
//!   re-declares the current function's parameters into it, so parameters and the function's outermost block
//!   behave as one scope.
//! - **Current function**: set between the function's declaration and the end of its body. Function
//!   definitions do not nest.
//! - **Fail-fast**: every operation returns [`CompileResult`]; the first error aborts compilation.
//!
//! ## See also
//! - [`scope`](super::scope) for the symbol tables
//! - [`ast`](super::ast) for the nodes built here

mod convert;
mod decl;
mod expr;
mod require;
mod stmt;

#[cfg(test)]
mod tests;

use std::rc::Rc;

use crate::frontend::ast::Declaration;
use crate::frontend::diagnostics::{CompileResult, errors};
use crate::frontend::scope::{ScopeChain, ScopeKind};
use mc_syntax::Symbol;

/// Semantic analyzer state.
///
/// Create with [`Semantics::new`], open the global scope, then feed it productions in source order.
#[derive(Debug, Default)]
pub struct Semantics {
    scopes: ScopeChain,
    /// Function whose parameters or body are being analyzed.
    function: Option<Rc<Declaration>>,
    /// Number of enclosing `while` bodies in the current function.
    loop_depth: usize,
}

impl Semantics {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Scopes
    // ========================================================================

    pub fn enter_global_scope(&mut self) {
        self.scopes.enter(ScopeKind::Global);
    }

    pub fn enter_parameter_scope(&mut self) {
        self.scopes.enter(ScopeKind::Parameter);
    }

    /// Open a block scope.
    ///
    /// ## Errors
    /// Fails only if a parameter of the current function cannot be re-declared into the function's outermost
    /// block, which parameter-list analysis already rules out.
    pub fn enter_block_scope(&mut self) -> CompileResult<()> {
        self.scopes.enter(ScopeKind::Block);
        if self.scopes.parent_kind() == Some(ScopeKind::Global) {
            if let Some(function) = self.function.clone() {
                for param in function.parameters() {
                    self.declare(Rc::clone(param))?;
                }
            }
        }
        Ok(())
    }

    pub fn leave_scope(&mut self) {
        self.scopes.leave();
    }

    pub fn scope_depth(&self) -> usize {
        self.scopes.depth()
    }

    /// Make `decl` visible in the current scope under its own name.
    ///
    /// ## Errors
    /// - Name error if the name is already declared in the current scope. Outer declarations are shadowed.
    pub fn declare(&mut self, decl: Rc<Declaration>) -> CompileResult<()> {
        let (Some(name), Some(location)) = (decl.name().cloned(), decl.location()) else {
            unreachable!("INVARIANT: the program is never declared in a scope");
        };
        tracing::debug!(name = %name, kind = decl.kind().name(), depth = self.scopes.depth(), "declare");
        self.scopes
            .declare(name.clone(), decl)
            .map_err(|_| errors::redeclaration(name.as_str(), location))
    }

    /// Resolve `name` from the innermost scope outwards.
    pub fn lookup(&self, name: &Symbol) -> Option<&Rc<Declaration>> {
        self.scopes.lookup(name)
    }

    // ========================================================================
    // Function and loop context
    // ========================================================================

    /// Mark `function` as the function whose body is about to be analyzed.
    ///
    /// ## Panics
    /// - If another function is already active.
    pub fn begin_function(&mut self, function: &Rc<Declaration>) {
        assert!(
            self.function.is_none(),
            "INVARIANT: function definitions do not nest"
        );
        tracing::debug!(name = ?function.name().map(Symbol::as_str), "begin function");
        self.function = Some(Rc::clone(function));
        self.loop_depth = 0;
    }

    pub fn end_function(&mut self) {
        if let Some(function) = self.function.take() {
            tracing::debug!(name = ?function.name().map(Symbol::as_str), "end function");
        }
        self.loop_depth = 0;
    }

    pub fn current_function(&self) -> Option<&Rc<Declaration>> {
        self.function.as_ref()
    }

    pub fn enter_loop(&mut self) {
        self.loop_depth += 1;
    }

    pub fn leave_loop(&mut self) {
        self.loop_depth = self.loop_depth.saturating_sub(1);
    }
}
