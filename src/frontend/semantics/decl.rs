//! Declaration productions.

use std::rc::Rc;

use mc_syntax::{CompileError, Location, Symbol};

use crate::frontend::ast::{DeclKind, Declaration, Expr, FunctionDecl, ObjectDecl, Program, Stmt, Type};
use crate::frontend::diagnostics::{CompileResult, errors};

use super::Semantics;

impl Semantics {
    /// Declare a variable, constant, or value in the current scope.
    ///
    /// The initializer is analyzed before the name becomes visible, so `var x : int = x;` refers to an outer `x`.
    ///
    /// ## Parameters
    /// - `kind`: one of [`DeclKind::Variable`], [`DeclKind::Constant`], [`DeclKind::Value`]
    /// - `init`: required for constants and values
    ///
    /// ## Errors
    /// - Syntax error if a constant or value has no initializer.
    /// - Type error if the initializer's value type is not exactly `ty`.
    /// - Name error on a same-scope redeclaration.
    pub fn on_object_declaration(
        &mut self,
        kind: DeclKind,
        name: Symbol,
        ty: Type,
        init: Option<Expr>,
        location: Location,
    ) -> CompileResult<Rc<Declaration>> {
        let init = match init {
            Some(init) => {
                let init = self.require_value(init)?;
                if !init.ty().is_same_as(&ty) {
                    return Err(errors::type_mismatch(&ty.to_string(), &init.ty().to_string(), init.location()));
                }
                Some(init)
            }
            None if kind == DeclKind::Variable => None,
            None => {
                return Err(CompileError::syntax(
                    format!("{} '{name}' requires an initializer", kind.name()),
                    location,
                ));
            }
        };

        let object = ObjectDecl {
            name,
            ty,
            init,
            location,
        };
        let decl = Rc::new(match kind {
            DeclKind::Variable => Declaration::Variable(object),
            DeclKind::Constant => Declaration::Constant(object),
            DeclKind::Value => Declaration::Value(object),
            other => unreachable!("INVARIANT: {} is not an object declaration", other.name()),
        });
        self.declare(Rc::clone(&decl))?;
        Ok(decl)
    }

    /// Declare a parameter in the current parameter scope.
    pub fn on_parameter_declaration(
        &mut self,
        name: Symbol,
        ty: Type,
        location: Location,
    ) -> CompileResult<Rc<Declaration>> {
        let decl = Rc::new(Declaration::Parameter(ObjectDecl {
            name,
            ty,
            init: None,
            location,
        }));
        self.declare(Rc::clone(&decl))?;
        Ok(decl)
    }

    /// Declare a function in the current scope, before its body is analyzed, so the body may call it.
    pub fn on_function_declaration(
        &mut self,
        name: Symbol,
        params: Vec<Rc<Declaration>>,
        ret: Type,
        location: Location,
    ) -> CompileResult<Rc<Declaration>> {
        let param_types = params
            .iter()
            .map(|param| param.ty().cloned().expect("INVARIANT: parameters are typed"))
            .collect();
        let ty = Type::function(param_types, ret);
        let decl = Rc::new(Declaration::Function(FunctionDecl::new(name, ty, params, location)));
        self.declare(Rc::clone(&decl))?;
        Ok(decl)
    }

    /// Attach the analyzed body to `function`.
    pub fn on_function_definition(&mut self, function: &Rc<Declaration>, body: Stmt) {
        function
            .as_function()
            .expect("INVARIANT: only functions are defined")
            .define(body);
    }

    pub fn on_program(&self, declarations: Vec<Rc<Declaration>>) -> Declaration {
        tracing::debug!(declarations = declarations.len(), "program analyzed");
        Declaration::Program(Program { declarations })
    }
}
