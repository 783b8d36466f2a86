//! Declarations and the program root.

use std::cell::OnceCell;
use std::rc::Rc;

use mc_syntax::{Location, Symbol};

use super::expr::Expr;
use super::stmt::Stmt;
use super::types::{FunctionType, Type};

/// A declaration, or the program that owns the top-level ones.
///
/// ## Notes
/// - Variables and parameters denote assignable storage: identifier expressions naming them have reference
///   type. Constants, values, and functions do not.
#[derive(Debug)]
pub enum Declaration {
    Program(Program),
    /// `var x : T = e;`
    Variable(ObjectDecl),
    /// `let x : T = e;`
    Constant(ObjectDecl),
    /// `def x : T = e;`
    Value(ObjectDecl),
    Parameter(ObjectDecl),
    Function(FunctionDecl),
}

/// Variant tag of a [`Declaration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Program,
    Variable,
    Constant,
    Value,
    Parameter,
    Function,
}

impl DeclKind {
    pub fn name(self) -> &'static str {
        match self {
            DeclKind::Program => "program",
            DeclKind::Variable => "variable",
            DeclKind::Constant => "constant",
            DeclKind::Value => "value",
            DeclKind::Parameter => "parameter",
            DeclKind::Function => "function",
        }
    }
}

/// Ordered top-level declarations of one source file.
#[derive(Debug, Default)]
pub struct Program {
    pub declarations: Vec<Rc<Declaration>>,
}

/// Shared shape of variables, constants, values, and parameters.
#[derive(Debug)]
pub struct ObjectDecl {
    pub name: Symbol,
    pub ty: Type,
    /// Already converted to `ty`.
    pub init: Option<Expr>,
    pub location: Location,
}

#[derive(Debug)]
pub struct FunctionDecl {
    pub name: Symbol,
    /// Always a [`Type::Function`].
    pub ty: Type,
    pub params: Vec<Rc<Declaration>>,
    /// Set once the body has been analyzed; empty for a declaration without definition.
    body: OnceCell<Stmt>,
    pub location: Location,
}

impl FunctionDecl {
    pub(crate) fn new(name: Symbol, ty: Type, params: Vec<Rc<Declaration>>, location: Location) -> Self {
        Self {
            name,
            ty,
            params,
            body: OnceCell::new(),
            location,
        }
    }

    pub fn function_type(&self) -> &FunctionType {
        self.ty
            .as_function()
            .expect("INVARIANT: function declarations have function type")
    }

    pub fn return_type(&self) -> &Type {
        &self.function_type().ret
    }

    pub fn body(&self) -> Option<&Stmt> {
        self.body.get()
    }

    pub(crate) fn define(&self, body: Stmt) {
        if self.body.set(body).is_err() {
            panic!("INVARIANT: function '{}' defined twice", self.name);
        }
    }
}

impl Declaration {
    pub fn kind(&self) -> DeclKind {
        match self {
            Declaration::Program(_) => DeclKind::Program,
            Declaration::Variable(_) => DeclKind::Variable,
            Declaration::Constant(_) => DeclKind::Constant,
            Declaration::Value(_) => DeclKind::Value,
            Declaration::Parameter(_) => DeclKind::Parameter,
            Declaration::Function(_) => DeclKind::Function,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectDecl> {
        match self {
            Declaration::Variable(obj)
            | Declaration::Constant(obj)
            | Declaration::Value(obj)
            | Declaration::Parameter(obj) => Some(obj),
            Declaration::Program(_) | Declaration::Function(_) => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionDecl> {
        match self {
            Declaration::Function(func) => Some(func),
            _ => None,
        }
    }

    pub fn as_program(&self) -> Option<&Program> {
        match self {
            Declaration::Program(program) => Some(program),
            _ => None,
        }
    }

    /// The declared name; the program has none.
    pub fn name(&self) -> Option<&Symbol> {
        match self {
            Declaration::Program(_) => None,
            Declaration::Function(func) => Some(&func.name),
            _ => self.as_object().map(|obj| &obj.name),
        }
    }

    /// The declared type; the program has none.
    pub fn ty(&self) -> Option<&Type> {
        match self {
            Declaration::Program(_) => None,
            Declaration::Function(func) => Some(&func.ty),
            _ => self.as_object().map(|obj| &obj.ty),
        }
    }

    pub fn location(&self) -> Option<Location> {
        match self {
            Declaration::Program(_) => None,
            Declaration::Function(func) => Some(func.location),
            _ => self.as_object().map(|obj| obj.location),
        }
    }

    /// Initializer of an object declaration.
    pub fn init(&self) -> Option<&Expr> {
        self.as_object().and_then(|obj| obj.init.as_ref())
    }

    /// Parameters of a function; empty otherwise.
    pub fn parameters(&self) -> &[Rc<Declaration>] {
        match self {
            Declaration::Function(func) => &func.params,
            _ => &[],
        }
    }

    /// Body of a defined function.
    pub fn body(&self) -> Option<&Stmt> {
        self.as_function().and_then(FunctionDecl::body)
    }

    /// Top-level declarations of the program; empty otherwise.
    pub fn declarations(&self) -> &[Rc<Declaration>] {
        match self {
            Declaration::Program(program) => &program.declarations,
            _ => &[],
        }
    }

    /// Whether identifier expressions naming this declaration denote storage.
    pub fn is_reference_category(&self) -> bool {
        matches!(self, Declaration::Variable(_) | Declaration::Parameter(_))
    }
}
