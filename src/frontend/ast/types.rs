//! Semantic types.

use std::fmt;
use std::rc::Rc;

use mc_core::lang::types::BasicTypeId;

/// A resolved MC type.
///
/// ## Notes
/// - Equality is structural: two pointer types are equal when their pointees are, two function types when
///   their arity, parameters, and return type are. [`Type::is_same_as`] is that equality.
/// - The scalar variants carry no data, so every `int` is the same value; composite types are built per
///   occurrence and only ever compared structurally.
/// - A reference is the type of an assignable location. References never nest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    Char,
    Int,
    Float,
    Pointer(Rc<Type>),
    Reference(Rc<Type>),
    Function(Rc<FunctionType>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionType {
    pub params: Vec<Type>,
    pub ret: Type,
}

impl Type {
    pub fn basic(id: BasicTypeId) -> Type {
        match id {
            BasicTypeId::Bool => Type::Bool,
            BasicTypeId::Char => Type::Char,
            BasicTypeId::Int => Type::Int,
            BasicTypeId::Float => Type::Float,
        }
    }

    pub fn pointer_to(pointee: Type) -> Type {
        Type::Pointer(Rc::new(pointee))
    }

    /// Reference to the object type of `ty`; referencing a reference yields the same reference.
    pub fn reference_to(ty: Type) -> Type {
        match ty {
            Type::Reference(_) => ty,
            other => Type::Reference(Rc::new(other)),
        }
    }

    pub fn function(params: Vec<Type>, ret: Type) -> Type {
        Type::Function(Rc::new(FunctionType { params, ret }))
    }

    /// Structural type equality.
    pub fn is_same_as(&self, other: &Type) -> bool {
        self == other
    }

    /// The pointee of a reference, otherwise the type itself.
    pub fn object_type(&self) -> &Type {
        match self {
            Type::Reference(inner) => inner,
            other => other,
        }
    }

    /// Whether `self` is a reference whose object type is `other`.
    pub fn is_reference_to(&self, other: &Type) -> bool {
        matches!(self, Type::Reference(inner) if inner.is_same_as(other))
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Type::Reference(_))
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, Type::Pointer(_))
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Type::Function(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Type::Bool)
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Type::Int)
    }

    /// `bool`, `char`, `int`, or `float`.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Bool | Type::Char | Type::Int | Type::Float)
    }

    /// `int` or `float`.
    pub fn is_arithmetic(&self) -> bool {
        matches!(self, Type::Int | Type::Float)
    }

    /// Numeric or pointer.
    pub fn is_scalar(&self) -> bool {
        self.is_numeric() || self.is_pointer()
    }

    pub fn pointee(&self) -> Option<&Type> {
        match self {
            Type::Pointer(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionType> {
        match self {
            Type::Function(f) => Some(f),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Bool => write!(f, "bool"),
            Type::Char => write!(f, "char"),
            Type::Int => write!(f, "int"),
            Type::Float => write!(f, "float"),
            Type::Pointer(inner) => write!(f, "*{inner}"),
            Type::Reference(inner) => write!(f, "&{inner}"),
            Type::Function(func) => {
                write!(f, "(")?;
                for (i, param) in func.params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{param}")?;
                }
                write!(f, ") -> {}", func.ret)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_as_is_reflexive_for_scalars() {
        for ty in [Type::Bool, Type::Char, Type::Int, Type::Float] {
            assert!(ty.is_same_as(&ty.clone()));
        }
        assert!(!Type::Int.is_same_as(&Type::Float));
    }

    #[test]
    fn same_as_is_structural_for_pointers() {
        let a = Type::pointer_to(Type::Int);
        let b = Type::pointer_to(Type::Int);
        assert!(a.is_same_as(&b));
        assert!(b.is_same_as(&a));
        assert!(!a.is_same_as(&Type::pointer_to(Type::Float)));
        assert!(!a.is_same_as(&Type::reference_to(Type::Int)));
    }

    #[test]
    fn distinct_function_types_with_equal_shapes_are_same() {
        let f = Type::function(vec![Type::Int, Type::Int], Type::Int);
        let g = Type::function(vec![Type::Int, Type::Int], Type::Int);
        assert!(f.is_same_as(&g));
        assert!(!f.is_same_as(&Type::function(vec![Type::Int], Type::Int)));
        assert!(!f.is_same_as(&Type::function(vec![Type::Int, Type::Int], Type::Float)));
    }

    #[test]
    fn references_never_nest() {
        let r = Type::reference_to(Type::Int);
        assert_eq!(Type::reference_to(r.clone()), r);
        assert_eq!(r.object_type(), &Type::Int);
        assert!(r.is_reference_to(&Type::Int));
        assert_eq!(Type::Int.object_type(), &Type::Int);
    }

    #[test]
    fn categories() {
        assert!(Type::Bool.is_numeric() && !Type::Bool.is_arithmetic());
        assert!(Type::Float.is_arithmetic());
        assert!(Type::pointer_to(Type::Char).is_scalar());
        assert!(!Type::function(vec![], Type::Int).is_scalar());
        assert!(!Type::reference_to(Type::Int).is_numeric());
    }

    #[test]
    fn display() {
        assert_eq!(Type::pointer_to(Type::Int).to_string(), "*int");
        assert_eq!(Type::reference_to(Type::Float).to_string(), "&float");
        assert_eq!(Type::function(vec![Type::Int, Type::Char], Type::Bool).to_string(), "(int, char) -> bool");
    }
}
