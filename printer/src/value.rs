use std::{any::Any, fmt};

use lasso::Spur;

use crate::numerics::{ComplexNumber, Number};

/// Wrapper to allow value to be an opaque type, so value goes through
/// a single allocator, allowing changing allocation strategy.
/// Some methods for manipulating values require a reference to a heap,
/// this must be the heap the value was allocated using
#[derive(Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Value(pub(crate) ValueContents);

impl Value {
    /// Name of the shape of this value, as used in error messages
    pub fn shape(&self) -> &'static str {
        self.0.shape()
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

#[derive(Clone, Copy, PartialEq)]
pub(crate) enum ValueContents {
    Boolean(bool),
    String(usize),
    Symbol(Spur),
    Number(Number),
    Complex(ComplexNumber),
    List(usize),
    Tuple(usize),
    Map(usize),
    Constructor(usize),
    NativeFunction(u32),
    NativeValue(usize),
}

impl ValueContents {
    pub(crate) fn shape(&self) -> &'static str {
        match self {
            ValueContents::Boolean(_) => "boolean",
            ValueContents::String(_) => "string",
            ValueContents::Symbol(_) => "symbol",
            ValueContents::Number(_) => "number",
            ValueContents::Complex(_) => "complex number",
            ValueContents::List(_) => "list",
            ValueContents::Tuple(_) => "tuple",
            ValueContents::Map(_) => "map",
            ValueContents::Constructor(_) => "constructor",
            ValueContents::NativeFunction(_) => "native function",
            ValueContents::NativeValue(_) => "native value",
        }
    }
}

/// Debug output shows heap handles, not contents.  Use the printer to get
/// the literal form of a value.
impl fmt::Debug for ValueContents {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValueContents::Boolean(val) => write!(f, "{}", val),
            ValueContents::String(val) => write!(f, "{{string {}}}", val),
            ValueContents::Symbol(val) => write!(f, "{{symbol {:?}}}", val),
            ValueContents::Number(val) => write!(f, "{:?}", val),
            ValueContents::Complex(val) => write!(f, "{:?}", val),
            ValueContents::List(val) => write!(f, "{{list {}}}", val),
            ValueContents::Tuple(val) => write!(f, "{{tuple {}}}", val),
            ValueContents::Map(val) => write!(f, "{{map {}}}", val),
            ValueContents::Constructor(val) => write!(f, "{{constructor {}}}", val),
            ValueContents::NativeFunction(val) => write!(f, "{{native fn {}}}", val),
            ValueContents::NativeValue(val) => write!(f, "{{native value {}}}", val),
        }
    }
}

/// An arbitrary rust value that can be stored on a heap.  It only has a
/// literal form if a rule for its type is registered in
/// [`crate::hooks::PrintHooks`].
pub trait CustomValue: Any + fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    /// Name of the concrete rust type, reported when no printing rule exists
    fn type_name(&self) -> &'static str;
}

impl<T: Any + fmt::Debug + Send + Sync> CustomValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}
