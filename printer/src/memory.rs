use lasso::{Rodeo, Spur};
use num_bigint::BigInt;
use thiserror::Error;

use crate::{
    numerics::{normalise_fraction, ComplexNumber, Number, NumberContent, NumericError},
    value::{CustomValue, Value, ValueContents},
};

#[derive(Debug, Error)]
pub enum MemoryError {
    #[error("Cannot append an element to a value of shape `{shape}`")]
    NotASequence { shape: &'static str },

    #[error("Cannot insert an entry into a value of shape `{shape}`")]
    NotAMap { shape: &'static str },
}

/// Heap storage for values, all values must be allocated through a heap.
/// Containers hold value handles, so a container may end up holding itself.
/// Note: currently the heap references in values are indices into vecs,
/// so a heap access requires indexing an array rather than dereferencing a
/// pointer.
#[derive(Debug)]
pub struct Heap {
    string: Vec<String>,
    bigint: Vec<BigInt>,
    vec: Vec<Vec<Value>>,
    map: Vec<Vec<(Value, Value)>>,
    constructor: Vec<(Spur, Vec<Value>)>,
    native: Vec<Box<dyn CustomValue>>,
    symbols: Rodeo,
}

impl Heap {
    /// Create a new value heap
    pub fn new() -> Self {
        Self {
            string: Vec::with_capacity(0),
            bigint: Vec::with_capacity(0),
            vec: Vec::with_capacity(0),
            map: Vec::with_capacity(0),
            constructor: Vec::with_capacity(0),
            native: Vec::with_capacity(0),
            symbols: Rodeo::new(),
        }
    }

    /// Create a new boolean value
    pub fn bool(&mut self, val: bool) -> Value {
        Value(ValueContents::Boolean(val))
    }

    /// Create a new string value
    pub fn string(&mut self, val: impl Into<String>) -> Value {
        self.string.push(val.into());
        Value(ValueContents::String(self.string.len() - 1))
    }

    /// Create a new symbol value, symbols with the same name share storage
    pub fn symbol(&mut self, name: &str) -> Value {
        Value(ValueContents::Symbol(self.symbols.get_or_intern(name)))
    }

    /// Create a new list value
    pub fn list(&mut self, val: Vec<Value>) -> Value {
        self.vec.push(val);
        Value(ValueContents::List(self.vec.len() - 1))
    }

    /// Create a new tuple value
    pub fn tuple(&mut self, val: Vec<Value>) -> Value {
        self.vec.push(val);
        Value(ValueContents::Tuple(self.vec.len() - 1))
    }

    /// Create a new map value, entries keep their insertion order
    pub fn map(&mut self, val: Vec<(Value, Value)>) -> Value {
        self.map.push(val);
        Value(ValueContents::Map(self.map.len() - 1))
    }

    /// Create a new constructor application, e.g. `Some(1)`
    pub fn constructor(&mut self, name: &str, fields: Vec<Value>) -> Value {
        let name = self.symbols.get_or_intern(name);
        self.constructor.push((name, fields));
        Value(ValueContents::Constructor(self.constructor.len() - 1))
    }

    /// Convert a heap allocated number into a value
    pub fn number(&mut self, val: Number) -> Value {
        Value(ValueContents::Number(val))
    }

    /// Convert heap allocated numbers into a complex number value
    pub fn complex(&mut self, real: Number, imaginary: Number) -> Value {
        Value(ValueContents::Complex(ComplexNumber::new(real, imaginary)))
    }

    /// Create an i64 number
    pub fn integer(&mut self, val: i64) -> Number {
        Number(NumberContent::Integer(val))
    }

    /// Create an f32 number
    pub fn single(&mut self, val: f32) -> Number {
        Number(NumberContent::Single(val))
    }

    /// Create an f64 number
    pub fn double(&mut self, val: f64) -> Number {
        Number(NumberContent::Double(val))
    }

    /// Create a big integer number
    pub fn bigint(&mut self, val: BigInt) -> Number {
        self.bigint.push(val);
        let id = self.bigint.len() - 1;
        Number(NumberContent::BigInteger(id))
    }

    /// Create a rational number, stored in lowest terms
    pub fn rational(
        &mut self,
        numerator: BigInt,
        denominator: BigInt,
    ) -> Result<Number, NumericError> {
        let (numerator, denominator) = normalise_fraction(numerator, denominator)?;

        self.bigint.push(numerator);
        let numerator = self.bigint.len() - 1;
        self.bigint.push(denominator);
        let denominator = self.bigint.len() - 1;
        Ok(Number(NumberContent::Rational(numerator, denominator)))
    }

    /// Store an arbitrary value within the heap
    pub fn native(&mut self, val: impl CustomValue) -> Value {
        self.native.push(Box::new(val));
        Value(ValueContents::NativeValue(self.native.len() - 1))
    }

    /// Reference a native function by its id
    pub fn native_function(&mut self, id: u32) -> Value {
        Value(ValueContents::NativeFunction(id))
    }

    /// Append an element to a list, tuple or the fields of a constructor
    pub fn push(&mut self, target: Value, item: Value) -> Result<(), MemoryError> {
        match target.0 {
            ValueContents::List(idx) | ValueContents::Tuple(idx) => self.vec[idx].push(item),
            ValueContents::Constructor(idx) => self.constructor[idx].1.push(item),
            other => {
                return Err(MemoryError::NotASequence {
                    shape: other.shape(),
                })
            }
        }

        Ok(())
    }

    /// Append an entry to a map
    pub fn insert(&mut self, target: Value, key: Value, value: Value) -> Result<(), MemoryError> {
        match target.0 {
            ValueContents::Map(idx) => {
                self.map[idx].push((key, value));
                Ok(())
            }
            other => Err(MemoryError::NotAMap {
                shape: other.shape(),
            }),
        }
    }

    /// Get a string from the heap
    pub fn get_string(&self, idx: usize) -> &str {
        &self.string[idx]
    }

    /// Get a big integer from the heap
    pub fn get_bigint(&self, idx: usize) -> &BigInt {
        &self.bigint[idx]
    }

    /// Get a vector of values from the heap
    pub fn get_vec(&self, idx: usize) -> &[Value] {
        &self.vec[idx]
    }

    /// Get the entries of a map from the heap
    pub fn get_map(&self, idx: usize) -> &[(Value, Value)] {
        &self.map[idx]
    }

    /// Get the name and fields of a constructor from the heap
    pub fn get_constructor(&self, idx: usize) -> (&str, &[Value]) {
        let (name, fields) = &self.constructor[idx];
        (self.symbols.resolve(name), fields.as_slice())
    }

    /// Get a native value from the heap
    pub fn get_native(&self, idx: usize) -> &dyn CustomValue {
        &*self.native[idx]
    }

    /// Get the name of an interned symbol
    pub fn resolve(&self, symbol: &Spur) -> &str {
        self.symbols.resolve(symbol)
    }
}

impl Default for Heap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::{Heap, MemoryError};

    #[test]
    fn push_needs_a_sequence() {
        let mut heap = Heap::new();
        let text = heap.string("a");
        let map = heap.map(vec![]);

        assert!(matches!(
            heap.push(text, text),
            Err(MemoryError::NotASequence { shape: "string" })
        ));
        assert!(matches!(
            heap.push(map, text),
            Err(MemoryError::NotASequence { shape: "map" })
        ));
        assert!(matches!(
            heap.insert(text, text, text),
            Err(MemoryError::NotAMap { shape: "string" })
        ));
    }

    #[test]
    fn symbols_are_interned() {
        let mut heap = Heap::new();
        let first = heap.symbol("name");
        let second = heap.symbol("name");
        let other = heap.symbol("other");

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn constructors_share_symbol_names() {
        let mut heap = Heap::new();
        let unit = heap.constructor("Unit", vec![]);
        let field = heap.bool(true);
        heap.push(unit, field).unwrap();

        let (name, fields) = heap.get_constructor(0);
        assert_eq!(name, "Unit");
        assert_eq!(fields.len(), 1);
        assert!(heap.symbols.contains("Unit"));
    }
}
