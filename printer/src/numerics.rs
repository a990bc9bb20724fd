use num_bigint::BigInt;
use num_traits::{One, Zero};
use thiserror::Error;

use crate::memory::Heap;

#[derive(Debug, Error)]
pub enum NumericError {
    #[error("Divide by zero in rational number")]
    DivideZero,
}

/// Representation of a number
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Number(pub(crate) NumberContent);

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum NumberContent {
    Integer(i64),
    BigInteger(usize),
    Single(f32),
    Double(f64),

    /// Indices of the numerator and denominator, always stored reduced with
    /// a positive denominator
    Rational(usize, usize),
}

/// Representation of a complex number
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexNumber {
    real: Number,
    imaginary: Number,
}

// implementations

impl Number {
    /// Append the literal token for this number
    pub(crate) fn print(&self, out: &mut String, heap: &Heap) {
        match self.0 {
            NumberContent::Integer(val) => out.push_str(&val.to_string()),
            NumberContent::Single(val) => {
                out.push_str(&single_token(val));
                out.push_str("f32");
            }
            NumberContent::Double(val) => out.push_str(&double_token(val)),

            NumberContent::BigInteger(idx) => out.push_str(&heap.get_bigint(idx).to_string()),
            NumberContent::Rational(idx_1, idx_2) => {
                out.push_str(&heap.get_bigint(idx_1).to_string());

                // the reader treats a whole rational as an integer anyway
                if !heap.get_bigint(idx_2).is_one() {
                    out.push('/');
                    out.push_str(&heap.get_bigint(idx_2).to_string());
                }
            }
        }
    }

    /// Exact zeros carry no information in a complex part.  Floats never
    /// count, `0.0` and `-0.0` are distinct values.
    fn is_exact_zero(&self, heap: &Heap) -> bool {
        match self.0 {
            NumberContent::Integer(val) => val == 0,
            NumberContent::Single(_) | NumberContent::Double(_) => false,
            NumberContent::BigInteger(idx) => heap.get_bigint(idx).is_zero(),

            // only check the numerator as the denominator should never be 0
            NumberContent::Rational(idx, _) => heap.get_bigint(idx).is_zero(),
        }
    }
}

/// Shortest decimal that parses back to the same f64.  Debug formatting is
/// used as it always keeps a `.` or exponent, so the token stays a float.
pub(crate) fn double_token(val: f64) -> String {
    if val.is_nan() {
        String::from("nan")
    } else if val.is_infinite() {
        String::from(if val > 0.0 { "inf" } else { "-inf" })
    } else {
        format!("{:?}", val)
    }
}

/// Same rules as [`double_token`], computed on the f32 value so the shortest
/// single precision digits are used.
pub(crate) fn single_token(val: f32) -> String {
    if val.is_nan() {
        String::from("nan")
    } else if val.is_infinite() {
        String::from(if val > 0.0 { "inf" } else { "-inf" })
    } else {
        format!("{:?}", val)
    }
}

/// Reduce a fraction and move its sign onto the numerator
pub(crate) fn normalise_fraction(
    numerator: BigInt,
    denominator: BigInt,
) -> Result<(BigInt, BigInt), NumericError> {
    use num_integer::Integer;

    if denominator.is_zero() {
        return Err(NumericError::DivideZero);
    }

    let gcd = numerator.gcd(&denominator);
    let (mut numerator, mut denominator) = (numerator / &gcd, denominator / &gcd);

    if denominator < BigInt::zero() {
        numerator = -numerator;
        denominator = -denominator;
    }

    Ok((numerator, denominator))
}

impl ComplexNumber {
    pub fn new(real: Number, imaginary: Number) -> Self {
        Self { real, imaginary }
    }

    pub(crate) fn print(&self, out: &mut String, heap: &Heap) {
        let has_imaginary = !self.imaginary.is_exact_zero(heap);
        let has_real = !self.real.is_exact_zero(heap) || !has_imaginary;

        if has_real {
            self.real.print(out, heap);
        }

        if has_imaginary {
            let mut imaginary = String::new();
            self.imaginary.print(&mut imaginary, heap);

            // negative parts carry their own sign
            if has_real && !imaginary.starts_with('-') {
                out.push('+');
            }
            out.push_str(&imaginary);
            out.push('i');
        }
    }
}
