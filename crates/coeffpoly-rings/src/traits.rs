//! Coefficient trait.
//!
//! This module defines the element contract that the dense polynomial type
//! is generic over.

use std::fmt::Debug;
use std::ops::{Add, Sub};

use num_traits::{AsPrimitive, WrappingAdd, WrappingSub, Zero};

/// A numeric value usable as a polynomial coefficient.
///
/// # Laws
///
/// - `coeff_add` and `coeff_sub` are total: integers wrap on overflow
///   (two's complement), floats follow IEEE 754
/// - `coeff_sub(a, b).coeff_add(b) == a` for every integer `a`, `b`
/// - `zero()` is the padding value for element-wise operations
/// - `to_f64` is a lossy-at-worst promotion and never fails
pub trait Coefficient:
    Copy + Debug + PartialEq + Add<Output = Self> + Sub<Output = Self> + Zero + AsPrimitive<f64>
{
    /// Adds two coefficients without panicking.
    #[must_use]
    fn coeff_add(self, rhs: Self) -> Self;

    /// Subtracts two coefficients without panicking.
    #[must_use]
    fn coeff_sub(self, rhs: Self) -> Self;

    /// Promotes the value to a double-precision float.
    #[must_use]
    fn to_f64(self) -> f64 {
        self.as_()
    }

    /// Computes `self * index` in floating point.
    ///
    /// Differentiation multiplies the coefficient of `x^i` by `i`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    fn mul_by_index(self, index: usize) -> f64 {
        self.to_f64() * index as f64
    }

    /// Renders the value as a literal.
    ///
    /// Integers render as plain decimals (`-1`). Floats keep a fractional
    /// part (`3.0`), switch to exponent form at or above `1e16` and below
    /// `1e-4` with a signed, two-digit exponent (`1e+16`, `1.5e-05`), and
    /// render non-finite values as `inf`, `-inf` and `nan`.
    #[must_use]
    fn render(&self) -> String {
        format!("{self:?}")
    }
}

macro_rules! impl_integer_coefficient {
    ($($t:ty),*) => {
        $(
            impl Coefficient for $t {
                fn coeff_add(self, rhs: Self) -> Self {
                    WrappingAdd::wrapping_add(&self, &rhs)
                }

                fn coeff_sub(self, rhs: Self) -> Self {
                    WrappingSub::wrapping_sub(&self, &rhs)
                }
            }
        )*
    };
}

macro_rules! impl_float_coefficient {
    ($($t:ty),*) => {
        $(
            impl Coefficient for $t {
                fn coeff_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                fn coeff_sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                fn render(&self) -> String {
                    float_literal(&format!("{self:?}"))
                }
            }
        )*
    };
}

impl_integer_coefficient!(i32, i64);
impl_float_coefficient!(f32, f64);

/// Rewrites a float's `Debug` form: signed two-digit exponent, lowercase
/// non-finite values.
fn float_literal(debug: &str) -> String {
    match debug {
        "NaN" => "nan".to_owned(),
        "inf" | "-inf" => debug.to_owned(),
        _ => match debug.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exp),
                };
                format!("{mantissa}e{sign}{digits:0>2}")
            }
            None => debug.to_owned(),
        },
    }
}
