//! Dense univariate polynomials.
//!
//! Coefficients are kept exactly as given: ascending degree order, no
//! trimming of trailing zeros, and the zero polynomial is the empty list.
//! Every operation returns a fresh polynomial.

use std::fmt;

use coeffpoly_rings::traits::Coefficient;
use tracing::{debug, trace};

use crate::error::{PolyError, Result};

/// A dense univariate polynomial.
///
/// Index `i` of the coefficient list holds the coefficient of `x^i`.
/// The representation is not canonical: `[1, 0]` and `[1]` are distinct
/// values, and equality compares the raw lists.
#[derive(Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Polynomial<T = f64> {
    /// Coefficients in ascending degree order.
    coeffs: Vec<T>,
}

impl<T: Coefficient> Polynomial<T> {
    /// Creates a polynomial from coefficients in ascending degree order.
    ///
    /// The list is stored verbatim.
    #[must_use]
    pub fn new(coeffs: Vec<T>) -> Self {
        Self { coeffs }
    }

    /// Creates the zero polynomial (no coefficients).
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Returns the number of stored coefficients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns the structural degree, `len - 1`, clamped to 0 when empty.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coefficients(&self) -> &[T] {
        &self.coeffs
    }

    /// Consumes the polynomial and returns its coefficients.
    #[must_use]
    pub fn into_coefficients(self) -> Vec<T> {
        self.coeffs
    }

    /// Iterates over the coefficients in ascending degree order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.coeffs.iter()
    }

    /// Returns the coefficient stored at `index`.
    ///
    /// This is raw indexed access, not evaluation at a point:
    /// `[7, -1, 2].value_at(1)` is `-1`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::IndexOutOfRange`] if `index >= self.len()`.
    pub fn value_at(&self, index: usize) -> Result<T> {
        self.coeffs.get(index).copied().ok_or_else(|| {
            debug!(index, len = self.coeffs.len(), "coefficient index out of range");
            PolyError::IndexOutOfRange {
                index,
                len: self.coeffs.len(),
            }
        })
    }

    /// Adds two polynomials.
    ///
    /// The shorter operand is padded with zeros, so the result has
    /// `max(self.len(), other.len())` coefficients. Integer coefficients
    /// wrap on overflow instead of panicking.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        trace!(lhs = self.len(), rhs = other.len(), "add");
        self.zip_padded(other, T::coeff_add)
    }

    /// Subtracts `other` from `self`, padding like [`Polynomial::add`].
    ///
    /// Integer coefficients wrap on overflow.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        trace!(lhs = self.len(), rhs = other.len(), "sub");
        self.zip_padded(other, T::coeff_sub)
    }

    /// Multiplies two polynomials by convolution.
    ///
    /// Products are accumulated in `f64`. The result has
    /// `self.degree() + other.degree() + 1` coefficients, where the degree of
    /// the zero polynomial counts as 0; multiplying by the zero polynomial
    /// therefore yields a list of zeros rather than an empty list.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Polynomial<f64> {
        let len = self.degree() + other.degree() + 1;
        trace!(lhs = self.len(), rhs = other.len(), len, "mul");

        let mut result = vec![0.0; len];
        for (i, p) in self.coeffs.iter().enumerate() {
            for (j, q) in other.coeffs.iter().enumerate() {
                result[i + j] += p.to_f64() * q.to_f64();
            }
        }

        Polynomial::new(result)
    }

    /// Computes the formal derivative.
    ///
    /// The constant term is dropped and the coefficient at index `i`
    /// becomes `i * c` at index `i - 1`. The zero polynomial differentiates
    /// to `[0.0]`; a constant differentiates to the empty polynomial.
    #[must_use]
    pub fn derivative(&self) -> Polynomial<f64> {
        trace!(len = self.len(), "derivative");
        if self.coeffs.is_empty() {
            return Polynomial::new(vec![0.0]);
        }

        self.coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| c.mul_by_index(i))
            .collect()
    }

    fn zip_padded(&self, other: &Self, op: impl Fn(T, T) -> T) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(len);

        for i in 0..len {
            let a = self.coeffs.get(i).copied().unwrap_or_else(T::zero);
            let b = other.coeffs.get(i).copied().unwrap_or_else(T::zero);
            result.push(op(a, b));
        }

        Self::new(result)
    }
}

impl Polynomial<f64> {
    /// Compares coefficient lists element-wise within an absolute tolerance.
    ///
    /// Lengths must match exactly; trailing zeros are not ignored.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.coeffs.len() == other.coeffs.len()
            && self
                .coeffs
                .iter()
                .zip(&other.coeffs)
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl<T: Coefficient> Default for Polynomial<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Coefficient> fmt::Display for Polynomial<T> {
    /// Renders `c0 + c1x^1 + c2x^2 + ...`.
    ///
    /// Zero coefficients are kept and negative ones are not folded into the
    /// separator, so `[7, -1, 2]` renders as `7 + -1x^1 + 2x^2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.coeffs.as_slice() {
            [] => write!(f, "0"),
            [c] => write!(f, "{}", c.render()),
            [constant, rest @ ..] => {
                write!(f, "{}", constant.render())?;
                for (i, c) in rest.iter().enumerate() {
                    write!(f, " + {}x^{}", c.render(), i + 1)?;
                }
                Ok(())
            }
        }
    }
}

impl<T: Coefficient> fmt::Debug for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
