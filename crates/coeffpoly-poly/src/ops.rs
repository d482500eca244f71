//! Conversions, iteration and operator bindings for [`Polynomial`].
//!
//! The operators delegate to the named methods: `+` and `-` keep the
//! coefficient type, `*` always produces a `Polynomial<f64>`.

use std::ops::{Add, Mul, Sub};

use coeffpoly_rings::traits::Coefficient;

use crate::dense::Polynomial;

impl<T: Coefficient> From<Vec<T>> for Polynomial<T> {
    fn from(coeffs: Vec<T>) -> Self {
        Self::new(coeffs)
    }
}

impl<T: Coefficient> From<&[T]> for Polynomial<T> {
    fn from(coeffs: &[T]) -> Self {
        Self::new(coeffs.to_vec())
    }
}

impl<T: Coefficient> FromIterator<T> for Polynomial<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T: Coefficient> IntoIterator for &'a Polynomial<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Coefficient> IntoIterator for Polynomial<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_coefficients().into_iter()
    }
}

impl<T: Coefficient> Add for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(self, rhs)
    }
}

impl<T: Coefficient> Add for Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(&self, &rhs)
    }
}

impl<T: Coefficient> Sub for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        Polynomial::sub(self, rhs)
    }
}

impl<T: Coefficient> Sub for Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        Polynomial::sub(&self, &rhs)
    }
}

impl<T: Coefficient> Mul for &Polynomial<T> {
    type Output = Polynomial<f64>;

    fn mul(self, rhs: Self) -> Self::Output {
        Polynomial::mul(self, rhs)
    }
}

impl<T: Coefficient> Mul for Polynomial<T> {
    type Output = Polynomial<f64>;

    fn mul(self, rhs: Self) -> Self::Output {
        Polynomial::mul(&self, &rhs)
    }
}
