//! # coeffpoly-poly
//!
//! Dense univariate polynomial arithmetic over a raw coefficient list.
//!
//! This crate provides:
//! - [`Polynomial`]: ascending-order coefficients, stored verbatim
//! - Addition and subtraction with zero padding
//! - Convolution multiplication and formal differentiation in `f64`
//! - Raw coefficient access through [`Polynomial::value_at`]
//!
//! ## Representation
//!
//! Trailing zeros are never stripped and the zero polynomial is the empty
//! list. Two polynomials are equal exactly when their coefficient lists are.
//!
//! ```
//! use coeffpoly_poly::Polynomial;
//!
//! let p = Polynomial::new(vec![7, -1, 2]);
//! assert_eq!(p.to_string(), "7 + -1x^1 + 2x^2");
//!
//! let product = Polynomial::new(vec![1, 2]).mul(&Polynomial::new(vec![3, 4]));
//! assert_eq!(product.coefficients(), &[3.0, 10.0, 8.0]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dense;
pub mod error;
pub mod ops;

#[cfg(test)]
mod proptests;

pub use dense::Polynomial;
pub use error::{PolyError, Result};
