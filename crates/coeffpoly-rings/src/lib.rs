//! # coeffpoly-rings
//!
//! Numeric element types for coeffpoly polynomials.
//!
//! This crate provides:
//! - The `Coefficient` trait: the contract every coefficient type satisfies
//! - Implementations for the primitive machine numbers `i32`, `i64`, `f32`, `f64`
//!
//! Coefficients are plain `Copy` values. Arithmetic that the polynomial layer
//! performs in floating point (multiplication, differentiation) promotes them
//! to `f64` through [`Coefficient::to_f64`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod traits;

pub use traits::Coefficient;
