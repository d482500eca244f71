//! # coeffpoly
//!
//! Dense univariate polynomials with a deliberately literal contract.
//!
//! ## Features
//!
//! - **Verbatim storage**: coefficients are kept in ascending degree order
//!   exactly as given, trailing zeros included
//! - **Arithmetic**: padded addition and subtraction, convolution
//!   multiplication, formal differentiation
//! - **Rendering**: `c0 + c1x^1 + c2x^2 + ...` with no sign folding
//!
//! ## Quick Start
//!
//! ```rust
//! use coeffpoly::prelude::*;
//!
//! let p = Polynomial::new(vec![1, 2, 3]);
//! assert_eq!(p.derivative().coefficients(), &[2.0, 6.0]);
//! assert_eq!(p.value_at(2), Ok(3));
//! assert!(p.value_at(3).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use coeffpoly_poly as poly;
pub use coeffpoly_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use coeffpoly_poly::{PolyError, Polynomial};
    pub use coeffpoly_rings::Coefficient;
}
