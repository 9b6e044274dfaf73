//! Scalar reverse-mode automatic differentiation.
//!
//! Expressions are built eagerly from [`Var`] handles: every operation
//! computes its value immediately and records an edge to its operands.
//! [`Var::backward`] then walks the recorded graph from an output and writes
//! the partial derivative of that output into every tracked variable it
//! depends on.
//!
//! ```
//! use autodiff_core::Var;
//!
//! let x = Var::new(2.0);
//! let y = Var::new(3.0);
//! let f = &x * &y + x.sin();
//! f.backward().unwrap();
//! assert_eq!(x.grad(), Some(3.0 + 2.0_f64.cos()));
//! assert_eq!(y.grad(), Some(2.0));
//! ```

pub mod autograd;
pub mod error;
pub mod ops;
pub mod var;
pub mod var_data;

// Re-export the main types so they are reachable as `autodiff_core::Var`
pub use autograd::BackwardOp;
pub use error::{AutodiffError, Result};
pub use ops::math_elem::{cos, sin};
pub use var::{constant, create, Var};
