//! # Autograd
//!
//! Graph bookkeeping for reverse-mode differentiation:
//!
//! - [`backward_op`]: the closed set of operations a variable can be produced
//!   by, and the dispatch from an operation to its local derivatives.
//! - [`graph`]: node identity and the topological sort used by
//!   [`Var::backward`](crate::Var::backward).
//! - [`grad_check`]: finite-difference verification of analytical gradients.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
