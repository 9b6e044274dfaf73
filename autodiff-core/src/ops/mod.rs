//! # Operations Module (`ops`)
//!
//! Every differentiable operation lives in its own file and provides:
//!
//! - **`xxx_op` function:** performs the forward computation eagerly and
//!   records the result in the graph. Only division can fail.
//! - **`xxx_backward` function:** the local derivative of the output with
//!   respect to each input, evaluated at the recorded forward values. It is
//!   dispatched from [`BackwardOp::local_derivative`](crate::autograd::BackwardOp::local_derivative).
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`math_elem`]: sin, cos.

pub mod arithmetic;
pub mod math_elem;

use crate::autograd::BackwardOp;
use crate::var::Var;
use crate::var_data::{GradFn, VarData};

/// Creates the variable produced by `op` from `inputs`.
///
/// The inputs are recorded in forward order. The result requires grad iff
/// at least one input does.
pub(crate) fn record_op(op: BackwardOp, inputs: Vec<Var>, value: f64) -> Var {
    debug_assert_eq!(inputs.len(), op.arity());
    Var::from_data(VarData::produced(value, GradFn::new(op, inputs)))
}
