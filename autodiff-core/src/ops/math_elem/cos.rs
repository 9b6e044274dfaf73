use crate::autograd::BackwardOp;
use crate::ops::record_op;
use crate::var::Var;

/// Computes the cosine of a variable.
pub fn cos_op(a: &Var) -> Var {
    record_op(BackwardOp::Cos, vec![a.clone()], a.value().cos())
}

/// Free-function form of [`Var::cos`].
pub fn cos(a: &Var) -> Var {
    cos_op(a)
}

/// d(cos a)/da = -sin a
pub(crate) fn cos_backward(a: f64) -> f64 {
    -a.sin()
}

#[cfg(test)]
#[path = "cos_test.rs"]
mod tests;
