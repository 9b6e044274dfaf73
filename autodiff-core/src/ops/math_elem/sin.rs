use crate::autograd::BackwardOp;
use crate::ops::record_op;
use crate::var::Var;

/// Computes the sine of a variable.
pub fn sin_op(a: &Var) -> Var {
    record_op(BackwardOp::Sin, vec![a.clone()], a.value().sin())
}

/// Free-function form of [`Var::sin`].
pub fn sin(a: &Var) -> Var {
    sin_op(a)
}

/// d(sin a)/da = cos a
pub(crate) fn sin_backward(a: f64) -> f64 {
    a.cos()
}

#[cfg(test)]
#[path = "sin_test.rs"]
mod tests;
