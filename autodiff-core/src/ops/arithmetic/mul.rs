use crate::autograd::BackwardOp;
use crate::ops::record_op;
use crate::var::Var;

// --- Forward Operation ---

/// Multiplies two variables.
pub fn mul_op(a: &Var, b: &Var) -> Var {
    record_op(BackwardOp::Mul, vec![a.clone(), b.clone()], a.value() * b.value())
}

// --- Backward Operation ---

/// d(a*b)/da = b, d(a*b)/db = a
pub(crate) fn mul_backward(input_index: usize, inputs: &[f64]) -> f64 {
    if input_index == 0 {
        inputs[1]
    } else {
        inputs[0]
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
