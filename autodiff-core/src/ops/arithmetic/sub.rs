use crate::autograd::BackwardOp;
use crate::ops::record_op;
use crate::var::Var;

// --- Forward Operation ---

/// Subtracts `b` from `a`.
pub fn sub_op(a: &Var, b: &Var) -> Var {
    record_op(BackwardOp::Sub, vec![a.clone(), b.clone()], a.value() - b.value())
}

// --- Backward Operation ---

/// d(a-b)/da = 1, d(a-b)/db = -1
pub(crate) fn sub_backward(input_index: usize) -> f64 {
    if input_index == 0 {
        1.0
    } else {
        -1.0
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
