use crate::autograd::BackwardOp;
use crate::ops::record_op;
use crate::var::Var;

// --- Forward Operation ---

/// Adds two variables.
pub fn add_op(a: &Var, b: &Var) -> Var {
    record_op(BackwardOp::Add, vec![a.clone(), b.clone()], a.value() + b.value())
}

// --- Backward Operation ---

/// d(a+b)/da = d(a+b)/db = 1
pub(crate) fn add_backward(_input_index: usize) -> f64 {
    1.0
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
