use crate::autograd::BackwardOp;
use crate::ops::record_op;
use crate::var::Var;

// --- Forward Operation ---

/// Negates a variable.
pub fn neg_op(a: &Var) -> Var {
    record_op(BackwardOp::Neg, vec![a.clone()], -a.value())
}

// --- Backward Operation ---

/// d(-a)/da = -1
pub(crate) fn neg_backward() -> f64 {
    -1.0
}

// --- Tests ---
#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
