use crate::autograd::BackwardOp;
use crate::error::{AutodiffError, Result};
use crate::ops::record_op;
use crate::var::Var;

// --- Forward Operation ---

/// Divides `a` by `b`.
///
/// # Errors
/// Returns `DivisionByZero` if `b` is zero (of either sign). No variable is
/// created in that case.
pub fn div_op(a: &Var, b: &Var) -> Result<Var> {
    let divisor = b.value();
    if divisor == 0.0 {
        return Err(AutodiffError::DivisionByZero);
    }
    Ok(record_op(
        BackwardOp::Div,
        vec![a.clone(), b.clone()],
        a.value() / divisor,
    ))
}

// --- Backward Operation ---

/// d(a/b)/da = 1/b, d(a/b)/db = -a/b²
///
/// `b` is never zero here since `div_op` refuses to build such a node.
pub(crate) fn div_backward(input_index: usize, inputs: &[f64]) -> f64 {
    let (a, b) = (inputs[0], inputs[1]);
    if input_index == 0 {
        1.0 / b
    } else {
        -a / (b * b)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
