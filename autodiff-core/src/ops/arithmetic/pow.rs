use crate::autograd::BackwardOp;
use crate::ops::record_op;
use crate::var::Var;

// --- Forward Operations ---

/// Raises `base` to a constant `exponent`.
pub fn pow_op(base: &Var, exponent: f64) -> Var {
    record_op(
        BackwardOp::Pow(exponent),
        vec![base.clone()],
        base.value().powf(exponent),
    )
}

/// Raises `base` to the power of the variable `exponent`.
pub fn pow_var_op(base: &Var, exponent: &Var) -> Var {
    record_op(
        BackwardOp::PowVar,
        vec![base.clone(), exponent.clone()],
        base.value().powf(exponent.value()),
    )
}

// --- Backward Operations ---

/// d(a^n)/da = n * a^(n-1)
///
/// Not finite for a zero base with `n < 1`, except `n == 0` where `a^0` is
/// constant; `backward` reports it as `DerivativeUndefined`.
pub(crate) fn pow_backward(base: f64, exponent: f64) -> f64 {
    if exponent == 0.0 {
        return 0.0;
    }
    exponent * base.powf(exponent - 1.0)
}

/// d(a^b)/da = b * a^(b-1), d(a^b)/db = a^b * ln(a)
///
/// The logarithm has no real value for `a <= 0`, so the exponent derivative
/// is NaN there.
pub(crate) fn pow_var_backward(input_index: usize, inputs: &[f64], output: f64) -> f64 {
    let (a, b) = (inputs[0], inputs[1]);
    if input_index == 0 {
        pow_backward(a, b)
    } else if a > 0.0 {
        output * a.ln()
    } else {
        f64::NAN
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
