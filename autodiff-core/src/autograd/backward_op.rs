use crate::ops::arithmetic::{add, div, mul, neg, pow, sub};
use crate::ops::math_elem::{cos, sin};

/// The operation a non-leaf variable was produced by.
///
/// Every operation that creates a non-leaf `Var` records one of these tags in
/// the output's `grad_fn`, next to the ordered list of its inputs. During
/// `backward()` the tag selects the formula for
/// \\( \frac{\partial\,\text{Output}}{\partial\,\text{Input}_i} \\), evaluated at
/// the forward values already stored on the graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackwardOp {
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a * b`
    Mul,
    /// `a / b`
    Div,
    /// `a ^ n` with a constant exponent `n`.
    Pow(f64),
    /// `a ^ b` where the exponent is itself a variable.
    PowVar,
    /// `-a`
    Neg,
    /// `sin(a)`
    Sin,
    /// `cos(a)`
    Cos,
}

impl BackwardOp {
    /// Number of inputs recorded for this operation.
    pub fn arity(&self) -> usize {
        match self {
            BackwardOp::Add
            | BackwardOp::Sub
            | BackwardOp::Mul
            | BackwardOp::Div
            | BackwardOp::PowVar => 2,
            BackwardOp::Pow(_) | BackwardOp::Neg | BackwardOp::Sin | BackwardOp::Cos => 1,
        }
    }

    /// Short name of the operation, as reported by `Var::grad_fn_name`.
    pub fn name(&self) -> &'static str {
        match self {
            BackwardOp::Add => "AddBackward",
            BackwardOp::Sub => "SubBackward",
            BackwardOp::Mul => "MulBackward",
            BackwardOp::Div => "DivBackward",
            BackwardOp::Pow(_) => "PowBackward",
            BackwardOp::PowVar => "PowVarBackward",
            BackwardOp::Neg => "NegBackward",
            BackwardOp::Sin => "SinBackward",
            BackwardOp::Cos => "CosBackward",
        }
    }

    /// Computes the derivative of the output with respect to input
    /// `input_index`.
    ///
    /// # Arguments
    /// * `input_index`: position of the input, in forward order.
    /// * `inputs`: forward values of all inputs, in forward order.
    /// * `output`: forward value of the produced variable.
    ///
    /// The result may be non-finite (e.g. the power rule at a zero base with
    /// an exponent below one); the caller decides how to report it.
    pub fn local_derivative(&self, input_index: usize, inputs: &[f64], output: f64) -> f64 {
        debug_assert_eq!(inputs.len(), self.arity());
        debug_assert!(input_index < self.arity());
        match *self {
            BackwardOp::Add => add::add_backward(input_index),
            BackwardOp::Sub => sub::sub_backward(input_index),
            BackwardOp::Mul => mul::mul_backward(input_index, inputs),
            BackwardOp::Div => div::div_backward(input_index, inputs),
            BackwardOp::Pow(exponent) => pow::pow_backward(inputs[0], exponent),
            BackwardOp::PowVar => pow::pow_var_backward(input_index, inputs, output),
            BackwardOp::Neg => neg::neg_backward(),
            BackwardOp::Sin => sin::sin_backward(inputs[0]),
            BackwardOp::Cos => cos::cos_backward(inputs[0]),
        }
    }
}
