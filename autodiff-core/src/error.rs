use crate::autograd::BackwardOp;
use thiserror::Error;

/// Custom error type for the autodiff graph.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum AutodiffError {
    #[error("Division by zero error")]
    DivisionByZero,

    #[error("Derivative of {op:?} with respect to input {input_index} is undefined at {input_value}")]
    DerivativeUndefined {
        op: BackwardOp,
        input_index: usize,
        input_value: f64,
    },

    #[error("Backward called on a variable that does not require grad.")]
    NotDifferentiable,
}

/// Convenience alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, AutodiffError>;
