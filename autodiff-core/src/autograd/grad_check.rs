use crate::error::AutodiffError;
use crate::var::{constant, Var};
use approx::relative_eq;
use log::debug;
use thiserror::Error;

/// Settings for [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Step used for the central difference `(f(x+ε) - f(x-ε)) / 2ε`.
    pub epsilon: f64,
    /// Accepted absolute or relative difference between the analytical and
    /// the numerical gradient.
    pub tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            tolerance: 1e-5,
        }
    }
}

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(AutodiffError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(AutodiffError),
    #[error("Autodiff error during intermediate calculation: {0}")]
    GraphError(AutodiffError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Function did not propagate requires_grad correctly.")]
    RequiresGradPropagationError,
}

impl From<AutodiffError> for GradCheckError {
    fn from(err: AutodiffError) -> Self {
        GradCheckError::GraphError(err)
    }
}

/// Checks analytical gradients against numerical gradients using finite
/// differences.
///
/// `func` is evaluated once over tracked leaves holding `inputs` and
/// differentiated with `backward`. Each input is then perturbed by
/// `±config.epsilon` and `func` is re-evaluated over untracked leaves to
/// form the central difference.
///
/// # Errors
/// Returns the first input whose gradients differ by more than
/// `config.tolerance`, or the failure of any forward or backward pass.
pub fn check_grad<F>(func: F, inputs: &[f64], config: &GradCheckConfig) -> Result<(), GradCheckError>
where
    F: Fn(&[Var]) -> Result<Var, AutodiffError>,
{
    // --- 1. Analytical gradients ---
    let leaves: Vec<Var> = inputs.iter().map(|&v| Var::new(v)).collect();
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    if !leaves.is_empty() && !output.requires_grad() {
        return Err(GradCheckError::RequiresGradPropagationError);
    }
    output
        .backward()
        .map_err(GradCheckError::BackwardPassError)?;

    // --- 2. Numerical gradients, one input at a time ---
    let evaluate = |index: usize, delta: f64| -> Result<f64, GradCheckError> {
        let perturbed: Vec<Var> = inputs
            .iter()
            .enumerate()
            .map(|(i, &v)| constant(if i == index { v + delta } else { v }))
            .collect();
        Ok(func(&perturbed).map_err(GradCheckError::ForwardPassError)?.value())
    };

    for (input_index, leaf) in leaves.iter().enumerate() {
        // Leaves are tracked, so an input `func` ignores reads as zero.
        let analytical_grad = leaf.grad().unwrap_or(0.0);

        let loss_plus = evaluate(input_index, config.epsilon)?;
        let loss_minus = evaluate(input_index, -config.epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * config.epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        debug!(
            "check_grad: input {} analytical {} numerical {}",
            input_index, analytical_grad, numerical_grad
        );
        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = config.tolerance,
            max_relative = config.tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}
