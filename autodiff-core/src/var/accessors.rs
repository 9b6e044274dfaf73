// src/var/accessors.rs
use crate::autograd::BackwardOp;
use crate::var::Var;

impl Var {
    /// Returns the forward value.
    pub fn value(&self) -> f64 {
        self.read_data().value
    }

    /// Returns the gradient written by the last backward pass that reached
    /// this variable.
    ///
    /// Tracked variables read `Some(0.0)` until then. Untracked variables
    /// always read `None`.
    pub fn grad(&self) -> Option<f64> {
        self.read_data().grad
    }

    /// Checks if this variable takes part in gradient propagation.
    pub fn requires_grad(&self) -> bool {
        self.read_data().requires_grad
    }

    /// A leaf was created directly by the user rather than by an operation.
    pub fn is_leaf(&self) -> bool {
        self.read_data().grad_fn.is_none()
    }

    /// Returns the operation that produced this variable, if any.
    pub fn grad_fn(&self) -> Option<BackwardOp> {
        self.read_data().grad_fn.as_ref().map(|grad_fn| grad_fn.op)
    }

    /// Returns the name of the operation that produced this variable.
    pub fn grad_fn_name(&self) -> Option<&'static str> {
        self.grad_fn().map(|op| op.name())
    }

    /// Returns handles to the operands this variable was produced from.
    /// Empty for leaves.
    pub fn inputs(&self) -> Vec<Var> {
        self.read_data()
            .grad_fn
            .as_ref()
            .map(|grad_fn| grad_fn.inputs.clone())
            .unwrap_or_default()
    }
}
