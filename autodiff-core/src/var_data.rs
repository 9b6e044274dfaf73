// src/var_data.rs
use std::rc::Rc;

use crate::autograd::BackwardOp;
use crate::var::Var;

/// Links a non-leaf variable to the operation that produced it.
///
/// `inputs` keeps the operands alive for as long as the produced variable is
/// alive, and its order matches the input positions understood by
/// [`BackwardOp::local_derivative`].
#[derive(Debug, Clone)]
pub struct GradFn {
    pub(crate) op: BackwardOp,
    pub(crate) inputs: Vec<Var>,
}

impl GradFn {
    pub(crate) fn new(op: BackwardOp, inputs: Vec<Var>) -> Self {
        GradFn { op, inputs }
    }

    /// The operation that produced the variable.
    pub fn op(&self) -> BackwardOp {
        self.op
    }

    /// The operands of the operation, in forward order.
    pub fn inputs(&self) -> &[Var] {
        &self.inputs
    }
}

/// Internal storage and autograd metadata for a [`Var`].
///
/// It is wrapped in `Rc<RefCell<VarData>>` by `Var` so that handles can be
/// cloned cheaply while the backward pass writes gradients in place.
#[derive(Debug)]
pub struct VarData {
    /// Forward value, fixed at construction.
    pub(crate) value: f64,
    /// Flag indicating if the variable takes part in gradient propagation.
    pub(crate) requires_grad: bool,
    /// Gradient of the last backward root with respect to this variable.
    /// `None` when `requires_grad` is false.
    pub(crate) grad: Option<f64>,
    /// Leaf variables (created directly by the user) have `grad_fn = None`.
    pub(crate) grad_fn: Option<GradFn>,
}

impl VarData {
    /// Creates the data of a leaf variable.
    pub(crate) fn leaf(value: f64, requires_grad: bool) -> Self {
        VarData {
            value,
            requires_grad,
            grad: requires_grad.then_some(0.0),
            grad_fn: None,
        }
    }

    /// Creates the data of a variable produced by `grad_fn`.
    ///
    /// The result requires grad iff at least one input does. An untracked
    /// result still records its inputs so the graph can be inspected.
    pub(crate) fn produced(value: f64, grad_fn: GradFn) -> Self {
        let requires_grad = grad_fn.inputs.iter().any(Var::requires_grad);
        VarData {
            value,
            requires_grad,
            grad: requires_grad.then_some(0.0),
            grad_fn: Some(grad_fn),
        }
    }
}

impl Drop for VarData {
    /// Releases the chain of inputs iteratively. The default recursive drop
    /// overflows the stack on long expression chains.
    fn drop(&mut self) {
        let mut pending: Vec<Var> = match self.grad_fn.take() {
            Some(grad_fn) => grad_fn.inputs,
            None => return,
        };
        while let Some(var) = pending.pop() {
            // Only the last handle to a node releases its inputs.
            if let Ok(cell) = Rc::try_unwrap(var.data) {
                let mut data = cell.into_inner();
                if let Some(grad_fn) = data.grad_fn.take() {
                    pending.extend(grad_fn.inputs);
                }
            }
        }
    }
}
