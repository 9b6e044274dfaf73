use crate::autograd::graph::{topological_sort, NodeId};
use crate::error::{AutodiffError, Result};
use crate::var::Var;
use log::{debug, trace, warn};
use std::collections::HashMap;

impl Var {
    /// Performs the backward pass starting from this variable.
    ///
    /// Computes the gradient of this variable with respect to every tracked
    /// variable it depends on, and stores it in their `grad` field. Each call
    /// re-seeds the gradients of the nodes it reaches, so calling `backward`
    /// on another output afterwards does not accumulate into these results.
    ///
    /// Gradients are accumulated in a map first and written to the graph
    /// only once the whole sweep succeeded: on error no `grad` is modified.
    ///
    /// # Errors
    /// * `NotDifferentiable` if this variable does not require grad.
    /// * `DerivativeUndefined` if a local derivative is not finite at the
    ///   recorded forward values.
    pub fn backward(&self) -> Result<()> {
        if !self.requires_grad() {
            warn!("backward() called on a variable that does not require grad");
            return Err(AutodiffError::NotDifferentiable);
        }

        let sorted_nodes = topological_sort(self);
        debug!(
            "backward: root value {} reaches {} tracked nodes",
            self.value(),
            sorted_nodes.len()
        );

        // Key: NodeId, Value: accumulated gradient of the root w.r.t. that node
        let mut grad_map: HashMap<NodeId, f64> = HashMap::with_capacity(sorted_nodes.len());
        grad_map.insert(self.node_id(), 1.0);

        // Every consumer of a node comes before it, so its gradient is final
        // by the time it is propagated.
        for node in &sorted_nodes {
            let upstream_grad = grad_map.get(&node.node_id()).copied().unwrap_or(0.0);
            let guard = node.read_data();
            let grad_fn = match guard.grad_fn.as_ref() {
                Some(grad_fn) => grad_fn,
                None => continue,
            };
            trace!(
                "backward: {} at {:?} with upstream grad {}",
                grad_fn.op.name(),
                node.node_id(),
                upstream_grad
            );

            let input_values: Vec<f64> = grad_fn.inputs.iter().map(Var::value).collect();
            for (input_index, input) in grad_fn.inputs.iter().enumerate() {
                if !input.requires_grad() {
                    continue;
                }
                let local = grad_fn
                    .op
                    .local_derivative(input_index, &input_values, guard.value);
                if !local.is_finite() {
                    warn!(
                        "backward: {:?} derivative w.r.t. input {} is {} at {}",
                        grad_fn.op, input_index, local, input_values[input_index]
                    );
                    return Err(AutodiffError::DerivativeUndefined {
                        op: grad_fn.op,
                        input_index,
                        input_value: input_values[input_index],
                    });
                }
                *grad_map.entry(input.node_id()).or_insert(0.0) += upstream_grad * local;
            }
        }

        for node in &sorted_nodes {
            let grad = grad_map.get(&node.node_id()).copied().unwrap_or(0.0);
            node.write_data().grad = Some(grad);
        }
        debug!("backward: wrote gradients to {} nodes", sorted_nodes.len());
        Ok(())
    }

    /// Resets the gradient of this variable to zero.
    ///
    /// Untracked variables have no gradient and are left untouched.
    pub fn zero_grad(&self) {
        let mut guard = self.write_data();
        if guard.requires_grad {
            guard.grad = Some(0.0);
        }
    }
}
