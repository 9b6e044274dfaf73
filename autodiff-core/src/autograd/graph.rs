use crate::var::Var;
use crate::var_data::VarData;
use log::trace;
use std::cell::RefCell;
use std::collections::HashSet;

/// Identity of a node in the computation graph: the address of its shared
/// `VarData`.
///
/// The address is stable for as long as any `Var` clone of the node is alive,
/// which the backward pass guarantees by holding the sorted handles.
pub type NodeId = *const RefCell<VarData>;

/// Builds a topological order of the graph reachable from `root`.
///
/// The returned list starts with `root` and every node appears before all of
/// its inputs, so a single pass over it sees each node only after all of its
/// consumers. Nodes reached through several paths appear once. The traversal
/// only descends into inputs that require grad: untracked inputs never
/// receive a gradient, and neither do their ancestors.
///
/// Iterative depth-first post-order, reversed. A node is pushed twice on the
/// work stack: once to expand its inputs and once, after them, to be emitted.
pub(crate) fn topological_sort(root: &Var) -> Vec<Var> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Var> = Vec::new();
    let mut stack: Vec<(Var, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            trace!("[topological_sort] Emitting node {:?}", node.node_id());
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            trace!("[topological_sort] Node {:?} already visited.", node.node_id());
            continue;
        }

        let inputs = node.inputs();
        stack.push((node, true));
        // Reverse so the first input is expanded first.
        for input in inputs.into_iter().rev() {
            if input.requires_grad() && !visited.contains(&input.node_id()) {
                stack.push((input, false));
            }
        }
    }

    sorted_list.reverse();
    sorted_list
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
