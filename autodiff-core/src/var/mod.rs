// src/var/mod.rs

use crate::autograd::graph::NodeId;
use crate::var_data::VarData;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod accessors;
mod autograd_methods;
pub mod create;
mod math_methods;
mod traits;

pub use create::{constant, create};

/// A scalar node of the computation graph.
///
/// `Var` uses `Rc<RefCell<VarData>>` internally to allow for:
/// 1.  **Shared Ownership:** every operation result keeps handles to its
///     operands, so a sub-expression reused in several places is one node
///     with several consumers.
/// 2.  **Interior Mutability:** the backward pass writes `grad` through
///     handles held by the caller.
///
/// `Rc` makes a graph `!Send`: one graph is built and differentiated on one
/// thread. Independent graphs may live on different threads.
pub struct Var {
    pub(crate) data: Rc<RefCell<VarData>>,
}

impl Var {
    pub(crate) fn from_data(data: VarData) -> Self {
        Var {
            data: Rc::new(RefCell::new(data)),
        }
    }

    /// Provides immutable access to the underlying `VarData`.
    pub(crate) fn read_data(&self) -> Ref<'_, VarData> {
        self.data.borrow()
    }

    /// Provides mutable access to the underlying `VarData`.
    pub(crate) fn write_data(&self) -> RefMut<'_, VarData> {
        self.data.borrow_mut()
    }

    /// Returns the identity of this node in the computation graph.
    ///
    /// Clones of the same `Var` share one identity.
    pub(crate) fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod autograd_methods_test;

#[cfg(test)]
#[path = "traits_test.rs"]
mod traits_test;
