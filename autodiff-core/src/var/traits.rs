// src/var/traits.rs

use crate::error::Result;
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::var::{constant, Var};
use std::fmt::{self, Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::rc::Rc;

// --- Trait Implementations ---

impl Clone for Var {
    /// Clones the handle. Both handles refer to the same graph node, so a
    /// gradient written through one is visible through the other.
    fn clone(&self) -> Self {
        Var {
            data: Rc::clone(&self.data),
        }
    }
}

impl Debug for Var {
    /// Shows the node's value, gradient state and producing operation,
    /// without walking into its inputs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.read_data();
        f.debug_struct("Var")
            .field("value", &data.value)
            .field("grad", &data.grad)
            .field("requires_grad", &data.requires_grad)
            .field("grad_fn", &data.grad_fn.as_ref().map(|g| g.op.name()))
            .finish()
    }
}

impl Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Var(value={}, requires_grad={})",
            self.value(),
            self.requires_grad()
        )
    }
}

impl From<f64> for Var {
    /// Plain numbers become untracked leaves.
    fn from(value: f64) -> Self {
        constant(value)
    }
}

// --- Operator overloads ---
//
// Every combination of `Var`, `&Var` and `f64` is accepted. A plain `f64`
// operand is promoted to an untracked leaf holding the same value.

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident, $output:ty) => {
        impl<'a, 'b> $trait<&'b Var> for &'a Var {
            type Output = $output;
            fn $method(self, rhs: &'b Var) -> $output {
                $op_fn(self, rhs)
            }
        }

        impl $trait<Var> for Var {
            type Output = $output;
            fn $method(self, rhs: Var) -> $output {
                $op_fn(&self, &rhs)
            }
        }

        impl<'a> $trait<&'a Var> for Var {
            type Output = $output;
            fn $method(self, rhs: &'a Var) -> $output {
                $op_fn(&self, rhs)
            }
        }

        impl<'a> $trait<Var> for &'a Var {
            type Output = $output;
            fn $method(self, rhs: Var) -> $output {
                $op_fn(self, &rhs)
            }
        }

        impl $trait<f64> for Var {
            type Output = $output;
            fn $method(self, rhs: f64) -> $output {
                $op_fn(&self, &constant(rhs))
            }
        }

        impl<'a> $trait<f64> for &'a Var {
            type Output = $output;
            fn $method(self, rhs: f64) -> $output {
                $op_fn(self, &constant(rhs))
            }
        }

        impl $trait<Var> for f64 {
            type Output = $output;
            fn $method(self, rhs: Var) -> $output {
                $op_fn(&constant(self), &rhs)
            }
        }

        impl<'a> $trait<&'a Var> for f64 {
            type Output = $output;
            fn $method(self, rhs: &'a Var) -> $output {
                $op_fn(&constant(self), rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op, Var);
impl_binary_op!(Sub, sub, sub_op, Var);
impl_binary_op!(Mul, mul, mul_op, Var);
// Division by a zero-valued operand is an error, so `/` yields a `Result`.
impl_binary_op!(Div, div, div_op, Result<Var>);

impl Neg for Var {
    type Output = Var;
    fn neg(self) -> Var {
        neg_op(&self)
    }
}

impl<'a> Neg for &'a Var {
    type Output = Var;
    fn neg(self) -> Var {
        neg_op(self)
    }
}
