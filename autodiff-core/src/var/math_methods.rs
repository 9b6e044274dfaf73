// src/var/math_methods.rs

use crate::ops::arithmetic::{pow_op, pow_var_op};
use crate::ops::math_elem::{cos_op, sin_op};
use crate::var::Var;

impl Var {
    /// Raises the variable to a constant power.
    pub fn powf(&self, exponent: f64) -> Var {
        pow_op(self, exponent)
    }

    /// Raises the variable to the power of another variable.
    pub fn pow(&self, exponent: &Var) -> Var {
        pow_var_op(self, exponent)
    }

    pub fn sin(&self) -> Var {
        sin_op(self)
    }

    pub fn cos(&self) -> Var {
        cos_op(self)
    }
}
