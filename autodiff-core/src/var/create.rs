// src/var/create.rs

use crate::var::Var;
use crate::var_data::VarData;

impl Var {
    /// Creates a leaf variable that requires grad.
    pub fn new(value: f64) -> Var {
        create(value, true)
    }

    /// Creates a leaf variable with an explicit `requires_grad` flag.
    pub fn create(value: f64, requires_grad: bool) -> Var {
        create(value, requires_grad)
    }

    /// Creates a leaf variable that is treated as a constant by `backward`.
    pub fn constant(value: f64) -> Var {
        constant(value)
    }
}

/// Creates a leaf variable.
///
/// A variable created with `requires_grad = false` still takes part in
/// forward evaluation but never receives a gradient.
pub fn create(value: f64, requires_grad: bool) -> Var {
    Var::from_data(VarData::leaf(value, requires_grad))
}

/// Creates an untracked leaf variable.
pub fn constant(value: f64) -> Var {
    create(value, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_tracked_leaf() {
        let x = Var::new(3.5);
        assert_eq!(x.value(), 3.5);
        assert!(x.requires_grad());
        assert!(x.is_leaf());
        assert_eq!(x.grad(), Some(0.0));
    }

    #[test]
    fn test_constant_has_no_grad() {
        let c = constant(-2.0);
        assert_eq!(c.value(), -2.0);
        assert!(!c.requires_grad());
        assert!(c.is_leaf());
        assert_eq!(c.grad(), None);
    }

    #[test]
    fn test_create_with_flag() {
        assert!(Var::create(1.0, true).requires_grad());
        assert!(!Var::create(1.0, false).requires_grad());
    }
}
