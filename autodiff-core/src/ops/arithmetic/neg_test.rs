use super::*;
use crate::error::AutodiffError;
use crate::var::constant;

#[test]
fn test_neg_forward() {
    let x = Var::new(5.0);
    let result = neg_op(&x);
    assert_eq!(result.value(), -5.0);
    assert_eq!(result.grad_fn_name(), Some("NegBackward"));
    assert_eq!(result.inputs().len(), 1);
}

#[test]
fn test_neg_backward() -> Result<(), AutodiffError> {
    let x = Var::new(5.0);
    let result = -&x;
    result.backward()?;
    assert_eq!(x.grad(), Some(-1.0));
    Ok(())
}

#[test]
fn test_double_negation() -> Result<(), AutodiffError> {
    let x = Var::new(5.0);
    let result = -(-&x);
    assert_eq!(result.value(), 5.0);
    result.backward()?;
    assert_eq!(x.grad(), Some(1.0));
    Ok(())
}

#[test]
fn test_neg_untracked() {
    let result = -constant(1.5);
    assert_eq!(result.value(), -1.5);
    assert!(!result.requires_grad());
}
