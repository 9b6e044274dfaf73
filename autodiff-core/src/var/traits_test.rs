use super::*;
use crate::error::AutodiffError;

#[test]
fn test_clone_shares_node() -> Result<(), AutodiffError> {
    let x = Var::new(2.0);
    let alias = x.clone();
    (&alias * 4.0).backward()?;
    assert_eq!(x.grad(), Some(4.0));
    assert_eq!(x.node_id(), alias.node_id());
    Ok(())
}

#[test]
fn test_display() {
    assert_eq!(
        Var::new(1.5).to_string(),
        "Var(value=1.5, requires_grad=true)"
    );
    assert_eq!(
        constant(-2.0).to_string(),
        "Var(value=-2, requires_grad=false)"
    );
}

#[test]
fn test_debug_shows_grad_fn() {
    let x = Var::new(1.0);
    let y = &x + 1.0;
    let repr = format!("{:?}", y);
    assert!(repr.contains("AddBackward"), "{}", repr);
    assert!(repr.contains("requires_grad: true"), "{}", repr);
}

#[test]
fn test_from_f64_is_untracked() {
    let v: Var = 3.0.into();
    assert_eq!(v.value(), 3.0);
    assert!(!v.requires_grad());
    assert!(v.is_leaf());
}

#[test]
fn test_operator_combinations() -> Result<(), AutodiffError> {
    let a = Var::new(6.0);
    let b = Var::new(2.0);

    assert_eq!((&a + &b).value(), 8.0);
    assert_eq!((a.clone() + b.clone()).value(), 8.0);
    assert_eq!((&a - b.clone()).value(), 4.0);
    assert_eq!((a.clone() * &b).value(), 12.0);
    assert_eq!((a.clone() / b.clone())?.value(), 3.0);
    assert_eq!((&a / &b)?.value(), 3.0);
    assert_eq!((1.0 - a.clone()).value(), -5.0);
    assert_eq!((12.0 / &a)?.value(), 2.0);
    assert_eq!((-a.clone()).value(), -6.0);
    Ok(())
}

#[test]
fn test_scalar_operand_is_copied_verbatim() {
    let x = Var::new(1.0);
    let f = &x * 0.1;
    let inputs = f.inputs();
    assert_eq!(inputs[1].value(), 0.1);
    assert!(!inputs[1].requires_grad());
}
