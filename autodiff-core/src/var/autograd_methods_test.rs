use super::*;
use crate::autograd::BackwardOp;
use crate::error::AutodiffError;
use approx::assert_relative_eq;

#[test]
fn test_backward_on_leaf_seeds_one() -> Result<(), AutodiffError> {
    let x = Var::new(4.0);
    x.backward()?;
    assert_eq!(x.grad(), Some(1.0));
    Ok(())
}

#[test]
fn test_backward_on_untracked_is_refused() {
    let c = constant(4.0);
    assert_eq!(c.backward(), Err(AutodiffError::NotDifferentiable));

    let derived = &c * 2.0 + 1.0;
    assert!(!derived.requires_grad());
    assert_eq!(derived.backward(), Err(AutodiffError::NotDifferentiable));
    assert_eq!(derived.grad(), None);
    assert_eq!(c.grad(), None);
}

#[test]
fn test_backward_writes_intermediate_grads() -> Result<(), AutodiffError> {
    let x = Var::new(3.0);
    let h = &x * 2.0; // 6
    let f = h.powf(2.0); // 36
    f.backward()?;
    assert_eq!(f.grad(), Some(1.0));
    assert_eq!(h.grad(), Some(12.0));
    assert_eq!(x.grad(), Some(24.0));
    Ok(())
}

#[test]
fn test_backward_does_not_touch_values() -> Result<(), AutodiffError> {
    let x = Var::new(1.25);
    let f = (&x * &x).sin();
    let before = (x.value(), f.value());
    f.backward()?;
    assert_eq!((x.value(), f.value()), before);
    Ok(())
}

#[test]
fn test_backward_twice_does_not_accumulate() -> Result<(), AutodiffError> {
    let x = Var::new(2.0);
    let f = &x * 5.0;
    f.backward()?;
    f.backward()?;
    assert_eq!(x.grad(), Some(5.0));
    Ok(())
}

#[test]
fn test_backward_reseeds_shared_ancestor() -> Result<(), AutodiffError> {
    let x = Var::new(2.0);
    let f = &x * 3.0;
    let g = x.powf(3.0);

    f.backward()?;
    assert_eq!(x.grad(), Some(3.0));
    g.backward()?;
    assert_eq!(x.grad(), Some(12.0));
    f.backward()?;
    assert_eq!(x.grad(), Some(3.0));
    Ok(())
}

#[test]
fn test_failed_backward_leaves_grads_untouched() -> Result<(), AutodiffError> {
    let x = Var::new(0.0);
    let y = Var::new(1.0);
    let ok = &x + &y;
    ok.backward()?;
    assert_eq!(x.grad(), Some(1.0));

    let bad = x.powf(0.5) + &y;
    assert_eq!(
        bad.backward(),
        Err(AutodiffError::DerivativeUndefined {
            op: BackwardOp::Pow(0.5),
            input_index: 0,
            input_value: 0.0,
        })
    );
    assert_eq!(x.grad(), Some(1.0));
    assert_eq!(y.grad(), Some(1.0));
    Ok(())
}

#[test]
fn test_unreachable_nodes_keep_their_grads() -> Result<(), AutodiffError> {
    let x = Var::new(1.0);
    let y = Var::new(2.0);
    (&x * &y).backward()?;
    assert_eq!(y.grad(), Some(1.0));

    // y is not part of the second expression.
    x.sin().backward()?;
    assert_relative_eq!(x.grad().unwrap_or(f64::NAN), 1.0_f64.cos(), epsilon = 1e-15);
    assert_eq!(y.grad(), Some(1.0));
    Ok(())
}

#[test]
fn test_zero_grad() -> Result<(), AutodiffError> {
    let x = Var::new(10.0);
    let f = &x + 10.0;
    f.backward()?;
    assert_eq!(x.grad(), Some(1.0));

    x.zero_grad();
    assert_eq!(x.grad(), Some(0.0));

    let c = constant(10.0);
    c.zero_grad();
    assert_eq!(c.grad(), None);
    Ok(())
}

#[test]
fn test_deep_chain_backward() -> Result<(), AutodiffError> {
    let x = Var::new(1.0);
    let mut acc = x.clone();
    for _ in 0..50_000 {
        acc = &acc * 1.0 + 0.0;
    }
    acc.backward()?;
    assert_eq!(x.grad(), Some(1.0));
    Ok(())
}
