//! # Gradient descent on a hand-written objective
//!
//! Fits `y = w * sin(x) + b` to a few samples by minimising the mean squared
//! error with plain gradient descent.
//!
//! ## Demonstrated:
//! 1.  Building the objective from tracked parameters and constant data.
//! 2.  `backward` to obtain both partial derivatives in one sweep.
//! 3.  Rebuilding the graph each step from the updated parameter values.
//!
//! ## Running
//! `cargo run --example gradient_descent`

use autodiff_core::{constant, AutodiffError, Var};

const LEARNING_RATE: f64 = 0.1;
const STEPS: usize = 200;

/// Mean squared error of `w * sin(x) + b` against the samples.
fn loss(w: &Var, b: &Var, samples: &[(f64, f64)]) -> Result<Var, AutodiffError> {
    let mut total = constant(0.0);
    for &(x, y) in samples {
        let prediction = w * constant(x).sin() + b;
        let error = prediction - y;
        total = total + error.powf(2.0);
    }
    total / samples.len() as f64
}

fn main() -> Result<(), AutodiffError> {
    // Generated from w = 2.5, b = -0.5.
    let samples: Vec<(f64, f64)> = (0..8)
        .map(|i| {
            let x = i as f64 * 0.4;
            (x, 2.5 * x.sin() - 0.5)
        })
        .collect();

    let (mut w_value, mut b_value) = (0.0, 0.0);
    for step in 0..STEPS {
        let w = Var::new(w_value);
        let b = Var::new(b_value);
        let objective = loss(&w, &b, &samples)?;
        objective.backward()?;

        let (dw, db) = (w.grad().unwrap_or(0.0), b.grad().unwrap_or(0.0));
        w_value -= LEARNING_RATE * dw;
        b_value -= LEARNING_RATE * db;

        if step % 20 == 0 {
            println!(
                "step {:>3}: loss = {:.6}, w = {:.4}, b = {:.4}",
                step,
                objective.value(),
                w_value,
                b_value
            );
        }
    }

    println!("fitted w = {:.4}, b = {:.4} (expected 2.5, -0.5)", w_value, b_value);
    Ok(())
}
