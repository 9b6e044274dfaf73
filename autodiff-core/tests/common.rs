use autodiff_core::Var;

/// Default relative tolerance used when comparing gradients.
#[allow(dead_code)]
pub const TOLERANCE: f64 = 1e-9;

// Helper to read a gradient that must have been computed.
// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub fn grad_of(var: &Var) -> f64 {
    var.grad().expect("variable does not require grad")
}

// Helper to build tracked leaves from plain values.
#[allow(dead_code)]
pub fn vars(values: &[f64]) -> Vec<Var> {
    values.iter().map(|&v| Var::new(v)).collect()
}
