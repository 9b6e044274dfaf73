// Element-wise math functions
pub mod cos;
pub mod sin;

pub use cos::{cos, cos_op};
pub use sin::{sin, sin_op};
