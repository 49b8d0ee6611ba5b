//! Double-precision vector math.

#[macro_use]
mod macros;

#[cfg(feature = "benchmark")]
pub mod benchmark;
pub mod color;
pub mod matrix;
pub mod num;
pub mod quaternion;
pub mod vector;

pub use num::Float;
