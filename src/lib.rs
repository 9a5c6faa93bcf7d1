//! linscale - scaling transformations on 2D/3D/4D vectors
//!
//! The math lives in [`linscale_math`]; this crate adds layered
//! configuration ([`config`]) and configured scaling runs ([`job`]).

pub mod config;
pub mod job;

// Re-export the math crate for convenience
pub use linscale_math as math;
