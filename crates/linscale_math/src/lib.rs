//! Vector and Matrix Mathematics
//!
//! This crate provides small fixed-size vector and matrix value types and the
//! builders for scaling transformations used by the `linscale` tools.
//!
//! ## Core Types
//!
//! - [`Vec2`], [`Vec3`], [`Vec4`] - vectors with dot product, projection and rejection
//! - [`Mat2`], [`Mat3`], [`Mat4`] - square matrices acting on vectors of matching dimension
//! - [`MathError`] - precondition failures reported by the checked operations
//!
//! ## Scaling
//!
//! - [`scale`] - uniform, axis-aligned and arbitrary-axis scale matrices

mod error;
mod vec2;
mod vec3;
mod vec4;
mod mat2;
mod mat3;
mod mat4;
pub mod scale;

pub use error::MathError;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
pub use mat2::Mat2;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use scale::{scale2, scale3, scale4, scale_along2, scale_along3, scale_along4};
