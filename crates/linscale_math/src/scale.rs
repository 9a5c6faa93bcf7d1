//! Scaling matrix builders
//!
//! Three kinds of scale are covered:
//!
//! - **Uniform**: `s * I`. Acts exactly like multiplying by the scalar `s`.
//! - **Axis-aligned (non-uniform)**: a diagonal matrix. Applying it to a vector
//!   multiplies each coordinate by its own factor, the same as a Hadamard
//!   product with the vector of factors.
//! - **Arbitrary axis**: scales the part of a vector parallel to `axis` by `s`
//!   and leaves the orthogonal part alone:
//!
//!   `M * v = s * Proj(v, a) + Reject(v, a)`
//!
//!   Expanding the projection gives `M = I + (s - 1) * (a ⊗ a) / (a · a)`.
//!   Dividing by `a · a` means the axis does not need to be unit length. The
//!   axis is first divided by its largest component, so very long or very
//!   short axes give the same matrix as a moderate one.
//!
//! # Example
//! ```
//! use linscale_math::{scale, Vec2, Vec3};
//!
//! let crazy = scale::scale3(2.0, -3.0, 4.0);
//! assert_eq!(crazy * Vec3::splat(1.0), Vec3::new(2.0, -3.0, 4.0));
//!
//! let m = scale::scale_along2(2.0, Vec2::new(1.0, 1.0)).unwrap();
//! assert_eq!(m * Vec2::new(1.0, 0.0), Vec2::new(1.5, 0.5));
//! ```

use crate::{Mat2, Mat3, Mat4, MathError, Vec2, Vec3, Vec4};

/// Uniform 2D scale by `s`
#[inline]
pub fn uniform_scale2(s: f32) -> Mat2 {
    Mat2::from_diagonal(Vec2::splat(s))
}

/// Uniform 3D scale by `s`
#[inline]
pub fn uniform_scale3(s: f32) -> Mat3 {
    Mat3::from_diagonal(Vec3::splat(s))
}

/// Uniform 4D scale by `s`
#[inline]
pub fn uniform_scale4(s: f32) -> Mat4 {
    Mat4::from_diagonal(Vec4::splat(s))
}

/// Non-uniform 2D scale with factors `sx`, `sy` along the basis axes
#[inline]
pub fn scale2(sx: f32, sy: f32) -> Mat2 {
    Mat2::from_diagonal(Vec2::new(sx, sy))
}

/// Non-uniform 3D scale with factors `sx`, `sy`, `sz` along the basis axes
#[inline]
pub fn scale3(sx: f32, sy: f32, sz: f32) -> Mat3 {
    Mat3::from_diagonal(Vec3::new(sx, sy, sz))
}

/// Non-uniform 4D scale
#[inline]
pub fn scale4(sx: f32, sy: f32, sz: f32, sw: f32) -> Mat4 {
    Mat4::from_diagonal(Vec4::new(sx, sy, sz, sw))
}

/// 2D scale by `s` along `axis`
///
/// # Errors
/// Returns [`MathError::ZeroAxis`] if `axis` is the zero vector, and
/// [`MathError::NonFinite`] if `axis` or the resulting matrix has an
/// infinite or NaN entry.
pub fn scale_along2(s: f32, axis: Vec2) -> Result<Mat2, MathError> {
    let a = axis / axis_magnitude(axis.is_finite(), axis.max_abs_component())?;
    let k = (s - 1.0) / a.length_squared();
    let m = Mat2::IDENTITY + Mat2::from_columns(a * a.x, a * a.y) * k;
    if m.is_finite() {
        Ok(m)
    } else {
        Err(MathError::NonFinite)
    }
}

/// 3D scale by `s` along `axis`
///
/// # Errors
/// Same as [`scale_along2`].
pub fn scale_along3(s: f32, axis: Vec3) -> Result<Mat3, MathError> {
    let a = axis / axis_magnitude(axis.is_finite(), axis.max_abs_component())?;
    let k = (s - 1.0) / a.length_squared();
    let m = Mat3::IDENTITY + Mat3::from_columns(a * a.x, a * a.y, a * a.z) * k;
    if m.is_finite() {
        Ok(m)
    } else {
        Err(MathError::NonFinite)
    }
}

/// 4D scale by `s` along `axis`
///
/// # Errors
/// Same as [`scale_along2`].
pub fn scale_along4(s: f32, axis: Vec4) -> Result<Mat4, MathError> {
    let a = axis / axis_magnitude(axis.is_finite(), axis.max_abs_component())?;
    let k = (s - 1.0) / a.length_squared();
    let outer = Mat4::from_columns(a * a.x, a * a.y, a * a.z, a * a.w);
    let m = Mat4::IDENTITY + outer * k;
    if m.is_finite() {
        Ok(m)
    } else {
        Err(MathError::NonFinite)
    }
}

/// Largest absolute axis component, used to bring the axis into `[-1, 1]`
/// so that `a · a` lies in `[1, N]` and cannot overflow or underflow
fn axis_magnitude(finite: bool, max_abs: f32) -> Result<f32, MathError> {
    if !finite {
        Err(MathError::NonFinite)
    } else if max_abs > 0.0 {
        Ok(max_abs)
    } else {
        Err(MathError::ZeroAxis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn vec2_approx_eq(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < EPSILON
    }

    fn vec3_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_uniform_scale_matches_scalar() {
        let m = Mat2::new(-4.0, 9.0, 3.0, 0.0);
        let v = Vec2::new(6.0, -1.0);
        assert_eq!(uniform_scale2(2.0) * m, 2.0 * m);
        assert_eq!(uniform_scale2(2.0) * v, 2.0 * v);
        assert_eq!(uniform_scale3(-1.0) * Vec3::new(1.0, 2.0, 3.0), Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(uniform_scale4(1.0), Mat4::IDENTITY);
    }

    #[test]
    fn test_scale2_is_diagonal() {
        let m = scale2(2.0, 1.0);
        assert_eq!(m, Mat2::new(2.0, 0.0, 0.0, 1.0));
        assert_eq!(m * Vec2::new(3.0, 5.0), Vec2::new(6.0, 5.0));
    }

    #[test]
    fn test_scale2_scales_rows_of_matrix() {
        let m = Mat2::new(1.0, 2.0, 3.0, 4.0);
        // Left-multiplying by a diagonal scales the rows
        assert_eq!(scale2(2.0, 1.0) * m, Mat2::new(2.0, 4.0, 3.0, 4.0));
    }

    #[test]
    fn test_crazy_scale() {
        let crazy = scale3(2.0, -3.0, 4.0);
        assert_eq!(crazy * Vec3::new(1.0, 1.0, 1.0), Vec3::new(2.0, -3.0, 4.0));
    }

    #[test]
    fn test_scale3_matches_hadamard() {
        let factors = Vec3::new(2.0, -3.0, 4.0);
        let v = Vec3::new(-7.0, 5.0, 0.5);
        assert_eq!(scale3(2.0, -3.0, 4.0) * v, factors.component_mul(v));
    }

    #[test]
    fn test_scale4_diagonal() {
        let m = scale4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m * Vec4::splat(1.0), Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(m.get(0, 1), Some(0.0));
    }

    #[test]
    fn test_scale_along2_reference_case() {
        let m = scale_along2(2.0, Vec2::new(1.0, 1.0)).unwrap();
        assert_eq!(m, Mat2::new(1.5, 0.5, 0.5, 1.5));
        assert_eq!(m * Vec2::new(1.0, 0.0), Vec2::new(1.5, 0.5));
    }

    #[test]
    fn test_scale_along2_matches_projection_identity() {
        let a = Vec2::new(1.0, 1.0);
        let s = 2.0;
        let m = scale_along2(s, a).unwrap();
        for v in [Vec2::new(1.0, 0.0), Vec2::new(-3.0, 4.5), Vec2::new(0.0, 2.0)] {
            let expected = s * v.project(a) + v.reject(a);
            assert!(vec2_approx_eq(m * v, expected), "v = {}: got {}, expected {}", v, m * v, expected);
        }
    }

    #[test]
    fn test_scale_along_axis_length_irrelevant() {
        let unit = scale_along2(3.0, Vec2::new(0.6, 0.8)).unwrap();
        let long = scale_along2(3.0, Vec2::new(6.0, 8.0)).unwrap();
        let v = Vec2::new(2.0, -1.0);
        assert!(vec2_approx_eq(unit * v, long * v));
    }

    #[test]
    fn test_scale_along3_preserves_orthogonal() {
        let axis = Vec3::new(0.0, 0.0, 2.0);
        let m = scale_along3(5.0, axis).unwrap();
        assert!(vec3_approx_eq(m * Vec3::X, Vec3::X));
        assert!(vec3_approx_eq(m * Vec3::Y, Vec3::Y));
        assert!(vec3_approx_eq(m * Vec3::Z, Vec3::Z * 5.0));
    }

    #[test]
    fn test_scale_along3_general_axis() {
        let a = Vec3::new(1.0, -2.0, 0.5);
        let s = -0.5;
        let m = scale_along3(s, a).unwrap();
        let v = Vec3::new(3.0, 1.0, -4.0);
        assert!(vec3_approx_eq(m * v, s * v.project(a) + v.reject(a)));
    }

    #[test]
    fn test_scale_along_by_one_is_identity() {
        let m = scale_along4(1.0, Vec4::new(1.0, 2.0, 3.0, 4.0)).unwrap();
        assert_eq!(m, Mat4::IDENTITY);
    }

    #[test]
    fn test_scale_along4_along_basis_axis() {
        let m = scale_along4(3.0, Vec4::W).unwrap();
        assert_eq!(m, scale4(1.0, 1.0, 1.0, 3.0));
    }

    #[test]
    fn test_scale_along_tiny_axis() {
        assert_eq!(scale_along2(2.0, Vec2::new(1e-20, 0.0)), Ok(scale2(2.0, 1.0)));
        assert_eq!(scale_along2(2.0, Vec2::new(1e-25, 0.0)), Ok(scale2(2.0, 1.0)));
        assert_eq!(scale_along3(4.0, Vec3::new(0.0, -1e-40, 0.0)), Ok(scale3(1.0, 4.0, 1.0)));
    }

    #[test]
    fn test_scale_along_huge_axis() {
        let reference = scale_along2(2.0, Vec2::new(1.0, 1.0)).unwrap();
        assert_eq!(scale_along2(2.0, Vec2::new(1e20, 1e20)), Ok(reference));
        assert_eq!(scale_along4(3.0, Vec4::new(0.0, 0.0, 0.0, 3e38)), Ok(scale4(1.0, 1.0, 1.0, 3.0)));
    }

    #[test]
    fn test_scale_along_non_finite() {
        assert_eq!(
            scale_along2(2.0, Vec2::new(f32::INFINITY, 1.0)),
            Err(MathError::NonFinite)
        );
        assert_eq!(
            scale_along3(2.0, Vec3::new(f32::NAN, 0.0, 1.0)),
            Err(MathError::NonFinite)
        );
        assert_eq!(
            scale_along2(f32::INFINITY, Vec2::new(1.0, 1.0)),
            Err(MathError::NonFinite)
        );
        // Outer product entries stay within [-1, 1], so a huge finite factor is fine
        assert_eq!(
            scale_along2(f32::MAX, Vec2::new(1e30, -1e30)).map(|m| m.is_finite()),
            Ok(true)
        );
    }

    #[test]
    fn test_zero_axis_rejected() {
        assert_eq!(scale_along2(2.0, Vec2::ZERO), Err(MathError::ZeroAxis));
        assert_eq!(scale_along3(2.0, Vec3::ZERO), Err(MathError::ZeroAxis));
        assert_eq!(scale_along4(2.0, Vec4::ZERO), Err(MathError::ZeroAxis));
    }
}
