//! 4x4 Matrix type
//!
//! Same layout and operator surface as [`Mat2`](crate::Mat2) and
//! [`Mat3`](crate::Mat3), acting on [`Vec4`].

use std::fmt;
use std::ops::{Index, IndexMut};

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::Vec4;

/// 4x4 matrix (column-major)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Mat4 {
    cols: [Vec4; 4],
}

impl Mat4 {
    pub const ZERO: Self = Self { cols: [Vec4::ZERO; 4] };

    /// Identity matrix
    pub const IDENTITY: Self = Self { cols: [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W] };

    /// Create a matrix from its entries in row-major order
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        n00: f32, n01: f32, n02: f32, n03: f32,
        n10: f32, n11: f32, n12: f32, n13: f32,
        n20: f32, n21: f32, n22: f32, n23: f32,
        n30: f32, n31: f32, n32: f32, n33: f32,
    ) -> Self {
        Self {
            cols: [
                Vec4::new(n00, n10, n20, n30),
                Vec4::new(n01, n11, n21, n31),
                Vec4::new(n02, n12, n22, n32),
                Vec4::new(n03, n13, n23, n33),
            ],
        }
    }

    #[inline]
    pub const fn from_columns(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self { cols: [c0, c1, c2, c3] }
    }

    #[inline]
    pub const fn from_diagonal(d: Vec4) -> Self {
        Self::new(
            d.x, 0.0, 0.0, 0.0,
            0.0, d.y, 0.0, 0.0,
            0.0, 0.0, d.z, 0.0,
            0.0, 0.0, 0.0, d.w,
        )
    }

    /// True when no entry is infinite or NaN
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.cols.iter().all(|c| c.is_finite())
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        self.cols.get(col).and_then(|c| c.get(row))
    }

    /// Get a column vector from the matrix. Panics if `col >= 4`.
    #[inline]
    pub fn column(&self, col: usize) -> Vec4 {
        self.cols[col]
    }

    /// Get a row vector from the matrix. Panics if `row >= 4`.
    #[inline]
    pub fn row(&self, row: usize) -> Vec4 {
        Vec4::new(
            self.cols[0][row],
            self.cols[1][row],
            self.cols[2][row],
            self.cols[3][row],
        )
    }
}

impl Index<(usize, usize)> for Mat4 {
    type Output = f32;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.cols[col][row]
    }
}

impl IndexMut<(usize, usize)> for Mat4 {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        &mut self.cols[col][row]
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..4 {
            if i > 0 {
                writeln!(f)?;
            }
            let r = self.row(i);
            write!(f, "[{}, {}, {}, {}]", r.x, r.y, r.z, r.w)?;
        }
        Ok(())
    }
}

// Operator overloads

/// Transform a Vec4: result = M * v
impl std::ops::Mul<Vec4> for Mat4 {
    type Output = Vec4;
    #[inline]
    fn mul(self, v: Vec4) -> Vec4 {
        self.cols[0] * v.x + self.cols[1] * v.y + self.cols[2] * v.z + self.cols[3] * v.w
    }
}

/// Multiply two matrices: `a * b` applies `b` first, then `a`
impl std::ops::Mul for Mat4 {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self::from_columns(
            self * other.cols[0],
            self * other.cols[1],
            self * other.cols[2],
            self * other.cols[3],
        )
    }
}

impl std::ops::MulAssign for Mat4 {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl std::ops::Mul<f32> for Mat4 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        let mut result = self;
        result *= scalar;
        result
    }
}

impl std::ops::Mul<Mat4> for f32 {
    type Output = Mat4;
    #[inline]
    fn mul(self, m: Mat4) -> Mat4 {
        m * self
    }
}

impl std::ops::MulAssign<f32> for Mat4 {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        for c in &mut self.cols {
            *c *= scalar;
        }
    }
}

impl std::ops::Div<f32> for Mat4 {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f32) -> Self {
        let mut result = self;
        for c in &mut result.cols {
            *c /= scalar;
        }
        result
    }
}

impl std::ops::Add for Mat4 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        let mut result = self;
        for (c, o) in result.cols.iter_mut().zip(other.cols) {
            *c += o;
        }
        result
    }
}

impl std::ops::Sub for Mat4 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        let mut result = self;
        for (c, o) in result.cols.iter_mut().zip(other.cols) {
            *c -= o;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec4, b: Vec4) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z) && approx_eq(a.w, b.w)
    }

    fn mat_approx_eq(a: Mat4, b: Mat4) -> bool {
        for i in 0..4 {
            for j in 0..4 {
                if !approx_eq(a[(i, j)], b[(i, j)]) {
                    return false;
                }
            }
        }
        true
    }

    fn sample() -> Mat4 {
        Mat4::new(
            1.0, 2.0, 3.0, 4.0,
            5.0, 6.0, 7.0, 8.0,
            9.0, 10.0, 11.0, 12.0,
            13.0, 14.0, 15.0, 16.0,
        )
    }

    #[test]
    fn test_identity() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let result = Mat4::IDENTITY * v;
        assert!(vec_approx_eq(v, result));
    }

    #[test]
    fn test_mul_identity() {
        let a = sample();
        assert!(mat_approx_eq(Mat4::IDENTITY * a, a));
        assert!(mat_approx_eq(a * Mat4::IDENTITY, a));
    }

    #[test]
    fn test_mul_entrywise_definition() {
        let a = sample();
        let b = Mat4::new(
            0.5, 0.0, -1.0, 2.0,
            1.0, 3.0, 0.0, 0.0,
            -2.0, 1.0, 1.0, 0.5,
            0.0, 0.0, 4.0, 1.0,
        );
        let product = a * b;
        for i in 0..4 {
            for j in 0..4 {
                let expected: f32 = (0..4).map(|k| a[(i, k)] * b[(k, j)]).sum();
                assert!(approx_eq(product[(i, j)], expected),
                    "entry ({}, {}): got {}, expected {}", i, j, product[(i, j)], expected);
            }
        }
    }

    #[test]
    fn test_mul_vector_entrywise_definition() {
        let m = sample();
        let v = Vec4::new(1.0, -1.0, 0.5, 2.0);
        let result = m * v;
        for i in 0..4 {
            let expected: f32 = (0..4).map(|k| m[(i, k)] * v[k]).sum();
            assert!(approx_eq(result[i], expected));
        }
    }

    #[test]
    fn test_mul_associative() {
        let a = sample();
        let b = Mat4::from_diagonal(Vec4::new(1.0, -2.0, 0.5, 3.0));
        let c = sample() - Mat4::IDENTITY * 7.0;
        assert!(mat_approx_eq((a * b) * c, a * (b * c)));
    }

    #[test]
    fn test_get_column() {
        let m = sample();
        assert_eq!(m.column(0), Vec4::new(1.0, 5.0, 9.0, 13.0));
        assert_eq!(m.row(3), Vec4::new(13.0, 14.0, 15.0, 16.0));
        let rebuilt = Mat4::from_columns(m.column(0), m.column(1), m.column(2), m.column(3));
        assert_eq!(rebuilt, m);
    }

    #[test]
    fn test_scalar_ops() {
        let m = sample();
        assert_eq!(m * 2.0, 2.0 * m);
        assert_eq!(m * 2.0, m + m);
        assert_eq!((m * 2.0) / 2.0, m);
    }

    #[test]
    fn test_index_write() {
        let mut m = Mat4::IDENTITY;
        m[(3, 0)] = 7.0;
        assert_eq!(m.column(0), Vec4::new(1.0, 0.0, 0.0, 7.0));
        assert_eq!(m.get(4, 0), None);
    }

    #[test]
    fn test_pod_layout() {
        let m = sample();
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&m));
        assert_eq!(floats.len(), 16);
        // Column-major: first four floats are column 0
        assert_eq!(&floats[..4], &[1.0, 5.0, 9.0, 13.0]);
    }
}
