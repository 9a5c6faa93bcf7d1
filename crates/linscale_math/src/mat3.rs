//! 3x3 Matrix type

use std::fmt;
use std::ops::{Index, IndexMut};

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::Vec3;

/// 3x3 matrix (column-major)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Mat3 {
    cols: [Vec3; 3],
}

impl Mat3 {
    pub const ZERO: Self = Self { cols: [Vec3::ZERO; 3] };

    /// Identity matrix
    pub const IDENTITY: Self = Self { cols: [Vec3::X, Vec3::Y, Vec3::Z] };

    /// Create a matrix from its entries in row-major order
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        n00: f32, n01: f32, n02: f32,
        n10: f32, n11: f32, n12: f32,
        n20: f32, n21: f32, n22: f32,
    ) -> Self {
        Self {
            cols: [
                Vec3::new(n00, n10, n20),
                Vec3::new(n01, n11, n21),
                Vec3::new(n02, n12, n22),
            ],
        }
    }

    #[inline]
    pub const fn from_columns(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self { cols: [c0, c1, c2] }
    }

    /// Diagonal matrix with `d` on the main diagonal
    #[inline]
    pub const fn from_diagonal(d: Vec3) -> Self {
        Self::new(
            d.x, 0.0, 0.0,
            0.0, d.y, 0.0,
            0.0, 0.0, d.z,
        )
    }

    /// True when no entry is infinite or NaN
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.cols.iter().all(|c| c.is_finite())
    }

    /// Element at (`row`, `col`), or `None` when either is out of range
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        self.cols.get(col).and_then(|c| c.get(row))
    }

    /// Column `col` as a vector. Panics if `col >= 3`.
    #[inline]
    pub fn column(&self, col: usize) -> Vec3 {
        self.cols[col]
    }

    /// Row `row` as a vector. Panics if `row >= 3`.
    #[inline]
    pub fn row(&self, row: usize) -> Vec3 {
        Vec3::new(self.cols[0][row], self.cols[1][row], self.cols[2][row])
    }
}

impl Index<(usize, usize)> for Mat3 {
    type Output = f32;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.cols[col][row]
    }
}

impl IndexMut<(usize, usize)> for Mat3 {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        &mut self.cols[col][row]
    }
}

impl fmt::Display for Mat3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..3 {
            if i > 0 {
                writeln!(f)?;
            }
            let r = self.row(i);
            write!(f, "[{}, {}, {}]", r.x, r.y, r.z)?;
        }
        Ok(())
    }
}

// Operator overloads

impl std::ops::Mul<Vec3> for Mat3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        self.cols[0] * v.x + self.cols[1] * v.y + self.cols[2] * v.z
    }
}

impl std::ops::Mul for Mat3 {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self::from_columns(
            self * other.cols[0],
            self * other.cols[1],
            self * other.cols[2],
        )
    }
}

impl std::ops::MulAssign for Mat3 {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl std::ops::Mul<f32> for Mat3 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::from_columns(
            self.cols[0] * scalar,
            self.cols[1] * scalar,
            self.cols[2] * scalar,
        )
    }
}

impl std::ops::Mul<Mat3> for f32 {
    type Output = Mat3;
    #[inline]
    fn mul(self, m: Mat3) -> Mat3 {
        m * self
    }
}

impl std::ops::MulAssign<f32> for Mat3 {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        for c in &mut self.cols {
            *c *= scalar;
        }
    }
}

impl std::ops::Div<f32> for Mat3 {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f32) -> Self {
        Self::from_columns(
            self.cols[0] / scalar,
            self.cols[1] / scalar,
            self.cols[2] / scalar,
        )
    }
}

impl std::ops::Add for Mat3 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::from_columns(
            self.cols[0] + other.cols[0],
            self.cols[1] + other.cols[1],
            self.cols[2] + other.cols[2],
        )
    }
}

impl std::ops::Sub for Mat3 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::from_columns(
            self.cols[0] - other.cols[0],
            self.cols[1] - other.cols[1],
            self.cols[2] - other.cols[2],
        )
    }
}
