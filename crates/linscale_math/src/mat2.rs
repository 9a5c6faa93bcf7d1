//! 2x2 Matrix type
//!
//! Matrices are stored column-major as an array of column vectors, so
//! `m.column(j)` is a plain copy and `m * v` is a weighted sum of columns.
//! Element access is always `(row, col)`, whatever the storage order.

use std::fmt;
use std::ops::{Index, IndexMut};

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::Vec2;

/// 2x2 matrix (column-major)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Mat2 {
    cols: [Vec2; 2],
}

impl Mat2 {
    pub const ZERO: Self = Self { cols: [Vec2::ZERO; 2] };

    /// Identity matrix
    pub const IDENTITY: Self = Self { cols: [Vec2::X, Vec2::Y] };

    /// Create a matrix from its entries in row-major order
    ///
    /// # Example
    /// ```
    /// use linscale_math::{Mat2, Vec2};
    /// let m = Mat2::new(1.0, 2.0,
    ///                   3.0, 4.0);
    /// assert_eq!(m[(0, 1)], 2.0);
    /// assert_eq!(m.column(0), Vec2::new(1.0, 3.0));
    /// ```
    #[inline]
    pub const fn new(n00: f32, n01: f32, n10: f32, n11: f32) -> Self {
        Self {
            cols: [Vec2::new(n00, n10), Vec2::new(n01, n11)],
        }
    }

    /// Create a matrix whose columns are `c0` and `c1`
    #[inline]
    pub const fn from_columns(c0: Vec2, c1: Vec2) -> Self {
        Self { cols: [c0, c1] }
    }

    /// Diagonal matrix with `d` on the main diagonal
    #[inline]
    pub const fn from_diagonal(d: Vec2) -> Self {
        Self::new(d.x, 0.0, 0.0, d.y)
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

    /// Column `col` as a vector
    ///
    /// # Panics
    /// Panics if `col >= 2`.
    #[inline]
    pub fn column(&self, col: usize) -> Vec2 {
        self.cols[col]
    }

    /// Row `row` as a vector
    ///
    /// # Panics
    /// Panics if `row >= 2`.
    #[inline]
    pub fn row(&self, row: usize) -> Vec2 {
        Vec2::new(self.cols[0][row], self.cols[1][row])
    }
}

impl Index<(usize, usize)> for Mat2 {
    type Output = f32;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.cols[col][row]
    }
}

impl IndexMut<(usize, usize)> for Mat2 {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        &mut self.cols[col][row]
    }
}

impl fmt::Display for Mat2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..2 {
            if i > 0 {
                writeln!(f)?;
            }
            let r = self.row(i);
            write!(f, "[{}, {}]", r.x, r.y)?;
        }
        Ok(())
    }
}

// Operator overloads

impl std::ops::Mul<Vec2> for Mat2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, v: Vec2) -> Vec2 {
        self.cols[0] * v.x + self.cols[1] * v.y
    }
}

impl std::ops::Mul for Mat2 {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self::from_columns(self * other.cols[0], self * other.cols[1])
    }
}

impl std::ops::MulAssign for Mat2 {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl std::ops::Mul<f32> for Mat2 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::from_columns(self.cols[0] * scalar, self.cols[1] * scalar)
    }
}

impl std::ops::Mul<Mat2> for f32 {
    type Output = Mat2;
    #[inline]
    fn mul(self, m: Mat2) -> Mat2 {
        m * self
    }
}

impl std::ops::MulAssign<f32> for Mat2 {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        self.cols[0] *= scalar;
        self.cols[1] *= scalar;
    }
}

impl std::ops::Div<f32> for Mat2 {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f32) -> Self {
        Self::from_columns(self.cols[0] / scalar, self.cols[1] / scalar)
    }
}

impl std::ops::Add for Mat2 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::from_columns(self.cols[0] + other.cols[0], self.cols[1] + other.cols[1])
    }
}

impl std::ops::Sub for Mat2 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::from_columns(self.cols[0] - other.cols[0], self.cols[1] - other.cols[1])
    }
}
