//! Row-major 2×2 and 3×3 matrices.

use std::ops::Index;

/// A 2×2 matrix in row-major order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix2 {
    rows: [[f64; 2]; 2],
}

impl Matrix2 {
    /// Builds a matrix from rows.
    #[must_use]
    pub const fn new(rows: [[f64; 2]; 2]) -> Self {
        Self { rows }
    }

    /// The identity matrix.
    #[must_use]
    pub const fn identity() -> Self {
        Self::new([[1.0, 0.0], [0.0, 1.0]])
    }

    /// Sum of the diagonal entries.
    #[must_use]
    pub fn trace(&self) -> f64 {
        self.rows[0][0] + self.rows[1][1]
    }

    /// The determinant `ad − bc`.
    #[must_use]
    pub fn det(&self) -> f64 {
        self.rows[0][0] * self.rows[1][1] - self.rows[0][1] * self.rows[1][0]
    }

    /// Matrix–vector product.
    #[must_use]
    pub fn mul_vec(&self, v: [f64; 2]) -> [f64; 2] {
        [
            self.rows[0][0] * v[0] + self.rows[0][1] * v[1],
            self.rows[1][0] * v[0] + self.rows[1][1] * v[1],
        ]
    }

    /// A copy with column `index` replaced, as used by Cramer's rule.
    ///
    /// # Panics
    ///
    /// When `index > 1`.
    #[must_use]
    pub fn with_column(&self, index: usize, column: [f64; 2]) -> Self {
        assert!(index < 2, "column index {index} out of range");
        let mut rows = self.rows;
        rows[0][index] = column[0];
        rows[1][index] = column[1];
        Self::new(rows)
    }

    /// True when every entry is a finite number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.rows.iter().flatten().all(|v| v.is_finite())
    }
}

impl Index<(usize, usize)> for Matrix2 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.rows[row][col]
    }
}

/// A 3×3 matrix in row-major order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix3 {
    rows: [[f64; 3]; 3],
}

impl Matrix3 {
    /// Builds a matrix from rows.
    #[must_use]
    pub const fn new(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// The identity matrix.
    #[must_use]
    pub const fn identity() -> Self {
        Self::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Sum of the diagonal entries.
    #[must_use]
    pub fn trace(&self) -> f64 {
        self.rows[0][0] + self.rows[1][1] + self.rows[2][2]
    }

    /// Determinant by cofactor expansion along the first row.
    #[must_use]
    pub fn det(&self) -> f64 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.rows;
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Sum of the three principal 2×2 minors, which is the `λ` coefficient
    /// of the characteristic polynomial.
    #[must_use]
    pub fn minor_sum(&self) -> f64 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.rows;
        (a * e - b * d) + (a * i - c * g) + (e * i - f * h)
    }

    /// Matrix–vector product.
    #[must_use]
    pub fn mul_vec(&self, v: [f64; 3]) -> [f64; 3] {
        [
            self.rows[0][0] * v[0] + self.rows[0][1] * v[1] + self.rows[0][2] * v[2],
            self.rows[1][0] * v[0] + self.rows[1][1] * v[1] + self.rows[1][2] * v[2],
            self.rows[2][0] * v[0] + self.rows[2][1] * v[1] + self.rows[2][2] * v[2],
        ]
    }

    /// A copy with column `index` replaced, as used by Cramer's rule.
    ///
    /// # Panics
    ///
    /// When `index > 2`.
    #[must_use]
    pub fn with_column(&self, index: usize, column: [f64; 3]) -> Self {
        assert!(index < 3, "column index {index} out of range");
        let mut rows = self.rows;
        for (row, &value) in rows.iter_mut().zip(column.iter()) {
            row[index] = value;
        }
        Self::new(rows)
    }

    /// True when every entry is a finite number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.rows.iter().flatten().all(|v| v.is_finite())
    }
}

impl Index<(usize, usize)> for Matrix3 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.rows[row][col]
    }
}
