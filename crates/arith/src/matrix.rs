//! Rectangular integer matrices with arithmetic over F_q.
//!
//! A [`Matrix`] is a plain row-major array of `i32` entries; the modulus is
//! an argument to each operation rather than part of the value. Operations
//! that produce a matrix return entries canonically reduced into `[0, q)`.

use alloc::{vec, vec::Vec};
use core::ops::Index;

use rand::Rng;

use crate::{
    modular::{self, is_prime},
    ArithmeticError, MatrixError,
};

/// A row-major rectangular matrix of short integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i32>,
}

impl Matrix {
    /// Build a matrix from row-major data.
    ///
    /// Fails with [`MatrixError::DimensionMismatch`] when `data.len()` is
    /// not `rows · cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<i32>) -> Result<Self, MatrixError> {
        if data.len() != rows * cols {
            return Err(MatrixError::DimensionMismatch);
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a matrix from a fixed-size array of rows.
    ///
    /// # Example
    ///
    /// ```
    /// use cayley_arith::Matrix;
    ///
    /// let m = Matrix::from_rows([[1, 1], [0, 1]]);
    /// assert_eq!(m.get(0, 1), 1);
    /// ```
    #[must_use]
    pub fn from_rows<const R: usize, const C: usize>(rows: [[i32; C]; R]) -> Self {
        Self {
            rows: R,
            cols: C,
            data: rows.into_iter().flatten().collect(),
        }
    }

    /// The `n × n` zero matrix with ones on the diagonal.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut data = vec![0; n * n];
        for k in 0..n {
            data[k * n + k] = 1;
        }
        Self {
            rows: n,
            cols: n,
            data,
        }
    }

    /// The identity with an additional 1 at row `h`, column `k` (1-based).
    ///
    /// # Panics
    ///
    /// Panics if `h` or `k` is zero or exceeds `n`.
    #[must_use]
    pub fn elementary(n: usize, h: usize, k: usize) -> Self {
        assert!((1..=n).contains(&h) && (1..=n).contains(&k));
        let mut matrix = Self::identity(n);
        matrix.data[(h - 1) * n + (k - 1)] += 1;
        matrix
    }

    /// A matrix with entries drawn uniformly from `[0, q)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, rows: usize, cols: usize, q: i32) -> Self {
        let data = (0..rows * cols).map(|_| rng.gen_range(0..q)).collect();
        Self { rows, cols, data }
    }

    /// Rejection-sample random `n × n` matrices until one is invertible
    /// modulo the prime `q`.
    pub fn random_invertible<R: Rng + ?Sized>(rng: &mut R, n: usize, q: i32) -> Self {
        debug_assert!(is_prime(q));
        loop {
            let candidate = Self::random(rng, n, n, q);
            if candidate.determinant(q) != 0 {
                return candidate;
            }
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.data[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: i32) {
        self.data[row * self.cols + col] = value;
    }

    /// Row-major view of the entries.
    #[must_use]
    pub fn entries(&self) -> &[i32] {
        &self.data
    }

    /// Entries mapped into the canonical interval `[0, q)`.
    #[must_use]
    pub fn reduced(&self, q: i32) -> Self {
        let q = i64::from(q).abs();
        self.map(|a| i64::from(a).rem_euclid(q) as i32)
    }

    /// Entry-wise negation modulo `q`.
    #[must_use]
    pub fn negated(&self, q: i32) -> Self {
        let q = i64::from(q).abs();
        self.map(|a| (-i64::from(a)).rem_euclid(q) as i32)
    }

    /// Entry-wise scalar product modulo `q`.
    #[must_use]
    pub fn scalar_product(&self, a: i32, q: i32) -> Self {
        let q = i64::from(q).abs();
        self.map(|b| (i64::from(a) * i64::from(b)).rem_euclid(q) as i32)
    }

    fn map(&self, f: impl Fn(i32) -> i32) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().copied().map(f).collect(),
        }
    }

    /// Entry-wise sum modulo `q`.
    pub fn sum(&self, other: &Self, q: i32) -> Result<Self, MatrixError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrixError::DimensionMismatch);
        }
        let q = i64::from(q).abs();
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| (i64::from(a) + i64::from(b)).rem_euclid(q) as i32)
            .collect();
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Matrix product modulo `q`.
    pub fn product(&self, other: &Self, q: i32) -> Result<Self, MatrixError> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch);
        }
        let q = i64::from(q).abs();
        let mut data = vec![0; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = 0_i64;
                for k in 0..self.cols {
                    let a = i64::from(self.get(i, k)).rem_euclid(q);
                    let b = i64::from(other.get(k, j)).rem_euclid(q);
                    acc = (acc + a * b) % q;
                }
                data[i * other.cols + j] = acc as i32;
            }
        }
        Ok(Self {
            rows: self.rows,
            cols: other.cols,
            data,
        })
    }

    #[must_use]
    pub fn transposed(&self) -> Self {
        let mut data = vec![0; self.data.len()];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.get(i, j);
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    /// Determinant modulo `q`, in `[0, q)`.
    ///
    /// Gaussian elimination with row-swap pivoting; a swap flips the sign.
    /// Returns 0 when the matrix is not square, `q` is not prime, or the
    /// matrix is singular.
    #[must_use]
    pub fn determinant(&self, q: i32) -> i32 {
        if !self.is_square() || !is_prime(q) {
            return 0;
        }
        let n = self.rows;
        let q = i64::from(q).abs();
        let mut a: Vec<i64> = self
            .data
            .iter()
            .map(|&x| i64::from(x).rem_euclid(q))
            .collect();
        let mut det = 1_i64;

        for k in 0..n {
            if a[k * n + k] == 0 {
                // smallest-index row below with a nonzero pivot column entry
                let Some(swap) = (k + 1..n).find(|&j| a[j * n + k] != 0) else {
                    return 0;
                };
                for c in 0..n {
                    a.swap(k * n + c, swap * n + c);
                }
                det = (q - det) % q;
            }
            let pivot = a[k * n + k];
            det = det * pivot % q;
            let pivot_inv =
                i64::from(modular::inverse(pivot as i32, q as i32).expect("pivot is a unit"));
            for j in k + 1..n {
                let factor = a[j * n + k] * pivot_inv % q;
                for c in k..n {
                    a[j * n + c] = (a[j * n + c] - factor * a[k * n + c]).rem_euclid(q);
                }
            }
        }
        det as i32
    }

    /// Inverse modulo the prime `q`, by augmented elimination `(A | I)`.
    pub fn inverse(&self, q: i32) -> Result<Self, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare);
        }
        if !is_prime(q) {
            return Err(ArithmeticError::NonPrimeModulus.into());
        }
        let n = self.rows;
        let q64 = i64::from(q).abs();
        // left half: A reduced; right half: I
        let mut a: Vec<i64> = Vec::with_capacity(n * 2 * n);
        for i in 0..n {
            for j in 0..n {
                a.push(i64::from(self.get(i, j)).rem_euclid(q64));
            }
            for j in 0..n {
                a.push(i64::from(i == j));
            }
        }
        let w = 2 * n;

        for k in 0..n {
            if a[k * w + k] == 0 {
                let Some(swap) = (k + 1..n).find(|&j| a[j * w + k] != 0) else {
                    return Err(MatrixError::Singular);
                };
                for c in 0..w {
                    a.swap(k * w + c, swap * w + c);
                }
            }
            let pivot_inv = i64::from(
                modular::inverse(a[k * w + k] as i32, q).expect("pivot is a unit"),
            );
            for c in 0..w {
                a[k * w + c] = a[k * w + c] * pivot_inv % q64;
            }
            for j in 0..n {
                if j == k || a[j * w + k] == 0 {
                    continue;
                }
                let factor = a[j * w + k];
                for c in 0..w {
                    a[j * w + c] = (a[j * w + c] - factor * a[k * w + c]).rem_euclid(q64);
                }
            }
        }

        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(a[i * w + n + j] as i32);
            }
        }
        Ok(Self {
            rows: n,
            cols: n,
            data,
        })
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = i32;

    fn index(&self, (row, col): (usize, usize)) -> &i32 {
        &self.data[row * self.cols + col]
    }
}
