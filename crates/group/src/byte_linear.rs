//! Invertible matrices over the byte-indexed small fields.
//!
//! The prime-field matrix element keeps its modulus inline; here the field
//! carries precomputed tables, so elements share it behind an `Arc`. Only
//! the field's order and defining polynomial take part in equality and
//! hashing, never the tables.

use alloc::{sync::Arc, vec, vec::Vec};
use core::{
    fmt::{Display, Formatter},
    hash::{Hash, Hasher},
};

use cayley_arith::{ByteField, MatrixError};

use crate::GroupElement;

/// An element of GL_n over a [`ByteField`].
#[derive(Debug, Clone)]
pub struct ByteGeneralLinear {
    field: Arc<ByteField>,
    n: usize,
    data: Vec<u8>,
}

impl ByteGeneralLinear {
    /// Wrap row-major entries as a group element.
    ///
    /// Fails when the data is not `n × n` or the matrix is singular over
    /// the field.
    pub fn new(field: Arc<ByteField>, n: usize, data: Vec<u8>) -> Result<Self, MatrixError> {
        if data.len() != n * n {
            return Err(MatrixError::DimensionMismatch);
        }
        let candidate = Self { field, n, data };
        if !candidate.is_invertible() {
            return Err(MatrixError::Singular);
        }
        Ok(candidate)
    }

    /// The identity of GL_n over the field.
    #[must_use]
    pub fn one(field: Arc<ByteField>, n: usize) -> Self {
        let mut data = vec![0; n * n];
        for k in 0..n {
            data[k * n + k] = field.one();
        }
        Self { field, n, data }
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.n
    }

    #[must_use]
    pub fn field(&self) -> &Arc<ByteField> {
        &self.field
    }

    #[must_use]
    pub fn entries(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    fn get(&self, row: usize, col: usize) -> u8 {
        self.data[row * self.n + col]
    }

    fn is_invertible(&self) -> bool {
        self.echelon(None)
    }

    /// Gaussian elimination over the field. With `inverse` present, runs the
    /// augmented `(A | I)` variant and writes `A⁻¹` into it; returns whether
    /// the matrix is invertible.
    fn echelon(&self, inverse: Option<&mut Vec<u8>>) -> bool {
        let f = &*self.field;
        let n = self.n;
        let mut left = self.data.clone();
        let mut right = match &inverse {
            Some(_) => ByteGeneralLinear::one(Arc::clone(&self.field), n).data,
            None => Vec::new(),
        };
        let augmented = !right.is_empty();

        for k in 0..n {
            if left[k * n + k] == 0 {
                let Some(swap) = (k + 1..n).find(|&j| left[j * n + k] != 0) else {
                    return false;
                };
                for c in 0..n {
                    left.swap(k * n + c, swap * n + c);
                    if augmented {
                        right.swap(k * n + c, swap * n + c);
                    }
                }
            }
            let pivot_inv = f.inv(left[k * n + k]).expect("pivot is nonzero");
            for c in 0..n {
                left[k * n + c] = f.mul(left[k * n + c], pivot_inv);
                if augmented {
                    right[k * n + c] = f.mul(right[k * n + c], pivot_inv);
                }
            }
            for j in 0..n {
                if j == k || left[j * n + k] == 0 {
                    continue;
                }
                let factor = left[j * n + k];
                for c in 0..n {
                    let sub = f.mul(factor, left[k * n + c]);
                    left[j * n + c] = f.sub(left[j * n + c], sub);
                    if augmented {
                        let sub = f.mul(factor, right[k * n + c]);
                        right[j * n + c] = f.sub(right[j * n + c], sub);
                    }
                }
            }
        }
        if let Some(out) = inverse {
            *out = right;
        }
        true
    }
}

impl PartialEq for ByteGeneralLinear {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field && self.n == other.n && self.data == other.data
    }
}

impl Eq for ByteGeneralLinear {}

impl Hash for ByteGeneralLinear {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.field.order().hash(state);
        self.n.hash(state);
        self.data.hash(state);
    }
}

impl GroupElement for ByteGeneralLinear {
    fn identity(&self) -> Self {
        Self::one(Arc::clone(&self.field), self.n)
    }

    fn inverse(&self) -> Self {
        let mut data = Vec::new();
        let invertible = self.echelon(Some(&mut data));
        debug_assert!(invertible, "group element is invertible");
        Self {
            field: Arc::clone(&self.field),
            n: self.n,
            data,
        }
    }

    fn left_mul(&self, h: &Self) -> Self {
        h.right_mul(self)
    }

    fn right_mul(&self, h: &Self) -> Self {
        assert!(self.is_operational_with(h));
        let f = &*self.field;
        let n = self.n;
        let mut data = vec![0; n * n];
        for i in 0..n {
            for j in 0..n {
                let mut acc = 0;
                for k in 0..n {
                    acc = f.add(acc, f.mul(self.get(i, k), h.get(k, j)));
                }
                data[i * n + j] = acc;
            }
        }
        Self {
            field: Arc::clone(&self.field),
            n,
            data,
        }
    }

    fn is_operational_with(&self, other: &Self) -> bool {
        self.field == other.field && self.n == other.n
    }
}

impl Display for ByteGeneralLinear {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for entry in &self.data {
            write!(f, "{entry} ")?;
        }
        write!(f, "{}", self.field.order())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element_order;

    fn gf4() -> Arc<ByteField> {
        Arc::new(ByteField::new(4).unwrap())
    }

    #[test]
    fn identity_and_inverse() {
        let f = gf4();
        // x is the element 2 of GF(4); [[x, 1], [1, 0]] is invertible
        let g = ByteGeneralLinear::new(Arc::clone(&f), 2, vec![2, 1, 1, 0]).unwrap();
        let e = ByteGeneralLinear::one(Arc::clone(&f), 2);
        assert_eq!(g.right_mul(&g.inverse()), e);
        assert_eq!(g.inverse().right_mul(&g), e);
        assert_eq!(g.right_mul(&e), g);
    }

    #[test]
    fn singular_matrices_are_rejected() {
        let f = gf4();
        assert_eq!(
            ByteGeneralLinear::new(Arc::clone(&f), 2, vec![1, 1, 1, 1]),
            Err(MatrixError::Singular)
        );
        assert_eq!(
            ByteGeneralLinear::new(f, 2, vec![1, 1, 1]),
            Err(MatrixError::DimensionMismatch)
        );
    }

    #[test]
    fn char_two_shear_has_order_two() {
        let f = gf4();
        let shear = ByteGeneralLinear::new(f, 2, vec![1, 1, 0, 1]).unwrap();
        assert_eq!(element_order(&shear), 2);
    }

    #[test]
    fn elements_of_distinct_fields_are_not_operational() {
        let a = ByteGeneralLinear::one(gf4(), 2);
        let b = ByteGeneralLinear::one(Arc::new(ByteField::new(8).unwrap()), 2);
        assert!(!a.is_operational_with(&b));
    }
}
