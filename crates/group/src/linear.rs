//! Invertible matrices over F_q and their projective quotients.

use core::fmt::{Display, Formatter};

use cayley_arith::{modular, Matrix, MatrixError};

use crate::GroupElement;

/// An element of GL_n(F_q): an invertible `n × n` matrix with entries
/// canonically reduced into `[0, q)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneralLinear {
    matrix: Matrix,
    modulus: i32,
}

impl GeneralLinear {
    /// Wrap a matrix as a group element.
    ///
    /// The matrix must be square and invertible modulo the prime `q`;
    /// entries are reduced into `[0, q)`.
    pub fn new(matrix: Matrix, q: i32) -> Result<Self, MatrixError> {
        if !matrix.is_square() {
            return Err(MatrixError::NotSquare);
        }
        let matrix = matrix.reduced(q);
        if matrix.determinant(q) == 0 {
            return Err(MatrixError::Singular);
        }
        Ok(Self { matrix, modulus: q })
    }

    /// The identity of GL_n(F_q).
    #[must_use]
    pub fn one(n: usize, q: i32) -> Self {
        Self {
            matrix: Matrix::identity(n),
            modulus: q,
        }
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.matrix.rows()
    }

    #[must_use]
    pub fn modulus(&self) -> i32 {
        self.modulus
    }

    #[must_use]
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }
}

impl GroupElement for GeneralLinear {
    fn identity(&self) -> Self {
        Self::one(self.dimension(), self.modulus)
    }

    fn inverse(&self) -> Self {
        Self {
            matrix: self
                .matrix
                .inverse(self.modulus)
                .expect("group element is invertible"),
            modulus: self.modulus,
        }
    }

    fn left_mul(&self, h: &Self) -> Self {
        Self {
            matrix: h
                .matrix
                .product(&self.matrix, self.modulus)
                .expect("operands are operational"),
            modulus: self.modulus,
        }
    }

    fn right_mul(&self, h: &Self) -> Self {
        Self {
            matrix: self
                .matrix
                .product(&h.matrix, self.modulus)
                .expect("operands are operational"),
            modulus: self.modulus,
        }
    }

    fn is_operational_with(&self, other: &Self) -> bool {
        self.modulus == other.modulus && self.dimension() == other.dimension()
    }
}

impl Display for GeneralLinear {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for entry in self.matrix.entries() {
            write!(f, "{entry} ")?;
        }
        write!(f, "{}", self.modulus)
    }
}

/// An element of PGL_n(F_q): the scalar class of an invertible matrix.
///
/// The stored representative is canonical: the first nonzero entry of the
/// first column is 1 (and everything above it in that column is zero), so
/// derived `Eq`/`Hash` coincide with projective equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectiveLinear {
    matrix: Matrix,
    modulus: i32,
}

fn canonicalize(matrix: Matrix, q: i32) -> Matrix {
    let matrix = matrix.reduced(q);
    for row in 0..matrix.rows() {
        let a = matrix.get(row, 0);
        if a != 0 {
            let scale = modular::inverse(a, q).expect("nonzero entries of F_q are units");
            return matrix.scalar_product(scale, q);
        }
    }
    // invertible matrices never have an all-zero column
    matrix
}

impl ProjectiveLinear {
    /// Wrap a matrix as the canonical representative of its scalar class.
    ///
    /// The matrix must be square and invertible modulo the prime `q`.
    pub fn new(matrix: Matrix, q: i32) -> Result<Self, MatrixError> {
        if !matrix.is_square() {
            return Err(MatrixError::NotSquare);
        }
        let matrix = matrix.reduced(q);
        if matrix.determinant(q) == 0 {
            return Err(MatrixError::Singular);
        }
        Ok(Self {
            matrix: canonicalize(matrix, q),
            modulus: q,
        })
    }

    /// The identity of PGL_n(F_q).
    #[must_use]
    pub fn one(n: usize, q: i32) -> Self {
        Self {
            matrix: Matrix::identity(n),
            modulus: q,
        }
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.matrix.rows()
    }

    #[must_use]
    pub fn modulus(&self) -> i32 {
        self.modulus
    }

    /// The canonical matrix representative.
    #[must_use]
    pub fn representative(&self) -> &Matrix {
        &self.matrix
    }
}

impl GroupElement for ProjectiveLinear {
    fn identity(&self) -> Self {
        Self::one(self.dimension(), self.modulus)
    }

    fn inverse(&self) -> Self {
        Self {
            matrix: canonicalize(
                self.matrix
                    .inverse(self.modulus)
                    .expect("group element is invertible"),
                self.modulus,
            ),
            modulus: self.modulus,
        }
    }

    fn left_mul(&self, h: &Self) -> Self {
        Self {
            matrix: canonicalize(
                h.matrix
                    .product(&self.matrix, self.modulus)
                    .expect("operands are operational"),
                self.modulus,
            ),
            modulus: self.modulus,
        }
    }

    fn right_mul(&self, h: &Self) -> Self {
        Self {
            matrix: canonicalize(
                self.matrix
                    .product(&h.matrix, self.modulus)
                    .expect("operands are operational"),
                self.modulus,
            ),
            modulus: self.modulus,
        }
    }

    fn is_operational_with(&self, other: &Self) -> bool {
        self.modulus == other.modulus && self.dimension() == other.dimension()
    }
}

impl Display for ProjectiveLinear {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for entry in self.matrix.entries() {
            write!(f, "{entry} ")?;
        }
        write!(f, "{}", self.modulus)
    }
}

#[cfg(test)]
mod tests {
    use cayley_arith::ArithmeticError;

    use super::*;
    use crate::element_order;

    fn gl(rows: [[i32; 2]; 2], q: i32) -> GeneralLinear {
        GeneralLinear::new(Matrix::from_rows(rows), q).unwrap()
    }

    fn pgl(rows: [[i32; 2]; 2], q: i32) -> ProjectiveLinear {
        ProjectiveLinear::new(Matrix::from_rows(rows), q).unwrap()
    }

    #[test]
    fn rejects_singular_and_composite() {
        assert_eq!(
            GeneralLinear::new(Matrix::from_rows([[1, 2], [2, 4]]), 5),
            Err(MatrixError::Singular)
        );
        assert_eq!(
            GeneralLinear::new(Matrix::identity(2), 6),
            Err(MatrixError::Arithmetic(ArithmeticError::NonPrimeModulus))
        );
    }

    #[test]
    fn group_axioms_hold() {
        let x = gl([[1, 1], [0, 1]], 7);
        let y = gl([[1, 0], [1, 1]], 7);
        let z = gl([[2, 0], [0, 1]], 7);

        assert_eq!(x.right_mul(&x.identity()), x);
        assert_eq!(x.left_mul(&x.identity()), x);
        assert_eq!(x.right_mul(&x.inverse()), x.identity());
        assert_eq!(x.inverse().right_mul(&x), x.identity());
        assert_eq!(
            x.right_mul(&y).right_mul(&z),
            x.right_mul(&y.right_mul(&z))
        );
    }

    #[test]
    fn left_and_right_products_differ() {
        let x = gl([[1, 1], [0, 1]], 7);
        let y = gl([[1, 0], [1, 1]], 7);
        assert_eq!(x.left_mul(&y), y.right_mul(&x));
        assert_ne!(x.right_mul(&y), y.right_mul(&x));
    }

    #[test]
    fn transvection_order_equals_characteristic() {
        let x = gl([[1, 1], [0, 1]], 13);
        assert_eq!(element_order(&x), 13);
    }

    #[test]
    fn projective_classes_collapse_scalars() {
        // 3·I and I are the same point of PGL_2(F_7)
        let scaled = pgl([[3, 0], [0, 3]], 7);
        let one = ProjectiveLinear::one(2, 7);
        assert_eq!(scaled, one);

        // canonical representative has leading 1 in the first column
        let g = pgl([[0, 1], [4, 2]], 7);
        assert_eq!(g.representative().get(1, 0), 1);
    }

    #[test]
    fn projective_inverse_roundtrip() {
        let g = pgl([[2, 3], [1, 4]], 11);
        assert_eq!(g.right_mul(&g.inverse()), g.identity());
    }

    #[test]
    fn operational_predicate() {
        let a = gl([[1, 1], [0, 1]], 5);
        let b = gl([[1, 1], [0, 1]], 7);
        assert!(!a.is_operational_with(&b));
        assert!(a.checked_right_mul(&b).is_err());
    }

    #[test]
    fn display_is_entries_then_modulus() {
        let x = gl([[1, 2], [3, 4]], 5);
        assert_eq!(alloc::format!("{x}"), "1 2 3 4 5");
    }
}
