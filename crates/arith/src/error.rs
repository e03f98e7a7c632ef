use core::fmt::{Display, Formatter};

#[cfg(not(feature = "std"))]
use error_stack::Context;

/// Failure of a scalar operation over Z/qZ.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    /// A modular inverse was requested for a value not coprime to the
    /// modulus.
    NotInvertible,
    /// The operation requires a prime modulus but received a composite.
    NonPrimeModulus,
}

impl Display for ArithmeticError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotInvertible => f.write_str("value is not invertible modulo q"),
            Self::NonPrimeModulus => f.write_str("modulus is not prime"),
        }
    }
}

#[cfg(not(feature = "std"))]
impl Context for ArithmeticError {}

#[cfg(feature = "std")]
impl std::error::Error for ArithmeticError {}

/// Failure of a matrix operation over F_q.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Operand shapes are incompatible.
    DimensionMismatch,
    /// The matrix has no inverse over F_q.
    Singular,
    /// A square matrix was required.
    NotSquare,
    /// An underlying scalar operation failed.
    Arithmetic(ArithmeticError),
}

impl From<ArithmeticError> for MatrixError {
    fn from(error: ArithmeticError) -> Self {
        Self::Arithmetic(error)
    }
}

impl Display for MatrixError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DimensionMismatch => f.write_str("matrix dimensions do not match"),
            Self::Singular => f.write_str("matrix is singular modulo q"),
            Self::NotSquare => f.write_str("matrix is not square"),
            Self::Arithmetic(error) => Display::fmt(error, f),
        }
    }
}

#[cfg(not(feature = "std"))]
impl Context for MatrixError {}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}
