use core::fmt::{Display, Formatter};

#[cfg(not(feature = "std"))]
use error_stack::Context;

/// Failure of a group operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GroupError {
    /// The operands live in incompatible groups (different dimension,
    /// modulus or letter count).
    OperationalMismatch,
}

impl Display for GroupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OperationalMismatch => f.write_str("elements belong to incompatible groups"),
        }
    }
}

#[cfg(not(feature = "std"))]
impl Context for GroupError {}

#[cfg(feature = "std")]
impl std::error::Error for GroupError {}
