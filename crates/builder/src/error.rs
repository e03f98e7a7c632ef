use core::fmt::{Display, Formatter};

#[cfg(not(feature = "std"))]
use error_stack::Context;

/// Failure of a Cayley graph construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A generator's inverse could neither be found in the generating set
    /// nor constructed.
    GeneratorSetNotInvertible,
    /// The cancellation flag was observed; the build stopped before
    /// `finish`.
    Cancelled,
    /// A group product failed underneath the expansion loop.
    GroupArithmeticFailure,
}

impl Display for BuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GeneratorSetNotInvertible => {
                f.write_str("generating set is not closed under inverse")
            }
            Self::Cancelled => f.write_str("construction was cancelled"),
            Self::GroupArithmeticFailure => f.write_str("group arithmetic failed during expansion"),
        }
    }
}

#[cfg(not(feature = "std"))]
impl Context for BuildError {}

#[cfg(feature = "std")]
impl std::error::Error for BuildError {}
