use core::fmt::{Display, Formatter};

#[cfg(not(feature = "std"))]
use error_stack::Context;

/// Failure to construct a cataloged generating set.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A parameter that must be an (odd) prime is not.
    PrimeRequired,
    /// The two prime parameters must differ.
    DistinctPrimesRequired,
    /// The rank or letter-count parameter is outside the family's range.
    UnsupportedRank,
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::PrimeRequired => f.write_str("parameter must be an odd prime"),
            Self::DistinctPrimesRequired => f.write_str("the two primes must be distinct"),
            Self::UnsupportedRank => f.write_str("rank parameter is out of range for this family"),
        }
    }
}

#[cfg(not(feature = "std"))]
impl Context for CatalogError {}

#[cfg(feature = "std")]
impl std::error::Error for CatalogError {}
