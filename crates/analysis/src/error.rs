use core::fmt::{Display, Formatter};

#[cfg(not(feature = "std"))]
use error_stack::Context;

/// Failure of a shell analysis.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The graph was never finished; its shells and neighbor order are not
    /// final.
    GraphIncomplete,
}

impl Display for AnalysisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GraphIncomplete => f.write_str("graph construction was not finished"),
        }
    }
}

#[cfg(not(feature = "std"))]
impl Context for AnalysisError {}

#[cfg(feature = "std")]
impl std::error::Error for AnalysisError {}
