use ark_std::{error, fmt};
use zksetup_algebra::prelude::AlgebraError;

pub(crate) type Result<T> = core::result::Result<T, CeremonyError>;

/// Reasons for rejecting ceremony input.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CeremonyError {
    /// Algebra error.
    Algebra(AlgebraError),
    /// Two vectors that must be processed pairwise have different lengths.
    LengthMismatch {
        /// The length required by the other operand.
        expected: usize,
        /// The length that was supplied.
        found: usize,
    },
    /// A vector is too short for the requested operation.
    EmptyInput,
    /// A point is off the curve or outside the prime-order subgroup.
    NotInSubgroup,
    /// A contribution failed one of the round checks.
    InvalidContribution(&'static str),
}

impl fmt::Display for CeremonyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CeremonyError::*;
        match self {
            Algebra(e) => write!(f, "Algebra: {}", e),
            LengthMismatch { expected, found } => {
                write!(f, "Length mismatch: expected {}, found {}", expected, found)
            }
            EmptyInput => f.write_str("Input is too short"),
            NotInSubgroup => f.write_str("invalid point not in subgroup"),
            InvalidContribution(check) => write!(f, "Invalid contribution: {}", check),
        }
    }
}

impl error::Error for CeremonyError {}

impl From<AlgebraError> for CeremonyError {
    fn from(e: AlgebraError) -> CeremonyError {
        CeremonyError::Algebra(e)
    }
}
