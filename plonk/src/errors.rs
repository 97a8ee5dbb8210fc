use crate::poly_commit::errors::PolyComSchemeError;
use ark_std::{error, fmt};
use zksetup_algebra::prelude::AlgebraError;

pub(crate) type Result<T> = core::result::Result<T, PlonkError>;

/// Errors of the PLONK setup.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlonkError {
    /// Algebra error
    Algebra(AlgebraError),
    /// The reference string holds fewer G1 powers than the domain size.
    SrsTooSmall,
    /// Polynomial commitment error.
    CommitmentError(PolyComSchemeError),
    /// No radix-2 domain of (at least) the given size exists in the field.
    GroupNotFound(usize),
    /// The constraint system is malformed.
    ConstraintSystemError(&'static str),
    /// The key was deserialized and `init_kzg` has not been called yet.
    MissingSrs,
}

impl fmt::Display for PlonkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use PlonkError::*;
        match self {
            Algebra(e) => write!(f, "Algebra: {}", e),
            SrsTooSmall => f.write_str("kzg srs is too small"),
            CommitmentError(e) => write!(f, "Commitment error: {}", e),
            GroupNotFound(n) => write!(f, "Group of size {} not found.", n),
            ConstraintSystemError(e) => write!(f, "Invalid constraint system: {}", e),
            MissingSrs => f.write_str("kzg srs is not initialized"),
        }
    }
}

impl error::Error for PlonkError {}

impl From<AlgebraError> for PlonkError {
    fn from(e: AlgebraError) -> PlonkError {
        PlonkError::Algebra(e)
    }
}

impl From<PolyComSchemeError> for PlonkError {
    fn from(e: PolyComSchemeError) -> PlonkError {
        PlonkError::CommitmentError(e)
    }
}
