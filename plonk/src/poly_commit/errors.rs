use ark_std::{error, fmt};

pub(crate) type Result<T> = core::result::Result<T, PolyComSchemeError>;

/// Polynomial commitment scheme errors.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PolyComSchemeError {
    /// The degree of the polynomial is higher than the maximum degree allowed.
    DegreeError,
    /// The public parameters are malformed.
    ParameterError,
    /// The public parameters could not be decoded.
    DeserializationError,
}

impl fmt::Display for PolyComSchemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            PolyComSchemeError::DegreeError => {
                "The degree of the polynomial is higher than the maximum degree allowed."
            }
            PolyComSchemeError::ParameterError => "Malformed public parameters.",
            PolyComSchemeError::DeserializationError => "Could not deserialize public parameters.",
        };

        write!(f, "{}", c)
    }
}

impl error::Error for PolyComSchemeError {}
