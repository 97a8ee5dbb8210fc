use ark_std::{error, fmt};

/// Errors raised while decoding or inverting algebraic objects.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AlgebraError {
    /// The bytes do not encode a point of the expected group.
    DecompressElementError,
    /// The bytes do not encode an object of the expected type.
    DeserializationError,
    /// Zero has no inverse.
    GroupInversionError,
}

impl fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AlgebraError::DecompressElementError => "invalid group element encoding",
            AlgebraError::DeserializationError => "could not deserialize object",
            AlgebraError::GroupInversionError => "zero is not invertible",
        })
    }
}

impl error::Error for AlgebraError {}
