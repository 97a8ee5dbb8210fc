use crate::poly_commit::{errors::Result, field_polynomial::FpPolynomial};
use ark_std::fmt::Debug;
use serde::{Deserialize, Serialize};
use zksetup_algebra::traits::Domain;

/// Polynomial commitment scheme trait. Only the committing side is needed to
/// preprocess a circuit.
pub trait PolyComScheme: Sized {
    /// Type of prime field.
    type Field: Domain;

    /// Type of commitment produced by the scheme.
    type Commitment: Clone
        + Debug
        + Default
        + PartialEq
        + Eq
        + Serialize
        + for<'de> Deserialize<'de>;

    /// Return the number of coefficients a committed polynomial may have.
    /// Zero for empty parameters.
    fn nb_coefficients(&self) -> usize;

    /// Return the maximum degree of a polynomial the scheme can commit to.
    fn max_degree(&self) -> usize {
        self.nb_coefficients().saturating_sub(1)
    }

    /// Commit to the polynomial, the commitment is binding.
    fn commit(&self, polynomial: &FpPolynomial<Self::Field>) -> Result<Self::Commitment>;
}
