use crate::poly_commit::{
    errors::{PolyComSchemeError, Result},
    field_polynomial::FpPolynomial,
    pcs::PolyComScheme,
};
use zksetup_algebra::{
    bn254::BN254PairingEngine,
    prelude::*,
    traits::{Domain, Pairing},
};

/// KZG commitment scheme over the `Group`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Eq, PartialEq, Default)]
pub struct KZGCommitment<G>(pub G);

/// KZG commitment scheme about `PairingEngine`.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct KZGCommitmentScheme<P: Pairing> {
    /// public parameter about G1.
    pub public_parameter_group_1: Vec<P::G1>,
    /// public parameter about G2.
    pub public_parameter_group_2: Vec<P::G2>,
}

impl<P: Pairing> KZGCommitmentScheme<P> {
    /// Create a new instance of a KZG polynomial commitment scheme from a
    /// known trapdoor. Only suitable for tests and benchmarks.
    /// `max_degree` - max degree of the polynomial,
    /// `prng` - pseudo-random generator.
    pub fn new<R: CryptoRng + RngCore>(max_degree: usize, prng: &mut R) -> KZGCommitmentScheme<P> {
        let s = P::ScalarField::random(prng);

        let mut public_parameter_group_1: Vec<P::G1> = Vec::with_capacity(max_degree + 1);
        let mut elem_g1 = P::G1::get_base();
        for _ in 0..=max_degree {
            public_parameter_group_1.push(elem_g1);
            elem_g1 = elem_g1.mul(&s);
        }

        let elem_g2 = P::G2::get_base();
        let public_parameter_group_2 = vec![elem_g2, elem_g2.mul(&s)];

        KZGCommitmentScheme {
            public_parameter_group_1,
            public_parameter_group_2,
        }
    }

    /// Build the scheme from the powers produced by a setup ceremony:
    /// `[tau^i * G1]` and at least `[G2, tau * G2]`.
    pub fn from_parameters(g1_powers: Vec<P::G1>, g2_powers: Vec<P::G2>) -> Result<Self> {
        if g1_powers.is_empty() || g2_powers.len() < 2 {
            return Err(PolyComSchemeError::ParameterError);
        }
        if g1_powers[0] != P::G1::get_base() || g2_powers[0] != P::G2::get_base() {
            return Err(PolyComSchemeError::ParameterError);
        }

        Ok(KZGCommitmentScheme {
            public_parameter_group_1: g1_powers,
            public_parameter_group_2: g2_powers,
        })
    }

    /// Serialize the parameters to unchecked bytes.
    pub fn to_unchecked_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![];
        let len_1 = self.public_parameter_group_1.len() as u32;
        let len_2 = self.public_parameter_group_2.len() as u32;
        bytes.extend(len_1.to_le_bytes());
        bytes.extend(len_2.to_le_bytes());

        for i in &self.public_parameter_group_1 {
            bytes.extend(i.to_unchecked_bytes());
        }
        for i in &self.public_parameter_group_2 {
            bytes.extend(i.to_unchecked_bytes());
        }
        bytes
    }

    /// Deserialize the parameters from unchecked bytes, with the same
    /// shape checks as [`KZGCommitmentScheme::from_parameters`].
    pub fn from_unchecked_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < 8 {
            return Err(PolyComSchemeError::DeserializationError);
        }
        let mut len_1_bytes = [0u8; 4];
        let mut len_2_bytes = [0u8; 4];
        len_1_bytes.copy_from_slice(&bytes[0..4]);
        len_2_bytes.copy_from_slice(&bytes[4..8]);
        let len_1 = u32::from_le_bytes(len_1_bytes) as usize;
        let len_2 = u32::from_le_bytes(len_2_bytes) as usize;
        let n_1 = P::G1::unchecked_size();
        let n_2 = P::G2::unchecked_size();

        if bytes.len() != 8 + n_1 * len_1 + n_2 * len_2 {
            return Err(PolyComSchemeError::DeserializationError);
        }

        let bytes_1 = &bytes[8..8 + n_1 * len_1];
        let bytes_2 = &bytes[8 + n_1 * len_1..];

        let p1 = bytes_1
            .chunks_exact(n_1)
            .map(P::G1::from_unchecked_bytes)
            .collect::<core::result::Result<Vec<_>, _>>()
            .map_err(|_| PolyComSchemeError::DeserializationError)?;
        let p2 = bytes_2
            .chunks_exact(n_2)
            .map(P::G2::from_unchecked_bytes)
            .collect::<core::result::Result<Vec<_>, _>>()
            .map_err(|_| PolyComSchemeError::DeserializationError)?;

        Self::from_parameters(p1, p2)
    }
}

/// KZG commitment scheme over the BN254 curve
pub type KZGCommitmentSchemeBN254 = KZGCommitmentScheme<BN254PairingEngine>;

impl<P: Pairing> PolyComScheme for KZGCommitmentScheme<P>
where
    P::ScalarField: Domain,
{
    type Field = P::ScalarField;
    type Commitment = KZGCommitment<P::G1>;

    fn nb_coefficients(&self) -> usize {
        self.public_parameter_group_1.len()
    }

    fn commit(&self, polynomial: &FpPolynomial<P::ScalarField>) -> Result<Self::Commitment> {
        let coefs = polynomial.get_coefs_ref();
        let degree = polynomial.degree();

        if degree + 1 > self.public_parameter_group_1.len() {
            return Err(PolyComSchemeError::DegreeError);
        }

        let coefs_ref: Vec<&P::ScalarField> = coefs.iter().collect();
        let pub_param_group_1_as_ref: Vec<&P::G1> = self.public_parameter_group_1
            [0..coefs.len()]
            .iter()
            .collect();

        let commitment_value = P::G1::multi_exp(&coefs_ref[..], &pub_param_group_1_as_ref[..]);

        Ok(KZGCommitment(commitment_value))
    }
}
