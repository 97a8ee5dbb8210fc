use crate::bn254::{BN254Gt, BN254Scalar, BN254G1, BN254G2};
use crate::traits::Pairing;
use ark_bn254::{Bn254, G1Projective, G2Projective};
use ark_ec::{pairing::Pairing as ArkPairing, CurveGroup};
use ark_std::vec::Vec;

/// The optimal ate pairing on BN254.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BN254PairingEngine;

impl Pairing for BN254PairingEngine {
    type ScalarField = BN254Scalar;
    type G1 = BN254G1;
    type G2 = BN254G2;
    type Gt = BN254Gt;

    #[inline]
    fn pairing(a: &Self::G1, b: &Self::G2) -> Self::Gt {
        BN254Gt(Bn254::pairing(a.0, b.0).0)
    }

    /// Shares the final exponentiation across all pairs. Extra elements of
    /// the longer slice are ignored.
    fn product_of_pairings(a: &[Self::G1], b: &[Self::G2]) -> Self::Gt {
        let a: Vec<G1Projective> = a.iter().map(|x| x.0).collect();
        let b: Vec<G2Projective> = b.iter().map(|x| x.0).collect();
        let a = G1Projective::normalize_batch(&a);
        let b = G2Projective::normalize_batch(&b);
        BN254Gt(Bn254::multi_pairing(a, b).0)
    }
}
