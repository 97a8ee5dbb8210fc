use crate::errors::{CeremonyError, Result};
use zksetup_algebra::prelude::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Return `[1, a, a^2, ..., a^(n-1)]`.
pub fn powers<S: Scalar>(a: &S, n: usize) -> Vec<S> {
    let mut result = Vec::with_capacity(n);
    let mut cur = S::one();
    for _ in 0..n {
        result.push(cur);
        cur.mul_assign(a);
    }
    result
}

/// Return `[s_0 * P_0, s_1 * P_1, ...]`.
pub fn scale_group_vector<G: Group>(points: &[G], scalars: &[G::ScalarType]) -> Result<Vec<G>> {
    if points.len() != scalars.len() {
        return Err(CeremonyError::LengthMismatch {
            expected: points.len(),
            found: scalars.len(),
        });
    }

    #[cfg(not(feature = "parallel"))]
    let scaled = points
        .iter()
        .zip(scalars.iter())
        .map(|(p, s)| p.mul(s))
        .collect();

    #[cfg(feature = "parallel")]
    let scaled = points
        .par_iter()
        .zip(scalars.par_iter())
        .map(|(p, s)| p.mul(s))
        .collect();

    Ok(scaled)
}

/// Fail with [`CeremonyError::NotInSubgroup`] unless every point is a member
/// of the prime-order subgroup.
pub fn check_subgroup<G: Group>(points: &[G]) -> Result<()> {
    #[cfg(not(feature = "parallel"))]
    let all_in = points.iter().all(|p| p.is_in_subgroup());

    #[cfg(feature = "parallel")]
    let all_in = points.par_iter().all(|p| p.is_in_subgroup());

    if all_in {
        Ok(())
    } else {
        Err(CeremonyError::NotInSubgroup)
    }
}

/// Check `e(a1, a2) == e(b1, b2)`.
///
/// This holds exactly when `b1 = k * a1` and `a2 = k * b2` for a common `k`,
/// so it proves that two pairs share a ratio without revealing it. Points
/// outside the prime-order subgroup are rejected with an error rather than
/// answered with `false`.
pub fn same_ratio<P: Pairing>(a1: &P::G1, b1: &P::G1, a2: &P::G2, b2: &P::G2) -> Result<bool> {
    if !a1.is_in_subgroup() || !b1.is_in_subgroup() {
        return Err(CeremonyError::NotInSubgroup);
    }
    if !a2.is_in_subgroup() || !b2.is_in_subgroup() {
        return Err(CeremonyError::NotInSubgroup);
    }

    let res = P::product_of_pairings(&[*a1, *b1], &[a2.neg(), *b2]);
    Ok(res == P::Gt::get_identity())
}

#[cfg(test)]
mod test {
    use super::*;
    use zksetup_algebra::bn254::{BN254PairingEngine, BN254Scalar, BN254G1, BN254G2};

    #[test]
    fn test_powers() {
        let mut prng = test_rng();
        let a = BN254Scalar::random(&mut prng);
        let p = powers(&a, 10);
        assert_eq!(p.len(), 10);
        assert_eq!(p[0], BN254Scalar::one());
        for (i, v) in p.iter().enumerate() {
            assert_eq!(*v, a.pow(&[i as u64]));
        }
        assert!(powers(&a, 0).is_empty());
    }

    #[test]
    fn test_scale_identity_and_zero() {
        let mut prng = test_rng();
        let points: Vec<BN254G1> = (0..8).map(|_| BN254G1::random(&mut prng)).collect();

        let ones = vec![BN254Scalar::one(); 8];
        assert_eq!(scale_group_vector(&points, &ones).unwrap(), points);

        let zeros = vec![BN254Scalar::zero(); 8];
        let scaled = scale_group_vector(&points, &zeros).unwrap();
        assert!(scaled.iter().all(|p| *p == BN254G1::get_identity()));

        let scalars: Vec<BN254Scalar> = (0..8).map(|_| BN254Scalar::random(&mut prng)).collect();
        let scaled = scale_group_vector(&points, &scalars).unwrap();
        for i in 0..8 {
            assert_eq!(scaled[i], points[i].mul(&scalars[i]));
        }

        let g2 = vec![BN254G2::get_base(); 3];
        let scaled = scale_group_vector(&g2, &ones[..3]).unwrap();
        assert_eq!(scaled, g2);
    }

    #[test]
    fn test_scale_length_mismatch() {
        let points = vec![BN254G1::get_base(); 3];
        let scalars = vec![BN254Scalar::one(); 2];
        assert_eq!(
            scale_group_vector(&points, &scalars),
            Err(CeremonyError::LengthMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_same_ratio() {
        let mut prng = test_rng();
        let k = BN254Scalar::random(&mut prng);
        let a1 = BN254G1::random(&mut prng);
        let b2 = BN254G2::random(&mut prng);
        let b1 = a1.mul(&k);
        let a2 = b2.mul(&k);

        assert!(same_ratio::<BN254PairingEngine>(&a1, &b1, &a2, &b2).unwrap());

        let perturbed = b1.add(&BN254G1::get_base());
        assert!(!same_ratio::<BN254PairingEngine>(&a1, &perturbed, &a2, &b2).unwrap());

        let perturbed = a2.double();
        assert!(!same_ratio::<BN254PairingEngine>(&a1, &b1, &perturbed, &b2).unwrap());
    }

    #[test]
    fn test_same_ratio_rejects_points_outside_subgroup() {
        let mut bytes = BN254G1::get_base().to_unchecked_bytes();
        bytes[0] ^= 1;
        let bad = BN254G1::from_unchecked_bytes(&bytes).unwrap();
        let g1 = BN254G1::get_base();
        let g2 = BN254G2::get_base();

        assert_eq!(
            same_ratio::<BN254PairingEngine>(&bad, &g1, &g2, &g2),
            Err(CeremonyError::NotInSubgroup)
        );
        assert_eq!(check_subgroup(&[g1, bad]), Err(CeremonyError::NotInSubgroup));
        assert!(check_subgroup(&[g1, g1.double()]).is_ok());
    }
}
