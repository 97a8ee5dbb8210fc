/// The number of bytes for a scalar value over BN254.
pub const BN254_SCALAR_LEN: usize = 32;

#[macro_use]
mod curve;

mod fr;
pub use fr::*;

mod g1;
pub use g1::*;

mod g2;
pub use g2::*;

mod gt;
pub use gt::*;

mod pairing;
pub use pairing::*;

#[cfg(test)]
mod bn254_groups_test {
    use crate::{
        bn254::{BN254Gt, BN254PairingEngine, BN254Scalar, BN254G1, BN254G2},
        prelude::*,
        traits::{
            group_tests::{test_multi_exp, test_scalar_operations},
            LegendreSymbol, Pairing,
        },
    };
    use ark_bn254::{Fq2, Fr, G2Affine};
    use ark_ff::{BigInteger, PrimeField};
    use ark_ec::AffineRepr;
    use sha2::{Digest, Sha512};

    #[test]
    fn test_scalar_ops() {
        test_scalar_operations::<BN254Scalar>();
    }

    #[test]
    fn test_multi_exponentiation() {
        test_multi_exp::<BN254G1>();
        test_multi_exp::<BN254G2>();
    }

    #[test]
    fn scalar_from_to_bytes() {
        let small_value = BN254Scalar::from(165747u32);
        let small_value_bytes = small_value.to_bytes();
        let mut expected = [0u8; 32];
        expected[..3].copy_from_slice(&[115, 135, 2]);
        assert_eq!(small_value_bytes, expected);

        let small_value_from_bytes = BN254Scalar::from_bytes(&small_value_bytes).unwrap();
        assert_eq!(small_value_from_bytes, small_value);
        assert_eq!(BN254Scalar::from_bytes(&[115, 135, 2]).unwrap(), small_value);

        let minus_one = BN254Scalar::one().neg();
        assert_eq!(
            BN254Scalar::from_bytes(&minus_one.to_bytes()).unwrap(),
            minus_one
        );

        // Values at or above the modulus are not reduced.
        let modulus = Fr::MODULUS.to_bytes_le();
        assert_eq!(
            BN254Scalar::from_bytes(&modulus),
            Err(AlgebraError::DeserializationError)
        );
        assert!(BN254Scalar::from_bytes(&[0xff; 32]).is_err());
        assert!(BN254Scalar::from_bytes(&[0u8; 33]).is_err());

        let non_canonical = bincode::serialize(&modulus).unwrap();
        assert!(bincode::deserialize::<BN254Scalar>(&non_canonical).is_err());
    }

    #[test]
    fn multiplicative_generator_is_non_residue() {
        let u = BN254Scalar::multiplicative_generator();
        assert_eq!(u.legendre(), LegendreSymbol::QuadraticNonResidue);
    }

    #[test]
    fn bilinear_properties() {
        let identity_gt_computed =
            BN254PairingEngine::pairing(&BN254G1::get_identity(), &BN254G2::get_identity());
        assert_eq!(BN254Gt::get_identity(), identity_gt_computed);

        let mut prng = test_rng();

        let s1 = BN254Scalar::random(&mut prng);
        let s2 = BN254Scalar::random(&mut prng);

        let base_g1 = BN254G1::get_base();
        let base_g2 = BN254G2::get_base();

        let lhs = BN254PairingEngine::pairing(&base_g1.mul(&s1), &base_g2.mul(&s2));
        let base_gt = BN254Gt::get_base();
        assert_eq!(lhs, base_gt.mul(&s1).mul(&s2));
        assert_eq!(
            lhs,
            BN254PairingEngine::pairing(&base_g1.mul(&s1.mul(&s2)), &base_g2)
        );

        let product = BN254PairingEngine::product_of_pairings(
            &[base_g1.mul(&s1), base_g1.mul(&s2)],
            &[base_g2.mul(&s2).neg(), base_g2.mul(&s1)],
        );
        assert_eq!(product, BN254Gt::get_identity());
        assert!(base_gt.is_in_subgroup());
        assert!(lhs.is_in_subgroup());
    }

    #[test]
    fn hash_to_group_is_deterministic() {
        let mut h1 = Sha512::new();
        h1.update(b"powers of tau");
        let mut h2 = Sha512::new();
        h2.update(b"powers of tau");
        let mut h3 = Sha512::new();
        h3.update(b"powers of tau!");

        let p1 = BN254G2::from_hash(h1);
        let p2 = BN254G2::from_hash(h2);
        let p3 = BN254G2::from_hash(h3);
        assert_eq!(p1, p2);
        assert_ne!(p1, p3);
        assert!(p1.is_in_subgroup());
        assert!(p3.is_in_subgroup());
        assert_ne!(p1, BN254G2::get_identity());

        let mut h = Sha512::new();
        h.update(b"g1");
        assert!(BN254G1::from_hash(h).is_in_subgroup());
    }

    #[test]
    fn subgroup_membership() {
        let mut prng = test_rng();
        assert!(BN254G1::random(&mut prng).is_in_subgroup());
        assert!(BN254G2::random(&mut prng).is_in_subgroup());
        assert!(BN254G1::get_identity().is_in_subgroup());

        // A point off the curve.
        let mut bytes = BN254G1::get_base().mul(&BN254Scalar::from(7u32)).to_unchecked_bytes();
        bytes[0] ^= 1;
        let bad = BN254G1::from_unchecked_bytes(&bytes).unwrap();
        assert!(!bad.is_in_subgroup());

        // A point on the twist that is outside the prime-order subgroup.
        let outside = loop {
            let x = Fq2::rand(&mut prng);
            if let Some(p) = G2Affine::get_point_from_x_unchecked(x, false) {
                break p;
            }
        };
        assert!(outside.is_on_curve());
        assert!(!BN254G2(outside.into_group()).is_in_subgroup());
    }

    #[test]
    fn test_serialization_of_points() {
        let mut prng = test_rng();

        let g1 = BN254G1::random(&mut prng);
        let g1_bytes = g1.to_compressed_bytes();
        assert_eq!(g1_bytes.len(), BN254G1::COMPRESSED_LEN);
        let g1_recovered = BN254G1::from_compressed_bytes(&g1_bytes).unwrap();
        assert_eq!(g1, g1_recovered);

        let g2 = BN254G2::random(&mut prng);
        let g2_bytes = g2.to_compressed_bytes();
        assert_eq!(g2_bytes.len(), BN254G2::COMPRESSED_LEN);
        let g2_recovered = BN254G2::from_compressed_bytes(&g2_bytes).unwrap();
        assert_eq!(g2, g2_recovered);
        let g2_unchecked = BN254G2::from_unchecked_bytes(&g2.to_unchecked_bytes()).unwrap();
        assert_eq!(g2, g2_unchecked);

        let gt = BN254Gt::random(&mut prng);
        let gt_bytes = gt.to_compressed_bytes();
        let gt_recovered = BN254Gt::from_compressed_bytes(&gt_bytes).unwrap();
        assert_eq!(gt, gt_recovered);
    }
}
