use crate::plonk::domain::{bit_reverse, Radix2Domain};
use crate::poly_commit::field_polynomial::FpPolynomial;
use zksetup_algebra::{prelude::*, traits::Domain};

/// Return `[1, z, .., z^(n-1), u, u*z, .., u*z^(n-1), u^2, .., u^2*z^(n-1)]`,
/// the labels of the `3n` wire positions, for shifters `[u, u^2]`.
pub fn identity_permutation<F: Domain>(domain: &Radix2Domain<F>, shifter: &[F; 2]) -> Vec<F> {
    let n = domain.cardinality;
    let mut s_id = Vec::with_capacity(3 * n);
    for start in [F::one(), shifter[0], shifter[1]] {
        let mut cur = start;
        for _ in 0..n {
            s_id.push(cur);
            cur.mul_assign(&domain.generator);
        }
    }
    s_id
}

/// Interpolate evaluations on the domain into a polynomial in canonical form.
pub fn to_canonical<F: Domain>(domain: &Radix2Domain<F>, evals: &[F]) -> FpPolynomial<F> {
    let mut coefs = evals.to_vec();
    domain.fft_inverse_dif(&mut coefs);
    bit_reverse(&mut coefs);
    FpPolynomial::from_coefs(coefs)
}

/// Evaluations of the permutation polynomials `S1, S2, S3` on the domain:
/// row `i` of lane `j` holds the label of position `permutation[j * n + i]`.
pub fn permutation_lagrange<F: Domain>(
    domain: &Radix2Domain<F>,
    shifter: &[F; 2],
    permutation: &[usize],
) -> [Vec<F>; 3] {
    let n = domain.cardinality;
    assert_eq!(permutation.len(), 3 * n);

    let s_id = identity_permutation(domain, shifter);
    let lane = |j: usize| -> Vec<F> {
        permutation[j * n..(j + 1) * n]
            .iter()
            .map(|p| s_id[*p])
            .collect()
    };
    [lane(0), lane(1), lane(2)]
}

/// Compute `S1, S2, S3` in both the Lagrange and the canonical basis.
pub fn compute_lde<F: Domain>(
    domain: &Radix2Domain<F>,
    shifter: &[F; 2],
    permutation: &[usize],
) -> ([Vec<F>; 3], [FpPolynomial<F>; 3]) {
    let ls = permutation_lagrange(domain, shifter, permutation);
    let cs = [
        to_canonical(domain, &ls[0]),
        to_canonical(domain, &ls[1]),
        to_canonical(domain, &ls[2]),
    ];
    (ls, cs)
}

#[cfg(test)]
mod test {
    use super::*;
    use zksetup_algebra::bn254::BN254Scalar;

    type F = BN254Scalar;

    fn shifter(domain: &Radix2Domain<F>) -> [F; 2] {
        [domain.finer_generator, domain.finer_generator.square()]
    }

    #[test]
    fn test_identity_permutation_is_injective() {
        let domain = Radix2Domain::<F>::new(8).unwrap();
        let s_id = identity_permutation(&domain, &shifter(&domain));
        assert_eq!(s_id.len(), 24);
        assert_eq!(s_id[0], F::one());
        assert_eq!(s_id[8], domain.finer_generator);
        assert_eq!(s_id[19], domain.finer_generator.square().mul(&domain.generator.pow(&[3])));
        for i in 0..s_id.len() {
            for j in 0..i {
                assert_ne!(s_id[i], s_id[j]);
            }
        }
    }

    #[test]
    fn test_identity_lde() {
        let domain = Radix2Domain::<F>::new(4).unwrap();
        let sh = shifter(&domain);
        let permutation: Vec<usize> = (0..12).collect();
        let (ls, cs) = compute_lde(&domain, &sh, &permutation);

        // The identity permutation gives S1(X) = X, S2(X) = u*X, S3(X) = u^2*X.
        assert_eq!(ls[0], domain.elements());
        assert_eq!(cs[0].coefs, vec![F::zero(), F::one()]);
        assert_eq!(cs[1].coefs, vec![F::zero(), sh[0]]);
        assert_eq!(cs[2].coefs, vec![F::zero(), sh[1]]);
    }

    #[test]
    fn test_lde_evaluates_to_lagrange() {
        let domain = Radix2Domain::<F>::new(8).unwrap();
        let sh = shifter(&domain);
        let mut permutation: Vec<usize> = (0..24).collect();
        permutation.swap(1, 17);
        permutation.swap(5, 10);

        let (ls, cs) = compute_lde(&domain, &sh, &permutation);
        let s_id = identity_permutation(&domain, &sh);
        assert_eq!(ls[0][1], s_id[17]);
        assert_eq!(ls[2][1], s_id[1]);
        for j in 0..3 {
            for (i, z) in domain.elements().iter().enumerate() {
                assert_eq!(cs[j].eval(z), ls[j][i]);
            }
        }
    }
}
