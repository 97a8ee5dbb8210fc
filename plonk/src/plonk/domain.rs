use crate::errors::{PlonkError, Result};
use ark_poly::{EvaluationDomain, Radix2EvaluationDomain};
use zksetup_algebra::{prelude::*, traits::Domain};

/// A multiplicative subgroup of order `2^k` in the scalar field, used to move
/// between evaluations on the subgroup and coefficients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Radix2Domain<F> {
    /// Order of the subgroup.
    pub cardinality: usize,
    /// `1 / cardinality`.
    pub cardinality_inv: F,
    /// Generator `z` of the subgroup.
    pub generator: F,
    /// `1 / z`.
    pub generator_inv: F,
    /// A quadratic non-residue, so none of its powers up to 2 fall in the subgroup.
    pub finer_generator: F,
}

impl<F: Domain> Radix2Domain<F> {
    /// The smallest radix-2 domain holding at least `size` elements.
    pub fn new(size: usize) -> Result<Self> {
        let domain = Radix2EvaluationDomain::<F::Field>::new(size)
            .ok_or(PlonkError::GroupNotFound(size))?;

        Ok(Self {
            cardinality: domain.size(),
            cardinality_inv: F::from_field(domain.size_inv),
            generator: F::from_field(domain.group_gen),
            generator_inv: F::from_field(domain.group_gen_inv),
            finer_generator: F::multiplicative_generator(),
        })
    }

    /// Return `[1, z, ..., z^(n-1)]`.
    pub fn elements(&self) -> Vec<F> {
        let mut res = Vec::with_capacity(self.cardinality);
        let mut cur = F::one();
        for _ in 0..self.cardinality {
            res.push(cur);
            cur.mul_assign(&self.generator);
        }
        res
    }

    /// Inverse transform by decimation in frequency. `a` holds evaluations in
    /// natural order; on return it holds the coefficients in bit-reversed
    /// order, see [`bit_reverse`].
    pub fn fft_inverse_dif(&self, a: &mut [F]) {
        assert_eq!(a.len(), self.cardinality);
        dif(a, &self.generator_inv);
        for x in a.iter_mut() {
            x.mul_assign(&self.cardinality_inv);
        }
    }

    /// Forward transform by decimation in time. `a` holds coefficients in
    /// natural order; on return it holds the evaluations at `z^i`.
    pub fn fft(&self, a: &mut [F]) {
        assert_eq!(a.len(), self.cardinality);
        bit_reverse(a);

        let n = a.len();
        let mut m = 1;
        while m < n {
            let w_m = self.generator.pow(&[(n / (2 * m)) as u64]);
            for k in (0..n).step_by(2 * m) {
                let mut w = F::one();
                for j in 0..m {
                    let t = w.mul(&a[k + j + m]);
                    let u = a[k + j];
                    a[k + j] = u.add(&t);
                    a[k + j + m] = u.sub(&t);
                    w.mul_assign(&w_m);
                }
            }
            m *= 2;
        }
    }
}

// Gentleman-Sande butterflies with `root` of order `a.len()`.
fn dif<F: Scalar>(a: &mut [F], root: &F) {
    let n = a.len();
    let mut m = n;
    let mut w_m = *root;
    while m >= 2 {
        let half = m / 2;
        for k in (0..n).step_by(m) {
            let mut w = F::one();
            for j in 0..half {
                let u = a[k + j];
                let v = a[k + j + half];
                a[k + j] = u.add(&v);
                a[k + j + half] = u.sub(&v).mul(&w);
                w.mul_assign(&w_m);
            }
        }
        w_m = w_m.square();
        m = half;
    }
}

/// Permute `a` so that index `i` moves to the index whose `log2(len)` bits are
/// those of `i` reversed. `a.len()` must be a power of two.
pub fn bit_reverse<T>(a: &mut [T]) {
    let n = a.len();
    if n <= 1 {
        return;
    }
    assert!(n.is_power_of_two());

    let shift = usize::BITS - n.trailing_zeros();
    for i in 0..n {
        let j = i.reverse_bits() >> shift;
        if i < j {
            a.swap(i, j);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::poly_commit::field_polynomial::FpPolynomial;
    use zksetup_algebra::bn254::BN254Scalar;

    type F = BN254Scalar;

    #[test]
    fn test_domain_size() {
        let domain = Radix2Domain::<F>::new(7).unwrap();
        assert_eq!(domain.cardinality, 8);
        assert_eq!(domain.generator.pow(&[8]), F::one());
        assert_ne!(domain.generator.pow(&[4]), F::one());
        assert_eq!(domain.generator.mul(&domain.generator_inv), F::one());
        assert_eq!(domain.cardinality_inv.mul(&F::from(8u32)), F::one());

        assert_eq!(Radix2Domain::<F>::new(8).unwrap().cardinality, 8);
        assert_eq!(Radix2Domain::<F>::new(1).unwrap().cardinality, 1);
        assert_eq!(
            Radix2Domain::<F>::new((1 << 20) - 3).map(|d| d.cardinality),
            Ok(1 << 20)
        );
        // BN254's scalar field has 2-adicity 28.
        assert_eq!(
            Radix2Domain::<F>::new((1 << 28) + 1),
            Err(PlonkError::GroupNotFound((1 << 28) + 1))
        );
    }

    #[test]
    fn test_bit_reverse() {
        let mut a: Vec<usize> = (0..8).collect();
        bit_reverse(&mut a);
        assert_eq!(a, vec![0, 4, 2, 6, 1, 5, 3, 7]);
        bit_reverse(&mut a);
        assert_eq!(a, (0..8).collect::<Vec<_>>());

        let mut single = vec![5usize];
        bit_reverse(&mut single);
        assert_eq!(single, vec![5]);
        let mut empty: Vec<usize> = vec![];
        bit_reverse(&mut empty);
    }

    #[test]
    fn test_inverse_transform_interpolates() {
        let mut prng = test_rng();
        let domain = Radix2Domain::<F>::new(16).unwrap();
        let evals: Vec<F> = (0..16).map(|_| F::random(&mut prng)).collect();

        let mut coefs = evals.clone();
        domain.fft_inverse_dif(&mut coefs);
        bit_reverse(&mut coefs);

        let poly = FpPolynomial::from_coefs(coefs.clone());
        for (i, z) in domain.elements().iter().enumerate() {
            assert_eq!(poly.eval(z), evals[i]);
        }

        domain.fft(&mut coefs);
        assert_eq!(coefs, evals);
    }

    #[test]
    fn test_forward_transform() {
        let domain = Radix2Domain::<F>::new(4).unwrap();
        let coefs: Vec<F> = (1..=4u32).map(F::from).collect();
        let poly = FpPolynomial::from_coefs(coefs.clone());

        let mut evals = coefs;
        domain.fft(&mut evals);
        for (i, z) in domain.elements().iter().enumerate() {
            assert_eq!(evals[i], poly.eval(z));
        }

        let trivial = Radix2Domain::<F>::new(1).unwrap();
        let mut one = vec![F::from(3u32)];
        trivial.fft_inverse_dif(&mut one);
        assert_eq!(one, vec![F::from(3u32)]);
    }
}
