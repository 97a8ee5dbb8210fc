use crate::errors::{CeremonyError, Result};
use zksetup_algebra::prelude::*;

fn random_scalars<S: Scalar, R: CryptoRng + RngCore>(prng: &mut R, n: usize) -> Vec<S> {
    (0..n).map(|_| S::random(prng)).collect()
}

/// Return `sum_i r_i * P_i`.
pub fn random_linear_combination<G: Group>(points: &[G], scalars: &[G::ScalarType]) -> Result<G> {
    if points.len() != scalars.len() {
        return Err(CeremonyError::LengthMismatch {
            expected: points.len(),
            found: scalars.len(),
        });
    }
    let scalars_ref = scalars.iter().collect::<Vec<_>>();
    let points_ref = points.iter().collect::<Vec<_>>();
    Ok(G::multi_exp(&scalars_ref, &points_ref))
}

/// Return `(sum_i r_i * A_i, sum_i r_i * B_i)` for fresh random `r_i`.
///
/// If `B_i = k * A_i` for every `i` then the outputs share the same ratio `k`;
/// otherwise they do so only with negligible probability.
pub fn merge<G: Group, R: CryptoRng + RngCore>(prng: &mut R, a: &[G], b: &[G]) -> Result<(G, G)> {
    if a.len() != b.len() {
        return Err(CeremonyError::LengthMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    if a.is_empty() {
        return Err(CeremonyError::EmptyInput);
    }

    let r = random_scalars::<G::ScalarType, R>(prng, a.len());
    Ok((
        random_linear_combination(a, &r)?,
        random_linear_combination(b, &r)?,
    ))
}

/// Return `(sum_i r_i * A_i, sum_i r_i * A_{i+1})` for fresh random `r_i`.
///
/// For a sequence of consecutive powers `A_i = tau^i * G` the second output
/// is `tau` times the first.
pub fn linear_combination<G: Group, R: CryptoRng + RngCore>(
    prng: &mut R,
    a: &[G],
) -> Result<(G, G)> {
    if a.len() < 2 {
        return Err(CeremonyError::EmptyInput);
    }
    let n = a.len();
    merge(prng, &a[..n - 1], &a[1..])
}
