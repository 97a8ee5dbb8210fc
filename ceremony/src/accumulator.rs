use crate::{
    challenge::{gen_contribution_key, ContributionKey, DomainTag},
    combination::linear_combination,
    errors::{CeremonyError, Result},
    primitives::{check_subgroup, powers, same_ratio, scale_group_vector},
};
use ark_std::{end_timer, start_timer};
use sha2::{Digest, Sha512};
use zksetup_algebra::prelude::*;

/// Parameters of a powers-of-tau ceremony.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PowersOfTauParams {
    /// The number of powers in G2, and of the alpha and beta vectors.
    /// `tau_g1` holds `2 * size - 1` powers.
    pub size: usize,
}

/// The running state of a powers-of-tau ceremony.
///
/// After contributions with secrets `(tau_j, alpha_j, beta_j)` every entry is
/// a generator scaled by the product of the secrets raised to its power, e.g.
/// `tau_g1[i] = (tau_1 * ... * tau_k)^i * G1`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Accumulator<P: Pairing> {
    /// `[tau^i * G1]` for `i < 2 * size - 1`.
    pub tau_g1: Vec<P::G1>,
    /// `[alpha * tau^i * G1]` for `i < size`.
    pub alpha_tau_g1: Vec<P::G1>,
    /// `[beta * tau^i * G1]` for `i < size`.
    pub beta_tau_g1: Vec<P::G1>,
    /// `[tau^i * G2]` for `i < size`.
    pub tau_g2: Vec<P::G2>,
    /// `beta * G2`.
    pub beta_g2: P::G2,
}

/// The keys one participant publishes for a round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct RoundKeys<P: Pairing> {
    /// Key of the tau secret.
    pub tau: ContributionKey<P>,
    /// Key of the alpha secret.
    pub alpha: ContributionKey<P>,
    /// Key of the beta secret.
    pub beta: ContributionKey<P>,
}

impl<P: Pairing> Accumulator<P> {
    /// The accumulator before any contribution: every entry is a generator.
    pub fn new(params: PowersOfTauParams) -> Result<Self> {
        if params.size < 2 {
            return Err(CeremonyError::EmptyInput);
        }
        let n = params.size;
        Ok(Self {
            tau_g1: vec![P::G1::get_base(); 2 * n - 1],
            alpha_tau_g1: vec![P::G1::get_base(); n],
            beta_tau_g1: vec![P::G1::get_base(); n],
            tau_g2: vec![P::G2::get_base(); n],
            beta_g2: P::G2::get_base(),
        })
    }

    /// The number of G2 powers.
    pub fn size(&self) -> usize {
        self.tau_g2.len()
    }

    /// Apply one participant's contribution with secrets drawn from `prng`.
    ///
    /// Returns the published keys together with the challenge for the next
    /// round. The secrets do not outlive this call.
    pub fn contribute<R: CryptoRng + RngCore>(
        &mut self,
        prng: &mut R,
        challenge: &[u8],
    ) -> Result<(RoundKeys<P>, Vec<u8>)> {
        let n = self.size();
        let contribute_time = start_timer!(|| format!("contribute to accumulator of size {}", n));

        let tau = P::ScalarField::random(prng);
        let alpha = P::ScalarField::random(prng);
        let beta = P::ScalarField::random(prng);

        let taus = powers(&tau, self.tau_g1.len());
        let alpha_taus: Vec<P::ScalarField> = taus[..n].iter().map(|t| alpha.mul(t)).collect();
        let beta_taus: Vec<P::ScalarField> = taus[..n].iter().map(|t| beta.mul(t)).collect();

        let scale_time = start_timer!(|| "scale vectors");
        self.tau_g1 = scale_group_vector(&self.tau_g1, &taus)?;
        self.alpha_tau_g1 = scale_group_vector(&self.alpha_tau_g1, &alpha_taus)?;
        self.beta_tau_g1 = scale_group_vector(&self.beta_tau_g1, &beta_taus)?;
        self.tau_g2 = scale_group_vector(&self.tau_g2, &taus[..n])?;
        self.beta_g2 = self.beta_g2.mul(&beta);
        end_timer!(scale_time);

        let keys = RoundKeys {
            tau: gen_contribution_key(prng, &tau, challenge, DomainTag::Tau),
            alpha: gen_contribution_key(prng, &alpha, challenge, DomainTag::Alpha),
            beta: gen_contribution_key(prng, &beta, challenge, DomainTag::Beta),
        };
        let next = self.next_challenge(challenge, &keys);

        end_timer!(contribute_time);
        Ok((keys, next))
    }

    /// Check that `next` was obtained from `prev` by one contribution with
    /// the given keys, and return the challenge for the following round.
    pub fn verify<R: CryptoRng + RngCore>(
        prng: &mut R,
        prev: &Self,
        next: &Self,
        keys: &RoundKeys<P>,
        challenge: &[u8],
    ) -> Result<Vec<u8>> {
        let verify_time = start_timer!(|| "verify contribution");

        next.check_shape(prev)?;

        let subgroup_time = start_timer!(|| "subgroup checks");
        check_subgroup(&next.tau_g1)?;
        check_subgroup(&next.alpha_tau_g1)?;
        check_subgroup(&next.beta_tau_g1)?;
        check_subgroup(&next.tau_g2)?;
        check_subgroup(&[next.beta_g2])?;
        end_timer!(subgroup_time);

        if next.tau_g1[0] != P::G1::get_base() || next.tau_g2[0] != P::G2::get_base() {
            return Err(CeremonyError::InvalidContribution("generator changed"));
        }
        if next.tau_g1[1] == P::G1::get_identity() {
            return Err(CeremonyError::InvalidContribution("degenerate tau"));
        }

        let r_tau = keys.tau.verify_knowledge(challenge, DomainTag::Tau)?;
        let r_alpha = keys.alpha.verify_knowledge(challenge, DomainTag::Alpha)?;
        let r_beta = keys.beta.verify_knowledge(challenge, DomainTag::Beta)?;

        let ensure = |ok: bool, check: &'static str| -> Result<()> {
            if ok {
                Ok(())
            } else {
                Err(CeremonyError::InvalidContribution(check))
            }
        };

        // Each secret was applied with the key's exponent.
        ensure(
            same_ratio::<P>(&next.tau_g1[1], &prev.tau_g1[1], &r_tau, &keys.tau.xr)?,
            "tau update in G1",
        )?;
        ensure(
            same_ratio::<P>(
                &next.alpha_tau_g1[0],
                &prev.alpha_tau_g1[0],
                &r_alpha,
                &keys.alpha.xr,
            )?,
            "alpha update",
        )?;
        ensure(
            same_ratio::<P>(
                &next.beta_tau_g1[0],
                &prev.beta_tau_g1[0],
                &r_beta,
                &keys.beta.xr,
            )?,
            "beta update in G1",
        )?;
        ensure(
            same_ratio::<P>(&keys.beta.sg, &keys.beta.sxg, &next.beta_g2, &prev.beta_g2)?,
            "beta update in G2",
        )?;
        ensure(
            same_ratio::<P>(&keys.tau.sg, &keys.tau.sxg, &next.tau_g2[1], &prev.tau_g2[1])?,
            "tau update in G2",
        )?;

        // Successive entries differ by the same tau.
        let powers_time = start_timer!(|| "power consistency");
        let tau_g2_1 = &next.tau_g2[1];
        let g2 = &next.tau_g2[0];
        for (vector, check) in [
            (&next.tau_g1, "tau_g1 powers"),
            (&next.alpha_tau_g1, "alpha_tau_g1 powers"),
            (&next.beta_tau_g1, "beta_tau_g1 powers"),
        ] {
            let (l1, l2) = linear_combination(prng, vector)?;
            ensure(same_ratio::<P>(&l1, &l2, tau_g2_1, g2)?, check)?;
        }
        let (l1, l2) = linear_combination(prng, &next.tau_g2)?;
        ensure(
            same_ratio::<P>(&next.tau_g1[1], &next.tau_g1[0], &l1, &l2)?,
            "tau_g2 powers",
        )?;
        end_timer!(powers_time);

        let res = next.next_challenge(challenge, keys);
        end_timer!(verify_time);
        Ok(res)
    }

    fn check_shape(&self, prev: &Self) -> Result<()> {
        let n = prev.size();
        for (found, expected) in [
            (self.tau_g1.len(), prev.tau_g1.len()),
            (self.alpha_tau_g1.len(), n),
            (self.beta_tau_g1.len(), n),
            (self.tau_g2.len(), n),
        ] {
            if found != expected {
                return Err(CeremonyError::LengthMismatch { expected, found });
            }
        }
        if n < 2 || self.tau_g1.len() != 2 * n - 1 {
            return Err(CeremonyError::InvalidContribution("malformed accumulator"));
        }
        Ok(())
    }

    /// SHA-512 of the previous challenge, the accumulator and the round keys.
    pub fn next_challenge(&self, challenge: &[u8], keys: &RoundKeys<P>) -> Vec<u8> {
        let mut hasher = Sha512::new();
        hasher.update(challenge);
        for p in self.tau_g1.iter() {
            hasher.update(p.to_compressed_bytes());
        }
        for p in self.alpha_tau_g1.iter().chain(self.beta_tau_g1.iter()) {
            hasher.update(p.to_compressed_bytes());
        }
        for p in self.tau_g2.iter() {
            hasher.update(p.to_compressed_bytes());
        }
        hasher.update(self.beta_g2.to_compressed_bytes());
        keys.tau.absorb(&mut hasher);
        keys.alpha.absorb(&mut hasher);
        keys.beta.absorb(&mut hasher);
        hasher.finalize().to_vec()
    }
}
