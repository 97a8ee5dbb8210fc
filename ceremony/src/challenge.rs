use crate::errors::{CeremonyError, Result};
use crate::primitives::same_ratio;
use digest::Digest;
use sha2::Sha512;
use zksetup_algebra::prelude::*;

/// Domain separation between the secrets of one round. A proof of knowledge
/// produced for one secret never verifies under another tag.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[repr(u8)]
pub enum DomainTag {
    /// The powers-of-tau secret.
    Tau = 1,
    /// The secret scaling `alpha * tau^i`.
    Alpha = 2,
    /// The secret scaling `beta * tau^i` and `beta` in G2.
    Beta = 3,
}

/// The public part of one participant secret `x`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ContributionKey<P: Pairing> {
    /// `s * G1` for a fresh blinding scalar `s`.
    pub sg: P::G1,
    /// `x * s * G1`.
    pub sxg: P::G1,
    /// `x * R`, where `R` is the challenge point derived from `sg`, `sxg`,
    /// the transcript and the tag.
    pub xr: P::G2,
}

/// Hash `sg || sxg || challenge || tag` onto G2.
pub fn gen_challenge_point<P: Pairing>(
    sg: &P::G1,
    sxg: &P::G1,
    challenge: &[u8],
    tag: DomainTag,
) -> P::G2 {
    let mut hasher = Sha512::new();
    hasher.update(sg.to_compressed_bytes());
    hasher.update(sxg.to_compressed_bytes());
    hasher.update(challenge);
    hasher.update([tag as u8]);
    P::G2::from_hash(hasher)
}

/// Publish a key for `secret` bound to the previous transcript.
/// The blinding scalar drawn from `prng` is dropped before returning.
pub fn gen_contribution_key<P: Pairing, R: CryptoRng + RngCore>(
    prng: &mut R,
    secret: &P::ScalarField,
    challenge: &[u8],
    tag: DomainTag,
) -> ContributionKey<P> {
    let s = P::ScalarField::random(prng);
    let sg = P::G1::get_base().mul(&s);
    let sxg = sg.mul(secret);
    let r = gen_challenge_point::<P>(&sg, &sxg, challenge, tag);
    let xr = r.mul(secret);

    ContributionKey { sg, sxg, xr }
}

impl<P: Pairing> ContributionKey<P> {
    /// Recompute the challenge point and check that the key proves knowledge
    /// of its secret: `e(sg, xr) == e(sxg, R)`.
    /// On success, returns the challenge point for use in the update checks.
    pub fn verify_knowledge(&self, challenge: &[u8], tag: DomainTag) -> Result<P::G2> {
        if self.sg == P::G1::get_identity() || self.sxg == P::G1::get_identity() {
            return Err(CeremonyError::InvalidContribution("degenerate key"));
        }

        let r = gen_challenge_point::<P>(&self.sg, &self.sxg, challenge, tag);
        if !same_ratio::<P>(&self.sg, &self.sxg, &self.xr, &r)? {
            return Err(CeremonyError::InvalidContribution("proof of knowledge"));
        }
        Ok(r)
    }

    /// Append the compressed key to a transcript.
    pub fn absorb<D: Digest>(&self, hasher: &mut D) {
        hasher.update(self.sg.to_compressed_bytes());
        hasher.update(self.sxg.to_compressed_bytes());
        hasher.update(self.xr.to_compressed_bytes());
    }
}
