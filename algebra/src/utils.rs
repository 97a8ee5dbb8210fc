use crate::prelude::*;
use ark_std::{string::String, vec::Vec};
use base64::alphabet::URL_SAFE;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use digest::generic_array::typenum::U64;
use digest::Digest;
use rand_chacha::ChaCha20Rng;

const BASE64_PADDING_CONFIG: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

const BASE64_ENGINE: GeneralPurpose = GeneralPurpose::new(&URL_SAFE, BASE64_PADDING_CONFIG);

/// Convert the input into the base64 encoding
pub fn b64enc<T: ?Sized + AsRef<[u8]>>(input: &T) -> String {
    BASE64_ENGINE.encode(input)
}

/// Reconstruct from the base64 encoding
pub fn b64dec<T: ?Sized + AsRef<[u8]>>(input: &T) -> Result<Vec<u8>> {
    BASE64_ENGINE
        .decode(input)
        .map_err(|_| AlgebraError::DeserializationError)
}

/// Derive a ChaCha20Rng PRNG from a digest from a hash function
pub fn derive_prng_from_hash<D>(hash: D) -> ChaCha20Rng
where
    D: Digest<OutputSize = U64> + Default,
{
    const SEED_SIZE: usize = 32;
    let mut seed: [u8; SEED_SIZE] = [0; SEED_SIZE];
    let result = hash.finalize();
    seed.copy_from_slice(&result[0..SEED_SIZE]);
    ChaCha20Rng::from_seed(seed)
}

#[cfg(test)]
mod test {
    use ark_std::vec;
    use rand_chacha::rand_core::RngCore;
    use sha2::{Digest, Sha512};

    #[test]
    fn test_b64_round_trip() {
        let data = vec![0u8, 1, 2, 250, 251, 252, 253, 254, 255];
        let encoded = super::b64enc(&data);
        assert_eq!(super::b64dec(&encoded).unwrap(), data);
        assert!(super::b64dec("not*base64").is_err());
    }

    #[test]
    fn test_derive_prng_from_hash() {
        let mut h1 = Sha512::new();
        h1.update(b"zksetup");
        let mut h2 = Sha512::new();
        h2.update(b"zksetup");
        let mut h3 = Sha512::new();
        h3.update(b"zksetup!");

        let a = super::derive_prng_from_hash(h1).next_u64();
        let b = super::derive_prng_from_hash(h2).next_u64();
        let c = super::derive_prng_from_hash(h3).next_u64();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
