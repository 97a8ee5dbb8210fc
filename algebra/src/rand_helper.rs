use rand_chacha::{rand_core::SeedableRng, ChaChaRng};

/// Seed used by [`test_rng`] unless `ZKSETUP_TEST_SEED` overrides it.
pub const DEFAULT_TEST_SEED: u64 = 0x7a6b_7365_7475_7031;

/// A ChaCha generator for tests and benchmarks. Never use it for a real
/// ceremony contribution.
///
/// Every call restarts the same stream, so failures replay. Set
/// `ZKSETUP_TEST_SEED` to a `u64` to explore other streams.
#[cfg(feature = "std")]
pub fn test_rng() -> ChaChaRng {
    let seed = std::env::var("ZKSETUP_TEST_SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_TEST_SEED);
    ChaChaRng::seed_from_u64(seed)
}

/// A ChaCha generator for tests and benchmarks. Never use it for a real
/// ceremony contribution.
#[cfg(not(feature = "std"))]
pub fn test_rng() -> ChaChaRng {
    ChaChaRng::seed_from_u64(DEFAULT_TEST_SEED)
}

#[cfg(test)]
mod test {
    use ark_std::UniformRand;

    #[test]
    fn test_rng_replays() {
        let mut rng = super::test_rng();
        let a = u128::rand(&mut rng);
        let b = u128::rand(&mut rng);
        assert_ne!(a, b);

        let mut rng = super::test_rng();
        assert_eq!(u128::rand(&mut rng), a);
    }
}
