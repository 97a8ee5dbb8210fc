use ark_std::rand::SeedableRng;
use rand_chacha::ChaChaRng;
use std::time::Instant;
use zksetup_algebra::{
    bn254::{BN254PairingEngine, BN254Scalar, BN254G1, BN254G2},
    prelude::*,
};
use zksetup_ceremony::{
    accumulator::{Accumulator, PowersOfTauParams},
    primitives::{powers, scale_group_vector},
};

fn main() {
    let mut prng = ChaChaRng::from_entropy();
    let count = 1 << 14;

    let tau = BN254Scalar::random(&mut prng);
    let taus = powers(&tau, count);

    let g1 = vec![BN254G1::get_base(); count];
    let start = Instant::now();
    let _ = scale_group_vector(&g1, &taus).unwrap();
    println!("scale {} G1 points: {} s", count, start.elapsed().as_secs_f32());

    let g2 = vec![BN254G2::get_base(); count];
    let start = Instant::now();
    let _ = scale_group_vector(&g2, &taus).unwrap();
    println!("scale {} G2 points: {} s", count, start.elapsed().as_secs_f32());

    let size = 1 << 10;
    let prev = Accumulator::<BN254PairingEngine>::new(PowersOfTauParams { size }).unwrap();
    let mut next = prev.clone();

    let start = Instant::now();
    let (keys, _) = next.contribute(&mut prng, &[]).unwrap();
    println!("contribute (size {}): {} s", size, start.elapsed().as_secs_f32());

    let start = Instant::now();
    Accumulator::verify(&mut prng, &prev, &next, &keys, &[]).unwrap();
    println!("verify (size {}): {} s", size, start.elapsed().as_secs_f32());
}
