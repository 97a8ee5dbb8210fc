//! Algebra for the zksetup toolkit: BN254 scalars, the two source groups,
//! the target group and the pairing, behind a small set of traits.
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::upper_case_acronyms)]

/// Module for the BN254 curve.
pub mod bn254;

/// Module for error handling.
pub mod errors;

/// Module for the prelude.
pub mod prelude;

/// Module for test rngs.
pub mod rand_helper;

/// Module for serialization of scalars and group elements.
pub mod serialization;

/// Module for traits.
pub mod traits;

/// Module for utils.
pub mod utils;

#[doc(hidden)]
pub use ark_std::{
    borrow, cmp, collections, fmt, hash, iter, marker, ops, rand, One, UniformRand, Zero,
};
