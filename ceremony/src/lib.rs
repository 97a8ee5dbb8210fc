//! Multi-party trusted setup for the zksetup toolkit.
//!
//! Each participant rescales a powers-of-tau accumulator by fresh secrets and
//! publishes one [`challenge::ContributionKey`] per secret. Anybody holding the
//! previous accumulator can then check the round with pairing-based ratio
//! checks, without learning any secret.
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::upper_case_acronyms)]

#[macro_use]
extern crate serde_derive;

/// The powers-of-tau accumulator and its contribution rounds.
pub mod accumulator;

/// Challenge derivation and contribution keys.
pub mod challenge;

/// Randomized linear combinations used to batch ratio checks.
pub mod combination;

/// Module for error handling.
pub mod errors;

/// Scalar powers, vector scaling and the same-ratio check.
pub mod primitives;
