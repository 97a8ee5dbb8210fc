//! PLONK preprocessing for the zksetup toolkit.
//!
//! Given a finalized [`plonk::constraint_system::SparseR1CS`] and a KZG
//! reference string, [`plonk::setup::setup`] builds the selector and
//! permutation polynomials and commits to them.
#![deny(missing_docs)]
#![allow(clippy::needless_borrow)]
#![allow(clippy::upper_case_acronyms)]

#[macro_use]
extern crate serde_derive;

/// Module for error handling.
pub mod errors;

/// Module for the constraint system, permutation and setup.
pub mod plonk;

/// Module for polynomials and polynomial commitments.
pub mod poly_commit;
