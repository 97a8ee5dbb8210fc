//! PLONK preprocessing.

/// Module for the constraint system.
pub mod constraint_system;

/// Module for radix-2 evaluation domains.
pub mod domain;

/// Module for the permutation polynomials.
pub mod lde;

/// Module for the copy-constraint permutation.
pub mod permutation;

/// Module for the setup.
pub mod setup;
