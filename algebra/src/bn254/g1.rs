use crate::bn254::BN254Scalar;
use crate::prelude::*;
use ark_bn254::{Fq, G1Affine, G1Projective};
use ark_ec::{AffineRepr, CurveGroup, Group as ArkGroup, VariableBaseMSM};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Compress, Validate};
use ark_std::fmt::{Debug, Display, Formatter};
use digest::{consts::U64, Digest};

bn254_curve_group!(
    /// A point of the BN254 G1 group, over the base field.
    BN254G1(G1Projective, G1Affine, Fq),
    compressed = 32,
    uncompressed = 64
);
