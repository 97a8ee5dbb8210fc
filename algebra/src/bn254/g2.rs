use crate::bn254::BN254Scalar;
use crate::prelude::*;
use ark_bn254::{Fq2, G2Affine, G2Projective};
use ark_ec::{AffineRepr, CurveGroup, Group as ArkGroup, VariableBaseMSM};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Compress, Validate};
use ark_std::fmt::{Debug, Display, Formatter};
use digest::{consts::U64, Digest};

bn254_curve_group!(
    /// A point of the BN254 G2 group, over the quadratic extension.
    BN254G2(G2Projective, G2Affine, Fq2),
    compressed = 64,
    uncompressed = 128
);
