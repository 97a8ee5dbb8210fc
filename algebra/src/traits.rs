use crate::prelude::*;
use ark_ff::FftField;
pub use ark_ff::LegendreSymbol;
use ark_std::fmt::Debug;
use digest::{generic_array::typenum::U64, Digest};
use serde::{Deserialize, Serialize};

/// An element of the prime field that scales every group of a [`Pairing`].
pub trait Scalar:
    Copy
    + Default
    + Debug
    + PartialEq
    + Eq
    + Serialize
    + for<'de> Deserialize<'de>
    + Clone
    + One
    + Zero
    + Sized
    + Add<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Sum<Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + for<'a> MulAssign<&'a Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> Sum<&'a Self>
    + From<u32>
    + From<u64>
    + Neg<Output = Self>
    + Sync
    + Send
{
    /// Sample a uniformly random scalar.
    fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self;

    /// Derive a scalar deterministically from a finished 64-byte hash.
    fn from_hash<D>(hash: D) -> Self
    where
        D: Digest<OutputSize = U64> + Default;

    /// Return a generator of the multiplicative group. It is a quadratic
    /// non-residue, so it lies outside every radix-2 subgroup.
    fn multiplicative_generator() -> Self;

    /// Length of [`Scalar::to_bytes`].
    fn bytes_len() -> usize;

    /// Little-endian canonical bytes.
    fn to_bytes(&self) -> Vec<u8>;

    /// Read little-endian bytes, reducing modulo the field order.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// Multiplicative inverse, an error for zero.
    fn inv(&self) -> Result<Self>;

    /// `self * self`.
    fn square(&self) -> Self;

    /// Quadratic character.
    fn legendre(&self) -> LegendreSymbol;

    /// Raise to the power `exponent`, given as u64 limbs, least significant first.
    fn pow(&self, exponent: &[u64]) -> Self {
        let mut base = *self;
        let mut result = Self::one();
        for exp_u64 in exponent {
            let mut e = *exp_u64;
            for _ in 0..64 {
                if e % 2 == 1 {
                    result.mul_assign(&base);
                }
                base = base.mul(&base);
                e >>= 1;
            }
        }
        result
    }
}

/// A scalar backed by an arkworks FFT-friendly field.
pub trait Domain: Scalar {
    /// The underlying arkworks field.
    type Field: FftField;

    /// Unwrap into the arkworks field.
    fn get_field(&self) -> Self::Field;

    /// Wrap an arkworks field element.
    fn from_field(field: Self::Field) -> Self;
}

/// A prime-order group written additively.
pub trait Group:
    Debug
    + Default
    + Copy
    + Sized
    + PartialEq
    + Eq
    + Clone
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Mul<&'a Self::ScalarType, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + Serialize
    + Neg<Output = Self>
    + for<'de> Deserialize<'de>
    + Sync
    + Send
{
    /// The exponent field.
    type ScalarType: Scalar;

    /// Length of [`Group::to_compressed_bytes`].
    const COMPRESSED_LEN: usize;

    /// Length of [`Group::to_unchecked_bytes`].
    const UNCOMPRESSED_LEN: usize;

    /// `self + self`.
    fn double(&self) -> Self;

    /// Return `0 * G`.
    fn get_identity() -> Self;

    /// Return the fixed generator `G`.
    fn get_base() -> Self;

    /// Sample a random element. Its discrete logarithm is known to nobody
    /// but `rng`.
    fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self;

    /// Check that the element lies on the curve and in the prime-order subgroup.
    fn is_in_subgroup(&self) -> bool;

    /// Encode with point compression.
    fn to_compressed_bytes(&self) -> Vec<u8>;

    /// Decode a compressed point, checking curve and subgroup membership.
    fn from_compressed_bytes(bytes: &[u8]) -> Result<Self>;

    /// Encode without compression.
    fn to_unchecked_bytes(&self) -> Vec<u8>;

    /// Decode an uncompressed point without any membership check. Pair it
    /// with [`Group::is_in_subgroup`] on untrusted input.
    fn from_unchecked_bytes(bytes: &[u8]) -> Result<Self>;

    /// Length of [`Group::to_unchecked_bytes`].
    fn unchecked_size() -> usize;

    /// Sample a group element based on a hash value. Nobody learns the
    /// discrete logarithm of the output with respect to the base.
    fn from_hash<D>(hash: D) -> Self
    where
        D: Digest<OutputSize = U64> + Default;

    /// Return `sum_i scalars[i] * points[i]`.
    #[inline]
    fn multi_exp(scalars: &[&Self::ScalarType], points: &[&Self]) -> Self {
        scalars
            .iter()
            .zip(points.iter())
            .fold(Self::get_identity(), |acc, (s, p)| acc.add(&(**p).mul(*s)))
    }
}

/// A bilinear map `e: G1 x G2 -> Gt`.
pub trait Pairing {
    /// The common exponent field.
    type ScalarField: Scalar;

    /// Source group G1.
    type G1: Group<ScalarType = Self::ScalarField>;

    /// Source group G2.
    type G2: Group<ScalarType = Self::ScalarField>;

    /// The target group, written additively.
    type Gt: Group<ScalarType = Self::ScalarField>;

    /// Return `e(a, b)`.
    fn pairing(a: &Self::G1, b: &Self::G2) -> Self::Gt;

    /// Return `sum_i e(a[i], b[i])`.
    fn product_of_pairings(a: &[Self::G1], b: &[Self::G2]) -> Self::Gt;
}
