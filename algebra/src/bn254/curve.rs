/// Wrap an arkworks projective point on BN254 into a [`crate::traits::Group`].
///
/// The calling module imports the arkworks types passed in, together with
/// the traits the expansion needs.
macro_rules! bn254_curve_group {
    (
        $(#[$meta:meta])*
        $name:ident($projective:ident, $affine:ident, $base_field:ident),
        compressed = $compressed:expr,
        uncompressed = $uncompressed:expr
    ) => {
        $(#[$meta])*
        #[derive(Copy, Default, Clone, PartialEq, Eq)]
        pub struct $name(pub(crate) $projective);

        impl Debug for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> ark_std::fmt::Result {
                <$affine as Display>::fmt(&self.0.into_affine(), f)
            }
        }

        impl Group for $name {
            type ScalarType = BN254Scalar;
            const COMPRESSED_LEN: usize = $compressed;
            const UNCOMPRESSED_LEN: usize = $uncompressed;

            #[inline]
            fn double(&self) -> Self {
                Self(ArkGroup::double(&self.0))
            }

            #[inline]
            fn get_identity() -> Self {
                Self($projective::zero())
            }

            #[inline]
            fn get_base() -> Self {
                Self($projective::generator())
            }

            #[inline]
            fn random<R: CryptoRng + RngCore>(prng: &mut R) -> Self {
                Self($projective::rand(prng))
            }

            fn is_in_subgroup(&self) -> bool {
                let affine = self.0.into_affine();
                affine.is_on_curve() && affine.is_in_correct_subgroup_assuming_on_curve()
            }

            fn to_compressed_bytes(&self) -> Vec<u8> {
                let mut buf = Vec::with_capacity($compressed);
                self.0
                    .into_affine()
                    .serialize_with_mode(&mut buf, Compress::Yes)
                    .unwrap();
                buf
            }

            fn to_unchecked_bytes(&self) -> Vec<u8> {
                let mut buf = Vec::with_capacity($uncompressed);
                self.0
                    .into_affine()
                    .serialize_with_mode(&mut buf, Compress::No)
                    .unwrap();
                buf
            }

            fn from_compressed_bytes(bytes: &[u8]) -> Result<Self> {
                let affine = $affine::deserialize_with_mode(bytes, Compress::Yes, Validate::Yes)
                    .map_err(|_| AlgebraError::DecompressElementError)?;
                Ok(Self(affine.into_group()))
            }

            fn from_unchecked_bytes(bytes: &[u8]) -> Result<Self> {
                let affine = $affine::deserialize_with_mode(bytes, Compress::No, Validate::No)
                    .map_err(|_| AlgebraError::DeserializationError)?;
                Ok(Self(affine.into_group()))
            }

            #[inline]
            fn unchecked_size() -> usize {
                $uncompressed
            }

            /// Try-and-increment: the hash seeds a PRNG that proposes
            /// x-coordinates until one of them lies on the curve. The point
            /// is then moved into the prime-order subgroup.
            fn from_hash<D>(hash: D) -> Self
            where
                D: Digest<OutputSize = U64> + Default,
            {
                let mut prng = derive_prng_from_hash::<D>(hash);
                loop {
                    let x = $base_field::rand(&mut prng);
                    let greatest = prng.gen::<bool>();
                    if let Some(p) = $affine::get_point_from_x_unchecked(x, greatest) {
                        return Self(p.clear_cofactor().into_group());
                    }
                }
            }

            fn multi_exp(scalars: &[&Self::ScalarType], points: &[&Self]) -> Self {
                let scalars: Vec<_> = scalars.iter().map(|s| s.0).collect();
                let points: Vec<$projective> = points.iter().map(|p| p.0).collect();
                let bases = $projective::normalize_batch(&points);
                Self($projective::msm_unchecked(&bases, &scalars))
            }
        }

        impl<'a> Add<&'a $name> for $name {
            type Output = $name;

            #[inline]
            fn add(self, rhs: &Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl<'a> Sub<&'a $name> for $name {
            type Output = $name;

            #[inline]
            fn sub(self, rhs: &Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl<'a> Mul<&'a BN254Scalar> for $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: &BN254Scalar) -> Self::Output {
                Self(self.0 * rhs.0)
            }
        }

        impl<'a> AddAssign<&'a $name> for $name {
            #[inline]
            fn add_assign(&mut self, rhs: &'a $name) {
                self.0 += rhs.0
            }
        }

        impl<'a> SubAssign<&'a $name> for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: &'a $name) {
                self.0 -= rhs.0
            }
        }

        impl<'a> MulAssign<&'a BN254Scalar> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: &'a BN254Scalar) {
                self.0 *= rhs.0
            }
        }

        impl Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self::Output {
                Self(-self.0)
            }
        }
    };
}
