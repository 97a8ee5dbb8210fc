use crate::bn254::{BN254Gt, BN254Scalar, BN254G1, BN254G2};
use crate::prelude::*;
use serde::Serializer;

/// Helper trait to serialize scalars, group elements and foreign objects
/// that convert from/to bytes.
pub trait ZkFromToBytes: Sized {
    /// convert to bytes
    fn zk_to_bytes(&self) -> Vec<u8>;
    /// reconstruct from bytes
    fn zk_from_bytes(bytes: &[u8]) -> Result<Self>;
}

/// Implement serde through `ZkFromToBytes`: a base64 string for
/// human-readable formats, raw bytes otherwise.
#[macro_export]
macro_rules! serialize_deserialize {
    ($t:ident) => {
        impl serde::Serialize for $t {
            fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                if serializer.is_human_readable() {
                    serializer.serialize_str(&$crate::utils::b64enc(&self.zk_to_bytes()))
                } else {
                    serializer.serialize_bytes(&self.zk_to_bytes())
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $t {
            fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let bytes = if deserializer.is_human_readable() {
                    deserializer.deserialize_str($crate::serialization::obj_serde::BytesVisitor)?
                } else {
                    deserializer.deserialize_bytes($crate::serialization::obj_serde::BytesVisitor)?
                };
                $t::zk_from_bytes(bytes.as_slice()).map_err(serde::de::Error::custom)
            }
        }
    };
}

macro_rules! to_from_bytes_scalar {
    ($t:ident) => {
        impl ZkFromToBytes for $t {
            fn zk_to_bytes(&self) -> Vec<u8> {
                self.to_bytes()
            }
            fn zk_from_bytes(bytes: &[u8]) -> Result<$t> {
                $t::from_bytes(bytes).map_err(|_| AlgebraError::DeserializationError)
            }
        }
    };
}

macro_rules! to_from_bytes_group {
    ($g:ident) => {
        impl ZkFromToBytes for $g {
            fn zk_to_bytes(&self) -> Vec<u8> {
                self.to_compressed_bytes()
            }
            fn zk_from_bytes(bytes: &[u8]) -> Result<$g> {
                $g::from_compressed_bytes(bytes).map_err(|_| AlgebraError::DeserializationError)
            }
        }
    };
}

to_from_bytes_scalar!(BN254Scalar);
to_from_bytes_group!(BN254G1);
to_from_bytes_group!(BN254G2);
to_from_bytes_group!(BN254Gt);

serialize_deserialize!(BN254Scalar);
serialize_deserialize!(BN254G1);
serialize_deserialize!(BN254G2);
serialize_deserialize!(BN254Gt);

/// Serde helpers shared by `serialize_deserialize!`.
pub mod obj_serde {
    use crate::utils::b64dec;
    use ark_std::{fmt, vec::Vec};
    use serde::de::{SeqAccess, Visitor};

    /// Visitor collecting either raw bytes, a byte sequence or a base64 string.
    pub struct BytesVisitor;

    impl<'de> Visitor<'de> for BytesVisitor {
        type Value = Vec<u8>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a valid ZkFromToBytes object")
        }

        fn visit_seq<V>(self, mut seq: V) -> core::result::Result<Vec<u8>, V::Error>
        where
            V: SeqAccess<'de>,
        {
            let mut vec: Vec<u8> = Vec::new();
            while let Some(x) = seq.next_element()? {
                vec.push(x);
            }
            Ok(vec)
        }

        fn visit_bytes<E>(self, v: &[u8]) -> core::result::Result<Vec<u8>, E> {
            Ok(v.to_vec())
        }

        fn visit_str<E>(self, v: &str) -> core::result::Result<Vec<u8>, E>
        where
            E: serde::de::Error,
        {
            b64dec(v).map_err(serde::de::Error::custom)
        }
    }
}
