//! Digest type wrapping the Blake3 hash primitive.
//!
//! The tree only ever sees opaque fixed-length digests; chunk data is
//! hashed once at the edge with [`Digest::hash`] and every internal node
//! is `combine(left, right) = blake3(left || right)`.

use core::fmt;

use bincode::{Decode, Encode};

use crate::{AuthTreeError, Result};

/// Number of bytes in a digest.
pub const DIGEST_LEN: usize = 32;

/// A fixed-length digest, comparable for equality and concatenable for
/// combination. Textual I/O (logs, fixtures) uses the lowercase hex form.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// All-zero digest, used as an allocation placeholder.
    pub(crate) const ZERO: Digest = Digest([0u8; DIGEST_LEN]);

    /// Wrap raw digest bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Digest(bytes)
    }

    /// Hash raw chunk data into a leaf digest.
    pub fn hash(data: &[u8]) -> Self {
        Digest(*blake3::hash(data).as_bytes())
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hex form of this digest.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a digest from its hex form.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s)
            .map_err(|e| AuthTreeError::InvalidData(format!("bad digest hex: {}", e)))?;
        let bytes: [u8; DIGEST_LEN] = bytes.try_into().map_err(|b: Vec<u8>| {
            AuthTreeError::InvalidData(format!(
                "digest hex must decode to {} bytes, got {}",
                DIGEST_LEN,
                b.len()
            ))
        })?;
        Ok(Digest(bytes))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

/// Combine two child digests into their parent: `blake3(left || right)`.
pub fn combine(left: &Digest, right: &Digest) -> Digest {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&left.0);
    hasher.update(&right.0);
    Digest(*hasher.finalize().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_is_order_sensitive() {
        let a = Digest::hash(b"a");
        let b = Digest::hash(b"b");
        assert_ne!(combine(&a, &b), combine(&b, &a));
        assert_eq!(combine(&a, &b), combine(&a, &b));
    }

    #[test]
    fn test_combine_is_plain_concatenation() {
        let a = Digest::hash(b"left");
        let b = Digest::hash(b"right");
        let mut input = Vec::with_capacity(2 * DIGEST_LEN);
        input.extend_from_slice(a.as_bytes());
        input.extend_from_slice(b.as_bytes());
        assert_eq!(combine(&a, &b), Digest::hash(&input));
    }

    #[test]
    fn test_hex_roundtrip() {
        let d = Digest::hash(b"chunk");
        let hex = d.to_hex();
        assert_eq!(hex.len(), 2 * DIGEST_LEN);
        assert_eq!(Digest::from_hex(&hex).expect("parse hex"), d);
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(Digest::from_hex("zz").is_err());
        assert!(Digest::from_hex("abcd").is_err());
    }
}
