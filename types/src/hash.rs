//! Block hash type and textual validation.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::PulseError;

/// Textual length of a block hash: 32 bytes as hex.
const HASH_HEX_LEN: usize = 64;

/// Whether `s` is a well-formed block hash: exactly 64 uppercase hex characters.
///
/// Lowercase hex is rejected — the ledger's canonical form is uppercase, and
/// search input is matched against it without normalization. Total over any
/// string input.
pub fn is_valid_block_hash(s: &str) -> bool {
    s.len() == HASH_HEX_LEN && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'A'..=b'F'))
}

/// A 32-byte block hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockHash([u8; 32]);

impl BlockHash {
    pub const ZERO: Self = Self([0u8; 32]);

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse the canonical uppercase hex form.
    pub fn parse(s: &str) -> Result<Self, PulseError> {
        if !is_valid_block_hash(s) {
            return Err(PulseError::InvalidBlockHash(s.to_string()));
        }
        let decoded = hex::decode(s).map_err(|_| PulseError::InvalidBlockHash(s.to_string()))?;
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&decoded);
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockHash({})", hex::encode_upper(&self.0[..4]))
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode_upper(self.0))
    }
}

impl Serialize for BlockHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BlockHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}
