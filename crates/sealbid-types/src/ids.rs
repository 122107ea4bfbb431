//! Party identifiers used throughout SealBid.
//!
//! A [`PartyId`] is a 20-byte account address. The ledger only requires a
//! stable, comparable identifier — it imposes no particular identity
//! scheme. Addresses render as `0x`-prefixed lowercase hex, which is also
//! the transport encoding.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::PARTY_ID_LEN;
use crate::error::{Result, SealbidError};

/// Identifier for a bidding party (20-byte account address).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct PartyId(pub [u8; PARTY_ID_LEN]);

impl PartyId {
    #[must_use]
    pub fn from_bytes(bytes: [u8; PARTY_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse from hex, with or without a leading `0x` marker.
    ///
    /// # Errors
    /// - `InvalidHex` if the string contains non-hex digits
    /// - `InvalidHex` if the decoded length is not 20 bytes
    pub fn from_hex(s: &str) -> Result<Self> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let decoded = hex::decode(stripped).map_err(|e| SealbidError::InvalidHex {
            reason: e.to_string(),
        })?;
        let bytes: [u8; PARTY_ID_LEN] =
            decoded
                .try_into()
                .map_err(|v: Vec<u8>| SealbidError::InvalidHex {
                    reason: format!("party id must be {PARTY_ID_LEN} bytes, got {}", v.len()),
                })?;
        Ok(Self(bytes))
    }

    /// Full `0x`-prefixed lowercase hex encoding.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; PARTY_ID_LEN] {
        &self.0
    }

    /// Short form (first 4 bytes) for log lines.
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Random party id for tests and demos.
    #[cfg(any(test, feature = "test-helpers"))]
    #[must_use]
    pub fn random() -> Self {
        use rand::Rng;
        let mut bytes = [0u8; PARTY_ID_LEN];
        rand::thread_rng().fill(&mut bytes);
        Self(bytes)
    }
}

impl fmt::Display for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

// Serialize as the transport's hex-string form. This also makes PartyId a
// valid JSON map key for the persisted `values` map.
impl Serialize for PartyId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PartyId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(D::Error::custom)
    }
}
