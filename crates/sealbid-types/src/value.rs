//! The opaque bid value slot.
//!
//! A [`ValueSlot`] is the fixed 32-byte buffer the ledger stores per
//! bidder without ever interpreting it. Byte layout (the wire contract
//! between bid submission and off-ledger decoding):
//!
//! ```text
//! [0..24)  reserved padding — zero under the current scheme, ignored at
//!          decode so a future larger ciphertext can occupy the space
//! [24..32) u64 bid amount, big-endian
//! ```
//!
//! Transport boundaries exchange slots as hex strings with an optional
//! leading `0x`; [`ValueSlot::from_hex`] normalizes that form to raw
//! bytes before anything reaches the codec.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::VALUE_SLOT_LEN;
use crate::error::{Result, SealbidError};

/// Fixed 32-byte opaque value slot.
///
/// The ledger is value-agnostic: any 32-byte slot is accepted, even
/// all-zero. Only the codec assigns meaning to the contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueSlot(pub [u8; VALUE_SLOT_LEN]);

impl ValueSlot {
    #[must_use]
    pub fn from_bytes(bytes: [u8; VALUE_SLOT_LEN]) -> Self {
        Self(bytes)
    }

    /// Build a slot from a byte slice of exactly 32 bytes.
    ///
    /// # Errors
    /// Returns `MalformedSlot` for any other length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; VALUE_SLOT_LEN] = bytes
            .try_into()
            .map_err(|_| SealbidError::MalformedSlot { len: bytes.len() })?;
        Ok(Self(arr))
    }

    /// Parse from hex, with or without a leading `0x` marker.
    ///
    /// # Errors
    /// - `InvalidHex` if the string contains non-hex digits
    /// - `MalformedSlot` if the decoded payload is not 32 bytes
    pub fn from_hex(s: &str) -> Result<Self> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let decoded = hex::decode(stripped).map_err(|e| SealbidError::InvalidHex {
            reason: e.to_string(),
        })?;
        Self::from_slice(&decoded)
    }

    /// Full `0x`-prefixed lowercase hex encoding.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; VALUE_SLOT_LEN] {
        &self.0
    }

    /// Whether every byte is zero (an accepted, if unusual, bid value).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; VALUE_SLOT_LEN]
    }
}

impl fmt::Display for ValueSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Serialize for ValueSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ValueSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(D::Error::custom)
    }
}
