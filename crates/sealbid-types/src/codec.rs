//! Bid value codec: deterministic, lossless amount ↔ slot mapping.
//!
//! The current scheme is a placeholder ciphertext shape, not real
//! encryption: zero-fill 32 bytes and write the amount big-endian into
//! the last 8. It is kept behind the [`BidCodec`] trait so a real
//! confidentiality scheme (threshold decryption, homomorphic ciphertext)
//! can be substituted without touching the ledger or tally contracts.
//!
//! Laws:
//! - `decode(encode(x)) == x` for every `x` in `[0, 2^64)`
//! - `encode` is total; `decode` fails only on input that is not exactly
//!   32 bytes, never on value range
//! - byte-wise lexicographic order of encoded slots matches numeric
//!   order of amounts (big-endian), preserved for future range queries

use crate::constants::{AMOUNT_OFFSET, VALUE_SLOT_LEN};
use crate::error::{Result, SealbidError};
use crate::value::ValueSlot;

/// Pluggable mapping between a 64-bit amount and an opaque value slot.
pub trait BidCodec {
    /// Pack an amount into a slot. Total: every `u64` is representable.
    fn encode(&self, amount: u64) -> ValueSlot;

    /// Recover the amount from raw slot bytes.
    ///
    /// # Errors
    /// Returns `MalformedSlot` if `bytes` is not exactly 32 bytes.
    fn decode(&self, bytes: &[u8]) -> Result<u64>;
}

/// The placeholder codec: zero padding plus a big-endian u64 suffix.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainCodec;

impl BidCodec for PlainCodec {
    fn encode(&self, amount: u64) -> ValueSlot {
        let mut buf = [0u8; VALUE_SLOT_LEN];
        buf[AMOUNT_OFFSET..].copy_from_slice(&amount.to_be_bytes());
        ValueSlot(buf)
    }

    fn decode(&self, bytes: &[u8]) -> Result<u64> {
        if bytes.len() != VALUE_SLOT_LEN {
            return Err(SealbidError::MalformedSlot { len: bytes.len() });
        }
        // The padding bytes [0..24) are deliberately ignored, even when
        // non-zero: a future larger ciphertext will occupy that space.
        let tail: [u8; 8] = bytes[AMOUNT_OFFSET..]
            .try_into()
            .expect("length checked above");
        Ok(u64::from_be_bytes(tail))
    }
}
