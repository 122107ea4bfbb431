//! System-wide constants for the SealBid auction ledger.

/// Length of an opaque bid value slot in bytes.
pub const VALUE_SLOT_LEN: usize = 32;

/// Offset of the big-endian amount within a value slot.
///
/// Bytes `[0..AMOUNT_OFFSET)` are reserved padding for a future larger
/// ciphertext; bytes `[AMOUNT_OFFSET..VALUE_SLOT_LEN)` carry the amount.
pub const AMOUNT_OFFSET: usize = 24;

/// Length of a party identifier (account address) in bytes.
pub const PARTY_ID_LEN: usize = 20;

/// Default maximum number of admitted bidders per auction.
pub const DEFAULT_MAX_BIDDERS: usize = 10_000;

/// Domain separator for the snapshot integrity digest.
pub const SNAPSHOT_DIGEST_DOMAIN: &[u8] = b"sealbid:snapshot:v1:";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "SealBid";
