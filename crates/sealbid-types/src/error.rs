//! Error types for the SealBid auction ledger.
//!
//! All errors use the `SB_ERR_` prefix convention for easy grepping in
//! logs. Error codes are grouped by subsystem:
//! - 1xx: Lifecycle errors
//! - 2xx: Admission errors
//! - 3xx: Codec / transport errors
//! - 4xx: Snapshot errors
//! - 9xx: General / internal errors
//!
//! Every one of these is a local, expected condition reported
//! synchronously to the caller. None is fatal to a ledger instance: the
//! instance remains usable after any of them.

use thiserror::Error;

use crate::PartyId;

/// Central error enum for all SealBid operations.
#[derive(Debug, Error)]
pub enum SealbidError {
    // =================================================================
    // Lifecycle Errors (1xx)
    // =================================================================
    /// A bid was submitted after the auction closed.
    #[error("SB_ERR_100: Auction is closed; bids are no longer accepted")]
    AuctionClosed,

    /// Close was attempted on an already-closed auction.
    #[error("SB_ERR_101: Auction already closed")]
    AlreadyClosed,

    /// Close was attempted by an identity other than the owner.
    #[error("SB_ERR_102: Unauthorized: caller {caller} is not the auction owner")]
    Unauthorized { caller: PartyId },

    // =================================================================
    // Admission Errors (2xx)
    // =================================================================
    /// A second bid from a party that already bid (one bid per party).
    #[error("SB_ERR_200: Duplicate bidder: {0}")]
    DuplicateBidder(PartyId),

    /// Value lookup for a party that never placed a bid.
    #[error("SB_ERR_201: Unknown bidder: {0}")]
    UnknownBidder(PartyId),

    /// The auction reached its configured bidder cap.
    #[error("SB_ERR_202: Bidder limit exceeded: max {max}")]
    BidderLimitExceeded { max: usize },

    // =================================================================
    // Codec / Transport Errors (3xx)
    // =================================================================
    /// A value slot was not exactly 32 bytes at decode time.
    #[error("SB_ERR_300: Malformed value slot: expected 32 bytes, got {len}")]
    MalformedSlot { len: usize },

    /// A hex string at the transport boundary failed to normalize.
    #[error("SB_ERR_301: Invalid hex input: {reason}")]
    InvalidHex { reason: String },

    // =================================================================
    // Snapshot Errors (4xx)
    // =================================================================
    /// A persisted snapshot failed validation at load time.
    #[error("SB_ERR_400: Invalid snapshot: {reason}")]
    SnapshotInvalid { reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("SB_ERR_900: Internal error: {0}")]
    Internal(String),

    /// Serialization / deserialization error.
    #[error("SB_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// I/O error (disk, network).
    #[error("SB_ERR_903: I/O error: {0}")]
    Io(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, SealbidError>;

// Conversion from std::io::Error
impl From<std::io::Error> for SealbidError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SealbidError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let err = SealbidError::DuplicateBidder(PartyId::from_bytes([1; 20]));
        let msg = format!("{err}");
        assert!(msg.starts_with("SB_ERR_200"), "Got: {msg}");
    }

    #[test]
    fn unauthorized_display_names_caller() {
        let caller = PartyId::from_bytes([0xAA; 20]);
        let err = SealbidError::Unauthorized { caller };
        let msg = format!("{err}");
        assert!(msg.contains("SB_ERR_102"));
        assert!(msg.contains(&caller.to_hex()));
    }

    #[test]
    fn malformed_slot_display_has_length() {
        let err = SealbidError::MalformedSlot { len: 31 };
        let msg = format!("{err}");
        assert!(msg.contains("SB_ERR_300"));
        assert!(msg.contains("31"));
    }

    #[test]
    fn all_errors_have_sb_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(SealbidError::AuctionClosed),
            Box::new(SealbidError::AlreadyClosed),
            Box::new(SealbidError::UnknownBidder(PartyId::from_bytes([2; 20]))),
            Box::new(SealbidError::BidderLimitExceeded { max: 10 }),
            Box::new(SealbidError::SnapshotInvalid {
                reason: "test".into(),
            }),
            Box::new(SealbidError::Internal("test".into())),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("SB_ERR_"),
                "Error missing SB_ERR_ prefix: {msg}"
            );
        }
    }
}
