//! Tally result types.
//!
//! A [`TallyOutcome`] is computed on demand by the tally engine and never
//! persisted. Presentation layers serialize it for display; nothing in
//! the ledger depends on it.

use serde::{Deserialize, Serialize};

use crate::PartyId;

/// A decoded bid, paired with the party that placed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedBid {
    /// The bidding party.
    pub party: PartyId,
    /// The decoded bid amount.
    pub amount: u64,
}

/// The full result of an off-ledger tally run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyOutcome {
    /// All well-formed bids, sorted by descending amount. Ties keep
    /// arrival order, so `ranked[0]` is always the winner when one exists.
    pub ranked: Vec<RankedBid>,
    /// The winning bid, or `None` when no well-formed bids exist.
    pub winner: Option<RankedBid>,
    /// Number of entries discarded as malformed.
    pub discarded: usize,
}

impl TallyOutcome {
    /// An outcome with no bids at all (the empty-input terminal case).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            ranked: Vec::new(),
            winner: None,
            discarded: 0,
        }
    }

    /// Whether the tally produced a winner.
    #[must_use]
    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }
}
