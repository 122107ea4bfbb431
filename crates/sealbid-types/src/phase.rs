//! Auction lifecycle phase.
//!
//! An auction has exactly two phases with a single irreversible transition:
//! **OPEN → CLOSED**. Bids are admitted only while OPEN; the transition is
//! triggered only by the owner identity fixed at construction. The ledger
//! crate enforces both rules.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two phases of an auction's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuctionPhase {
    /// Accepting one bid per party.
    Open,
    /// Sealed for good; reads remain available, writes are rejected.
    Closed,
}

impl AuctionPhase {
    /// Whether bids may still be admitted.
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for AuctionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "OPEN"),
            Self::Closed => write!(f, "CLOSED"),
        }
    }
}
