//! Configuration for a SealBid auction instance.

use serde::{Deserialize, Serialize};

use crate::{PartyId, constants};

/// Configuration fixed at auction construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuctionConfig {
    /// The only identity allowed to close the auction.
    pub owner: PartyId,
    /// Admission cap: maximum number of distinct bidders.
    pub max_bidders: usize,
}

impl AuctionConfig {
    /// Config with the default bidder cap.
    #[must_use]
    pub fn new(owner: PartyId) -> Self {
        Self {
            owner,
            max_bidders: constants::DEFAULT_MAX_BIDDERS,
        }
    }

    /// Override the bidder cap.
    #[must_use]
    pub fn with_max_bidders(mut self, max_bidders: usize) -> Self {
        self.max_bidders = max_bidders;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cap_applied() {
        let cfg = AuctionConfig::new(PartyId::from_bytes([1; 20]));
        assert_eq!(cfg.max_bidders, constants::DEFAULT_MAX_BIDDERS);
    }

    #[test]
    fn cap_override() {
        let cfg = AuctionConfig::new(PartyId::from_bytes([1; 20])).with_max_bidders(3);
        assert_eq!(cfg.max_bidders, 3);
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = AuctionConfig::new(PartyId::from_bytes([9; 20])).with_max_bidders(7);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: AuctionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg.owner, back.owner);
        assert_eq!(cfg.max_bidders, back.max_bidders);
    }
}
