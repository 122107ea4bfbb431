//! The auction ledger state machine.
//!
//! `AuctionLedger` enforces *who* may act and *when*. It stores opaque
//! bid values without interpreting them — any 32-byte slot is accepted,
//! even all-zero. Two states, one guarded transition:
//!
//! ```text
//! OPEN --close(owner)--> CLOSED
//! ```
//!
//! `place_bid` is valid only while OPEN; every read operation is valid in
//! both phases. A bid is either fully recorded (party appended to the
//! bidder list and value present in the store) or not recorded at all.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sealbid_types::{AuctionConfig, AuctionPhase, PartyId, Result, SealbidError, ValueSlot};

/// The confidential-bid ledger for a single auction.
///
/// Exclusively owns its state; all mutation goes through `&mut self`, so
/// the duplicate check and the insert are atomic as a unit. Wrap in
/// [`crate::SharedLedger`] when concurrent callers are involved.
#[derive(Debug, Clone)]
pub struct AuctionLedger {
    /// The only identity allowed to close the auction.
    owner: PartyId,
    /// Current lifecycle phase.
    phase: AuctionPhase,
    /// Admitted bidders in arrival order, no duplicates.
    bidders: Vec<PartyId>,
    /// Opaque value slot per admitted bidder.
    values: HashMap<PartyId, ValueSlot>,
    /// Admission cap.
    max_bidders: usize,
    /// When this ledger was created.
    opened_at: DateTime<Utc>,
    /// When the auction closed, once it has.
    closed_at: Option<DateTime<Utc>>,
}

impl AuctionLedger {
    /// Create an open auction with the default bidder cap.
    #[must_use]
    pub fn new(owner: PartyId) -> Self {
        Self::with_config(AuctionConfig::new(owner))
    }

    /// Create an open auction from explicit configuration.
    #[must_use]
    pub fn with_config(config: AuctionConfig) -> Self {
        Self {
            owner: config.owner,
            phase: AuctionPhase::Open,
            bidders: Vec::new(),
            values: HashMap::new(),
            max_bidders: config.max_bidders,
            opened_at: Utc::now(),
            closed_at: None,
        }
    }

    /// Whether bids are still being accepted. Pure read, always succeeds.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase.is_open()
    }

    /// Admit one confidential bid from `party`.
    ///
    /// The slot's contents are never validated here — the ledger is
    /// value-agnostic by contract.
    ///
    /// # Errors
    /// - `AuctionClosed` if the auction is no longer open
    /// - `DuplicateBidder` if `party` already placed a bid
    /// - `BidderLimitExceeded` at the configured cap
    pub fn place_bid(&mut self, party: PartyId, value: ValueSlot) -> Result<()> {
        if !self.phase.is_open() {
            return Err(SealbidError::AuctionClosed);
        }
        if self.values.contains_key(&party) {
            return Err(SealbidError::DuplicateBidder(party));
        }
        if self.bidders.len() >= self.max_bidders {
            return Err(SealbidError::BidderLimitExceeded {
                max: self.max_bidders,
            });
        }
        self.bidders.push(party);
        self.values.insert(party, value);
        tracing::debug!(party = %party.short(), count = self.bidders.len(), "bid admitted");
        Ok(())
    }

    /// Close the auction. Irreversible.
    ///
    /// The owner check runs first, so an unauthorized call never touches
    /// the phase. A second authorized close reports `AlreadyClosed`
    /// rather than silently succeeding.
    ///
    /// # Errors
    /// - `Unauthorized` if `caller` is not the owner
    /// - `AlreadyClosed` if the auction is already closed
    pub fn close(&mut self, caller: PartyId) -> Result<()> {
        if caller != self.owner {
            return Err(SealbidError::Unauthorized { caller });
        }
        if !self.phase.is_open() {
            return Err(SealbidError::AlreadyClosed);
        }
        self.phase = AuctionPhase::Closed;
        self.closed_at = Some(Utc::now());
        tracing::info!(bidders = self.bidders.len(), "auction closed");
        Ok(())
    }

    /// Admitted bidders in arrival order. Valid in either phase.
    #[must_use]
    pub fn bidders(&self) -> &[PartyId] {
        &self.bidders
    }

    /// The raw stored slot for `party`, returned unchanged in either
    /// phase. There is no confidentiality gate on reads; a real
    /// encryption scheme would add one.
    ///
    /// # Errors
    /// Returns `UnknownBidder` if `party` never placed a bid.
    pub fn value(&self, party: PartyId) -> Result<ValueSlot> {
        self.values
            .get(&party)
            .copied()
            .ok_or(SealbidError::UnknownBidder(party))
    }

    /// All `(party, slot)` pairs in arrival order — the read surface the
    /// tally engine consumes.
    #[must_use]
    pub fn entries(&self) -> Vec<(PartyId, ValueSlot)> {
        self.bidders
            .iter()
            .filter_map(|party| self.values.get(party).map(|slot| (*party, *slot)))
            .collect()
    }

    /// The owner identity fixed at construction.
    #[must_use]
    pub fn owner(&self) -> PartyId {
        self.owner
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> AuctionPhase {
        self.phase
    }

    /// Number of admitted bidders.
    #[must_use]
    pub fn bidder_count(&self) -> usize {
        self.bidders.len()
    }

    /// Whether no bids have been admitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bidders.is_empty()
    }

    /// Configured admission cap.
    #[must_use]
    pub fn max_bidders(&self) -> usize {
        self.max_bidders
    }

    /// When this ledger was created.
    #[must_use]
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// When the auction closed, if it has.
    #[must_use]
    pub fn closed_at(&self) -> Option<DateTime<Utc>> {
        self.closed_at
    }

    pub(crate) fn from_parts(
        owner: PartyId,
        phase: AuctionPhase,
        bidders: Vec<PartyId>,
        values: HashMap<PartyId, ValueSlot>,
        max_bidders: usize,
        opened_at: DateTime<Utc>,
        closed_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            owner,
            phase,
            bidders,
            values,
            max_bidders,
            opened_at,
            closed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sealbid_types::{BidCodec, PlainCodec};

    fn slot(amount: u64) -> ValueSlot {
        PlainCodec.encode(amount)
    }

    #[test]
    fn new_ledger_is_open_and_empty() {
        let ledger = AuctionLedger::new(PartyId::random());
        assert!(ledger.is_open());
        assert!(ledger.is_empty());
        assert_eq!(ledger.phase(), AuctionPhase::Open);
        assert!(ledger.closed_at().is_none());
    }

    #[test]
    fn bidders_listed_in_arrival_order() {
        let mut ledger = AuctionLedger::new(PartyId::random());
        let parties: Vec<PartyId> = (0..5).map(|_| PartyId::random()).collect();
        for (i, party) in parties.iter().enumerate() {
            ledger.place_bid(*party, slot(i as u64)).unwrap();
        }
        assert_eq!(ledger.bidders(), parties.as_slice());
        assert_eq!(ledger.bidder_count(), 5);
        assert!(ledger.is_open());
    }

    #[test]
    fn duplicate_bid_rejected_and_state_unchanged() {
        let mut ledger = AuctionLedger::new(PartyId::random());
        let party = PartyId::random();
        ledger.place_bid(party, slot(100)).unwrap();

        let err = ledger.place_bid(party, slot(999)).unwrap_err();
        assert!(matches!(err, SealbidError::DuplicateBidder(p) if p == party));

        // Original value survives; no second entry appeared.
        assert_eq!(ledger.bidder_count(), 1);
        assert_eq!(ledger.value(party).unwrap(), slot(100));
    }

    #[test]
    fn bid_after_close_rejected() {
        let owner = PartyId::random();
        let mut ledger = AuctionLedger::new(owner);
        ledger.close(owner).unwrap();

        let err = ledger.place_bid(PartyId::random(), slot(1)).unwrap_err();
        assert!(matches!(err, SealbidError::AuctionClosed));
        assert!(ledger.is_empty());
    }

    #[test]
    fn double_close_reports_already_closed() {
        let owner = PartyId::random();
        let mut ledger = AuctionLedger::new(owner);
        ledger.close(owner).unwrap();
        let err = ledger.close(owner).unwrap_err();
        assert!(matches!(err, SealbidError::AlreadyClosed));
        assert_eq!(ledger.phase(), AuctionPhase::Closed);
    }

    #[test]
    fn non_owner_close_rejected_phase_unchanged() {
        let owner = PartyId::random();
        let stranger = PartyId::random();
        let mut ledger = AuctionLedger::new(owner);

        let err = ledger.close(stranger).unwrap_err();
        assert!(matches!(err, SealbidError::Unauthorized { caller } if caller == stranger));
        assert!(ledger.is_open());
    }

    #[test]
    fn non_owner_close_after_close_still_unauthorized() {
        // The owner check runs before the phase check.
        let owner = PartyId::random();
        let mut ledger = AuctionLedger::new(owner);
        ledger.close(owner).unwrap();
        let err = ledger.close(PartyId::random()).unwrap_err();
        assert!(matches!(err, SealbidError::Unauthorized { .. }));
    }

    #[test]
    fn unknown_bidder_lookup_fails() {
        let ledger = AuctionLedger::new(PartyId::random());
        let err = ledger.value(PartyId::random()).unwrap_err();
        assert!(matches!(err, SealbidError::UnknownBidder(_)));
    }

    #[test]
    fn value_readable_in_both_phases() {
        let owner = PartyId::random();
        let party = PartyId::random();
        let mut ledger = AuctionLedger::new(owner);
        ledger.place_bid(party, slot(42)).unwrap();
        assert_eq!(ledger.value(party).unwrap(), slot(42));

        ledger.close(owner).unwrap();
        assert_eq!(ledger.value(party).unwrap(), slot(42));
    }

    #[test]
    fn all_zero_slot_accepted() {
        let mut ledger = AuctionLedger::new(PartyId::random());
        let party = PartyId::random();
        ledger
            .place_bid(party, ValueSlot::from_bytes([0u8; 32]))
            .unwrap();
        assert!(ledger.value(party).unwrap().is_zero());
    }

    #[test]
    fn bidder_cap_enforced() {
        let cfg = AuctionConfig::new(PartyId::random()).with_max_bidders(2);
        let mut ledger = AuctionLedger::with_config(cfg);
        ledger.place_bid(PartyId::random(), slot(1)).unwrap();
        ledger.place_bid(PartyId::random(), slot(2)).unwrap();
        let err = ledger.place_bid(PartyId::random(), slot(3)).unwrap_err();
        assert!(matches!(err, SealbidError::BidderLimitExceeded { max: 2 }));
        assert_eq!(ledger.bidder_count(), 2);
    }

    #[test]
    fn entries_follow_arrival_order() {
        let mut ledger = AuctionLedger::new(PartyId::random());
        let a = PartyId::random();
        let b = PartyId::random();
        ledger.place_bid(a, slot(10)).unwrap();
        ledger.place_bid(b, slot(20)).unwrap();

        let entries = ledger.entries();
        assert_eq!(entries, vec![(a, slot(10)), (b, slot(20))]);
    }

    #[test]
    fn close_stamps_timestamp() {
        let owner = PartyId::random();
        let mut ledger = AuctionLedger::new(owner);
        ledger.close(owner).unwrap();
        let closed = ledger.closed_at().unwrap();
        assert!(closed >= ledger.opened_at());
    }

    #[test]
    fn ledger_usable_after_errors() {
        let owner = PartyId::random();
        let mut ledger = AuctionLedger::new(owner);
        let party = PartyId::random();
        ledger.place_bid(party, slot(5)).unwrap();

        // A run of expected failures must not poison the instance.
        let _ = ledger.place_bid(party, slot(6));
        let _ = ledger.close(PartyId::random());
        let _ = ledger.value(PartyId::random());

        ledger.place_bid(PartyId::random(), slot(7)).unwrap();
        ledger.close(owner).unwrap();
        assert_eq!(ledger.bidder_count(), 2);
    }
}
