//! Thread-safe shared handle over an [`AuctionLedger`].
//!
//! The ledger is the single source of truth and must serialize
//! `place_bid` / `close` against concurrent callers: two simultaneous
//! bids for the same party must not both succeed, and two simultaneous
//! closes must produce exactly one transition. A single per-instance
//! `RwLock` gives that — the state is small and every operation is
//! O(1)/O(n) in bidder count, so no finer-grained locking is warranted.
//!
//! Reads take the read lock briefly and return owned copies (snapshot
//! semantics), so they never hold writers off for long.

use std::sync::{Arc, RwLock};

use sealbid_types::{AuctionConfig, AuctionPhase, PartyId, Result, SealbidError, ValueSlot};

use crate::AuctionLedger;

/// `Clone`-able concurrent handle; all clones share one ledger.
#[derive(Debug, Clone)]
pub struct SharedLedger {
    inner: Arc<RwLock<AuctionLedger>>,
}

impl SharedLedger {
    /// Wrap a fresh open auction with the default cap.
    #[must_use]
    pub fn new(owner: PartyId) -> Self {
        Self::from_ledger(AuctionLedger::new(owner))
    }

    /// Wrap a fresh open auction from explicit configuration.
    #[must_use]
    pub fn with_config(config: AuctionConfig) -> Self {
        Self::from_ledger(AuctionLedger::with_config(config))
    }

    /// Wrap an existing ledger (e.g. one restored from a snapshot).
    #[must_use]
    pub fn from_ledger(ledger: AuctionLedger) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    /// Admit one bid. The duplicate check and the insert happen under the
    /// write lock, atomic as a unit.
    ///
    /// # Errors
    /// Same as [`AuctionLedger::place_bid`], plus `Internal` on a
    /// poisoned lock.
    pub fn place_bid(&self, party: PartyId, value: ValueSlot) -> Result<()> {
        self.write()?.place_bid(party, value)
    }

    /// Close the auction. Exactly one of any number of racing calls
    /// transitions the phase; the rest report `AlreadyClosed`.
    ///
    /// # Errors
    /// Same as [`AuctionLedger::close`], plus `Internal` on a poisoned
    /// lock.
    pub fn close(&self, caller: PartyId) -> Result<()> {
        self.write()?.close(caller)
    }

    /// Whether bids are still being accepted.
    ///
    /// # Errors
    /// `Internal` on a poisoned lock.
    pub fn is_open(&self) -> Result<bool> {
        Ok(self.read()?.is_open())
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Result<AuctionPhase> {
        Ok(self.read()?.phase())
    }

    /// Admitted bidders in arrival order (owned copy).
    pub fn bidders(&self) -> Result<Vec<PartyId>> {
        Ok(self.read()?.bidders().to_vec())
    }

    /// The raw stored slot for `party`.
    ///
    /// # Errors
    /// `UnknownBidder` if `party` never bid; `Internal` on a poisoned
    /// lock.
    pub fn value(&self, party: PartyId) -> Result<ValueSlot> {
        self.read()?.value(party)
    }

    /// A consistent arrival-ordered read of all `(party, slot)` pairs.
    pub fn entries(&self) -> Result<Vec<(PartyId, ValueSlot)>> {
        Ok(self.read()?.entries())
    }

    /// Number of admitted bidders.
    pub fn bidder_count(&self) -> Result<usize> {
        Ok(self.read()?.bidder_count())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, AuctionLedger>> {
        self.inner
            .read()
            .map_err(|_| SealbidError::Internal("ledger lock poisoned".into()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, AuctionLedger>> {
        self.inner
            .write()
            .map_err(|_| SealbidError::Internal("ledger lock poisoned".into()))
    }
}
