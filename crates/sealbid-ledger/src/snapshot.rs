//! Snapshot / restore for the persisted ledger state.
//!
//! The persisted unit is the `{phase, bidders, values}` triple plus the
//! construction-time config. The triple must restore as a whole: a
//! snapshot with a `values` entry that has no matching bidder (or vice
//! versa) violates the core invariant and is rejected at load time.
//!
//! Each snapshot carries a SHA-256 integrity digest over a
//! domain-separated, arrival-ordered serialization of the state, so
//! tampering or truncation between save and load is detected before any
//! state is reconstructed.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use sealbid_types::{AuctionPhase, PartyId, Result, SealbidError, ValueSlot, constants};

use crate::AuctionLedger;

/// Serializable image of a ledger at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Lifecycle phase at capture time.
    pub phase: AuctionPhase,
    /// Owner identity fixed at construction.
    pub owner: PartyId,
    /// Admission cap fixed at construction.
    pub max_bidders: usize,
    /// Admitted bidders in arrival order.
    pub bidders: Vec<PartyId>,
    /// Opaque slot per bidder.
    pub values: HashMap<PartyId, ValueSlot>,
    /// When the ledger was created.
    pub opened_at: DateTime<Utc>,
    /// When the auction closed, if it had by capture time.
    pub closed_at: Option<DateTime<Utc>>,
    /// SHA-256 over the domain-separated state serialization.
    pub digest: [u8; 32],
}

impl LedgerSnapshot {
    /// Recompute the integrity digest from the snapshot's own fields.
    #[must_use]
    pub fn compute_digest(&self) -> [u8; 32] {
        digest_state(self.phase, self.owner, &self.bidders, &self.values)
    }
}

/// Deterministic digest over (phase, owner, bidders, values), with values
/// hashed in bidder arrival order.
fn digest_state(
    phase: AuctionPhase,
    owner: PartyId,
    bidders: &[PartyId],
    values: &HashMap<PartyId, ValueSlot>,
) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(constants::SNAPSHOT_DIGEST_DOMAIN);
    hasher.update([u8::from(!phase.is_open())]);
    hasher.update(owner.as_bytes());
    hasher.update((bidders.len() as u64).to_le_bytes());
    for party in bidders {
        hasher.update(party.as_bytes());
        if let Some(slot) = values.get(party) {
            hasher.update(slot.as_bytes());
        }
    }
    let result = hasher.finalize();
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&result);
    digest
}

impl AuctionLedger {
    /// Capture the full persisted state as a snapshot.
    #[must_use]
    pub fn snapshot(&self) -> LedgerSnapshot {
        let bidders = self.bidders().to_vec();
        let values: HashMap<PartyId, ValueSlot> = self.entries().into_iter().collect();
        let digest = digest_state(self.phase(), self.owner(), &bidders, &values);
        LedgerSnapshot {
            phase: self.phase(),
            owner: self.owner(),
            max_bidders: self.max_bidders(),
            bidders,
            values,
            opened_at: self.opened_at(),
            closed_at: self.closed_at(),
            digest,
        }
    }

    /// Reconstruct a ledger from a snapshot, validating it as a unit.
    ///
    /// # Errors
    /// Returns `SnapshotInvalid` when the snapshot contains duplicate
    /// bidders, a bidder without a stored value, a stored value without a
    /// matching bidder, or a digest that does not match the state.
    pub fn restore(snapshot: LedgerSnapshot) -> Result<Self> {
        let mut seen = HashSet::with_capacity(snapshot.bidders.len());
        for party in &snapshot.bidders {
            if !seen.insert(*party) {
                return Err(SealbidError::SnapshotInvalid {
                    reason: format!("duplicate bidder {party}"),
                });
            }
            if !snapshot.values.contains_key(party) {
                return Err(SealbidError::SnapshotInvalid {
                    reason: format!("bidder {party} has no stored value"),
                });
            }
        }
        if snapshot.values.len() != snapshot.bidders.len() {
            return Err(SealbidError::SnapshotInvalid {
                reason: format!(
                    "{} stored values for {} bidders",
                    snapshot.values.len(),
                    snapshot.bidders.len()
                ),
            });
        }
        if snapshot.compute_digest() != snapshot.digest {
            return Err(SealbidError::SnapshotInvalid {
                reason: "integrity digest mismatch".into(),
            });
        }
        Ok(Self::from_parts(
            snapshot.owner,
            snapshot.phase,
            snapshot.bidders,
            snapshot.values,
            snapshot.max_bidders,
            snapshot.opened_at,
            snapshot.closed_at,
        ))
    }
}
