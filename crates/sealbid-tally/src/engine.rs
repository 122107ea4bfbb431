//! The tally function: reconstruct amounts, pick the winner.
//!
//! ```text
//! tally([(party, raw bytes), ...]) -> TallyOutcome
//! ```
//!
//! ## Winner Selection
//!
//! Strict maximum with first-seen tie-break: entries are walked in the
//! order supplied (which should be the ledger's arrival order) and the
//! best bid is replaced only on `decoded > best` — never `>=` — so the
//! first party to reach the maximum amount wins ties and later equal
//! bids do not overwrite it.
//!
//! ## Malformed Entries
//!
//! Entries whose bytes fail to decode (wrong length, empty) are
//! discarded and counted; the tally proceeds over the rest. Only the
//! empty-input case is terminal, and even that is "no winner" rather
//! than an error.

use sealbid_types::{BidCodec, PartyId, PlainCodec, RankedBid, TallyOutcome};

/// Tally with the default [`PlainCodec`].
#[must_use]
pub fn tally<I, B>(entries: I) -> TallyOutcome
where
    I: IntoIterator<Item = (PartyId, B)>,
    B: AsRef<[u8]>,
{
    tally_with(&PlainCodec, entries)
}

/// Tally with an explicit codec.
///
/// ## Algorithm
///
/// 1. Decode each entry in supplied order; discard and count failures
/// 2. Track the winner with a strict-`>` scan (first-seen tie-break)
/// 3. Rank all decoded bids by descending amount with a stable sort,
///    so tied bids keep arrival order and `ranked[0]` equals the winner
#[must_use]
pub fn tally_with<C, I, B>(codec: &C, entries: I) -> TallyOutcome
where
    C: BidCodec,
    I: IntoIterator<Item = (PartyId, B)>,
    B: AsRef<[u8]>,
{
    let mut decoded: Vec<RankedBid> = Vec::new();
    let mut discarded = 0usize;

    for (party, bytes) in entries {
        match codec.decode(bytes.as_ref()) {
            Ok(amount) => decoded.push(RankedBid { party, amount }),
            Err(err) => {
                discarded += 1;
                tracing::debug!(party = %party.short(), %err, "discarding malformed entry");
            }
        }
    }

    let mut winner: Option<RankedBid> = None;
    for bid in &decoded {
        // Strict `>`: the first party at the maximum keeps the win.
        if winner.is_none_or(|best| bid.amount > best.amount) {
            winner = Some(*bid);
        }
    }

    // Stable sort: ties stay in arrival order.
    let mut ranked = decoded;
    ranked.sort_by_key(|bid| std::cmp::Reverse(bid.amount));

    TallyOutcome {
        ranked,
        winner,
        discarded,
    }
}
