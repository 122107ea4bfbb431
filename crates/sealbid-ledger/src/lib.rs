//! # sealbid-ledger
//!
//! **The confidential-bid ledger**: authoritative for admission state —
//! who has bid, and whether bidding is still open. It stores opaque
//! 32-byte value slots and never interprets their contents; decoding and
//! winner selection are the tally engine's job, outside this crate's
//! trust boundary.
//!
//! ## Architecture
//!
//! 1. **AuctionLedger**: the owned state machine — one bid per party,
//!    single irreversible OPEN → CLOSED transition gated on the owner
//! 2. **SharedLedger**: a `Clone`-able thread-safe handle that serializes
//!    writes behind one lock and hands out snapshot reads
//! 3. **LedgerSnapshot**: the persisted `{phase, bidders, values}` triple
//!    with an integrity digest, validated as a unit at load time
//!
//! ## Bid Flow
//!
//! ```text
//! transport → AuctionLedger.place_bid() → bidders + values (atomic)
//!           → AuctionLedger.close()     → CLOSED
//!           → entries()                 → tally engine (read-only)
//! ```

pub mod auction;
pub mod shared;
pub mod snapshot;

pub use auction::AuctionLedger;
pub use shared::SharedLedger;
pub use snapshot::LedgerSnapshot;
