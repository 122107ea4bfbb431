//! # sealbid-types
//!
//! Shared types, errors, and configuration for the **SealBid** confidential
//! auction ledger.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`PartyId`]
//! - **Lifecycle**: [`AuctionPhase`]
//! - **Value model**: [`ValueSlot`], the fixed 32-byte opaque bid slot
//! - **Codec**: [`BidCodec`], [`PlainCodec`] — amount ↔ slot packing
//! - **Tally model**: [`TallyOutcome`], [`RankedBid`]
//! - **Configuration**: [`AuctionConfig`]
//! - **Errors**: [`SealbidError`] with `SB_ERR_` prefix codes
//! - **Constants**: slot layout and admission limits

pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod outcome;
pub mod phase;
pub mod value;

// Re-export all primary types at crate root for ergonomic imports:
//   use sealbid_types::{PartyId, ValueSlot, PlainCodec, ...};

pub use codec::*;
pub use config::*;
pub use error::*;
pub use ids::*;
pub use outcome::*;
pub use phase::*;
pub use value::*;

// Constants are accessed via `sealbid_types::constants::FOO`
// (not re-exported to avoid name collisions).
