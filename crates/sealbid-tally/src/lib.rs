//! # sealbid-tally
//!
//! **Pure off-ledger tally engine for SealBid.**
//!
//! The tally engine is the compute plane — it takes the ledger's
//! `(party, raw value)` pairs and produces the ranked result and winner.
//! It has:
//!
//! - **Zero side effects**: no ledger writes, no authority, no state
//!   between calls
//! - **Deterministic output**: same entries in same order -> same outcome
//! - **Graceful degradation**: malformed entries are discarded and
//!   counted, never fatal; empty input yields "no winner", not an error
//!
//! It runs entirely outside the ledger's trust boundary — read access is
//! all it ever needs.

pub mod engine;

pub use engine::{tally, tally_with};
