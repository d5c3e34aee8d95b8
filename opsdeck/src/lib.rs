//! Opsdeck client core.
//!
//! Per-page list boards over in-memory record sequences: pure filter/sort
//! derivation, optimistic mutations applied directly to local state, and
//! transient notifications carrying one-shot undo operations. The boards
//! never talk to the API server — they are seeded with static sample data,
//! and the durable store remains the server's contract.

pub mod lists;
pub mod notify;
pub mod sample;
