//! Courier World State
//!
//! The network's ground truth is a **world state**: an externally maintained
//! snapshot of every known participant, holding its enode address, stake,
//! activity flag, declared validator capability, and the list of blockchains
//! it serves. This crate owns the raw shape of that snapshot and the only
//! I/O in the system: reading a world-state JSON document from disk.
//!
//! Nothing here ranks, filters, or selects anything. Records are handed to
//! the session layer exactly as published, and the session layer's pool
//! adapter decides what enters a candidate pool.
//!
//! # Trust Boundary
//!
//! World state is assumed to come from a trusted upstream feed. Declared
//! roles and GID uniqueness are taken at face value; validating them against
//! on-chain records is the feed's responsibility, not this crate's.

mod enode;
mod error;
mod loader;
mod record;

pub use enode::EnodeAddress;
pub use error::{Error, Result};
pub use loader::load_pool;
pub use record::WorldStateNode;
