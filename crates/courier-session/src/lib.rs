//! Courier Session Derivation
//!
//! A **session** is the fixed-size, role-partitioned working set of relay
//! nodes serving one requester, one blockchain, and one block-hash
//! checkpoint. Every honest participant derives it independently from the
//! same inputs and arrives at the same answer without an election or a
//! coordinator.
//!
//! # Derivation
//!
//! 1. A [`Seed`] bundles the requester identity, the checkpoint block hash,
//!    the requested chain fingerprint, and the candidate node pool, and is
//!    validated structurally.
//! 2. The session key is `blake3(dev_id ‖ block_hash ‖ requested_chain)`.
//! 3. Candidates serving the requested chain are ranked by XOR distance
//!    between `blake3(gid)` and the key, a Kademlia-style closeness that
//!    looks pseudo-random to anyone who does not control the key yet is
//!    perfectly reproducible.
//! 4. The closest [`MAX_VALIDATORS`] validator-declared nodes and the
//!    closest [`MAX_SERVICERS`] service-declared nodes fill the session's
//!    seats; the closest validator is the delegated minter.
//!
//! The whole pipeline is a pure function of the seed: no global pool, no
//! caching, no I/O, no clock. Calls are safe to run concurrently and equal
//! seeds always produce bit-identical sessions.
//!
//! # Determinism Contract
//!
//! The key construction, the distance metric, the GID tie-break, and the
//! seat quotas below are protocol constants. Any deviation forks a
//! participant out of agreement with the rest of the network.

mod adapter;
mod error;
mod key;
mod node;
mod seed;
mod session;

pub use adapter::adapt_pool;
pub use error::{Error, Result, SeedField};
pub use key::SessionKey;
pub use node::{Node, Role};
pub use seed::{Seed, BLOCK_HASH_LEN, DEV_ID_LEN};
pub use session::{Session, SessionNodes};

/// Nodes in every session (invariant: validator seats + service seats).
pub const NODE_COUNT: usize = 5;

/// Validator seats per session.
pub const MAX_VALIDATORS: usize = 4;

/// Service seats per session.
pub const MAX_SERVICERS: usize = 1;

// Compile-time assertions of the seat-partition invariants
const _: () = assert!(MAX_VALIDATORS + MAX_SERVICERS == NODE_COUNT);
const _: () = assert!(MAX_VALIDATORS > MAX_SERVICERS);
