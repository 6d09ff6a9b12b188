//! Candidate nodes and declared roles.

use std::collections::HashSet;

use courier_chain::ChainFingerprint;

/// A node's declared operating mode, taken from world state.
///
/// This is the capability the node runs with, not the seat it holds in any
/// particular session: a validator-declared node that wins a validator seat
/// may additionally be designated the session's delegated minter, but its
/// declared role never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// Serves relay traffic.
    #[default]
    Service,
    /// Validates relay evidence.
    Validate,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Service => f.write_str("service"),
            Role::Validate => f.write_str("validator"),
        }
    }
}

/// A candidate participant in a session.
///
/// Built from an active world-state record by [`crate::adapt_pool`]. The GID
/// is globally unique within a pool and never empty; both properties are the
/// upstream feed's responsibility (the adapter rejects empty GIDs outright
/// but does not deduplicate).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    /// Globally unique node identity.
    pub gid: String,
    /// Host address.
    pub ip: String,
    /// Relay port.
    pub port: String,
    /// Fingerprints of the chains this node serves.
    pub chains: HashSet<ChainFingerprint>,
    /// Declared operating mode.
    pub role: Role,
}

impl Node {
    /// Create a node.
    pub fn new(
        gid: impl Into<String>,
        ip: impl Into<String>,
        port: impl Into<String>,
        chains: HashSet<ChainFingerprint>,
        role: Role,
    ) -> Self {
        Self {
            gid: gid.into(),
            ip: ip.into(),
            port: port.into(),
            chains,
            role,
        }
    }

    /// Whether this node serves the given chain.
    pub fn serves(&self, chain: &ChainFingerprint) -> bool {
        self.chains.contains(chain)
    }
}
