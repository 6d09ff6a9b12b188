//! Error types for session derivation.

use thiserror::Error;

use crate::node::Role;

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The seed fields referenced by validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedField {
    DevId,
    BlockHash,
    NodeList,
    RequestedChain,
}

impl std::fmt::Display for SeedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SeedField::DevId => "developer id",
            SeedField::BlockHash => "block hash",
            SeedField::NodeList => "node list",
            SeedField::RequestedChain => "requested chain",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while validating a seed or deriving a session.
///
/// Tests and callers match on the variant, never on the message. Validation
/// is first-failure-wins: a seed with several problems reports only the
/// first one in the documented check order.
#[derive(Debug, Error)]
pub enum Error {
    /// A required seed field is absent or empty.
    #[error("{0} is missing from the seed")]
    Missing(SeedField),

    /// A seed field is present but not the required fixed width.
    #[error("{field} must be exactly {expected} bytes, got {actual}")]
    InvalidLength {
        field: SeedField,
        expected: usize,
        actual: usize,
    },

    /// Too few candidate nodes serve the requested chain to fill a session.
    #[error("not enough eligible nodes to fill a session: need {needed}, found {available}")]
    InsufficientNodes { needed: usize, available: usize },

    /// The eligible pool cannot cover one of the declared-role quotas.
    /// Declared capability is a property of the physical node; seats are
    /// never reassigned across roles to paper over a shortfall.
    #[error("not enough {role} nodes to fill a session: need {needed}, found {available}")]
    InsufficientRole {
        role: Role,
        needed: usize,
        available: usize,
    },

    /// Derivation passed validation but could not assemble a complete role
    /// partition. Internal consistency failure; should not occur.
    #[error("incomplete session: {0}")]
    IncompleteSession(&'static str),

    /// A chain declared by a world-state record could not be canonically
    /// encoded during pool adaptation.
    #[error("pool adaptation rejected a declared chain: {0}")]
    Chain(#[from] courier_chain::CodecError),

    /// A world-state record could not be parsed during pool adaptation.
    #[error("pool adaptation rejected a record: {0}")]
    WorldState(#[from] courier_worldstate::Error),
}
