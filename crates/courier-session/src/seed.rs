//! Session seeds and their validation.

use courier_chain::ChainFingerprint;

use crate::error::{Error, Result, SeedField};
use crate::node::Node;

/// Required width of a developer id, in bytes.
pub const DEV_ID_LEN: usize = 32;

/// Required width of a block hash, in bytes.
pub const BLOCK_HASH_LEN: usize = 32;

/// The input bundle for one session derivation.
///
/// A seed carries everything the derivation needs; there is no ambient
/// world-state snapshot behind it. It is built fresh per request, validated,
/// consumed by [`crate::Session::derive`], and dropped.
///
/// The identity and checkpoint fields are raw bytes rather than fixed-width
/// arrays so that validation, not the type system, reports the wrong-width
/// inputs the protocol must reject with a specific error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Seed {
    /// Requesting developer's identity, exactly [`DEV_ID_LEN`] bytes.
    pub dev_id: Vec<u8>,
    /// Checkpoint block hash, exactly [`BLOCK_HASH_LEN`] bytes.
    pub block_hash: Vec<u8>,
    /// Fingerprint of the chain the session must serve.
    pub requested_chain: Vec<u8>,
    /// Candidate pool, usually the output of [`crate::adapt_pool`].
    pub node_list: Vec<Node>,
}

impl Seed {
    /// Assemble a seed from an adapted candidate pool.
    pub fn new(
        dev_id: Vec<u8>,
        node_list: Vec<Node>,
        requested_chain: &ChainFingerprint,
        block_hash: Vec<u8>,
    ) -> Self {
        Self {
            dev_id,
            block_hash,
            requested_chain: requested_chain.as_bytes().to_vec(),
            node_list,
        }
    }

    /// Check the seed's structural invariants.
    ///
    /// Checks run in a fixed order and the first failure wins; a seed with
    /// several problems reports only the earliest. The node-list probe looks
    /// at the first element only; eligibility for the requested chain is
    /// derivation's job, not validation's.
    pub fn validate(&self) -> Result<()> {
        if self.dev_id.is_empty() {
            return Err(Error::Missing(SeedField::DevId));
        }
        if self.block_hash.is_empty() {
            return Err(Error::Missing(SeedField::BlockHash));
        }
        if self.node_list.is_empty() {
            return Err(Error::Missing(SeedField::NodeList));
        }
        if self.node_list[0] == Node::default() {
            return Err(Error::InsufficientNodes {
                needed: 1,
                available: 0,
            });
        }
        if self.requested_chain.is_empty() {
            return Err(Error::Missing(SeedField::RequestedChain));
        }
        if self.block_hash.len() != BLOCK_HASH_LEN {
            return Err(Error::InvalidLength {
                field: SeedField::BlockHash,
                expected: BLOCK_HASH_LEN,
                actual: self.block_hash.len(),
            });
        }
        if self.dev_id.len() != DEV_ID_LEN {
            return Err(Error::InvalidLength {
                field: SeedField::DevId,
                expected: DEV_ID_LEN,
                actual: self.dev_id.len(),
            });
        }
        Ok(())
    }
}
