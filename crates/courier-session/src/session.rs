//! Session derivation.

use courier_chain::ChainFingerprint;

use crate::error::{Error, Result};
use crate::key::SessionKey;
use crate::node::{Node, Role};
use crate::seed::Seed;
use crate::{MAX_SERVICERS, MAX_VALIDATORS, NODE_COUNT};

/// The seated nodes of a derived session, partitioned by role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionNodes {
    /// Service seats, closest first.
    pub service_nodes: Vec<Node>,
    /// Validator seats, closest first.
    pub validator_nodes: Vec<Node>,
    /// The validator accountable for minting the session's relay proofs.
    /// Always a copy of the closest validator seat.
    pub delegated_minter: Node,
}

impl SessionNodes {
    /// All seated nodes, validator seats first.
    pub fn all(&self) -> impl Iterator<Item = &Node> {
        self.validator_nodes.iter().chain(self.service_nodes.iter())
    }
}

/// A derived session.
///
/// Equal seeds derive equal sessions, byte for byte, on every participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// The key the seats were ranked against.
    pub key: SessionKey,
    /// The requesting developer, echoed from the seed.
    pub dev_id: Vec<u8>,
    /// The seated nodes.
    pub nodes: SessionNodes,
}

impl Session {
    /// Derive the session for a seed.
    ///
    /// The pipeline: validate the seed, derive the [`SessionKey`], keep the
    /// candidates serving the requested chain, rank them by XOR distance to
    /// the key (ties broken by GID), then seat the closest
    /// [`MAX_VALIDATORS`] validator-declared and [`MAX_SERVICERS`]
    /// service-declared nodes. The closest validator doubles as the
    /// delegated minter.
    ///
    /// Ranking happens over the full eligible pool, so a role's seats are
    /// filled by the closest nodes *of that role* even when the other role
    /// dominates the head of the ranking.
    pub fn derive(seed: &Seed) -> Result<Self> {
        seed.validate()?;

        let key = SessionKey::derive(&seed.dev_id, &seed.block_hash, &seed.requested_chain);

        // A requested chain that is not a well-formed fingerprint can match
        // no node and falls through to the eligibility shortfall below.
        let eligible: Vec<&Node> = match ChainFingerprint::from_slice(&seed.requested_chain) {
            Some(requested) => seed
                .node_list
                .iter()
                .filter(|node| node.serves(&requested))
                .collect(),
            None => Vec::new(),
        };
        if eligible.len() < NODE_COUNT {
            return Err(Error::InsufficientNodes {
                needed: NODE_COUNT,
                available: eligible.len(),
            });
        }

        let mut ranked: Vec<(&Node, [u8; 32])> = eligible
            .into_iter()
            .map(|node| (node, key.distance_to(&node.gid)))
            .collect();
        ranked.sort_by(|(a, da), (b, db)| da.cmp(db).then_with(|| a.gid.cmp(&b.gid)));

        let validator_nodes = fill_seats(&ranked, Role::Validate, MAX_VALIDATORS)?;
        let service_nodes = fill_seats(&ranked, Role::Service, MAX_SERVICERS)?;

        let delegated_minter = validator_nodes
            .first()
            .cloned()
            .ok_or(Error::IncompleteSession("no validator seat to delegate"))?;

        Ok(Self {
            key,
            dev_id: seed.dev_id.clone(),
            nodes: SessionNodes {
                service_nodes,
                validator_nodes,
                delegated_minter,
            },
        })
    }
}

/// Take the closest `quota` nodes of one declared role from a ranked pool.
fn fill_seats(ranked: &[(&Node, [u8; 32])], role: Role, quota: usize) -> Result<Vec<Node>> {
    let mut seats: Vec<Node> = Vec::with_capacity(quota);
    for (node, _) in ranked {
        if seats.len() == quota {
            break;
        }
        if node.role == role {
            seats.push((*node).clone());
        }
    }
    if seats.len() < quota {
        // The loop ran out of pool, so `seats` holds every node of the role.
        return Err(Error::InsufficientRole {
            role,
            needed: quota,
            available: seats.len(),
        });
    }
    Ok(seats)
}
