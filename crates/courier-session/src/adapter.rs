//! World-state pool adaptation.

use std::collections::HashSet;

use courier_worldstate::WorldStateNode;

use crate::error::Result;
use crate::node::{Node, Role};

/// Turn raw world-state records into a candidate pool.
///
/// Inactive records are skipped; everything else must adapt cleanly. A
/// malformed enode address or an unencodable chain descriptor fails the whole
/// call rather than dropping the one record, because a truncated pool is
/// indistinguishable from a complete one and would silently desynchronize
/// derivation across participants.
///
/// Relative record order is preserved. Derivation itself does not depend on
/// it, but a stable pool makes mismatches between participants diffable.
pub fn adapt_pool(records: &[WorldStateNode]) -> Result<Vec<Node>> {
    let mut pool = Vec::with_capacity(records.len());
    for record in records {
        if !record.active {
            continue;
        }
        let address = record.address()?;

        let mut chains = HashSet::with_capacity(record.chains.len());
        for chain in &record.chains {
            chains.insert(chain.fingerprint()?);
        }

        let role = if record.is_val { Role::Validate } else { Role::Service };
        pool.push(Node::new(address.gid, address.ip, address.port, chains, role));
    }
    Ok(pool)
}
