//! Blockchain identity descriptors.

use serde::{Deserialize, Serialize};

/// A blockchain identity as declared in world state: name, network id, and
/// version.
///
/// World-state documents carry the network id and version as decimal strings
/// (`{"Name": "eth", "NetID": "1", "Version": "1"}`); the descriptor keeps
/// that shape. Canonicalization happens in [`crate::encode`], which is the
/// only place the triple is interpreted; everywhere downstream the chain is
/// known by its [`crate::ChainFingerprint`] alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChainDescriptor {
    /// Chain name, e.g. `"eth"`.
    pub name: String,
    /// Network id within that chain, as a decimal string.
    #[serde(rename = "NetID")]
    pub net_id: String,
    /// Protocol version, as a decimal string.
    pub version: String,
}

impl ChainDescriptor {
    /// Create a descriptor from its three parts.
    pub fn new(name: impl Into<String>, net_id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            net_id: net_id.into(),
            version: version.into(),
        }
    }
}

impl std::fmt::Display for ChainDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.name, self.net_id, self.version)
    }
}
