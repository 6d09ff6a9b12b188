//! Raw world-state node records.

use courier_chain::ChainDescriptor;
use serde::{Deserialize, Serialize};

use crate::enode::EnodeAddress;
use crate::error::Result;

/// One node record as published in a world-state document.
///
/// Field names mirror the upstream JSON exactly. The record is deliberately
/// dumb: it stays in published form until the session layer's pool adapter
/// turns it into a candidate node, so that every consumer starts from the
/// same bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WorldStateNode {
    /// The node's `enode://gid@ip:port` address.
    pub enode: String,
    /// Stake the node has posted. Carried for upstream layers; selection
    /// never reads it.
    pub stake: u64,
    /// Whether the node is currently participating. Inactive records never
    /// enter a candidate pool.
    pub active: bool,
    /// Declared validator capability. Trusted at face value from the feed.
    pub is_val: bool,
    /// Blockchains this node claims to serve.
    pub chains: Vec<ChainDescriptor>,
}

impl WorldStateNode {
    /// Parse the record's enode address into its parts.
    pub fn address(&self) -> Result<EnodeAddress> {
        EnodeAddress::parse(&self.enode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_upstream_field_names() {
        let json = r#"{
            "Enode": "enode://a05d58b42f09@10.0.0.7:30303?discport=30301",
            "Stake": 42,
            "Active": true,
            "IsVal": false,
            "Chains": [{"Name": "eth", "NetID": "1", "Version": "1"}]
        }"#;
        let record: WorldStateNode = serde_json::from_str(json).unwrap();
        assert_eq!(record.stake, 42);
        assert!(record.active);
        assert!(!record.is_val);
        assert_eq!(record.chains.len(), 1);
        assert_eq!(record.chains[0], ChainDescriptor::new("eth", "1", "1"));
    }

    #[test]
    fn encodes_upstream_field_names() {
        let record = WorldStateNode {
            enode: "enode://cafe@10.0.0.7:30303".to_string(),
            stake: 7,
            active: true,
            is_val: true,
            chains: vec![ChainDescriptor::new("btc", "1", "1")],
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json["Enode"].is_string());
        assert_eq!(json["Stake"], 7);
        assert_eq!(json["Active"], true);
        assert_eq!(json["IsVal"], true);
        assert!(json["Chains"].is_array());
    }

    #[test]
    fn address_parses_through() {
        let record = WorldStateNode {
            enode: "enode://cafe@10.0.0.7:30303".to_string(),
            stake: 0,
            active: true,
            is_val: false,
            chains: Vec::new(),
        };
        assert_eq!(record.address().unwrap().gid, "cafe");
    }
}
