//! Canonical wire encoding for chain descriptors.

use serde::Serialize;
use thiserror::Error;

use crate::descriptor::ChainDescriptor;
use crate::fingerprint::{fingerprint, ChainFingerprint};

/// Errors from canonicalizing a chain descriptor.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The network id or version is not a decimal integer. World state is
    /// expected to supply numeric strings; anything else is a malformed
    /// record, not a different-but-valid identity.
    #[error("chain {field} {value:?} is not a decimal integer")]
    NonNumeric {
        field: &'static str,
        value: String,
    },

    /// The backing serializer failed to build the buffer. This indicates a
    /// corrupted environment rather than bad input.
    #[error("chain encoding failed: {0}")]
    Encode(#[from] bincode::Error),
}

/// The fixed wire layout: length-prefixed name, then two fixed-width
/// integers. Bincode's default fixed-int encoding produces exactly
/// `u64 LE len ‖ name ‖ u32 LE net_id ‖ u32 LE version`.
#[derive(Serialize)]
struct WireDescriptor<'a> {
    name: &'a str,
    net_id: u32,
    version: u32,
}

/// Canonically encode a chain descriptor.
///
/// Equal identities encode to equal bytes no matter which participant runs
/// the encoder; leading zeros in the decimal fields normalize away.
pub fn encode(chain: &ChainDescriptor) -> Result<Vec<u8>, CodecError> {
    let wire = WireDescriptor {
        name: &chain.name,
        net_id: parse_decimal("net id", &chain.net_id)?,
        version: parse_decimal("version", &chain.version)?,
    };
    Ok(bincode::serialize(&wire)?)
}

fn parse_decimal(field: &'static str, value: &str) -> Result<u32, CodecError> {
    value.parse().map_err(|_| CodecError::NonNumeric {
        field,
        value: value.to_string(),
    })
}

impl ChainDescriptor {
    /// Canonically encode this descriptor and hash it.
    pub fn fingerprint(&self) -> Result<ChainFingerprint, CodecError> {
        Ok(fingerprint(&encode(self)?))
    }
}
