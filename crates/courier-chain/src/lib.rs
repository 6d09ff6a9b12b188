//! Courier Blockchain Identity Codec
//!
//! Every blockchain a relay node can serve is named by a (name, network-id,
//! version) triple. This crate canonicalizes that triple into a fixed binary
//! layout and hashes it with Blake3, producing a 32-byte **fingerprint** that
//! the rest of the network treats as the chain's opaque identity.
//!
//! # Canonical Encoding
//!
//! The wire form is a bincode fixed-int encoding of the triple with the
//! network-id and version normalized to integers:
//!
//! ```text
//! u64 LE name length ‖ name bytes ‖ u32 LE network-id ‖ u32 LE version
//! ```
//!
//! Two semantically equal triples always encode to the same bytes regardless
//! of who encodes them (`"1"` and `"01"` normalize identically), so every
//! participant derives the same fingerprint without coordination. The layout
//! is a protocol constant: changing it forks the network's view of which
//! node serves which chain.

mod codec;
mod descriptor;
mod fingerprint;

pub use codec::{encode, CodecError};
pub use descriptor::ChainDescriptor;
pub use fingerprint::{fingerprint, ChainFingerprint};
