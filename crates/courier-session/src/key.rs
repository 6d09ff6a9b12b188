//! Session keys and hash-space distance.

/// The 32-byte key a session is centered on.
///
/// Derived as `blake3(dev_id ‖ block_hash ‖ requested_chain)`. The
/// concatenation order is part of the protocol: every participant must feed
/// the three inputs in exactly this order or derive a different session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionKey([u8; 32]);

impl SessionKey {
    /// Derive the key for one seed's inputs.
    pub fn derive(dev_id: &[u8], block_hash: &[u8], requested_chain: &[u8]) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(dev_id);
        hasher.update(block_hash);
        hasher.update(requested_chain);
        Self(*hasher.finalize().as_bytes())
    }

    /// Create a key from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// XOR distance from this key to a node identity.
    ///
    /// The GID is hashed to a point in the same 256-bit space as the key;
    /// the returned array compares as a big-endian integer, so closer nodes
    /// sort first under the derived `[u8; 32]` ordering.
    pub fn distance_to(&self, gid: &str) -> [u8; 32] {
        let digest = blake3::hash(gid.as_bytes());
        let mut result = [0u8; 32];
        for (i, byte) in digest.as_bytes().iter().enumerate() {
            result[i] = self.0[i] ^ byte;
        }
        result
    }
}

impl std::fmt::Display for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Show first 8 hex chars
        write!(f, "{}...", &self.to_hex()[..8])
    }
}
