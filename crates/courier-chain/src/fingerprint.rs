//! Chain fingerprints.

/// A 32-byte Blake3 digest of a canonically encoded chain identity.
///
/// Once a chain has been fingerprinted, the triple behind it is forgotten:
/// node capability sets, seed inputs, and session keys all speak in
/// fingerprints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChainFingerprint(pub [u8; 32]);

impl ChainFingerprint {
    /// Fingerprint width in bytes.
    pub const LEN: usize = 32;

    /// Create a fingerprint from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Interpret a byte slice as a fingerprint. Returns `None` unless the
    /// slice is exactly [`Self::LEN`] bytes.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let arr: [u8; 32] = bytes.try_into().ok()?;
        Some(Self(arr))
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        Self::from_slice(&bytes).ok_or(hex::FromHexError::InvalidStringLength)
    }
}

impl std::fmt::Display for ChainFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Show first 8 hex chars
        write!(f, "{}...", &self.to_hex()[..8])
    }
}

/// Hash canonically encoded bytes into a fingerprint.
pub fn fingerprint(encoded: &[u8]) -> ChainFingerprint {
    ChainFingerprint(*blake3::hash(encoded).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_deterministic() {
        assert_eq!(fingerprint(b"payload"), fingerprint(b"payload"));
    }

    #[test]
    fn fingerprint_differs_across_inputs() {
        assert_ne!(fingerprint(b"payload"), fingerprint(b"other"));
    }

    #[test]
    fn hex_roundtrip() {
        let fp = fingerprint(b"roundtrip");
        let parsed = ChainFingerprint::from_hex(&fp.to_hex()).unwrap();
        assert_eq!(fp, parsed);
    }

    #[test]
    fn from_slice_enforces_length() {
        assert!(ChainFingerprint::from_slice(&[0u8; 32]).is_some());
        assert!(ChainFingerprint::from_slice(&[0u8; 31]).is_none());
        assert!(ChainFingerprint::from_slice(&[0u8; 33]).is_none());
        assert!(ChainFingerprint::from_slice(b"").is_none());
    }

    #[test]
    fn display_shows_hex_prefix() {
        let fp = ChainFingerprint::from_bytes([0xab; 32]);
        assert_eq!(fp.to_string(), "abababab...");
    }
}
