//! Enode address parsing.
//!
//! World state publishes a node's identity and network location as a single
//! address string:
//!
//! ```text
//! enode://<gid>@<ip>:<port>?discport=<n>
//! ```
//!
//! The GID is the node's globally unique identity; the `discport` query
//! suffix is a discovery-layer detail and is discarded. A record whose
//! address does not fit this structure is malformed, and a malformed address
//! aborts pool adaptation outright: a silently dropped node would make a
//! truncated pool indistinguishable from a complete one, which breaks the
//! determinism every participant relies on.

use crate::error::{Error, Result};

/// The parsed parts of an enode address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnodeAddress {
    /// Globally unique node identity.
    pub gid: String,
    /// Host address.
    pub ip: String,
    /// Relay port, kept as the string world state published.
    pub port: String,
}

impl EnodeAddress {
    /// Parse an `enode://gid@ip:port` address.
    pub fn parse(address: &str) -> Result<Self> {
        let malformed = |reason| Error::MalformedEnode {
            address: address.to_string(),
            reason,
        };

        let rest = address
            .strip_prefix("enode://")
            .ok_or_else(|| malformed("missing enode:// scheme"))?;
        let (gid, host) = rest
            .split_once('@')
            .ok_or_else(|| malformed("missing '@' between identity and host"))?;
        if gid.is_empty() {
            return Err(malformed("empty node identity"));
        }

        // Anything after '?' is discovery metadata.
        let host = host.split_once('?').map_or(host, |(h, _)| h);
        let (ip, port) = host
            .rsplit_once(':')
            .ok_or_else(|| malformed("missing ':' between host and port"))?;
        if ip.is_empty() {
            return Err(malformed("empty host"));
        }
        if port.is_empty() || port.parse::<u16>().is_err() {
            return Err(malformed("port is not a decimal port number"));
        }

        Ok(Self {
            gid: gid.to_string(),
            ip: ip.to_string(),
            port: port.to_string(),
        })
    }
}

impl std::fmt::Display for EnodeAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "enode://{}@{}:{}", self.gid, self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_address() {
        let parsed =
            EnodeAddress::parse("enode://a05d58b42f09@10.0.0.7:30303?discport=30301").unwrap();
        assert_eq!(parsed.gid, "a05d58b42f09");
        assert_eq!(parsed.ip, "10.0.0.7");
        assert_eq!(parsed.port, "30303");
    }

    #[test]
    fn parses_without_discport() {
        let parsed = EnodeAddress::parse("enode://cafe@192.168.1.9:8081").unwrap();
        assert_eq!(parsed.gid, "cafe");
        assert_eq!(parsed.ip, "192.168.1.9");
        assert_eq!(parsed.port, "8081");
    }

    #[test]
    fn rejects_missing_scheme() {
        let err = EnodeAddress::parse("cafe@10.0.0.7:30303").unwrap_err();
        assert!(matches!(err, Error::MalformedEnode { .. }));
    }

    #[test]
    fn rejects_missing_separator() {
        assert!(EnodeAddress::parse("enode://cafe10.0.0.7:30303").is_err());
    }

    #[test]
    fn rejects_empty_identity() {
        assert!(EnodeAddress::parse("enode://@10.0.0.7:30303").is_err());
    }

    #[test]
    fn rejects_empty_host() {
        let err = EnodeAddress::parse("enode://cafe@:30303").unwrap_err();
        assert!(matches!(err, Error::MalformedEnode { .. }));
    }

    #[test]
    fn rejects_missing_port() {
        assert!(EnodeAddress::parse("enode://cafe@10.0.0.7").is_err());
        assert!(EnodeAddress::parse("enode://cafe@10.0.0.7:").is_err());
        assert!(EnodeAddress::parse("enode://cafe@10.0.0.7:relay").is_err());
    }

    #[test]
    fn display_roundtrips_canonical_form() {
        let canonical = "enode://cafe@10.0.0.7:30303";
        let parsed = EnodeAddress::parse(canonical).unwrap();
        assert_eq!(parsed.to_string(), canonical);

        // The discport suffix is not part of the canonical form.
        let parsed = EnodeAddress::parse("enode://cafe@10.0.0.7:30303?discport=30301").unwrap();
        assert_eq!(parsed.to_string(), canonical);
    }
}
