//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the two identifier kinds in Parley. These prevent
//! accidental identifier confusion — a dispute id cannot be passed where a
//! party name is expected, and neither degrades to a bare primitive at any
//! crate boundary.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Maximum accepted length of a party name, in characters.
const MAX_PARTY_NAME_LEN: usize = 128;

/// Unique identifier for a dispute.
///
/// Issued by the dispute registry as a monotonically increasing counter
/// starting at 0. Immutable for the lifetime of the dispute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DisputeId(pub u64);

impl DisputeId {
    /// Access the inner counter value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for DisputeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "dispute:{}", self.0)
    }
}

/// The identity of one bargaining party.
///
/// An already-authenticated identity string handed in by the external
/// caller — authentication itself is the caller's concern. Equality is
/// identity: two submissions act as the same party exactly when their
/// `PartyName`s are equal.
///
/// Serializes/deserializes as a plain string. Validated on construction via
/// [`PartyName::new`]: trimmed, non-empty, at most 128 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartyName(String);

impl PartyName {
    /// Create a validated party name.
    ///
    /// Returns an error if the trimmed string is empty or exceeds 128
    /// characters.
    pub fn new(s: impl Into<String>) -> Result<Self, CoreError> {
        let s = s.into();
        let trimmed = s.trim().to_string();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidPartyName(
                "party name must not be empty".to_string(),
            ));
        }
        if trimmed.chars().count() > MAX_PARTY_NAME_LEN {
            return Err(CoreError::InvalidPartyName(format!(
                "party name must not exceed {MAX_PARTY_NAME_LEN} characters"
            )));
        }
        Ok(Self(trimmed))
    }

    /// Return the party name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PartyName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for PartyName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispute_id_display() {
        assert_eq!(DisputeId(0).to_string(), "dispute:0");
        assert_eq!(DisputeId(42).to_string(), "dispute:42");
    }

    #[test]
    fn dispute_id_ordering_follows_counter() {
        assert!(DisputeId(0) < DisputeId(1));
        assert!(DisputeId(7) < DisputeId(100));
    }

    #[test]
    fn party_name_accepts_plain_identity() {
        let name = PartyName::new("alice").unwrap();
        assert_eq!(name.as_str(), "alice");
        assert_eq!(name, "alice");
    }

    #[test]
    fn party_name_trims_whitespace() {
        let name = PartyName::new("  bob \n").unwrap();
        assert_eq!(name.as_str(), "bob");
    }

    #[test]
    fn party_name_rejects_empty() {
        assert!(PartyName::new("").is_err());
        assert!(PartyName::new("   ").is_err());
    }

    #[test]
    fn party_name_rejects_over_long() {
        let long = "x".repeat(129);
        assert!(PartyName::new(long).is_err());
        let at_limit = "x".repeat(128);
        assert!(PartyName::new(at_limit).is_ok());
    }

    #[test]
    fn party_name_equality_is_identity() {
        let a = PartyName::new("alice").unwrap();
        let b = PartyName::new("alice").unwrap();
        let c = PartyName::new("Alice").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn dispute_id_serde_roundtrip() {
        let id = DisputeId(3);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "3");
        let parsed: DisputeId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn party_name_serde_is_transparent() {
        let name = PartyName::new("carol").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"carol\"");
        let parsed: PartyName = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, name);
    }
}
