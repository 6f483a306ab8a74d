//! Identity types for the AirTight analysis model
//!
//! Node and slot identifiers are the plain integers carried by the
//! protocol's artifacts. Log entries additionally have a content-derived
//! digest used as a stable external identifier and de-duplication key.

use std::fmt;

use sha2::{Digest, Sha256};

use crate::LogTime;

/// Node identity - integer id shared by routes, schedules and log entries
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn new(id: u32) -> Self {
        NodeId(id)
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Slot identity - position in the protocol's cyclic schedule
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SlotId(pub u32);

impl SlotId {
    #[inline]
    pub fn new(id: u32) -> Self {
        SlotId(id)
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Content-derived identity of a log entry
///
/// SHA-256 digest of the canonical `"{time}|{value}"` rendering. Two
/// entries with identical time and value always share an id; a shared id
/// with differing content is a data-integrity violation the store surfaces
/// as `DuplicateIdConflict`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentId([u8; 32]);

impl ContentId {
    /// Digest the canonical identity text of a log entry.
    pub fn digest(time: LogTime, value: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(time.to_string().as_bytes());
        hasher.update(b"|");
        hasher.update(value.as_bytes());
        ContentId(hasher.finalize().into())
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentId({})", self)
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_node_id_display() {
        assert_eq!(NodeId::new(7).to_string(), "7");
        assert_eq!(format!("{:?}", NodeId::new(7)), "Node(7)");
        assert_eq!(format!("{:?}", SlotId::new(3)), "Slot(3)");
    }

    #[test]
    fn test_digest_equal_for_equal_content() {
        let a = ContentId::digest(LogTime(1.5), "SEND 3 7 0102");
        let b = ContentId::digest(LogTime(1.5), "SEND 3 7 0102");
        assert_eq!(a, b);
    }

    #[test]
    fn test_digest_differs_across_fields() {
        let base = ContentId::digest(LogTime(1.5), "SEND 3 7 0102");
        assert_ne!(base, ContentId::digest(LogTime(2.5), "SEND 3 7 0102"));
        assert_ne!(base, ContentId::digest(LogTime(1.5), "SEND 3 8 0102"));
    }

    #[test]
    fn test_hex_rendering() {
        let id = ContentId::digest(LogTime::ZERO, "x");
        let hex_text = id.to_string();
        assert_eq!(hex_text.len(), 64);
        assert!(hex_text.chars().all(|c| c.is_ascii_hexdigit()));
    }

    proptest! {
        #[test]
        fn digest_is_deterministic(secs in proptest::num::f64::ANY, value in ".*") {
            let time = LogTime::from_secs(secs);
            prop_assert_eq!(ContentId::digest(time, &value), ContentId::digest(time, &value));
        }

        #[test]
        fn digest_separates_values(secs in proptest::num::f64::ANY, a in ".*", b in ".*") {
            prop_assume!(a != b);
            let time = LogTime::from_secs(secs);
            prop_assert_ne!(ContentId::digest(time, &a), ContentId::digest(time, &b));
        }
    }
}
