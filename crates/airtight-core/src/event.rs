//! Event kind classification
//!
//! Every AirTight log entry names what happened to a packet (or what a
//! node overheard) at a point in time. The set is closed: unknown tokens
//! are rejected at the interpreter boundary, never downstream.

/// Classification of an AirTight log entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Packet handed to the stack by a flow source
    Send,
    /// Packet placed on a node's priority queue
    Enqueue,
    /// Packet put on the air during a transmit slot
    Transmit,
    /// Packet heard by the addressed hop destination
    Receive,
    /// Acknowledgement round confirmed delivery
    AckSuccess,
    /// Acknowledgement round reported loss
    AckFail,
    /// Raw radio observation by a listening node
    Observation,
    /// Packet removed from a node's queue
    Dequeue,
}

impl EventKind {
    /// Every kind, in log-token order.
    pub const ALL: [EventKind; 8] = [
        EventKind::Send,
        EventKind::Enqueue,
        EventKind::Transmit,
        EventKind::Receive,
        EventKind::AckSuccess,
        EventKind::AckFail,
        EventKind::Observation,
        EventKind::Dequeue,
    ];

    /// Parse from a log-line token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "SEND" => Some(EventKind::Send),
            "ENQUEUE" => Some(EventKind::Enqueue),
            "TRANSMIT" => Some(EventKind::Transmit),
            "RECEIVE" => Some(EventKind::Receive),
            "ACK_SUCCESS" => Some(EventKind::AckSuccess),
            "ACK_FAIL" => Some(EventKind::AckFail),
            "OBSERVATION" => Some(EventKind::Observation),
            "DEQUEUE" => Some(EventKind::Dequeue),
            _ => None,
        }
    }

    /// The log-line token for this kind.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Send => "SEND",
            EventKind::Enqueue => "ENQUEUE",
            EventKind::Transmit => "TRANSMIT",
            EventKind::Receive => "RECEIVE",
            EventKind::AckSuccess => "ACK_SUCCESS",
            EventKind::AckFail => "ACK_FAIL",
            EventKind::Observation => "OBSERVATION",
            EventKind::Dequeue => "DEQUEUE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_roundtrip() {
        for kind in EventKind::ALL {
            assert_eq!(EventKind::from_token(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_token_rejected() {
        assert_eq!(EventKind::from_token("RETRANSMIT"), None);
        assert_eq!(EventKind::from_token("send"), None);
        assert_eq!(EventKind::from_token(""), None);
    }
}
