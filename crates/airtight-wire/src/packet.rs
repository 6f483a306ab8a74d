//! Fixed-layout AirTight packet
//!
//! Header layout (one octet per field, positional):
//! - Octet 0: Priority
//! - Octet 1: Criticality
//! - Octet 2: Flow ID
//! - Octet 3: Source node
//! - Octet 4: Destination node
//! - Octet 5: Hop source node
//! - Octet 6: Hop destination node
//! - Octet 7: C-value
//! - Octet 8: Sequence number

use airtight_core::{AirtightError, AirtightResult};
use bytes::Bytes;
use serde::Serialize;

/// Fixed header size in octets
pub const HEADER_SIZE: usize = 9;

/// Decoded AirTight packet
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Packet {
    /// Queueing priority of the carried flow
    pub priority: u8,
    /// Criticality level of the carried flow
    pub criticality: u8,
    /// Flow the packet belongs to
    pub flow_id: u8,
    /// Originating node
    pub source: u8,
    /// Final destination node
    pub destination: u8,
    /// Sending side of the current hop
    pub hop_source: u8,
    /// Receiving side of the current hop
    pub hop_destination: u8,
    /// Remaining per-flow transmission budget
    pub c_value: u8,
    /// Per-flow sequence number
    pub sequence_number: u8,
    /// Opaque application payload
    pub payload: Bytes,
}

impl Packet {
    /// Decode a packet from the hex text carried in log artifacts.
    ///
    /// Fails on odd-length or non-hex input, and on anything shorter than
    /// [`HEADER_SIZE`] octets.
    pub fn from_hex(hex_text: &str) -> AirtightResult<Packet> {
        let octets = hex::decode(hex_text)
            .map_err(|e| AirtightError::MalformedPacket(e.to_string()))?;
        Packet::parse(&octets)
    }

    /// Decode a packet from raw octets.
    pub fn parse(octets: &[u8]) -> AirtightResult<Packet> {
        if octets.len() < HEADER_SIZE {
            return Err(AirtightError::MalformedPacket(format!(
                "too short: {} octets, header needs {}",
                octets.len(),
                HEADER_SIZE
            )));
        }

        Ok(Packet {
            priority: octets[0],
            criticality: octets[1],
            flow_id: octets[2],
            source: octets[3],
            destination: octets[4],
            hop_source: octets[5],
            hop_destination: octets[6],
            c_value: octets[7],
            sequence_number: octets[8],
            payload: Bytes::copy_from_slice(&octets[HEADER_SIZE..]),
        })
    }

    /// Display projection: header fields as integers, payload as hex text.
    ///
    /// Not an inverse of [`Packet::from_hex`] - the emitted hex is always
    /// lowercase, whatever the input casing was.
    pub fn to_view(&self) -> PacketView {
        PacketView {
            priority: self.priority,
            criticality: self.criticality,
            flow_id: self.flow_id,
            source: self.source,
            destination: self.destination,
            hop_source: self.hop_source,
            hop_destination: self.hop_destination,
            c_value: self.c_value,
            sequence_number: self.sequence_number,
            payload: hex::encode(&self.payload),
        }
    }
}

/// JSON-serializable packet projection
#[derive(Clone, Debug, Serialize)]
pub struct PacketView {
    pub priority: u8,
    pub criticality: u8,
    pub flow_id: u8,
    pub source: u8,
    pub destination: u8,
    pub hop_source: u8,
    pub hop_destination: u8,
    pub c_value: u8,
    pub sequence_number: u8,
    /// Payload octets as lowercase hex
    pub payload: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decode_with_payload() {
        let packet = Packet::from_hex("0102030405060708090A0B").unwrap();
        assert_eq!(packet.priority, 1);
        assert_eq!(packet.criticality, 2);
        assert_eq!(packet.flow_id, 3);
        assert_eq!(packet.source, 4);
        assert_eq!(packet.destination, 5);
        assert_eq!(packet.hop_source, 6);
        assert_eq!(packet.hop_destination, 7);
        assert_eq!(packet.c_value, 8);
        assert_eq!(packet.sequence_number, 9);
        assert_eq!(packet.payload.as_ref(), &[0x0A, 0x0B]);
    }

    #[test]
    fn test_decode_header_only() {
        let packet = Packet::from_hex("010203040506070809").unwrap();
        assert!(packet.payload.is_empty());
    }

    #[test]
    fn test_too_short_rejected() {
        let err = Packet::from_hex("0102030405060708").unwrap_err();
        assert!(matches!(err, AirtightError::MalformedPacket(_)));
    }

    #[test]
    fn test_odd_length_rejected() {
        let err = Packet::from_hex("01020304050607080").unwrap_err();
        assert!(matches!(err, AirtightError::MalformedPacket(_)));
    }

    #[test]
    fn test_non_hex_rejected() {
        let err = Packet::from_hex("01020304050607080Z").unwrap_err();
        assert!(matches!(err, AirtightError::MalformedPacket(_)));
    }

    #[test]
    fn test_view_renders_lowercase_hex() {
        let packet = Packet::from_hex("0102030405060708090A0B").unwrap();
        let view = packet.to_view();
        assert_eq!(view.sequence_number, 9);
        assert_eq!(view.payload, "0a0b");
    }

    proptest! {
        #[test]
        fn short_input_always_fails(octets in proptest::collection::vec(any::<u8>(), 0..HEADER_SIZE)) {
            let result = Packet::from_hex(&hex::encode(&octets));
            prop_assert!(matches!(result, Err(AirtightError::MalformedPacket(_))));
        }

        #[test]
        fn payload_length_tracks_octet_count(
            octets in proptest::collection::vec(any::<u8>(), HEADER_SIZE..64),
        ) {
            let packet = Packet::from_hex(&hex::encode(&octets)).unwrap();
            prop_assert_eq!(packet.payload.len(), octets.len() - HEADER_SIZE);
            prop_assert_eq!(packet.payload.as_ref(), &octets[HEADER_SIZE..]);
        }
    }
}
