//! AirTight event interpretation
//!
//! Lifts a generic [`LogRecord`] into a typed protocol event. The value
//! text is `<KIND> <fields...>`: OBSERVATION entries carry the overheard
//! short radio address, every other kind carries the node and slot the
//! entry was recorded in. The trailing hex field, when non-empty, is a
//! wire packet.

use airtight_core::{
    AirtightError, AirtightResult, ContentId, EventKind, LogTime, NodeId, SlotId,
};
use airtight_wire::{Packet, PacketView};
use serde::Serialize;

use crate::LogRecord;

/// Kind-specific body of an event
#[derive(Clone, Debug, PartialEq)]
pub enum EventBody {
    /// Radio observation: the overheard short address
    Observation { short_address: String },
    /// Slotted protocol action at a node
    Slotted { node_id: NodeId, slot_id: SlotId },
}

/// A classified AirTight log entry
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub time: LogTime,
    /// Original record text; the identity digest covers exactly this
    pub value: String,
    pub kind: EventKind,
    pub body: EventBody,
    /// Hex text of the carried packet, empty when the entry had none
    pub raw_packet: String,
    /// Decoded packet, present iff `raw_packet` is non-empty
    pub packet: Option<Packet>,
}

impl Event {
    /// Interpret a generic record as an AirTight event.
    pub fn interpret(record: LogRecord) -> AirtightResult<Event> {
        let LogRecord { time, value } = record;

        let mut tokens = value.split_whitespace();
        let kind_token = tokens.next().unwrap_or("");
        let kind = EventKind::from_token(kind_token)
            .ok_or_else(|| AirtightError::InvalidEventKind(kind_token.to_string()))?;
        let rest: Vec<&str> = tokens.collect();

        let expected = if kind == EventKind::Observation { 2 } else { 3 };
        if rest.len() != expected {
            return Err(AirtightError::MalformedEventBody(format!(
                "{} expects {} fields, got {}",
                kind.as_str(),
                expected,
                rest.len()
            )));
        }

        let (body, raw_packet) = if kind == EventKind::Observation {
            let body = EventBody::Observation {
                short_address: rest[0].to_string(),
            };
            (body, rest[1].to_string())
        } else {
            let body = EventBody::Slotted {
                node_id: NodeId(parse_field("node id", rest[0])?),
                slot_id: SlotId(parse_field("slot id", rest[1])?),
            };
            (body, rest[2].to_string())
        };

        let packet = if raw_packet.is_empty() {
            None
        } else {
            Some(Packet::from_hex(&raw_packet)?)
        };

        Ok(Event {
            time,
            value,
            kind,
            body,
            raw_packet,
            packet,
        })
    }

    /// Identity of the underlying record: the digest of time and value, so
    /// two textually identical lines share an id regardless of kind.
    pub fn content_id(&self) -> ContentId {
        ContentId::digest(self.time, &self.value)
    }

    /// Flattened projection for the serving layer.
    pub fn to_view(&self) -> EventView {
        let (node_id, slot_id, short_address) = match &self.body {
            EventBody::Observation { short_address } => (None, None, Some(short_address.clone())),
            EventBody::Slotted { node_id, slot_id } => {
                (Some(node_id.as_u32()), Some(slot_id.as_u32()), None)
            }
        };

        EventView {
            time: self.time.as_secs(),
            value: self.value.clone(),
            event: self.kind.as_str(),
            node_id,
            slot_id,
            short_address,
            packet_data: self.packet.as_ref().map(Packet::to_view),
            raw_packet_data: self.raw_packet.clone(),
            id: self.content_id().to_string(),
        }
    }
}

fn parse_field(field: &str, token: &str) -> AirtightResult<u32> {
    token.parse::<u32>().map_err(|_| {
        AirtightError::MalformedEventBody(format!("{field} is not an integer: {token:?}"))
    })
}

/// JSON-serializable timeline entry
#[derive(Clone, Debug, Serialize)]
pub struct EventView {
    pub time: f64,
    pub value: String,
    pub event: &'static str,
    pub node_id: Option<u32>,
    pub slot_id: Option<u32>,
    pub short_address: Option<String>,
    pub packet_data: Option<PacketView>,
    pub raw_packet_data: String,
    pub id: String,
}
