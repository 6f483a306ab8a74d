//! Slot actions
//!
//! One scheduling unit of protocol time is a slot; a node's schedule
//! assigns it exactly one action per slot.

/// Role a node plays during one slot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotAction {
    /// Radio off
    Idle,
    /// Radio receiving
    Listen,
    /// Radio sending
    Transmit,
}

impl SlotAction {
    /// Every action, in schedule-token order.
    pub const ALL: [SlotAction; 3] = [SlotAction::Idle, SlotAction::Listen, SlotAction::Transmit];

    /// Parse from a slot-table token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "IDLE" => Some(SlotAction::Idle),
            "LISTEN" => Some(SlotAction::Listen),
            "TRANSMIT" => Some(SlotAction::Transmit),
            _ => None,
        }
    }

    /// The slot-table token for this action.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            SlotAction::Idle => "IDLE",
            SlotAction::Listen => "LISTEN",
            SlotAction::Transmit => "TRANSMIT",
        }
    }

    /// Whether `c` can appear in an action token. The slot-table scanner
    /// accumulates only these letters at token depth.
    #[inline]
    pub fn is_token_char(c: char) -> bool {
        matches!(c, 'A' | 'D' | 'E' | 'I' | 'L' | 'M' | 'N' | 'R' | 'S' | 'T')
    }
}
