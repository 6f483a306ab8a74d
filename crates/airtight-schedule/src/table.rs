//! Slot table parsing
//!
//! The schedule file is a nested-brace DSL:
//!
//! ```text
//! SLOT_TABLE({{IDLE,LISTEN},{TRANSMIT,IDLE}});
//! ```
//!
//! A depth counter tracks brace nesting. Commas at depth 1 separate
//! nodes; inside a node's braces, letter runs name actions and a closing
//! brace commits the node's sequence. A semicolon ends the document and
//! every other character is ignored.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use airtight_core::{AirtightError, AirtightResult, NodeId, SlotAction};
use tracing::debug;

/// Brace depth at which action tokens accumulate: one level for the node
/// list, one for the node's own sequence.
const ACTION_DEPTH: i32 = 2;

/// Per-node slot schedule
#[derive(Debug, Default)]
pub struct SlotSchedule {
    nodes: BTreeMap<NodeId, Vec<SlotAction>>,
}

impl SlotSchedule {
    pub fn new() -> Self {
        SlotSchedule::default()
    }

    /// Assign a node's ordered action sequence.
    pub fn add_node(&mut self, node_id: NodeId, actions: Vec<SlotAction>) {
        self.nodes.insert(node_id, actions);
    }

    /// A node's action sequence, if scheduled.
    pub fn actions(&self, node_id: NodeId) -> Option<&[SlotAction]> {
        self.nodes.get(&node_id).map(Vec::as_slice)
    }

    /// Number of scheduled nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Scheduled nodes and their sequences, ascending by node.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &[SlotAction])> {
        self.nodes.iter().map(|(id, actions)| (*id, actions.as_slice()))
    }

    /// Serializable `{node: [action name...]}` view.
    pub fn to_view(&self) -> BTreeMap<u32, Vec<&'static str>> {
        self.nodes
            .iter()
            .map(|(id, actions)| {
                (
                    id.as_u32(),
                    actions.iter().map(|action| action.as_str()).collect(),
                )
            })
            .collect()
    }

    /// Parse a slot table document.
    pub fn parse(text: &str) -> AirtightResult<SlotSchedule> {
        let doc: String = text.lines().map(str::trim).collect();
        if !doc.starts_with("SLOT_TABLE") {
            return Err(AirtightError::InvalidSlotTableFormat(
                "missing SLOT_TABLE header".to_string(),
            ));
        }

        let mut schedule = SlotSchedule::new();
        let mut depth: i32 = 0;
        let mut node_index: u32 = 0;
        let mut actions: Vec<SlotAction> = Vec::new();
        let mut token = String::new();

        for c in doc.chars() {
            match c {
                '{' => depth += 1,
                '}' => {
                    if depth == ACTION_DEPTH {
                        actions.push(flush_token(&mut token)?);
                        schedule.add_node(NodeId(node_index), std::mem::take(&mut actions));
                    }
                    depth -= 1;
                }
                ',' if depth == 1 => node_index += 1,
                ',' if depth == ACTION_DEPTH => actions.push(flush_token(&mut token)?),
                ';' => break,
                c if depth == ACTION_DEPTH && SlotAction::is_token_char(c) => token.push(c),
                _ => {}
            }
        }

        Ok(schedule)
    }

    /// Parse a slot table file.
    pub fn from_file(path: &Path) -> AirtightResult<SlotSchedule> {
        if !path.is_file() {
            return Err(AirtightError::MissingInputFile(path.to_path_buf()));
        }
        let text = fs::read_to_string(path)?;
        let schedule = SlotSchedule::parse(&text)?;
        debug!(path = %path.display(), nodes = schedule.len(), "slot schedule loaded");
        Ok(schedule)
    }
}

fn flush_token(token: &mut String) -> AirtightResult<SlotAction> {
    let action = SlotAction::from_token(token).ok_or_else(|| {
        AirtightError::InvalidSlotTableFormat(format!("unknown slot action: {token:?}"))
    })?;
    token.clear();
    Ok(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_two_nodes() {
        let schedule = SlotSchedule::parse("SLOT_TABLE({{IDLE,LISTEN},{TRANSMIT,IDLE}});").unwrap();

        assert_eq!(schedule.len(), 2);
        assert_eq!(
            schedule.actions(NodeId(0)),
            Some([SlotAction::Idle, SlotAction::Listen].as_slice())
        );
        assert_eq!(
            schedule.actions(NodeId(1)),
            Some([SlotAction::Transmit, SlotAction::Idle].as_slice())
        );
        assert_eq!(schedule.actions(NodeId(2)), None);
    }

    #[test]
    fn test_parse_spans_lines() {
        let schedule = SlotSchedule::parse(
            "SLOT_TABLE({\n  {IDLE, LISTEN},\n  {TRANSMIT, TRANSMIT},\n  {LISTEN, IDLE}\n});\n",
        )
        .unwrap();

        assert_eq!(schedule.len(), 3);
        assert_eq!(
            schedule.actions(NodeId(2)),
            Some([SlotAction::Listen, SlotAction::Idle].as_slice())
        );
    }

    #[test]
    fn test_scan_stops_at_semicolon() {
        let schedule = SlotSchedule::parse("SLOT_TABLE({{IDLE}});{{TRANSMIT}}").unwrap();
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.actions(NodeId(0)), Some([SlotAction::Idle].as_slice()));
    }

    #[test]
    fn test_missing_header() {
        let err = SlotSchedule::parse("TABLE({{IDLE}});").unwrap_err();
        assert!(matches!(err, AirtightError::InvalidSlotTableFormat(_)));
    }

    #[test]
    fn test_unknown_action_token() {
        // "IDEL" spells no action despite using only alphabet letters.
        let err = SlotSchedule::parse("SLOT_TABLE({{IDEL,LISTEN}});").unwrap_err();
        assert!(matches!(err, AirtightError::InvalidSlotTableFormat(_)));
    }

    #[test]
    fn test_noise_characters_ignored() {
        let schedule =
            SlotSchedule::parse("SLOT_TABLE ( { {IDLE, LISTEN}, {TRANSMIT, IDLE} } ) ;").unwrap();
        assert_eq!(schedule.len(), 2);
        assert_eq!(
            schedule.actions(NodeId(1)),
            Some([SlotAction::Transmit, SlotAction::Idle].as_slice())
        );
    }

    #[test]
    fn test_view_shape() {
        let schedule = SlotSchedule::parse("SLOT_TABLE({{IDLE,LISTEN},{TRANSMIT,IDLE}});").unwrap();
        let view = schedule.to_view();
        assert_eq!(view[&0], vec!["IDLE", "LISTEN"]);
        assert_eq!(view[&1], vec!["TRANSMIT", "IDLE"]);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slot_table.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "SLOT_TABLE({{{{TRANSMIT,IDLE}},{{LISTEN,IDLE}}}});").unwrap();

        let schedule = SlotSchedule::from_file(&path).unwrap();
        assert_eq!(schedule.len(), 2);
        assert_eq!(
            schedule.actions(NodeId(0)),
            Some([SlotAction::Transmit, SlotAction::Idle].as_slice())
        );
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SlotSchedule::from_file(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, AirtightError::MissingInputFile(_)));
    }
}
